use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const ERROR_ID: Register = Register::read_only("ERROR_ID", 0xE0, 1);

const WRITE_REG_INVALID: u8 = 0b0000_0001;
const READ_REG_INVALID: u8 = 0b0000_0010;
const MEASMODE_INVALID: u8 = 0b0000_0100;
const MAX_RESISTANCE: u8 = 0b0000_1000;
const HEATER_FAULT: u8 = 0b0001_0000;
const HEATER_SUPPLY: u8 = 0b0010_0000;

/// Error source flags reported in ERROR_ID once STATUS signals an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceErrors(u8);

impl DeviceErrors {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<DeviceErrors, SensorError<T::Error>> {
        Ok(ERROR_ID.read_u8(address, bus)?.into())
    }

    /// A write went to an invalid register address.
    pub fn write_reg_invalid(&self) -> bool {
        (self.0 & WRITE_REG_INVALID) != 0
    }

    /// A read was requested from an invalid register address.
    pub fn read_reg_invalid(&self) -> bool {
        (self.0 & READ_REG_INVALID) != 0
    }

    /// MEAS_MODE was written with an unsupported mode.
    pub fn measmode_invalid(&self) -> bool {
        (self.0 & MEASMODE_INVALID) != 0
    }

    /// The sensor resistance reached or exceeded its maximum range.
    pub fn max_resistance(&self) -> bool {
        (self.0 & MAX_RESISTANCE) != 0
    }

    pub fn heater_fault(&self) -> bool {
        (self.0 & HEATER_FAULT) != 0
    }

    pub fn heater_supply(&self) -> bool {
        (self.0 & HEATER_SUPPLY) != 0
    }

    pub fn any(&self) -> bool {
        self.0 != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl From<u8> for DeviceErrors {
    fn from(bits: u8) -> DeviceErrors {
        DeviceErrors(bits)
    }
}
