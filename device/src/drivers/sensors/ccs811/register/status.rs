use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const STATUS: Register = Register::read_only("STATUS", 0x00, 1);

const ERROR: u8 = 0b0000_0001;
const DATA_READY: u8 = 0b0000_1000;
const APP_VALID: u8 = 0b0001_0000;
const FW_MODE: u8 = 0b1000_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareMode {
    Boot,
    Application,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(u8);

impl Status {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<Status, SensorError<T::Error>> {
        Ok(STATUS.read_u8(address, bus)?.into())
    }

    /// An error occurred; ERROR_ID holds the details.
    pub fn error(&self) -> bool {
        (self.0 & ERROR) != 0
    }

    /// A new result is waiting in ALG_RESULT_DATA.
    pub fn data_ready(&self) -> bool {
        (self.0 & DATA_READY) >> 3 == 1
    }

    /// Valid application firmware is loaded.
    pub fn app_valid(&self) -> bool {
        (self.0 & APP_VALID) >> 4 == 1
    }

    pub fn firmware_mode(&self) -> FirmwareMode {
        if (self.0 & FW_MODE) != 0 {
            FirmwareMode::Application
        } else {
            FirmwareMode::Boot
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Status {
        Status(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bits() {
        let status: Status = 0b1001_1000.into();
        assert!(!status.error());
        assert!(status.data_ready());
        assert!(status.app_valid());
        assert_eq!(FirmwareMode::Application, status.firmware_mode());

        let status: Status = 0b0000_0001.into();
        assert!(status.error());
        assert!(!status.data_ready());
        assert!(!status.app_valid());
        assert_eq!(FirmwareMode::Boot, status.firmware_mode());
    }

    #[test]
    fn neighbouring_bits_do_not_signal_data() {
        let status: Status = 0b1111_0111.into();
        assert!(!status.data_ready());
    }
}
