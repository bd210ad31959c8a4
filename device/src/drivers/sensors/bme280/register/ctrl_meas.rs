use crate::drivers::sensors::bme280::config::Oversampling;
use crate::drivers::sensors::error::{LogicError, SensorError};
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;
use core::convert::TryFrom;

pub const CTRL_MEAS: Register = Register::read_write("CTRL_MEAS", 0xF4, 1);

const MODE: u8 = 0b0000_0011;
const OSRS_T: u8 = 0b1110_0000;
const OSRS_T_SHIFT: u8 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimateMode {
    Sleep,
    /// One measurement, then back to sleep.
    Forced,
    /// Continuous measurements separated by the configured standby time.
    Normal,
}

impl From<ClimateMode> for u8 {
    fn from(mode: ClimateMode) -> u8 {
        match mode {
            ClimateMode::Sleep => 0b00,
            ClimateMode::Forced => 0b01,
            ClimateMode::Normal => 0b11,
        }
    }
}

impl TryFrom<u8> for ClimateMode {
    type Error = LogicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(ClimateMode::Sleep),
            0b01 | 0b10 => Ok(ClimateMode::Forced),
            0b11 => Ok(ClimateMode::Normal),
            _ => Err(LogicError::InvalidMode(value)),
        }
    }
}

/// Measurement control: temperature oversampling in bits 5-7, pressure oversampling in bits 2-4
/// (left untouched) and the mode in bits 0-1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeas(u8);

impl CtrlMeas {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<CtrlMeas, SensorError<T::Error>> {
        Ok(CTRL_MEAS.read_u8(address, bus)?.into())
    }

    pub fn write<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
        reg: CtrlMeas,
    ) -> Result<(), SensorError<T::Error>> {
        CTRL_MEAS.write_u8(address, bus, reg.into())
    }

    pub fn modify<T: RegisterTransport, F: FnOnce(&mut CtrlMeas)>(
        address: I2cAddress,
        bus: &mut T,
        modify: F,
    ) -> Result<(), SensorError<T::Error>> {
        let mut reg = Self::read(address, bus)?;
        modify(&mut reg);
        Self::write(address, bus, reg)
    }

    pub fn mode(&self) -> Result<ClimateMode, LogicError> {
        ClimateMode::try_from(self.0 & MODE)
    }

    pub fn set_mode(&mut self, mode: ClimateMode) -> &mut Self {
        self.0 = (self.0 & !MODE) | u8::from(mode);
        self
    }

    pub fn temperature_oversampling(&mut self, oversampling: Oversampling) -> &mut Self {
        self.0 = (self.0 & !OSRS_T) | (u8::from(oversampling) << OSRS_T_SHIFT);
        self
    }
}

impl From<u8> for CtrlMeas {
    fn from(bits: u8) -> CtrlMeas {
        CtrlMeas(bits)
    }
}

impl From<CtrlMeas> for u8 {
    fn from(reg: CtrlMeas) -> u8 {
        reg.0
    }
}
