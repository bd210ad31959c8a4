use crate::drivers::sensors::error::{LogicError, SensorError};
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;
use core::convert::TryFrom;

pub const MEAS_MODE: Register = Register::read_write("MEAS_MODE", 0x01, 1);

const DRIVE_MODE: u8 = 0b0111_0000;
const DRIVE_MODE_SHIFT: u8 = 4;

/// How often the sensor produces a new result.
///
/// Moving to a mode with a lower sample rate (for example from [`DriveMode::EverySecond`]
/// to [`DriveMode::Every60Seconds`]) requires the sensor to sit in [`DriveMode::Idle`] for at
/// least ten minutes first. Moving to a higher sample rate needs no wait. The driver does not
/// enforce this; callers changing modes at runtime are responsible for it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    Idle,
    EverySecond,
    Every10Seconds,
    Every60Seconds,
    Every250Millis,
}

impl DriveMode {
    /// Time between results, `None` when idle.
    pub fn sample_period_ms(&self) -> Option<u32> {
        match self {
            DriveMode::Idle => None,
            DriveMode::EverySecond => Some(1_000),
            DriveMode::Every10Seconds => Some(10_000),
            DriveMode::Every60Seconds => Some(60_000),
            DriveMode::Every250Millis => Some(250),
        }
    }

    /// Whether `self` samples less often than `current`, i.e. whether switching from `current`
    /// to `self` needs the ten-minute idle period.
    pub fn is_slower_than(&self, current: DriveMode) -> bool {
        match (current.sample_period_ms(), self.sample_period_ms()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

impl From<DriveMode> for u8 {
    fn from(mode: DriveMode) -> u8 {
        match mode {
            DriveMode::Idle => 0,
            DriveMode::EverySecond => 1,
            DriveMode::Every10Seconds => 2,
            DriveMode::Every60Seconds => 3,
            DriveMode::Every250Millis => 4,
        }
    }
}

impl TryFrom<u8> for DriveMode {
    type Error = LogicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DriveMode::Idle),
            1 => Ok(DriveMode::EverySecond),
            2 => Ok(DriveMode::Every10Seconds),
            3 => Ok(DriveMode::Every60Seconds),
            4 => Ok(DriveMode::Every250Millis),
            _ => Err(LogicError::InvalidMode(value)),
        }
    }
}

/// MEAS_MODE contents. Bits outside the drive mode field are carried through untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasMode(u8);

impl MeasMode {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<MeasMode, SensorError<T::Error>> {
        Ok(MEAS_MODE.read_u8(address, bus)?.into())
    }

    pub fn write<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
        reg: MeasMode,
    ) -> Result<(), SensorError<T::Error>> {
        MEAS_MODE.write_u8(address, bus, reg.into())
    }

    pub fn modify<T: RegisterTransport, F: FnOnce(&mut MeasMode)>(
        address: I2cAddress,
        bus: &mut T,
        modify: F,
    ) -> Result<(), SensorError<T::Error>> {
        let mut reg = Self::read(address, bus)?;
        modify(&mut reg);
        Self::write(address, bus, reg)
    }

    pub fn drive_mode(&self) -> Result<DriveMode, LogicError> {
        DriveMode::try_from((self.0 & DRIVE_MODE) >> DRIVE_MODE_SHIFT)
    }

    pub fn set_drive_mode(&mut self, mode: DriveMode) -> &mut Self {
        self.0 = (self.0 & !DRIVE_MODE) | (u8::from(mode) << DRIVE_MODE_SHIFT);
        self
    }
}

impl From<u8> for MeasMode {
    fn from(bits: u8) -> MeasMode {
        MeasMode(bits)
    }
}

impl From<MeasMode> for u8 {
    fn from(reg: MeasMode) -> u8 {
        reg.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_drive_mode_keeps_other_bits() {
        let mut reg: MeasMode = 0b1000_0001.into();
        reg.set_drive_mode(DriveMode::Every10Seconds);
        assert_eq!(0b1010_0001, u8::from(reg));

        let mut reg: MeasMode = 0b1111_1111.into();
        reg.set_drive_mode(DriveMode::Idle);
        assert_eq!(0b1000_1111, u8::from(reg));
    }

    #[test]
    fn drive_mode_field() {
        let reg: MeasMode = 0b0100_1100.into();
        assert_eq!(Ok(DriveMode::Every250Millis), reg.drive_mode());
        let reg: MeasMode = 0b0111_0000.into();
        assert_eq!(Err(LogicError::InvalidMode(7)), reg.drive_mode());
    }

    #[test]
    fn only_five_modes_exist() {
        for value in 0..=4 {
            assert_eq!(value, u8::from(DriveMode::try_from(value).unwrap()));
        }
        assert_eq!(Err(LogicError::InvalidMode(5)), DriveMode::try_from(5));
    }

    #[test]
    fn slower_sample_rates() {
        assert!(DriveMode::Every60Seconds.is_slower_than(DriveMode::EverySecond));
        assert!(DriveMode::EverySecond.is_slower_than(DriveMode::Every250Millis));
        assert!(!DriveMode::EverySecond.is_slower_than(DriveMode::Every60Seconds));
        assert!(!DriveMode::Every10Seconds.is_slower_than(DriveMode::Idle));
        assert!(!DriveMode::Idle.is_slower_than(DriveMode::EverySecond));
    }
}
