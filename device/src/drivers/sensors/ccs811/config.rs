use super::register::meas_mode::DriveMode;
use super::ADDR;
use crate::traits::i2c::I2cAddress;

/// Gas sensor bring-up settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: I2cAddress,
    /// How many times HW_ID is read before giving up. Zero counts as one.
    pub identity_attempts: u8,
    /// Wait before each HW_ID read.
    pub settle_delay_ms: u32,
    /// Extra wait after a failed HW_ID read, before the next settle delay.
    pub retry_delay_ms: u32,
    /// Wait after each bring-up step that follows identification.
    pub step_delay_ms: u32,
    /// Mode set at the end of bring-up.
    pub drive_mode: DriveMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: I2cAddress::new(ADDR),
            identity_attempts: 10,
            settle_delay_ms: 100,
            retry_delay_ms: 100,
            step_delay_ms: 30,
            drive_mode: DriveMode::EverySecond,
        }
    }
}
