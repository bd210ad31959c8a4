use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const CONFIG: Register = Register::read_write("CONFIG", 0xF5, 1);

const RESERVED: u8 = 0b0000_0010;

/// Standby time and IIR filter. Only written in sleep mode; writes in normal mode may be ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig(u8);

impl FilterConfig {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<FilterConfig, SensorError<T::Error>> {
        Ok(CONFIG.read_u8(address, bus)?.into())
    }

    pub fn write<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
        reg: FilterConfig,
    ) -> Result<(), SensorError<T::Error>> {
        CONFIG.write_u8(address, bus, reg.into())
    }

    pub fn modify<T: RegisterTransport, F: FnOnce(&mut FilterConfig)>(
        address: I2cAddress,
        bus: &mut T,
        modify: F,
    ) -> Result<(), SensorError<T::Error>> {
        let mut reg = Self::read(address, bus)?;
        modify(&mut reg);
        Self::write(address, bus, reg)
    }

    /// Replace everything but the reserved bit with `profile`.
    pub fn apply(&mut self, profile: u8) -> &mut Self {
        self.0 = (self.0 & RESERVED) | (profile & !RESERVED);
        self
    }
}

impl From<u8> for FilterConfig {
    fn from(bits: u8) -> FilterConfig {
        FilterConfig(bits)
    }
}

impl From<FilterConfig> for u8 {
    fn from(reg: FilterConfig) -> u8 {
        reg.0
    }
}
