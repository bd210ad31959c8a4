use super::ADDR;
use crate::traits::i2c::I2cAddress;

/// Inactive time between measurements in normal mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Standby {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms10,
    Ms20,
}

impl From<Standby> for u8 {
    fn from(standby: Standby) -> u8 {
        match standby {
            Standby::Ms0_5 => 0b000,
            Standby::Ms62_5 => 0b001,
            Standby::Ms125 => 0b010,
            Standby::Ms250 => 0b011,
            Standby::Ms500 => 0b100,
            Standby::Ms1000 => 0b101,
            Standby::Ms10 => 0b110,
            Standby::Ms20 => 0b111,
        }
    }
}

/// IIR filter coefficient.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Filter {
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl From<Filter> for u8 {
    fn from(filter: Filter) -> u8 {
        match filter {
            Filter::Off => 0b000,
            Filter::X2 => 0b001,
            Filter::X4 => 0b010,
            Filter::X8 => 0b011,
            Filter::X16 => 0b100,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    /// Measurement skipped, output fixed at 0x8000.
    Skip,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> u8 {
        match oversampling {
            Oversampling::Skip => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b101,
        }
    }
}

/// Climate sensor bring-up settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: I2cAddress,
    pub standby: Standby,
    pub filter: Filter,
    pub humidity_oversampling: Oversampling,
    pub temperature_oversampling: Oversampling,
}

impl Config {
    /// Filter and rate bits as laid out in the CONFIG register.
    pub fn profile(&self) -> u8 {
        (u8::from(self.standby) << 5) | (u8::from(self.filter) << 2)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: I2cAddress::new(ADDR),
            standby: Standby::Ms0_5,
            filter: Filter::Off,
            humidity_oversampling: Oversampling::X1,
            temperature_oversampling: Oversampling::X1,
        }
    }
}
