use crate::drivers::sensors::error::{LogicError, Quantity, SensorError};
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;
use core::ops::RangeInclusive;

pub const ENV_DATA: Register = Register::write_only("ENV_DATA", 0x05, 4);

/// Temperatures the gas sensor accepts for compensation, in degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = -25.0..=50.0;
/// Relative humidity the gas sensor accepts for compensation, in percent.
pub const HUMIDITY_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Encoded ENV_DATA payload.
///
/// Each quantity occupies the high byte of a 16-bit field in units of 1/2; the low byte
/// (fraction) is always zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvCompensation {
    humidity: u8,
    temperature: u8,
}

impl EnvCompensation {
    /// Validate and encode. NaN and values outside [`TEMPERATURE_RANGE`] or
    /// [`HUMIDITY_RANGE`] are rejected.
    pub fn encode(temperature: f32, humidity: f32) -> Result<Self, LogicError> {
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(LogicError::OutOfRange {
                quantity: Quantity::Temperature,
                value: temperature,
            });
        }
        if !HUMIDITY_RANGE.contains(&humidity) {
            return Err(LogicError::OutOfRange {
                quantity: Quantity::Humidity,
                value: humidity,
            });
        }

        Ok(Self {
            humidity: half_units(humidity * 1024.0 + 250.0),
            temperature: half_units(temperature * 1000.0 + 25250.0),
        })
    }

    pub fn humidity(&self) -> u8 {
        self.humidity
    }

    pub fn temperature(&self) -> u8 {
        self.temperature
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.humidity, 0, self.temperature, 0]
    }

    pub fn write<T: RegisterTransport>(
        &self,
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        ENV_DATA.write(address, bus, &self.to_bytes())
    }
}

// Inputs are already range checked, so the scaled value is non-negative and fits a byte.
fn half_units(scaled: f32) -> u8 {
    (scaled / 500.0 + 0.5) as u8
}
