//! Values handed to the display and network components.

use serde::Serialize;

/// The gas sensor's algorithm result.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GasReading {
    /// Equivalent CO2 in ppm.
    pub co2: u16,
    /// Total volatile organic compounds in ppb.
    pub tvoc: u16,
}

/// Compensated temperature and relative humidity from one climate sensor sample.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Percent relative humidity, 0 to 100.
    pub humidity: f32,
}

/// One complete sampling cycle: the gas result read right after the climate reading that
/// compensated it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub gas: GasReading,
    pub climate: ClimateReading,
}
