//! Feeds the climate sensor's readings into the gas sensor's compensation register.

use crate::domain::{ClimateReading, Measurement};
use crate::drivers::sensors::bme280::Bme280;
use crate::drivers::sensors::ccs811::Ccs811;
use crate::drivers::sensors::error::SensorError;
use crate::traits::sensors::climate::ClimateSensor;
use crate::traits::sensors::gas::{Availability, GasSensor};
use crate::traits::transport::RegisterTransport;
use embedded_hal::delay::DelayNs;

/// Read a fresh climate sample and write it into the gas sensor's compensation register.
///
/// Temperature and humidity come from the same burst, so humidity is always compensated against
/// the temperature of that sample. The first error from either device is returned as is.
pub fn compensate<T, C, G>(
    bus: &mut T,
    climate: &mut C,
    gas: &mut G,
) -> Result<ClimateReading, SensorError<T::Error>>
where
    T: RegisterTransport,
    C: ClimateSensor<T>,
    G: GasSensor<T>,
{
    let reading = climate.read_sample(bus)?;
    gas.set_environmental_compensation(bus, reading.temperature, reading.humidity)?;
    trace!(
        "compensated with {} C, {} %RH",
        reading.temperature,
        reading.humidity
    );
    Ok(reading)
}

/// The monitor's two sensors sharing one bus.
pub struct Monitor<G = Ccs811, C = Bme280> {
    pub gas: G,
    pub climate: C,
}

impl<G, C> Monitor<G, C> {
    pub fn new(gas: G, climate: C) -> Self {
        Self { gas, climate }
    }

    /// One pass of the sampling loop.
    ///
    /// With a new gas sample waiting, the climate sensor is read, its values compensate the gas
    /// sensor and the gas result is read, giving `Some`. Without one, the gas sensor's error flag
    /// is checked and `None` is returned.
    pub fn poll<T>(&mut self, bus: &mut T) -> Result<Option<Measurement>, SensorError<T::Error>>
    where
        T: RegisterTransport,
        G: GasSensor<T>,
        C: ClimateSensor<T>,
    {
        match self.gas.data_available(bus)? {
            Availability::NewData => {
                let climate = compensate(bus, &mut self.climate, &mut self.gas)?;
                let gas = self.gas.read_result(bus)?;
                Ok(Some(Measurement { gas, climate }))
            }
            Availability::NoData => {
                self.gas.check_error(bus)?;
                Ok(None)
            }
        }
    }
}

impl Monitor<Ccs811, Bme280> {
    /// Bring up the gas sensor, then the climate sensor. Stops at the first failure.
    pub fn bring_up<T: RegisterTransport, D: DelayNs>(
        &mut self,
        bus: &mut T,
        delay: &mut D,
    ) -> Result<(), SensorError<T::Error>> {
        self.gas.bring_up(bus, delay)?;
        self.climate.bring_up(bus)
    }
}
