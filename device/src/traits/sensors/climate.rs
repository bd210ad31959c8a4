use crate::domain::ClimateReading;
use crate::drivers::sensors::error::SensorError;
use crate::traits::transport::RegisterTransport;

/// A sensor producing compensated temperature and relative humidity.
pub trait ClimateSensor<T: RegisterTransport> {
    fn read_sample(&mut self, bus: &mut T) -> Result<ClimateReading, SensorError<T::Error>>;
}
