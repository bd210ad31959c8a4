use crate::domain::GasReading;
use crate::drivers::sensors::error::SensorError;
use crate::traits::transport::RegisterTransport;

/// Outcome of polling a gas sensor for a new result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Availability {
    NoData,
    NewData,
}

/// A gas sensor that accepts environmental compensation.
pub trait GasSensor<T: RegisterTransport> {
    /// Whether a new result is waiting. Transport failures are reported as errors, never as
    /// [`Availability::NoData`].
    fn data_available(&mut self, bus: &mut T) -> Result<Availability, SensorError<T::Error>>;

    fn read_result(&mut self, bus: &mut T) -> Result<GasReading, SensorError<T::Error>>;

    /// Feed ambient temperature (degrees Celsius) and relative humidity (percent) to the
    /// sensor's compensation algorithm.
    fn set_environmental_compensation(
        &mut self,
        bus: &mut T,
        temperature: f32,
        humidity: f32,
    ) -> Result<(), SensorError<T::Error>>;

    /// Fail if the sensor reports an internal error.
    fn check_error(&mut self, bus: &mut T) -> Result<(), SensorError<T::Error>>;
}
