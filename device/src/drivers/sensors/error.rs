//! Errors reported by the sensor drivers.
//!
//! Failures are split along two axes. [`SensorError::Transport`] carries whatever the bus
//! reported (missing device, NACK, timeout). [`SensorError::Logic`] means the bus transaction
//! worked but the answer, or the request, broke a protocol expectation.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError<E> {
    /// The bus transaction failed.
    Transport(E),
    /// The device answered, but not the way the protocol requires.
    Logic(LogicError),
}

/// The quantity an [`LogicError::OutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Temperature,
    Humidity,
}

/// Why a register access was refused before reaching the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessViolation {
    NotReadable,
    NotWritable,
    WidthMismatch { expected: usize, actual: usize },
    NotACommand,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicError {
    /// The identity register did not hold the expected value. `found` is `None` when the
    /// device never answered at all.
    Identity { expected: u8, found: Option<u8> },
    /// The gas sensor has no valid application firmware.
    AppNotValid,
    /// The gas sensor raised its internal error flag.
    DeviceInternal,
    /// A mode value outside the device's defined set.
    InvalidMode(u8),
    /// Compensation input outside what the device register can hold.
    OutOfRange { quantity: Quantity, value: f32 },
    /// A register access that the register map does not allow.
    InvalidAccess {
        register: &'static str,
        violation: AccessViolation,
    },
    /// The driver has not completed bring-up.
    NotRunning,
    /// No calibration data is held by the driver.
    NotCalibrated,
}

impl<E> SensorError<E> {
    pub fn is_transport(&self) -> bool {
        matches!(self, SensorError::Transport(_))
    }

    pub fn logic(&self) -> Option<&LogicError> {
        match self {
            SensorError::Logic(e) => Some(e),
            SensorError::Transport(_) => None,
        }
    }
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> SensorError<E> {
        SensorError::Transport(e)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Temperature => f.write_str("temperature"),
            Quantity::Humidity => f.write_str("humidity"),
        }
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Identity {
                expected,
                found: Some(found),
            } => write!(f, "identity mismatch: expected {:#04x}, found {:#04x}", expected, found),
            LogicError::Identity {
                expected,
                found: None,
            } => write!(f, "device with identity {:#04x} did not respond", expected),
            LogicError::AppNotValid => f.write_str("no valid application firmware"),
            LogicError::DeviceInternal => f.write_str("device reported an internal error"),
            LogicError::InvalidMode(mode) => write!(f, "invalid mode {}", mode),
            LogicError::OutOfRange { quantity, value } => {
                write!(f, "{} {} out of range", quantity, value)
            }
            LogicError::InvalidAccess {
                register,
                violation,
            } => write!(f, "invalid access to {}: {:?}", register, violation),
            LogicError::NotRunning => f.write_str("driver is not running"),
            LogicError::NotCalibrated => f.write_str("no calibration data"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Transport(e) => write!(f, "bus error: {:?}", e),
            SensorError::Logic(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LogicError {}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for SensorError<E> {}
