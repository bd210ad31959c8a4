#![cfg_attr(not(feature = "std"), no_std)]
//! Envmon Device drives the two I2C sensors of an office environment monitor: a CCS811 gas sensor
//! (equivalent CO2 and total VOC) and a BME280 climate sensor (temperature and relative humidity).
//!
//! The drivers are blocking and never own the bus. Every operation borrows a [`RegisterTransport`]
//! for the duration of its register transactions, so one bus serves both devices and at most one
//! transaction can be in flight at a time.
//!
//! # Sampling cycle
//!
//! After both devices are brought up, the application busy-polls the gas sensor. For every new
//! sample the climate sensor is read and its temperature and humidity are written into the gas
//! sensor's environmental compensation register before the gas result is read.
//!
//! ```
//! use envmon_device::drivers::sensors::{bme280::Bme280, bridge::Monitor, ccs811::Ccs811};
//! use envmon_device::traits::transport::I2cTransport;
//!
//! fn run<I: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs>(i2c: I, mut delay: D) {
//!     let mut bus = I2cTransport::new(i2c);
//!     let mut monitor = Monitor::new(
//!         Ccs811::new(Default::default()),
//!         Bme280::new(Default::default()),
//!     );
//!     if monitor.bring_up(&mut bus, &mut delay).is_err() {
//!         return;
//!     }
//!     loop {
//!         if let Ok(Some(measurement)) = monitor.poll(&mut bus) {
//!             // hand `measurement` to the display and network components
//!             let _ = measurement;
//!         }
//!     }
//! }
//! ```

pub(crate) mod fmt;

pub mod domain;

pub mod drivers;

pub mod traits;

#[cfg(feature = "std")]
pub mod testutil;

pub use domain::{ClimateReading, GasReading, Measurement};
pub use drivers::sensors::error::{LogicError, SensorError};
pub use traits::i2c::I2cAddress;
pub use traits::transport::RegisterTransport;
