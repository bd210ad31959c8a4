//! BME280 climate sensor. Only temperature and humidity are used; pressure is read as part of
//! the burst but not compensated.

mod config;
pub mod register;

use crate::domain::ClimateReading;
use crate::drivers::sensors::error::{LogicError, SensorError};
use crate::traits::i2c::I2cAddress;
use crate::traits::sensors::climate::ClimateSensor;
use crate::traits::transport::RegisterTransport;
use register::config::FilterConfig;
use register::ctrl_hum::CtrlHum;
use register::ctrl_meas::CtrlMeas;
use register::id::{self, Id};

pub use config::{Config, Filter, Oversampling, Standby};
pub use register::calibration::{CalibrationSet, FineTemperature};
pub use register::ctrl_meas::ClimateMode;
pub use register::data::RawSample;

/// Address with SDO pulled high.
pub const ADDR: u8 = 0x77;
/// Address with SDO pulled low.
pub const ADDR_ALT: u8 = 0x76;

/// Bring-up sequence, in execution order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpStep {
    VerifyDeviceId,
    ReadCalibration,
    Configure,
    Sleep,
    SetHumidityOversampling,
    // Must follow the humidity step: CTRL_HUM only latches on a CTRL_MEAS write.
    SetTemperatureOversampling,
    Normal,
}

impl BringUpStep {
    fn next(self) -> Option<BringUpStep> {
        match self {
            BringUpStep::VerifyDeviceId => Some(BringUpStep::ReadCalibration),
            BringUpStep::ReadCalibration => Some(BringUpStep::Configure),
            BringUpStep::Configure => Some(BringUpStep::Sleep),
            BringUpStep::Sleep => Some(BringUpStep::SetHumidityOversampling),
            BringUpStep::SetHumidityOversampling => Some(BringUpStep::SetTemperatureOversampling),
            BringUpStep::SetTemperatureOversampling => Some(BringUpStep::Normal),
            BringUpStep::Normal => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Boot,
    Running,
    Failed(BringUpStep),
}

pub struct Bme280 {
    config: Config,
    state: State,
    calibration: Option<CalibrationSet>,
}

impl Bme280 {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::Boot,
            calibration: None,
        }
    }

    pub fn address(&self) -> I2cAddress {
        self.config.address
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Coefficients from the last successful bring-up.
    pub fn calibration(&self) -> Option<&CalibrationSet> {
        self.calibration.as_ref()
    }

    /// Verify the chip id, load calibration and start continuous measurements.
    ///
    /// A failure at any step leaves the driver in [`State::Failed`] without calibration.
    pub fn bring_up<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        info!("bme280 {:#x}: bring-up", u8::from(self.address()));
        self.state = State::Boot;
        self.calibration.take();

        let mut step = Some(BringUpStep::VerifyDeviceId);
        while let Some(current) = step {
            debug!("bme280 bring-up step {:?}", current);
            if let Err(e) = self.run_step(current, bus) {
                error!("bme280 bring-up failed at {:?}", current);
                self.calibration.take();
                self.state = State::Failed(current);
                return Err(e);
            }
            step = current.next();
        }

        self.state = State::Running;
        info!("bme280 {:#x}: running", u8::from(self.address()));
        Ok(())
    }

    fn run_step<T: RegisterTransport>(
        &mut self,
        step: BringUpStep,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        let address = self.address();
        let config = self.config;
        match step {
            BringUpStep::VerifyDeviceId => {
                let found = Id::read(address, bus)?;
                if found != id::EXPECTED {
                    return Err(SensorError::Logic(LogicError::Identity {
                        expected: id::EXPECTED,
                        found: Some(found),
                    }));
                }
                Ok(())
            }
            BringUpStep::ReadCalibration => {
                let calibration = CalibrationSet::read(address, bus)?;
                trace!("bme280 calibration {:?}", calibration);
                self.calibration.replace(calibration);
                Ok(())
            }
            BringUpStep::Configure => FilterConfig::modify(address, bus, |reg| {
                reg.apply(config.profile());
            }),
            BringUpStep::Sleep => self.write_mode(bus, ClimateMode::Sleep),
            BringUpStep::SetHumidityOversampling => CtrlHum::modify(address, bus, |reg| {
                reg.oversampling(config.humidity_oversampling);
            }),
            BringUpStep::SetTemperatureOversampling => CtrlMeas::modify(address, bus, |reg| {
                reg.temperature_oversampling(config.temperature_oversampling);
            }),
            BringUpStep::Normal => self.write_mode(bus, ClimateMode::Normal),
        }
    }

    fn ensure_running(&self) -> Result<CalibrationSet, LogicError> {
        if self.state != State::Running {
            return Err(LogicError::NotRunning);
        }
        self.calibration.ok_or(LogicError::NotCalibrated)
    }

    fn write_mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
        mode: ClimateMode,
    ) -> Result<(), SensorError<T::Error>> {
        CtrlMeas::modify(self.address(), bus, |reg| {
            reg.set_mode(mode);
        })?;
        debug!("bme280 mode {:?}", mode);
        Ok(())
    }

    /// Change the mode bits of CTRL_MEAS, preserving oversampling.
    pub fn set_mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
        mode: ClimateMode,
    ) -> Result<(), SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        self.write_mode(bus, mode)
    }

    pub fn mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<ClimateMode, SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        CtrlMeas::read(self.address(), bus)?
            .mode()
            .map_err(SensorError::<T::Error>::Logic)
    }

    /// Compensated temperature and humidity from a single burst read.
    pub fn read_sample<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<ClimateReading, SensorError<T::Error>> {
        let calibration = self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        let raw = RawSample::read(self.address(), bus)?;
        let (temperature, fine) = calibration.compensate_temperature(raw.temperature);
        let humidity = calibration.compensate_humidity(raw.humidity, fine);
        debug!("bme280 {} C, {} %RH", temperature, humidity);
        Ok(ClimateReading {
            temperature,
            humidity,
        })
    }

    /// Compensated temperature only, in degrees Celsius.
    pub fn read_temperature<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<f32, SensorError<T::Error>> {
        let calibration = self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        let raw = RawSample::read(self.address(), bus)?;
        let (temperature, _) = calibration.compensate_temperature(raw.temperature);
        Ok(temperature)
    }
}

impl<T: RegisterTransport> ClimateSensor<T> for Bme280 {
    fn read_sample(&mut self, bus: &mut T) -> Result<ClimateReading, SensorError<T::Error>> {
        Bme280::read_sample(self, bus)
    }
}
