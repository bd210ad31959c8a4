//! CCS811 gas sensor, reporting equivalent CO2 and total volatile organic compounds.

mod config;
pub mod register;

use crate::domain::GasReading;
use crate::drivers::sensors::error::{LogicError, SensorError};
use crate::traits::i2c::I2cAddress;
use crate::traits::sensors::gas::{Availability, GasSensor};
use crate::traits::transport::RegisterTransport;
use embedded_hal::delay::DelayNs;
use register::alg_result::AlgResult;
use register::app_start::AppStart;
use register::env_data::EnvCompensation;
use register::hw_id::{self, HwId};
use register::meas_mode::MeasMode;
use register::sw_reset::SwReset;

pub use config::Config;
pub use register::error_id::DeviceErrors;
pub use register::meas_mode::DriveMode;
pub use register::status::{FirmwareMode, Status};

/// Address with the ADDR pin pulled high.
pub const ADDR: u8 = 0x5B;
/// Address with the ADDR pin pulled low.
pub const ADDR_ALT: u8 = 0x5A;

/// Bring-up sequence, in execution order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpStep {
    VerifyHardwareId,
    Reset,
    CheckDeviceError,
    CheckAppValid,
    AppStart,
    SetDriveMode,
    ConfirmNoError,
}

impl BringUpStep {
    fn next(self) -> Option<BringUpStep> {
        match self {
            BringUpStep::VerifyHardwareId => Some(BringUpStep::Reset),
            BringUpStep::Reset => Some(BringUpStep::CheckDeviceError),
            BringUpStep::CheckDeviceError => Some(BringUpStep::CheckAppValid),
            BringUpStep::CheckAppValid => Some(BringUpStep::AppStart),
            BringUpStep::AppStart => Some(BringUpStep::SetDriveMode),
            BringUpStep::SetDriveMode => Some(BringUpStep::ConfirmNoError),
            BringUpStep::ConfirmNoError => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not brought up yet.
    Boot,
    /// Bring-up completed; polling, reading and mode control are available.
    Running,
    /// Bring-up stopped at the given step. Only a new bring-up leaves this state.
    Failed(BringUpStep),
}

pub struct Ccs811 {
    config: Config,
    state: State,
    reading: GasReading,
}

impl Ccs811 {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::Boot,
            reading: GasReading::default(),
        }
    }

    pub fn address(&self) -> I2cAddress {
        self.config.address
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Last result fetched by [`Ccs811::read_result`].
    pub fn reading(&self) -> GasReading {
        self.reading
    }

    /// Identify, reset and start the sensor, then enter the configured drive mode.
    ///
    /// Every step must succeed before the next runs. The first failure is returned and leaves
    /// the driver in [`State::Failed`]; no step is repeated except for the bounded HW_ID check.
    pub fn bring_up<T: RegisterTransport, D: DelayNs>(
        &mut self,
        bus: &mut T,
        delay: &mut D,
    ) -> Result<(), SensorError<T::Error>> {
        info!("ccs811 {:#x}: bring-up", u8::from(self.address()));
        self.state = State::Boot;

        let mut step = Some(BringUpStep::VerifyHardwareId);
        while let Some(current) = step {
            debug!("ccs811 bring-up step {:?}", current);
            if let Err(e) = self.run_step(current, bus, delay) {
                error!("ccs811 bring-up failed at {:?}", current);
                self.state = State::Failed(current);
                return Err(e);
            }
            if current != BringUpStep::VerifyHardwareId {
                delay.delay_ms(self.config.step_delay_ms);
            }
            step = current.next();
        }

        self.state = State::Running;
        info!("ccs811 {:#x}: running", u8::from(self.address()));
        Ok(())
    }

    fn run_step<T: RegisterTransport, D: DelayNs>(
        &mut self,
        step: BringUpStep,
        bus: &mut T,
        delay: &mut D,
    ) -> Result<(), SensorError<T::Error>> {
        match step {
            BringUpStep::VerifyHardwareId => self.verify_hardware_id(bus, delay),
            BringUpStep::Reset => SwReset::reset(self.address(), bus),
            BringUpStep::CheckDeviceError | BringUpStep::ConfirmNoError => {
                if Status::read(self.address(), bus)?.error() {
                    return Err(SensorError::Logic(LogicError::DeviceInternal));
                }
                Ok(())
            }
            BringUpStep::CheckAppValid => {
                if !Status::read(self.address(), bus)?.app_valid() {
                    return Err(SensorError::Logic(LogicError::AppNotValid));
                }
                Ok(())
            }
            BringUpStep::AppStart => AppStart::start(self.address(), bus),
            BringUpStep::SetDriveMode => {
                let mode = self.config.drive_mode;
                self.write_drive_mode(bus, mode)
            }
        }
    }

    fn verify_hardware_id<T: RegisterTransport, D: DelayNs>(
        &mut self,
        bus: &mut T,
        delay: &mut D,
    ) -> Result<(), SensorError<T::Error>> {
        let attempts = self.config.identity_attempts.max(1);
        let mut found = None;
        for attempt in 1..=attempts {
            delay.delay_ms(self.config.settle_delay_ms);
            match HwId::read(self.address(), bus) {
                Ok(hw_id::EXPECTED) => return Ok(()),
                Ok(id) => {
                    warn!(
                        "ccs811 unexpected hardware id {:#x} (attempt {}/{})",
                        id, attempt, attempts
                    );
                    found.replace(id);
                }
                Err(SensorError::Transport(_)) => {
                    warn!("ccs811 did not answer (attempt {}/{})", attempt, attempts);
                }
                Err(e) => return Err(e),
            }
            if attempt < attempts {
                delay.delay_ms(self.config.retry_delay_ms);
            }
        }
        Err(SensorError::Logic(LogicError::Identity {
            expected: hw_id::EXPECTED,
            found,
        }))
    }

    fn ensure_running(&self) -> Result<(), LogicError> {
        if self.state != State::Running {
            return Err(LogicError::NotRunning);
        }
        Ok(())
    }

    fn write_drive_mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
        mode: DriveMode,
    ) -> Result<(), SensorError<T::Error>> {
        MeasMode::modify(self.address(), bus, |reg| {
            if let Ok(current) = reg.drive_mode() {
                if mode.is_slower_than(current) {
                    warn!(
                        "ccs811 {:?} -> {:?} lowers the sample rate, idle 10 minutes first",
                        current, mode
                    );
                }
            }
            reg.set_drive_mode(mode);
        })?;
        debug!("ccs811 drive mode {:?}", mode);
        Ok(())
    }

    /// Change the drive mode, preserving the other MEAS_MODE bits.
    pub fn set_mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
        mode: DriveMode,
    ) -> Result<(), SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        self.write_drive_mode(bus, mode)
    }

    pub fn mode<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<DriveMode, SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        MeasMode::read(self.address(), bus)?
            .drive_mode()
            .map_err(SensorError::<T::Error>::Logic)
    }

    /// Raw STATUS, available in any state for diagnostics.
    pub fn status<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<Status, SensorError<T::Error>> {
        Status::read(self.address(), bus)
    }

    /// Error sources behind a set STATUS error flag, available in any state for diagnostics.
    pub fn error_id<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<DeviceErrors, SensorError<T::Error>> {
        DeviceErrors::read(self.address(), bus)
    }

    pub fn data_available<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<Availability, SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        if Status::read(self.address(), bus)?.data_ready() {
            Ok(Availability::NewData)
        } else {
            Ok(Availability::NoData)
        }
    }

    pub fn read_result<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<GasReading, SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        self.reading = AlgResult::read(self.address(), bus)?;
        debug!(
            "ccs811 co2 {} ppm, tvoc {} ppb",
            self.reading.co2, self.reading.tvoc
        );
        Ok(self.reading)
    }

    /// Write ambient conditions into ENV_DATA. Values outside the accepted ranges are rejected
    /// without touching the bus.
    pub fn set_environmental_compensation<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
        temperature: f32,
        humidity: f32,
    ) -> Result<(), SensorError<T::Error>> {
        self.ensure_running().map_err(SensorError::<T::Error>::Logic)?;
        let env = match EnvCompensation::encode(temperature, humidity) {
            Ok(env) => env,
            Err(e) => {
                warn!(
                    "ccs811 compensation input rejected: {} C, {} %RH",
                    temperature, humidity
                );
                return Err(SensorError::Logic(e));
            }
        };
        env.write(self.address(), bus)
    }

    pub fn check_error<T: RegisterTransport>(
        &mut self,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        if Status::read(self.address(), bus)?.error() {
            warn!("ccs811 reports an internal error");
            return Err(SensorError::Logic(LogicError::DeviceInternal));
        }
        Ok(())
    }
}

impl<T: RegisterTransport> GasSensor<T> for Ccs811 {
    fn data_available(&mut self, bus: &mut T) -> Result<Availability, SensorError<T::Error>> {
        Ccs811::data_available(self, bus)
    }

    fn read_result(&mut self, bus: &mut T) -> Result<GasReading, SensorError<T::Error>> {
        Ccs811::read_result(self, bus)
    }

    fn set_environmental_compensation(
        &mut self,
        bus: &mut T,
        temperature: f32,
        humidity: f32,
    ) -> Result<(), SensorError<T::Error>> {
        Ccs811::set_environmental_compensation(self, bus, temperature, humidity)
    }

    fn check_error(&mut self, bus: &mut T) -> Result<(), SensorError<T::Error>> {
        Ccs811::check_error(self, bus)
    }
}
