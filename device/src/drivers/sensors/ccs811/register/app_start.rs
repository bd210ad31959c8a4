use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

/// Writing the bare address moves the firmware from boot to application mode.
pub const APP_START: Register = Register::command("APP_START", 0xF4);

pub struct AppStart;

impl AppStart {
    pub fn start<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        APP_START.issue(address, bus)
    }
}
