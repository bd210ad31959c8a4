use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const SW_RESET: Register = Register::write_only("SW_RESET", 0xFF, 4);

/// Only this exact sequence resets the device; anything else is ignored by it.
pub const RESET_KEY: [u8; 4] = [0x11, 0xE5, 0x72, 0x8A];

pub struct SwReset;

impl SwReset {
    pub fn reset<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        SW_RESET.write(address, bus, &RESET_KEY)
    }
}
