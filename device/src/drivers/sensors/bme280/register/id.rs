use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const ID: Register = Register::read_only("ID", 0xD0, 1);

/// Chip id of the BME280.
pub const EXPECTED: u8 = 0x60;

pub struct Id;

impl Id {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<u8, SensorError<T::Error>> {
        ID.read_u8(address, bus)
    }
}
