use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const HW_ID: Register = Register::read_only("HW_ID", 0x20, 1);

/// Value every CCS811 reports in HW_ID.
pub const EXPECTED: u8 = 0x81;

pub struct HwId;

impl HwId {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<u8, SensorError<T::Error>> {
        HW_ID.read_u8(address, bus)
    }
}
