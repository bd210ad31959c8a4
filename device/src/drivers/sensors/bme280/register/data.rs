use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

/// press_msb..hum_lsb, read in one burst so all values come from the same measurement.
pub const BURST_DATA: Register = Register::read_only("BURST_DATA", 0xF7, 8);

/// Uncompensated ADC values from one burst read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub pressure: u32,
    pub temperature: i32,
    pub humidity: i32,
}

impl RawSample {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<RawSample, SensorError<T::Error>> {
        let mut buf = [0; 8];
        BURST_DATA.read(address, bus, &mut buf)?;
        Ok(Self::from_burst(buf))
    }

    pub fn from_burst(buf: [u8; 8]) -> RawSample {
        RawSample {
            pressure: (u32::from(buf[0]) << 12)
                | (u32::from(buf[1]) << 4)
                | (u32::from(buf[2]) >> 4),
            temperature: (i32::from(buf[3]) << 12)
                | (i32::from(buf[4]) << 4)
                | (i32::from(buf[5]) >> 4),
            humidity: (i32::from(buf[6]) << 8) | i32::from(buf[7]),
        }
    }
}
