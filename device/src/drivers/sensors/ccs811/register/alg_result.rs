use crate::domain::GasReading;
use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

/// eCO2 followed by TVOC, both big-endian. The status and error bytes that may follow are not
/// part of the transfer.
pub const ALG_RESULT_DATA: Register = Register::read_only("ALG_RESULT_DATA", 0x02, 4);

pub struct AlgResult;

impl AlgResult {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<GasReading, SensorError<T::Error>> {
        let mut buf = [0; 4];
        ALG_RESULT_DATA.read(address, bus, &mut buf)?;
        Ok(Self::decode(buf))
    }

    pub fn decode(buf: [u8; 4]) -> GasReading {
        GasReading {
            co2: u16::from_be_bytes([buf[0], buf[1]]),
            tvoc: u16::from_be_bytes([buf[2], buf[3]]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_big_endian() {
        assert_eq!(
            GasReading {
                co2: 0x01F4,
                tvoc: 0x0042
            },
            AlgResult::decode([0x01, 0xF4, 0x00, 0x42])
        );
    }
}
