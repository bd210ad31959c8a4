use crate::drivers::sensors::bme280::config::Oversampling;
use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const CTRL_HUM: Register = Register::read_write("CTRL_HUM", 0xF2, 1);

const OSRS_H: u8 = 0b0000_0111;

/// Humidity oversampling. Changes only take effect after the next CTRL_MEAS write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlHum(u8);

impl CtrlHum {
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<CtrlHum, SensorError<T::Error>> {
        Ok(CTRL_HUM.read_u8(address, bus)?.into())
    }

    pub fn write<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
        reg: CtrlHum,
    ) -> Result<(), SensorError<T::Error>> {
        CTRL_HUM.write_u8(address, bus, reg.into())
    }

    pub fn modify<T: RegisterTransport, F: FnOnce(&mut CtrlHum)>(
        address: I2cAddress,
        bus: &mut T,
        modify: F,
    ) -> Result<(), SensorError<T::Error>> {
        let mut reg = Self::read(address, bus)?;
        modify(&mut reg);
        Self::write(address, bus, reg)
    }

    pub fn oversampling(&mut self, oversampling: Oversampling) -> &mut Self {
        self.0 = (self.0 & !OSRS_H) | u8::from(oversampling);
        self
    }
}

impl From<u8> for CtrlHum {
    fn from(bits: u8) -> CtrlHum {
        CtrlHum(bits)
    }
}

impl From<CtrlHum> for u8 {
    fn from(reg: CtrlHum) -> u8 {
        reg.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversampling_keeps_upper_bits() {
        let mut reg: CtrlHum = 0b1010_1111.into();
        reg.oversampling(Oversampling::X2);
        assert_eq!(0b1010_1010, u8::from(reg));
    }
}
