use crate::drivers::sensors::error::SensorError;
use crate::drivers::sensors::register::Register;
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

pub const DIG_T1: Register = Register::read_only("DIG_T1", 0x88, 2);
pub const DIG_T2: Register = Register::read_only("DIG_T2", 0x8A, 2);
pub const DIG_T3: Register = Register::read_only("DIG_T3", 0x8C, 2);
pub const DIG_H1: Register = Register::read_only("DIG_H1", 0xA1, 1);
pub const DIG_H2: Register = Register::read_only("DIG_H2", 0xE1, 2);
pub const DIG_H3: Register = Register::read_only("DIG_H3", 0xE3, 1);
pub const DIG_H4: Register = Register::read_only("DIG_H4", 0xE4, 2);
pub const DIG_H5: Register = Register::read_only("DIG_H5", 0xE5, 2);
pub const DIG_H6: Register = Register::read_only("DIG_H6", 0xE7, 1);

/// Upper bound of the humidity intermediate, 100 %RH in Q22.10.
const HUMIDITY_MAX: i64 = 419_430_400;

/// Temperature at the resolution the humidity compensation needs.
///
/// Only [`CalibrationSet::compensate_temperature`] produces one, so humidity is always
/// compensated against a temperature from an actual reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FineTemperature(i32);

impl FineTemperature {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Factory trimming coefficients, read once per bring-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationSet {
    pub t1: u16,
    pub t2: i16,
    pub t3: i16,
    pub h1: u8,
    pub h2: i16,
    pub h3: u8,
    pub h4: i16,
    pub h5: i16,
    pub h6: i8,
}

impl CalibrationSet {
    /// Read all coefficients. Any failed read aborts with that error.
    pub fn read<T: RegisterTransport>(
        address: I2cAddress,
        bus: &mut T,
    ) -> Result<CalibrationSet, SensorError<T::Error>> {
        let t1 = DIG_T1.read_u16_le(address, bus)?;
        let t2 = DIG_T2.read_u16_le(address, bus)? as i16;
        let t3 = DIG_T3.read_u16_le(address, bus)? as i16;
        let h1 = DIG_H1.read_u8(address, bus)?;
        let h2 = DIG_H2.read_u16_le(address, bus)? as i16;
        let h3 = DIG_H3.read_u8(address, bus)?;
        let h4 = Self::decode_h4(DIG_H4.read_u16_le(address, bus)?);
        let h5 = Self::decode_h5(DIG_H5.read_u16_le(address, bus)?);
        let h6 = DIG_H6.read_u8(address, bus)? as i8;

        Ok(CalibrationSet {
            t1,
            t2,
            t3,
            h1,
            h2,
            h3,
            h4,
            h5,
            h6,
        })
    }

    /// H4 is 0xE4 in bits 11..4 and the low nibble of 0xE5 in bits 3..0.
    pub fn decode_h4(raw: u16) -> i16 {
        (((raw & 0x00FF) << 4) | ((raw & 0x0F00) >> 8)) as i16
    }

    /// H5 is 0xE6 in bits 11..4 and the high nibble of 0xE5 in bits 3..0.
    pub fn decode_h5(raw: u16) -> i16 {
        (raw >> 4) as i16
    }

    /// Degrees Celsius with 0.01 resolution, plus the fine value for
    /// [`CalibrationSet::compensate_humidity`].
    pub fn compensate_temperature(&self, adc: i32) -> (f32, FineTemperature) {
        let adc = i64::from(adc);
        let t1 = i64::from(self.t1);
        let t2 = i64::from(self.t2);
        let t3 = i64::from(self.t3);

        let var1 = (((adc >> 3) - (t1 << 1)) * t2) >> 11;
        let delta = (adc >> 4) - t1;
        let var2 = (((delta * delta) >> 12) * t3) >> 14;
        let fine = (var1 + var2) as i32;

        let centi = (i64::from(fine) * 5 + 128) >> 8;
        (centi as f32 / 100.0, FineTemperature(fine))
    }

    /// Percent relative humidity, clamped to 0..=100.
    pub fn compensate_humidity(&self, adc: i32, fine: FineTemperature) -> f32 {
        let adc = i64::from(adc);
        let h1 = i64::from(self.h1);
        let h2 = i64::from(self.h2);
        let h3 = i64::from(self.h3);
        let h4 = i64::from(self.h4);
        let h5 = i64::from(self.h5);
        let h6 = i64::from(self.h6);

        let v = i64::from(fine.0) - 76_800;
        let offset = ((adc << 14) - (h4 << 20) - (h5 * v) + 16_384) >> 15;
        let scale = (((((v * h6) >> 10) * (((v * h3) >> 11) + 32_768)) >> 10) + 2_097_152) * h2
            + 8_192;
        let mut v = offset * (scale >> 14);
        v -= ((((v >> 15) * (v >> 15)) >> 7) * h1) >> 4;
        let v = v.clamp(0, HUMIDITY_MAX);

        (v >> 12) as f32 / 1024.0
    }
}
