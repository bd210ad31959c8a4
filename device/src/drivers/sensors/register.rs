//! Register map model shared by both drivers.
//!
//! Every register a driver touches is declared once as a [`Register`] constant with its address,
//! width and access mode. All traffic goes through the validated operations here, so a read of a
//! write-only register or a transfer of the wrong size is rejected before it reaches the bus.

use crate::drivers::sensors::error::{AccessViolation, LogicError, SensorError};
use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub fn readable(&self) -> bool {
        matches!(self, Access::ReadOnly | Access::ReadWrite)
    }

    pub fn writable(&self) -> bool {
        matches!(self, Access::WriteOnly | Access::ReadWrite)
    }
}

/// A named device register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    pub name: &'static str,
    pub address: u8,
    /// Transfer size in bytes. Zero for registers that act as a bare command.
    pub width: usize,
    pub access: Access,
}

impl Register {
    pub const fn read_only(name: &'static str, address: u8, width: usize) -> Self {
        Self {
            name,
            address,
            width,
            access: Access::ReadOnly,
        }
    }

    pub const fn write_only(name: &'static str, address: u8, width: usize) -> Self {
        Self {
            name,
            address,
            width,
            access: Access::WriteOnly,
        }
    }

    pub const fn read_write(name: &'static str, address: u8, width: usize) -> Self {
        Self {
            name,
            address,
            width,
            access: Access::ReadWrite,
        }
    }

    /// A register whose address alone, sent without payload, triggers an action.
    pub const fn command(name: &'static str, address: u8) -> Self {
        Self::write_only(name, address, 0)
    }

    fn refuse(&self, violation: AccessViolation) -> LogicError {
        LogicError::InvalidAccess {
            register: self.name,
            violation,
        }
    }

    fn check_width(&self, len: usize) -> Result<(), LogicError> {
        if len != self.width {
            return Err(self.refuse(AccessViolation::WidthMismatch {
                expected: self.width,
                actual: len,
            }));
        }
        Ok(())
    }

    pub fn check_read(&self, len: usize) -> Result<(), LogicError> {
        if !self.access.readable() {
            return Err(self.refuse(AccessViolation::NotReadable));
        }
        self.check_width(len)
    }

    pub fn check_write(&self, len: usize) -> Result<(), LogicError> {
        if !self.access.writable() {
            return Err(self.refuse(AccessViolation::NotWritable));
        }
        self.check_width(len)
    }

    pub fn check_command(&self) -> Result<(), LogicError> {
        if self.width != 0 || self.access != Access::WriteOnly {
            return Err(self.refuse(AccessViolation::NotACommand));
        }
        Ok(())
    }

    pub fn read<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
        buf: &mut [u8],
    ) -> Result<(), SensorError<T::Error>> {
        self.check_read(buf.len()).map_err(SensorError::<T::Error>::Logic)?;
        bus.read(device, self.address, buf)?;
        trace!("{:#x} read {}: {:?}", u8::from(device), self.name, &buf[..]);
        Ok(())
    }

    pub fn read_u8<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
    ) -> Result<u8, SensorError<T::Error>> {
        let mut buf = [0; 1];
        self.read(device, bus, &mut buf)?;
        Ok(buf[0])
    }

    /// Read a 16-bit little-endian register.
    pub fn read_u16_le<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
    ) -> Result<u16, SensorError<T::Error>> {
        let mut buf = [0; 2];
        self.read(device, bus, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn write<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
        data: &[u8],
    ) -> Result<(), SensorError<T::Error>> {
        self.check_write(data.len()).map_err(SensorError::<T::Error>::Logic)?;
        trace!("{:#x} write {}: {:?}", u8::from(device), self.name, data);
        bus.write(device, self.address, data)?;
        Ok(())
    }

    pub fn write_u8<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
        value: u8,
    ) -> Result<(), SensorError<T::Error>> {
        self.write(device, bus, &[value])
    }

    /// Send the register address on its own.
    pub fn issue<T: RegisterTransport>(
        &self,
        device: I2cAddress,
        bus: &mut T,
    ) -> Result<(), SensorError<T::Error>> {
        self.check_command().map_err(SensorError::<T::Error>::Logic)?;
        trace!("{:#x} command {}", u8::from(device), self.name);
        bus.write_raw(device, &[self.address])?;
        Ok(())
    }
}
