//! The register-level bus capability the drivers are written against.

use crate::traits::i2c::I2cAddress;
use embedded_hal::i2c::{I2c, Operation};

/// Blocking register access over a point-to-point bus.
///
/// Each call is one complete bus transaction and blocks until the transaction has finished or
/// the underlying bus has given up on it. Drivers borrow the transport mutably for every
/// operation, so a single transport can be shared by all devices on the bus while still
/// guaranteeing that only one transaction is ever in flight. Sharing a transport between
/// threads or interrupt contexts requires the caller to put it behind a mutex.
pub trait RegisterTransport {
    type Error;

    /// Read `buf.len()` bytes starting at `register`.
    fn read(&mut self, device: I2cAddress, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` starting at `register`.
    fn write(&mut self, device: I2cAddress, register: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write `data` as-is, without a register address in front of it.
    fn write_raw(&mut self, device: I2cAddress, data: &[u8]) -> Result<(), Self::Error>;
}

/// [`RegisterTransport`] on top of a blocking `embedded-hal` I2C bus.
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I> I2cTransport<I>
where
    I: I2c,
{
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I> RegisterTransport for I2cTransport<I>
where
    I: I2c,
{
    type Error = I::Error;

    fn read(
        &mut self,
        device: I2cAddress,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(device.into(), &[register], buf)
    }

    fn write(&mut self, device: I2cAddress, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes go out back to back, without a repeated start in between.
        self.i2c.transaction(
            device.into(),
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
    }

    fn write_raw(&mut self, device: I2cAddress, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(device.into(), data)
    }
}
