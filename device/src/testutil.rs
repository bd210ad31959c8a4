use crate::traits::i2c::I2cAddress;
use crate::traits::transport::RegisterTransport;
use embedded_hal::delay::DelayNs;
use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

/// A bus transaction as seen by the [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Read { device: u8, register: u8, len: usize },
    Write { device: u8, register: u8, data: Vec<u8> },
    Raw { device: u8, data: Vec<u8> },
}

impl Transaction {
    pub fn device(&self) -> u8 {
        match self {
            Transaction::Read { device, .. }
            | Transaction::Write { device, .. }
            | Transaction::Raw { device, .. } => *device,
        }
    }
}

/// Errors produced by the [`MockTransport`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MockError {
    /// Nothing is attached at the address.
    NoDevice(u8),
    /// A failure injected with [`MockTransport::nack_reads`] or [`MockTransport::nack_writes`].
    Nack { device: u8, register: u8 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Direction {
    Read,
    Write,
}

/// A register transport that simulates devices as register files.
///
/// Every register of an attached device holds its own byte vector: writes replace it and reads
/// return it, zero padded. One-shot responses and NACKs can be scripted per register, and every
/// attempted transaction is recorded.
#[derive(Default)]
pub struct MockTransport {
    registers: HashMap<u8, HashMap<u8, Vec<u8>>>,
    responses: HashMap<(u8, u8), VecDeque<Vec<u8>>>,
    nacks: HashMap<(Direction, u8, u8), usize>,
    log: Vec<Transaction>,
}

impl MockTransport {
    pub fn new() -> Self {
        Default::default()
    }

    /// Attach a device with all registers reading zero.
    pub fn attach(&mut self, device: u8) -> &mut Self {
        self.registers.entry(device).or_default();
        self
    }

    pub fn detach(&mut self, device: u8) -> &mut Self {
        self.registers.remove(&device);
        self
    }

    /// Set the stored value of a register, attaching the device if needed.
    pub fn set(&mut self, device: u8, register: u8, data: &[u8]) -> &mut Self {
        self.registers
            .entry(device)
            .or_default()
            .insert(register, data.to_vec());
        self
    }

    /// Current stored value of a register.
    pub fn get(&self, device: u8, register: u8) -> Vec<u8> {
        self.registers
            .get(&device)
            .and_then(|r| r.get(&register))
            .cloned()
            .unwrap_or_default()
    }

    /// Answer the next read of `register` with `data` instead of the stored value. Queued
    /// responses are consumed in order.
    pub fn respond(&mut self, device: u8, register: u8, data: &[u8]) -> &mut Self {
        self.responses
            .entry((device, register))
            .or_default()
            .push_back(data.to_vec());
        self
    }

    /// Fail the next `times` reads of `register`.
    pub fn nack_reads(&mut self, device: u8, register: u8, times: usize) -> &mut Self {
        *self
            .nacks
            .entry((Direction::Read, device, register))
            .or_default() += times;
        self
    }

    /// Fail the next `times` writes to `register`. Raw writes count against their first byte.
    pub fn nack_writes(&mut self, device: u8, register: u8, times: usize) -> &mut Self {
        *self
            .nacks
            .entry((Direction::Write, device, register))
            .or_default() += times;
        self
    }

    /// Every transaction attempted so far, failed ones included.
    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    pub fn clear_transactions(&mut self) {
        self.log.clear();
    }

    /// Payloads written to `register`, oldest first.
    pub fn writes_to(&self, device: u8, register: u8) -> Vec<Vec<u8>> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Write {
                    device: d,
                    register: r,
                    data,
                } if *d == device && *r == register => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reads_of(&self, device: u8, register: u8) -> usize {
        self.log
            .iter()
            .filter(|t| {
                matches!(t, Transaction::Read { device: d, register: r, .. }
                    if *d == device && *r == register)
            })
            .count()
    }

    fn check(&mut self, direction: Direction, device: u8, register: u8) -> Result<(), MockError> {
        if !self.registers.contains_key(&device) {
            return Err(MockError::NoDevice(device));
        }
        if let Some(remaining) = self.nacks.get_mut(&(direction, device, register)) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(MockError::Nack { device, register });
            }
        }
        Ok(())
    }
}

impl RegisterTransport for MockTransport {
    type Error = MockError;

    fn read(&mut self, device: I2cAddress, register: u8, buf: &mut [u8]) -> Result<(), MockError> {
        let device = u8::from(device);
        self.log.push(Transaction::Read {
            device,
            register,
            len: buf.len(),
        });
        self.check(Direction::Read, device, register)?;

        let data = self
            .responses
            .get_mut(&(device, register))
            .and_then(|q| q.pop_front())
            .unwrap_or_else(|| self.get(device, register));
        for (i, b) in buf.iter_mut().enumerate() {
            *b = data.get(i).copied().unwrap_or(0);
        }
        Ok(())
    }

    fn write(&mut self, device: I2cAddress, register: u8, data: &[u8]) -> Result<(), MockError> {
        let device = u8::from(device);
        self.log.push(Transaction::Write {
            device,
            register,
            data: data.to_vec(),
        });
        self.check(Direction::Write, device, register)?;
        self.set(device, register, data);
        Ok(())
    }

    fn write_raw(&mut self, device: I2cAddress, data: &[u8]) -> Result<(), MockError> {
        let device = u8::from(device);
        self.log.push(Transaction::Raw {
            device,
            data: data.to_vec(),
        });
        let register = data.first().copied().unwrap_or(0);
        self.check(Direction::Write, device, register)
    }
}

/// A delay that returns immediately and keeps track of the time it was asked to wait.
#[derive(Default)]
pub struct TestDelay {
    elapsed_ns: u64,
    waits_ms: Vec<u32>,
}

impl TestDelay {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    /// Each `delay_ms` request, in order.
    pub fn waits_ms(&self) -> &[u32] {
        &self.waits_ms
    }
}

impl DelayNs for TestDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.waits_ms.push(ms);
    }
}
