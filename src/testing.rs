//! Testing utilities and mock implementations
//!
//! This module provides a simulated device for exercising the register
//! client on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

use crate::constants::PHY_REG_PKT_SIZE;
use crate::error::{IoError, IoResult};
use crate::hal::PhyRegTransport;
use crate::packet::{PhyRegPkt, RegisterBody};

// =============================================================================
// Mock Transport
// =============================================================================

/// Clause 22 register key: (bus, phy, page, reg)
type C22Key = (u8, u8, u8, u16);

/// Clause 45 register key: (bus, port, device, reg)
type C45Key = (u8, u8, u8, u16);

/// Simulated device answering PHY register packets
///
/// Every transmitted packet is decoded, applied to an in-memory register
/// file and answered with a response packet. Knobs allow delaying, dropping
/// or tampering with responses.
///
/// # Example
///
/// ```ignore
/// let mut transport = MockTransport::new();
/// transport.set_c22(0, 1, 0, 0x01, 0x786D);
///
/// let mut client = PhyRegClient::new(transport, MockDelay::new(), ClientConfig::new())?;
/// assert_eq!(client.read(1, 0x01)?, 0x786D);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    c22: HashMap<C22Key, u16>,
    c45: HashMap<C45Key, u16>,
    /// Every packet the client transmitted, in order
    sent: Vec<PhyRegPkt>,
    /// Responses waiting to be received
    pending: VecDeque<([u8; PHY_REG_PKT_SIZE], usize)>,
    /// Polls answered with "no response yet" before each response
    response_delay_polls: u32,
    polls_left: u32,
    /// Status written into every response
    status: u8,
    drop_responses: bool,
    corrupt_echo: bool,
    truncate_responses: bool,
    fail_transmit: bool,
}

impl MockTransport {
    /// Create an empty simulated device
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a Clause 22 register
    pub fn set_c22(&mut self, bus: u8, phy: u8, page: u8, reg: u16, value: u16) {
        self.c22.insert((bus, phy, page, reg), value);
    }

    /// Current value of a Clause 22 register
    pub fn c22(&self, bus: u8, phy: u8, page: u8, reg: u16) -> Option<u16> {
        self.c22.get(&(bus, phy, page, reg)).copied()
    }

    /// Preload a Clause 45 register
    pub fn set_c45(&mut self, bus: u8, port: u8, device: u8, reg: u16, value: u16) {
        self.c45.insert((bus, port, device, reg), value);
    }

    /// Current value of a Clause 45 register
    pub fn c45(&self, bus: u8, port: u8, device: u8, reg: u16) -> Option<u16> {
        self.c45.get(&(bus, port, device, reg)).copied()
    }

    /// Packets transmitted so far
    pub fn sent(&self) -> &[PhyRegPkt] {
        &self.sent
    }

    /// Answer `polls` receive calls with "nothing yet" before each response
    pub fn set_response_delay_polls(&mut self, polls: u32) {
        self.response_delay_polls = polls;
    }

    /// Status reported in every response
    pub fn set_status(&mut self, status: u8) {
        self.status = status;
    }

    /// Never answer
    pub fn set_drop_responses(&mut self, drop: bool) {
        self.drop_responses = drop;
    }

    /// Answer about a different register than the one requested
    pub fn set_corrupt_echo(&mut self, corrupt: bool) {
        self.corrupt_echo = corrupt;
    }

    /// Answer with one byte missing
    pub fn set_truncate_responses(&mut self, truncate: bool) {
        self.truncate_responses = truncate;
    }

    /// Fail every transmit
    pub fn set_fail_transmit(&mut self, fail: bool) {
        self.fail_transmit = fail;
    }

    fn apply(&mut self, request: PhyRegPkt) -> PhyRegPkt {
        let control = request.control();
        let bus = control.bus_index();
        let write = control.write_enable();

        let value = match request.body() {
            RegisterBody::Clause22(msg) => {
                let key = (bus, msg.phy_addr, msg.page, msg.reg_addr);
                if write {
                    self.c22.insert(key, msg.reg_val);
                    msg.reg_val
                } else {
                    self.c22.get(&key).copied().unwrap_or(0)
                }
            }
            RegisterBody::Clause45(msg) => {
                let key = (bus, msg.port, msg.device, msg.reg_addr);
                if write {
                    self.c45.insert(key, msg.reg_val);
                    msg.reg_val
                } else {
                    self.c45.get(&key).copied().unwrap_or(0)
                }
            }
        };

        let mut response = request.with_status(self.status).with_reg_val(value);
        if self.corrupt_echo {
            let body = match response.body() {
                RegisterBody::Clause22(mut msg) => {
                    msg.reg_addr = msg.reg_addr.wrapping_add(1);
                    RegisterBody::Clause22(msg)
                }
                RegisterBody::Clause45(mut msg) => {
                    msg.reg_addr = msg.reg_addr.wrapping_add(1);
                    RegisterBody::Clause45(msg)
                }
            };
            response = PhyRegPkt::tagged(response.control(), body);
        }
        response
    }
}

impl PhyRegTransport for MockTransport {
    fn transmit(&mut self, packet: &[u8]) -> IoResult<()> {
        if self.fail_transmit {
            return Err(IoError::Transport);
        }

        let request = PhyRegPkt::decode(packet).map_err(|_| IoError::Transport)?;
        self.sent.push(request);

        if !self.drop_responses {
            let response = self.apply(request);
            let len = if self.truncate_responses {
                PHY_REG_PKT_SIZE - 1
            } else {
                PHY_REG_PKT_SIZE
            };
            self.pending.push_back((response.encode(), len));
            self.polls_left = self.response_delay_polls;
        }
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> IoResult<Option<usize>> {
        if self.pending.is_empty() {
            return Ok(None);
        }
        if self.polls_left > 0 {
            self.polls_left -= 1;
            return Ok(None);
        }

        let Some((bytes, len)) = self.pending.pop_front() else {
            return Ok(None);
        };
        let dst = buf.get_mut(..len).ok_or(IoError::Transport)?;
        dst.copy_from_slice(&bytes[..len]);
        Ok(Some(len))
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: u64,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
