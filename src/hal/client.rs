//! PHY register client
//!
//! Issues one packet at a time over a [`PhyRegTransport`] and waits for the
//! device to return the completed packet.
//!
//! A transaction is:
//!
//! 1. Validate the addresses of the request
//! 2. Transmit the encoded request
//! 3. Poll the transport until the timeout expires, decoding each response
//!    and dropping any that does not answer the request
//! 4. Check the status reported by the device (0 = success)

use embedded_hal::delay::DelayNs;

use super::mdio::{MdioBus, MmdBus};
use super::transport::PhyRegTransport;
use crate::config::ClientConfig;
use crate::constants::PHY_REG_PKT_SIZE;
use crate::error::{ConfigResult, IoError, PacketError, Result};
use crate::packet::{Clause22Message, Clause45Message, ControlWord, PhyRegPkt, RegisterBody};

/// Register client over a packet transport
///
/// # Example
///
/// ```ignore
/// use ph_phy_reg_pkt::hal::{MdioBus, PhyRegClient};
/// use ph_phy_reg_pkt::ClientConfig;
///
/// let config = ClientConfig::new().with_bus_index(1);
/// let mut client = PhyRegClient::new(transport, delay, config)?;
///
/// let bmsr = client.read(0, 1)?;
/// client.write_mmd(0, 1, 0x0834, 0xC001)?;
/// ```
#[derive(Debug)]
pub struct PhyRegClient<T: PhyRegTransport, D: DelayNs> {
    transport: T,
    delay: D,
    config: ClientConfig,
}

impl<T: PhyRegTransport, D: DelayNs> PhyRegClient<T, D> {
    /// Create a client, validating the configuration
    pub fn new(transport: T, delay: D, config: ClientConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            delay,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Run one complete transaction and return the device's response
    pub fn execute(&mut self, request: PhyRegPkt) -> Result<PhyRegPkt> {
        request.body().validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("PHY register request: {}", request);

        self.transport.transmit(&request.encode())?;
        let response = self.wait_response(&request)?;
        Self::check_status(&response)?;

        Ok(response)
    }

    /// Clause 22 read on an explicit page
    pub fn read_paged(&mut self, phy_addr: u8, page: u8, reg_addr: u8) -> Result<u16> {
        let msg = Clause22Message::new(phy_addr, reg_addr as u16, 0).with_page(page);
        let request = self.command(false, msg.into());
        let response = self.execute(request)?;
        Ok(response.reg_val())
    }

    /// Clause 22 write on an explicit page
    pub fn write_paged(&mut self, phy_addr: u8, page: u8, reg_addr: u8, value: u16) -> Result<()> {
        let msg = Clause22Message::new(phy_addr, reg_addr as u16, value).with_page(page);
        let request = self.command(true, msg.into());
        self.execute(request)?;
        Ok(())
    }

    /// Build an enabled packet carrying the configured bus index and version
    fn command(&self, write: bool, body: RegisterBody) -> PhyRegPkt {
        let control = ControlWord::new()
            .with_enabled(true)
            .with_write_enable(write)
            .with_bus_index(self.config.bus_index)
            .with_version(self.config.version);
        PhyRegPkt::tagged(control, body)
    }

    /// Poll the transport until the response to `request` arrives
    ///
    /// Responses to other requests (late answers to a request that already
    /// timed out) are dropped. If only such responses arrived before the
    /// timeout, the error is [`IoError::UnexpectedResponse`].
    fn wait_response(&mut self, request: &PhyRegPkt) -> Result<PhyRegPkt> {
        let mut buf = [0u8; PHY_REG_PKT_SIZE];
        let mut elapsed = 0u32;
        let mut dropped = false;

        loop {
            if let Some(len) = self.transport.receive(&mut buf)? {
                let bytes = buf.get(..len).ok_or(PacketError::MalformedPacket)?;
                let response = PhyRegPkt::decode(bytes)?;
                if Self::answers(request, &response) {
                    return Ok(response);
                }

                #[cfg(feature = "defmt")]
                defmt::debug!("Dropping PHY register response to another request: {}", response);
                dropped = true;
            }

            if elapsed >= self.config.timeout_us {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY register response timed out after {} us", elapsed);
                let err = if dropped {
                    IoError::UnexpectedResponse
                } else {
                    IoError::Timeout
                };
                return Err(err.into());
            }

            self.delay.delay_us(self.config.poll_interval_us);
            elapsed = elapsed.saturating_add(self.config.poll_interval_us);
        }
    }

    /// `response` echoes the bus, direction and addressing of `request`
    fn answers(request: &PhyRegPkt, response: &PhyRegPkt) -> bool {
        let sent = request.control();
        let got = response.control();

        got.bus_index() == sent.bus_index()
            && got.write_enable() == sent.write_enable()
            && response.body().same_target(&request.body())
    }

    /// Check the status reported by the device
    fn check_status(response: &PhyRegPkt) -> Result<()> {
        if response.status() != 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("PHY register request failed with status {}", response.status());
            return Err(IoError::RequestFailed.into());
        }

        Ok(())
    }
}

impl<T: PhyRegTransport, D: DelayNs> MdioBus for PhyRegClient<T, D> {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        let page = self.config.page;
        self.read_paged(phy_addr, page, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        let page = self.config.page;
        self.write_paged(phy_addr, page, reg_addr, value)
    }
}

impl<T: PhyRegTransport, D: DelayNs> MmdBus for PhyRegClient<T, D> {
    fn read_mmd(&mut self, port: u8, device: u8, reg_addr: u16) -> Result<u16> {
        let msg = Clause45Message::new(port, device, reg_addr, 0);
        let request = self.command(false, msg.into());
        let response = self.execute(request)?;
        Ok(response.reg_val())
    }

    fn write_mmd(&mut self, port: u8, device: u8, reg_addr: u16, value: u16) -> Result<()> {
        let msg = Clause45Message::new(port, device, reg_addr, value);
        let request = self.command(true, msg.into());
        self.execute(request)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
