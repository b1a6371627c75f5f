//! Client configuration
//!
//! Settings applied by [`PhyRegClient`](crate::hal::PhyRegClient) to every
//! packet it builds, plus its response timing.

use crate::constants::{
    DEFAULT_BUS_INDEX, DEFAULT_PAGE, DEFAULT_POLL_INTERVAL_US, DEFAULT_RESPONSE_TIMEOUT_US,
    MAX_BUS_INDEX, MAX_VERSION, PHY_REG_PKT_VERSION,
};
use crate::error::{ConfigError, ConfigResult};

/// Register client configuration
///
/// Use the builder methods to customize:
///
/// ```
/// use ph_phy_reg_pkt::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_bus_index(2)
///     .with_timeout_us(50_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClientConfig {
    /// MDIO bus index written into every packet
    pub bus_index: u8,
    /// Packet format version written into every packet
    pub version: u8,
    /// Clause 22 page used by `read`/`write`
    pub page: u8,
    /// Time to wait for a completed response, in microseconds
    pub timeout_us: u32,
    /// Interval between response polls, in microseconds
    pub poll_interval_us: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Create a configuration with default values
    pub const fn new() -> Self {
        Self {
            bus_index: DEFAULT_BUS_INDEX,
            version: PHY_REG_PKT_VERSION,
            page: DEFAULT_PAGE,
            timeout_us: DEFAULT_RESPONSE_TIMEOUT_US,
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }

    /// Set the MDIO bus index
    #[must_use]
    pub const fn with_bus_index(mut self, bus_index: u8) -> Self {
        self.bus_index = bus_index;
        self
    }

    /// Set the packet format version
    #[must_use]
    pub const fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set the Clause 22 page
    #[must_use]
    pub const fn with_page(mut self, page: u8) -> Self {
        self.page = page;
        self
    }

    /// Set the response timeout
    #[must_use]
    pub const fn with_timeout_us(mut self, timeout_us: u32) -> Self {
        self.timeout_us = timeout_us;
        self
    }

    /// Set the response poll interval
    #[must_use]
    pub const fn with_poll_interval_us(mut self, poll_interval_us: u32) -> Self {
        self.poll_interval_us = poll_interval_us;
        self
    }

    /// Check that every value fits the packet fields
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.bus_index > MAX_BUS_INDEX {
            return Err(ConfigError::InvalidBusIndex);
        }
        if self.version > MAX_VERSION || self.poll_interval_us == 0 {
            return Err(ConfigError::InvalidConfig);
        }
        Ok(())
    }
}
