//! Error types for the PHY register packet crate
//!
//! Errors are organized by domain for better diagnostics:
//! - [`PacketError`]: Encoding and decoding failures
//! - [`ConfigError`]: Invalid addresses or client configuration
//! - [`IoError`]: Transport and transaction failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by the client methods.

// =============================================================================
// Packet Errors
// =============================================================================

/// Packet encoding and decoding errors
///
/// The codec never validates register semantics; these are purely
/// structural failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Buffer length does not match the fixed packet size
    MalformedPacket,
    /// Clause 45 tag bit disagrees with the supplied body variant
    InconsistentTag,
    /// Output buffer cannot hold the encoded packets
    BufferTooSmall,
    /// Batch holds more packets than one transaction allows
    TooManyEntries,
}

impl core::fmt::Display for PacketError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PacketError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PacketError::MalformedPacket => "malformed packet",
            PacketError::InconsistentTag => "clause 45 tag does not match register body",
            PacketError::BufferTooSmall => "buffer too small for packet",
            PacketError::TooManyEntries => "too many packets in batch",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Address validation and configuration errors
///
/// Raised by the client before any packet is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY or port address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid Clause 22 register address (must be 0-31)
    InvalidRegisterAddress,
    /// Invalid MMD device address (must be 0-31)
    InvalidDeviceAddress,
    /// Invalid MDIO bus index (must be 0-15)
    InvalidBusIndex,
    /// Invalid configuration parameter
    InvalidConfig,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegisterAddress => "invalid register address",
            ConfigError::InvalidDeviceAddress => "invalid MMD device address",
            ConfigError::InvalidBusIndex => "invalid bus index",
            ConfigError::InvalidConfig => "invalid configuration",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Transport and transaction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// No response arrived before the timeout
    Timeout,
    /// Transport failed to send or receive
    Transport,
    /// Response does not echo the request it answers
    UnexpectedResponse,
    /// Hardware reported a non-zero status for the transaction
    RequestFailed,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::Transport => "transport error",
            IoError::UnexpectedResponse => "unexpected response",
            IoError::RequestFailed => "request failed",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Packet(PacketError::MalformedPacket)) => { /* ... */ }
///     Err(Error::Config(ConfigError::InvalidPhyAddress)) => { /* ... */ }
///     Err(Error::Io(IoError::Timeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Packet error
    Packet(PacketError),
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Packet(e) => write!(f, "packet: {}", e.as_str()),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl core::error::Error for PacketError {}
impl core::error::Error for ConfigError {}
impl core::error::Error for IoError {}
impl core::error::Error for Error {}

// From impls for automatic conversion
impl From<PacketError> for Error {
    fn from(e: PacketError) -> Self {
        Error::Packet(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for client operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for codec operations
pub type PacketResult<T> = core::result::Result<T, PacketError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for transport operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    // =========================================================================
    // PacketError Tests
    // =========================================================================

    #[test]
    fn packet_error_as_str_non_empty() {
        let variants = [
            PacketError::MalformedPacket,
            PacketError::InconsistentTag,
            PacketError::BufferTooSmall,
            PacketError::TooManyEntries,
        ];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "PacketError::{variant:?} has empty string");
        }
    }

    #[test]
    fn packet_error_display() {
        assert_eq!(format!("{}", PacketError::MalformedPacket), "malformed packet");
    }

    // =========================================================================
    // ConfigError Tests
    // =========================================================================

    #[test]
    fn config_error_as_str_non_empty() {
        let variants = [
            ConfigError::InvalidPhyAddress,
            ConfigError::InvalidRegisterAddress,
            ConfigError::InvalidDeviceAddress,
            ConfigError::InvalidBusIndex,
            ConfigError::InvalidConfig,
        ];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "ConfigError::{variant:?} has empty string");
        }
    }

    #[test]
    fn config_error_display() {
        assert_eq!(format!("{}", ConfigError::InvalidPhyAddress), "invalid PHY address");
    }

    // =========================================================================
    // IoError Tests
    // =========================================================================

    #[test]
    fn io_error_as_str_non_empty() {
        let variants = [
            IoError::Timeout,
            IoError::Transport,
            IoError::UnexpectedResponse,
            IoError::RequestFailed,
        ];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "IoError::{variant:?} has empty string");
        }
    }

    #[test]
    fn io_error_equality() {
        assert_eq!(IoError::Timeout, IoError::Timeout);
        assert_ne!(IoError::Timeout, IoError::Transport);
    }

    // =========================================================================
    // Unified Error Tests
    // =========================================================================

    #[test]
    fn error_from_packet_error() {
        let err: Error = PacketError::InconsistentTag.into();
        assert_eq!(err, Error::Packet(PacketError::InconsistentTag));
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::InvalidBusIndex.into();
        assert_eq!(err, Error::Config(ConfigError::InvalidBusIndex));
    }

    #[test]
    fn error_from_io_error() {
        let err: Error = IoError::Timeout.into();
        assert_eq!(err, Error::Io(IoError::Timeout));
    }

    #[test]
    fn error_display_prefixes_domain() {
        let display = format!("{}", Error::Packet(PacketError::MalformedPacket));
        assert_eq!(display, "packet: malformed packet");

        let display = format!("{}", Error::Io(IoError::RequestFailed));
        assert!(display.starts_with("io:"));
        assert!(display.contains("failed"));
    }

    #[test]
    fn question_mark_converts_domain_errors() {
        fn decode_step() -> PacketResult<()> {
            Err(PacketError::MalformedPacket)
        }

        fn client_step() -> Result<()> {
            decode_step()?;
            Ok(())
        }

        assert_eq!(client_step(), Err(Error::Packet(PacketError::MalformedPacket)));
    }
}
