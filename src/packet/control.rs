//! Packet Control Word
//!
//! The first 16 bits of every packet. The same bits can be viewed as a raw
//! integer ([`ControlWord::to_raw`]) or as named fields ([`ControlFields`]);
//! both views always describe the same value.
//!
//! # Layout
//!
//! | Bits | Field | Width |
//! |------|-------|-------|
//! | 0 | Enabled | 1 |
//! | 1 | WriteEnable | 1 |
//! | 2 | Clause45Enable | 1 |
//! | 3-4 | Status | 2 |
//! | 5-7 | Reserved | 3 |
//! | 8-11 | BusIndex | 4 |
//! | 12-15 | Version | 4 |

use crate::constants::CONTROL_WORD_SIZE;
use crate::internal::control_bits as bits;

// =============================================================================
// Control Fields
// =============================================================================

/// Named-field view of a control word
///
/// Multi-bit fields are truncated to their width when packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlFields {
    /// Packet is an active command
    pub enabled: bool,
    /// Register write (false = read)
    pub write_enable: bool,
    /// Body holds a Clause 45 record
    pub clause45_enable: bool,
    /// Transaction status (2 bits, owned by the hardware protocol)
    pub status: u8,
    /// Reserved bits (3 bits, carried verbatim)
    pub reserved: u8,
    /// MDIO bus index (4 bits)
    pub bus_index: u8,
    /// Packet format version (4 bits)
    pub version: u8,
}

// =============================================================================
// Control Word
// =============================================================================

/// Packed 16-bit control word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord(u16);

impl ControlWord {
    /// An all-zero control word (inert, Clause 22 read)
    pub const fn new() -> Self {
        Self(0)
    }

    /// Interpret a raw 16-bit flags value
    pub const fn from_raw(flags: u16) -> Self {
        Self(flags)
    }

    /// The raw 16-bit flags value
    pub const fn to_raw(self) -> u16 {
        self.0
    }

    /// Pack named fields into a control word
    pub const fn from_fields(fields: ControlFields) -> Self {
        Self::new()
            .with_enabled(fields.enabled)
            .with_write_enable(fields.write_enable)
            .with_clause45_enable(fields.clause45_enable)
            .with_status(fields.status)
            .with_reserved(fields.reserved)
            .with_bus_index(fields.bus_index)
            .with_version(fields.version)
    }

    /// Unpack into named fields
    pub const fn fields(self) -> ControlFields {
        ControlFields {
            enabled: self.enabled(),
            write_enable: self.write_enable(),
            clause45_enable: self.clause45_enable(),
            status: self.status(),
            reserved: self.reserved(),
            bus_index: self.bus_index(),
            version: self.version(),
        }
    }

    /// Read the little-endian wire form
    pub const fn from_le_bytes(bytes: [u8; CONTROL_WORD_SIZE]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Little-endian wire form
    pub const fn to_le_bytes(self) -> [u8; CONTROL_WORD_SIZE] {
        self.0.to_le_bytes()
    }

    // -------------------------------------------------------------------------
    // Field accessors
    // -------------------------------------------------------------------------

    /// Packet is an active command
    pub const fn enabled(self) -> bool {
        self.0 & bits::ENABLED != 0
    }

    /// Register write (false = read)
    pub const fn write_enable(self) -> bool {
        self.0 & bits::WRITE_ENABLE != 0
    }

    /// Body holds a Clause 45 record
    pub const fn clause45_enable(self) -> bool {
        self.0 & bits::CLAUSE45_ENABLE != 0
    }

    /// Transaction status
    pub const fn status(self) -> u8 {
        bits::get(self.0, bits::STATUS_SHIFT, bits::STATUS_MASK)
    }

    /// Reserved bits
    pub const fn reserved(self) -> u8 {
        bits::get(self.0, bits::RESERVED_SHIFT, bits::RESERVED_MASK)
    }

    /// MDIO bus index
    pub const fn bus_index(self) -> u8 {
        bits::get(self.0, bits::BUS_INDEX_SHIFT, bits::BUS_INDEX_MASK)
    }

    /// Packet format version
    pub const fn version(self) -> u8 {
        bits::get(self.0, bits::VERSION_SHIFT, bits::VERSION_MASK)
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Set the enabled flag
    #[must_use]
    pub const fn with_enabled(self, enabled: bool) -> Self {
        Self(bits::set_flag(self.0, bits::ENABLED, enabled))
    }

    /// Set the write flag
    #[must_use]
    pub const fn with_write_enable(self, write: bool) -> Self {
        Self(bits::set_flag(self.0, bits::WRITE_ENABLE, write))
    }

    /// Set the Clause 45 tag bit
    #[must_use]
    pub const fn with_clause45_enable(self, clause45: bool) -> Self {
        Self(bits::set_flag(self.0, bits::CLAUSE45_ENABLE, clause45))
    }

    /// Set the status field (truncated to 2 bits)
    #[must_use]
    pub const fn with_status(self, status: u8) -> Self {
        Self(bits::set(self.0, bits::STATUS_SHIFT, bits::STATUS_MASK, status))
    }

    /// Set the reserved field (truncated to 3 bits)
    #[must_use]
    pub const fn with_reserved(self, reserved: u8) -> Self {
        Self(bits::set(self.0, bits::RESERVED_SHIFT, bits::RESERVED_MASK, reserved))
    }

    /// Set the bus index (truncated to 4 bits)
    #[must_use]
    pub const fn with_bus_index(self, bus_index: u8) -> Self {
        Self(bits::set(self.0, bits::BUS_INDEX_SHIFT, bits::BUS_INDEX_MASK, bus_index))
    }

    /// Set the version (truncated to 4 bits)
    #[must_use]
    pub const fn with_version(self, version: u8) -> Self {
        Self(bits::set(self.0, bits::VERSION_SHIFT, bits::VERSION_MASK, version))
    }
}

impl From<u16> for ControlWord {
    fn from(flags: u16) -> Self {
        Self::from_raw(flags)
    }
}

impl From<ControlWord> for u16 {
    fn from(word: ControlWord) -> Self {
        word.to_raw()
    }
}

impl From<ControlFields> for ControlWord {
    fn from(fields: ControlFields) -> Self {
        Self::from_fields(fields)
    }
}

impl From<ControlWord> for ControlFields {
    fn from(word: ControlWord) -> Self {
        word.fields()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
