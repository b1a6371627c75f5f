//! Control word bit field constants.
//!
//! Fields are packed low-to-high in the order the hardware declares them.
//! The word is stored little-endian on the wire.

// =============================================================================
// Control Word (16 bits)
// =============================================================================

/// Bit 0 - packet is an active command
pub const ENABLED: u16 = 1 << 0;
/// Bit 1 - register write (clear = read)
pub const WRITE_ENABLE: u16 = 1 << 1;
/// Bit 2 - body holds a Clause 45 record (clear = Clause 22)
pub const CLAUSE45_ENABLE: u16 = 1 << 2;

/// Status shift (2 bits)
pub const STATUS_SHIFT: u16 = 3;
/// Status mask (unshifted)
pub const STATUS_MASK: u16 = 0x3;

/// Reserved shift (3 bits)
pub const RESERVED_SHIFT: u16 = 5;
/// Reserved mask (unshifted)
pub const RESERVED_MASK: u16 = 0x7;

/// MDIO bus index shift (4 bits)
pub const BUS_INDEX_SHIFT: u16 = 8;
/// MDIO bus index mask (unshifted)
pub const BUS_INDEX_MASK: u16 = 0xF;

/// Version shift (4 bits)
pub const VERSION_SHIFT: u16 = 12;
/// Version mask (unshifted)
pub const VERSION_MASK: u16 = 0xF;

/// Extract a multi-bit field from a control word
#[inline]
pub const fn get(word: u16, shift: u16, mask: u16) -> u8 {
    ((word >> shift) & mask) as u8
}

/// Replace a multi-bit field in a control word, truncating `value` to the field width
#[inline]
pub const fn set(word: u16, shift: u16, mask: u16, value: u8) -> u16 {
    (word & !(mask << shift)) | (((value as u16) & mask) << shift)
}

/// Set or clear a single-bit flag
#[inline]
pub const fn set_flag(word: u16, flag: u16, on: bool) -> u16 {
    if on { word | flag } else { word & !flag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_cover_the_word_without_overlap() {
        let fields = [
            ENABLED,
            WRITE_ENABLE,
            CLAUSE45_ENABLE,
            STATUS_MASK << STATUS_SHIFT,
            RESERVED_MASK << RESERVED_SHIFT,
            BUS_INDEX_MASK << BUS_INDEX_SHIFT,
            VERSION_MASK << VERSION_SHIFT,
        ];

        let mut seen = 0u16;
        for field in fields {
            assert_eq!(seen & field, 0, "field {field:#06x} overlaps");
            seen |= field;
        }
        assert_eq!(seen, 0xFFFF);
    }

    #[test]
    fn set_truncates_to_field_width() {
        let word = set(0, BUS_INDEX_SHIFT, BUS_INDEX_MASK, 0x13);
        assert_eq!(get(word, BUS_INDEX_SHIFT, BUS_INDEX_MASK), 0x3);
        assert_eq!(word & !(BUS_INDEX_MASK << BUS_INDEX_SHIFT), 0);
    }

    #[test]
    fn set_leaves_other_fields_alone() {
        let word = set(0xFFFF, STATUS_SHIFT, STATUS_MASK, 0);
        assert_eq!(word, 0xFFFF & !(STATUS_MASK << STATUS_SHIFT));
    }

    #[test]
    fn set_flag_toggles_single_bit() {
        assert_eq!(set_flag(0, CLAUSE45_ENABLE, true), 0x0004);
        assert_eq!(set_flag(0xFFFF, CLAUSE45_ENABLE, false), 0xFFFB);
    }
}
