//! Register body
//!
//! On the wire the two records share the same bytes and nothing inside them
//! says which one is present; the Clause 45 bit of the control word decides.
//! Here the choice is an enum, so only the selected record is ever visible.

use super::clause22::Clause22Message;
use super::clause45::Clause45Message;
use crate::constants::{CLAUSE22_MESSAGE_SIZE, CLAUSE45_MESSAGE_SIZE, REGISTER_BODY_SIZE};
use crate::error::ConfigResult;

/// Register-access record carried after the control word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterBody {
    /// Clause 22 direct access
    Clause22(Clause22Message),
    /// Clause 45 indirect access
    Clause45(Clause45Message),
}

impl RegisterBody {
    /// Value of the control word's Clause 45 bit that selects this variant
    pub const fn is_clause45(&self) -> bool {
        matches!(self, RegisterBody::Clause45(_))
    }

    /// Register value carried by the active record
    pub const fn reg_val(&self) -> u16 {
        match self {
            RegisterBody::Clause22(msg) => msg.reg_val,
            RegisterBody::Clause45(msg) => msg.reg_val,
        }
    }

    /// Replace the register value in the active record
    #[must_use]
    pub const fn with_reg_val(self, reg_val: u16) -> Self {
        match self {
            RegisterBody::Clause22(mut msg) => {
                msg.reg_val = reg_val;
                RegisterBody::Clause22(msg)
            }
            RegisterBody::Clause45(mut msg) => {
                msg.reg_val = reg_val;
                RegisterBody::Clause45(msg)
            }
        }
    }

    /// Check address ranges of the active record
    pub const fn validate(&self) -> ConfigResult<()> {
        match self {
            RegisterBody::Clause22(msg) => msg.validate(),
            RegisterBody::Clause45(msg) => msg.validate(),
        }
    }

    /// Same variant and same addressing as `other` (value ignored)
    pub const fn same_target(&self, other: &Self) -> bool {
        match (self, other) {
            (RegisterBody::Clause22(a), RegisterBody::Clause22(b)) => a.same_target(b),
            (RegisterBody::Clause45(a), RegisterBody::Clause45(b)) => a.same_target(b),
            _ => false,
        }
    }

    /// Serialize into the body region, zero-padding a shorter record
    pub fn to_bytes(&self) -> [u8; REGISTER_BODY_SIZE] {
        let mut out = [0u8; REGISTER_BODY_SIZE];
        match self {
            RegisterBody::Clause22(msg) => {
                out[..CLAUSE22_MESSAGE_SIZE].copy_from_slice(&msg.to_bytes());
            }
            RegisterBody::Clause45(msg) => {
                out[..CLAUSE45_MESSAGE_SIZE].copy_from_slice(&msg.to_bytes());
            }
        }
        out
    }

    /// Parse the body region using the layout selected by the tag bit
    pub fn from_bytes(bytes: &[u8; REGISTER_BODY_SIZE], clause45: bool) -> Self {
        if clause45 {
            let mut raw = [0u8; CLAUSE45_MESSAGE_SIZE];
            raw.copy_from_slice(&bytes[..CLAUSE45_MESSAGE_SIZE]);
            RegisterBody::Clause45(Clause45Message::from_bytes(&raw))
        } else {
            let mut raw = [0u8; CLAUSE22_MESSAGE_SIZE];
            raw.copy_from_slice(&bytes[..CLAUSE22_MESSAGE_SIZE]);
            RegisterBody::Clause22(Clause22Message::from_bytes(&raw))
        }
    }
}

impl From<Clause22Message> for RegisterBody {
    fn from(msg: Clause22Message) -> Self {
        RegisterBody::Clause22(msg)
    }
}

impl From<Clause45Message> for RegisterBody {
    fn from(msg: Clause45Message) -> Self {
        RegisterBody::Clause45(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_two_shapes() {
        let bytes = [0x01, 0x07, 0x3C, 0x00, 0x55, 0xAA];

        let c22 = RegisterBody::from_bytes(&bytes, false);
        let c45 = RegisterBody::from_bytes(&bytes, true);

        assert_eq!(c22, RegisterBody::Clause22(Clause22Message::from_bytes(&bytes)));
        assert_eq!(c45, RegisterBody::Clause45(Clause45Message::new(0x01, 0x07, 0x003C, 0xAA55)));
        assert_eq!(c22.to_bytes(), bytes);
        assert_eq!(c45.to_bytes(), bytes);
    }

    #[test]
    fn tag_follows_variant() {
        assert!(!RegisterBody::from(Clause22Message::default()).is_clause45());
        assert!(RegisterBody::from(Clause45Message::default()).is_clause45());
    }

    #[test]
    fn with_reg_val_keeps_addressing() {
        let body = RegisterBody::from(Clause45Message::new(2, 3, 0x10, 0));
        let updated = body.with_reg_val(0x1234);

        assert_eq!(updated.reg_val(), 0x1234);
        assert!(updated.same_target(&body));
    }

    #[test]
    fn different_variants_never_match() {
        let c22 = RegisterBody::from(Clause22Message::new(0, 0, 0));
        let c45 = RegisterBody::from(Clause45Message::new(0, 0, 0, 0));
        assert!(!c22.same_target(&c45));
    }
}
