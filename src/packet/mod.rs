//! PHY Register Access Packets
//!
//! A packet commands the hardware interface to read or write one PHY
//! register over MDIO. It is a 16-bit [`ControlWord`] followed by a
//! [`RegisterBody`] that holds either a Clause 22 or a Clause 45 record.
//! Which record is present is decided only by the control word's
//! Clause 45 bit.
//!
//! # Example
//!
//! ```
//! use ph_phy_reg_pkt::packet::{self, PhyRegPkt, RegisterBody};
//!
//! // Read register 1 (BMSR) of PHY 0 on bus 2
//! let request = PhyRegPkt::read_clause22(2, 0, 1);
//! let bytes = request.encode();
//!
//! let (control, body) = packet::decode(&bytes).unwrap();
//! assert!(control.enabled());
//! assert!(matches!(body, RegisterBody::Clause22(msg) if msg.reg_addr == 1));
//! ```

pub mod batch;
pub mod body;
pub mod clause22;
pub mod clause45;
pub mod codec;
pub mod control;

pub use batch::{PacketIter, decode_batch, encode_batch};
pub use body::RegisterBody;
pub use clause22::Clause22Message;
pub use clause45::Clause45Message;
pub use codec::{PhyRegPkt, decode, encode};
pub use control::{ControlFields, ControlWord};
