//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//!
//! # Contents
//!
//! - [`control_bits`]: Control word bit positions and pack/unpack helpers

pub(crate) mod control_bits;
