//! Packet batches
//!
//! Several packets travel back to back in one buffer, with no header between
//! them. A batch holds at most [`MAX_PHY_REG_PKT_ENTRIES`] packets.

use super::codec::PhyRegPkt;
use crate::constants::{MAX_PHY_REG_PKT_ENTRIES, PHY_REG_PKT_SIZE};
use crate::error::{PacketError, PacketResult};

/// Encode `packets` back to back into `buf`, returning the bytes written
pub fn encode_batch(packets: &[PhyRegPkt], buf: &mut [u8]) -> PacketResult<usize> {
    if packets.len() > MAX_PHY_REG_PKT_ENTRIES {
        return Err(PacketError::TooManyEntries);
    }

    let total = packets.len() * PHY_REG_PKT_SIZE;
    let dst = buf.get_mut(..total).ok_or(PacketError::BufferTooSmall)?;

    for (pkt, chunk) in packets.iter().zip(dst.chunks_exact_mut(PHY_REG_PKT_SIZE)) {
        pkt.encode_into(chunk)?;
    }

    Ok(total)
}

/// Split a batch buffer into packets
///
/// The whole buffer is checked up front, so the returned iterator never fails.
pub fn decode_batch(bytes: &[u8]) -> PacketResult<PacketIter<'_>> {
    if !bytes.len().is_multiple_of(PHY_REG_PKT_SIZE) {
        return Err(PacketError::MalformedPacket);
    }
    if bytes.len() / PHY_REG_PKT_SIZE > MAX_PHY_REG_PKT_ENTRIES {
        return Err(PacketError::TooManyEntries);
    }

    let (packets, _) = bytes.as_chunks::<PHY_REG_PKT_SIZE>();
    Ok(PacketIter {
        packets: packets.iter(),
    })
}

/// Iterator over the packets of a decoded batch
#[derive(Debug, Clone)]
pub struct PacketIter<'a> {
    packets: core::slice::Iter<'a, [u8; PHY_REG_PKT_SIZE]>,
}

impl Iterator for PacketIter<'_> {
    type Item = PhyRegPkt;

    fn next(&mut self) -> Option<Self::Item> {
        self.packets.next().map(PhyRegPkt::from_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.packets.size_hint()
    }
}

impl ExactSizeIterator for PacketIter<'_> {}
