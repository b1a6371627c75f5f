//! Packet transport contract
//!
//! The hardware-access layer that moves packets to and from the device
//! implements [`PhyRegTransport`]. Device discovery, sessions and the
//! physical link are its business; the client only hands it encoded
//! packets and polls it for completed responses.

use crate::error::IoResult;

/// Moves encoded packets between host and device
pub trait PhyRegTransport {
    /// Hand one encoded packet to the device
    fn transmit(&mut self, packet: &[u8]) -> IoResult<()>;

    /// Copy a completed response into `buf`
    ///
    /// Returns `Ok(None)` while no response is available yet, or the number
    /// of bytes received.
    fn receive(&mut self, buf: &mut [u8]) -> IoResult<Option<usize>>;
}

impl<T: PhyRegTransport + ?Sized> PhyRegTransport for &mut T {
    fn transmit(&mut self, packet: &[u8]) -> IoResult<()> {
        (**self).transmit(packet)
    }

    fn receive(&mut self, buf: &mut [u8]) -> IoResult<Option<usize>> {
        (**self).receive(buf)
    }
}
