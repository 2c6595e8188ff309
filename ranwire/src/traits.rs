pub use bytes::Buf;

/// Read access to a packet held in a window over a larger byte region.
///
/// The bytes in front of the window are head-room. Stripping a header with
/// `Buf::advance` moves the window start forward into the packet, and
/// `move_back` moves it back out over the head-room again.
pub trait PktBuf: Buf {
    /// Move the window start back by `cnt` bytes, growing the window.
    ///
    /// # Panics
    /// Panics if fewer than `cnt` bytes of head-room are reserved.
    fn move_back(&mut self, cnt: usize);

    /// Remove `cnt` trailing bytes from the window.
    ///
    /// # Panics
    /// Panics if the window holds fewer than `cnt` bytes.
    fn trim_off(&mut self, cnt: usize);
}

/// A packet buffer whose window and head-room can be written.
///
/// Encoders prepend a header of `n` bytes by checking `chunk_headroom() >= n`,
/// calling `move_back(n)` and then filling the first `n` bytes of
/// `chunk_mut()`.
pub trait PktBufMut: PktBuf {
    /// Number of bytes reserved in front of the window.
    fn chunk_headroom(&self) -> usize;

    /// A mutable view of the window.
    fn chunk_mut(&mut self) -> &mut [u8];
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        (**self).move_back(cnt)
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        (**self).trim_off(cnt);
    }
}

impl<T: PktBufMut + ?Sized> PktBufMut for &mut T {
    #[inline]
    fn chunk_headroom(&self) -> usize {
        (**self).chunk_headroom()
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        (**self).chunk_mut()
    }
}
