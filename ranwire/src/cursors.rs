use bytes::Buf;

use crate::{PktBuf, PktBufMut};

/// A read-only window over a borrowed byte slice.
///
/// Bytes in front of the window stay reachable through [`PktBuf::move_back`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// A window covering all of `buf`, with no head-room.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            start: 0,
            end: buf.len(),
        }
    }

    /// The backing bytes, from the head-room up to the window end.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        &self.buf[..self.end]
    }

    /// The window, borrowed for the lifetime of the backing slice.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.start..self.end]
    }

    /// Offset of the window start, which is also the head-room size.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for Cursor<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

/// A mutable window over a borrowed byte slice.
///
/// Headers are prepended by moving the window back into the reserved
/// head-room and writing in place, so nothing is ever copied or reallocated.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buf: &'a mut [u8],
    start: usize,
    end: usize,
}

impl<'a> CursorMut<'a> {
    /// A window covering all of `buf`, with no head-room.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let end = buf.len();
        CursorMut { buf, start: 0, end }
    }

    /// Create a window holding `buf[headroom..]`, reserving the first
    /// `headroom` bytes for headers.
    ///
    /// # Panics
    /// Panics if `headroom` exceeds the length of `buf`.
    #[inline]
    pub fn with_headroom(buf: &'a mut [u8], headroom: usize) -> Self {
        let mut cursor = Self::new(buf);
        cursor.advance(headroom);
        cursor
    }

    /// The backing bytes, from the head-room up to the window end.
    #[inline]
    pub fn buf(&self) -> &[u8] {
        &self.buf[..self.end]
    }

    /// Consume the cursor, returning the window for the lifetime of the
    /// backing slice.
    #[inline]
    pub fn chunk_mut_shared_lifetime(self) -> &'a mut [u8] {
        let CursorMut { buf, start, end } = self;
        &mut buf[start..end]
    }

    /// Offset of the window start, which is also the head-room size.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for CursorMut<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

impl<'a> PktBufMut for CursorMut<'a> {
    #[inline]
    fn chunk_headroom(&self) -> usize {
        self.start
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.start..self.end]
    }
}
