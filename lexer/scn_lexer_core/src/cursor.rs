//! Byte cursor over a borrowed, 0-terminated buffer.
//!
//! The logical source ends at the first `0x00` byte, or at the end of the
//! slice when there is none. Reads past the end return `0x00`, so the scan
//! loops can treat `0` as the sentinel without explicit bounds checks.
//!
//! The cursor never copies the buffer; the caller keeps it alive for `'a`.

/// Cursor over a 0-terminated byte buffer.
///
/// The cursor is [`Copy`], so saving a position for lookahead is a plain
/// assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes, cut at the first `0x00`.
    src: &'a [u8],
    /// Current read position. Never exceeds `src.len()`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        let end = memchr::memchr(0, buf).unwrap_or(buf.len());
        Self {
            src: &buf[..end],
            pos: 0,
        }
    }

    /// Create a cursor at `offset`, clamped to the end of the source.
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        let mut cursor = Self::new(buf);
        cursor.pos = offset.min(cursor.src.len());
        cursor
    }

    /// Returns the byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.src.get(pos).copied().unwrap_or(0)
    }

    /// Advance by one byte. Stops at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.src.len());
    }

    /// Returns `true` once the terminator has been reached.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the logical source (up to the terminator).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    /// Unread bytes, excluding the terminator.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    /// Source bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len()`.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Source bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false`, otherwise this stops only at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.src[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not past it) or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }

    /// Advance until `byte` is under the cursor or end of input.
    ///
    /// Returns the number of bytes consumed.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        let start = self.pos;
        match memchr::memchr(byte, self.rest()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
        self.pos - start
    }

    /// Advance just past the next `*/`, or to end of input if there is none.
    pub fn eat_past_block_end(&mut self) {
        match memchr::memmem::find(self.rest(), b"*/") {
            Some(offset) => self.pos += offset + 2,
            None => self.pos = self.src.len(),
        }
    }

    /// 1-based line number of the current position.
    pub fn line(&self) -> usize {
        memchr::memchr_iter(b'\n', &self.src[..self.pos]).count() + 1
    }
}
