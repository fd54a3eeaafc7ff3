//! Bounded, always 0-terminated token storage.
//!
//! Capacity counts the terminator, so a buffer of capacity `n` holds at most
//! `n - 1` token bytes. Pushing into a full buffer drops the byte and marks
//! the token as truncated; the buffer itself is never overrun.

/// Fixed-capacity token buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBuf {
    /// Token bytes followed by one `0x00`. `bytes.len() <= capacity`.
    bytes: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl TokenBuf {
    /// Create an empty buffer holding up to `capacity - 1` token bytes.
    ///
    /// A capacity below 1 is raised to 1 (room for the terminator only).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut bytes = Vec::with_capacity(capacity);
        bytes.push(0);
        Self {
            bytes,
            capacity,
            truncated: false,
        }
    }

    /// Empty the buffer and clear the truncation flag.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.bytes.push(0);
        self.truncated = false;
    }

    /// Append one byte. Returns `false` (and drops it) when the buffer is full.
    #[inline]
    pub fn push(&mut self, b: u8) -> bool {
        if self.len() + 1 >= self.capacity {
            self.truncated = true;
            return false;
        }
        let nul = self.bytes.len() - 1;
        self.bytes[nul] = b;
        self.bytes.push(0);
        true
    }

    /// Append as much of `src` as fits; the rest is dropped.
    pub fn extend_from_slice(&mut self, src: &[u8]) {
        let room = self.capacity - 1 - self.len();
        let (kept, dropped) = src.split_at(src.len().min(room));
        if !dropped.is_empty() {
            self.truncated = true;
        }
        self.bytes.pop();
        self.bytes.extend_from_slice(kept);
        self.bytes.push(0);
    }

    /// Token bytes, without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Token bytes followed by the `0x00` terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Token as text; invalid UTF-8 is replaced.
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Number of token bytes (excludes the terminator).
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Returns `true` if no token bytes are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity including the terminator.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if bytes were dropped since the last [`clear`](Self::clear).
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}
