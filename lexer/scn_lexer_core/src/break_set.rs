//! Fixed 256-entry membership set for single-byte break tokens.
//!
//! A break character always ends the word before it and is emitted as a
//! one-byte token of its own. The set is four `u64` words, so membership
//! is a shift and a mask.
//!
//! Presets are `static`s built by const evaluation. There is no lazy
//! first-use initialization, and therefore nothing to race on when several
//! threads start tokenizing at once.

use std::fmt;

/// Break characters used by scene scripts.
pub const SCENE_BREAKS: &[u8] = b"{}()':";

/// Break characters used by the console command tokenizer.
pub const COMMAND_BREAKS: &[u8] = b"{}()':";

static SCENE: BreakSet = BreakSet::build(SCENE_BREAKS);
static COMMAND: BreakSet = BreakSet::build(COMMAND_BREAKS);
static EMPTY: BreakSet = BreakSet::empty();

/// Set of byte values (0-255) treated as standalone single-byte tokens.
///
/// Immutable once built. [`contains(0)`](Self::contains) is always `false`:
/// a `0x00` in a definition terminates the definition.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakSet {
    bits: [u64; 4],
}

impl BreakSet {
    /// A set with no members. Every non-space byte then belongs to a word.
    pub const fn empty() -> Self {
        Self { bits: [0; 4] }
    }

    /// Build a set from a literal list of member bytes.
    ///
    /// Reading stops at the first `0x00`, so a C-style definition string and
    /// its Rust byte-string equivalent produce the same set. Building twice
    /// from the same definition yields equal sets.
    pub const fn build(definition: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < definition.len() {
            let b = definition[i];
            if b == 0 {
                break;
            }
            bits[(b >> 6) as usize] |= 1 << (b & 63);
            i += 1;
        }
        Self { bits }
    }

    /// Returns `true` if `b` is a break character.
    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }

    /// Number of members.
    pub const fn len(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < 4 {
            n += self.bits[i].count_ones() as usize;
            i += 1;
        }
        n
    }

    /// Returns `true` if the set has no members.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }

    /// Shared scene-script preset (`{ } ( ) ' :`).
    pub fn scene() -> &'static BreakSet {
        &SCENE
    }

    /// Shared console-command preset.
    pub fn command() -> &'static BreakSet {
        &COMMAND
    }

    /// Shared empty set.
    pub fn none() -> &'static BreakSet {
        &EMPTY
    }
}

impl Default for BreakSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for BreakSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| char::from(b).escape_default().to_string()))
            .finish()
    }
}

impl FromIterator<u8> for BreakSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for b in iter.into_iter().filter(|&b| b != 0) {
            set.bits[usize::from(b >> 6)] |= 1 << (b & 63);
        }
        set
    }
}
