//! Comment syntaxes the scanner may skip.

use bitflags::bitflags;

bitflags! {
    /// Set of comment introducers recognized between tokens.
    ///
    /// Comment introducers inside quoted strings are never special.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CommentStyles: u8 {
        /// `// ...` up to (not including) the next `\n`.
        const LINE_SLASH_SLASH = 1 << 0;
        /// `/* ... */`, possibly spanning lines. Unterminated runs to end of input.
        const BLOCK_SLASH_STAR = 1 << 1;
        /// `; ...` up to the next `\n`.
        const LINE_SEMICOLON = 1 << 2;
        /// `# ...` up to the next `\n`.
        const LINE_HASH = 1 << 3;
    }
}

impl CommentStyles {
    /// Scene scripts: `//` and `/* */`.
    pub const SCENE: Self = Self::from_bits_truncate(
        Self::LINE_SLASH_SLASH.bits() | Self::BLOCK_SLASH_STAR.bits(),
    );

    /// Markers that end the current line for the "token available" lookahead.
    pub const LOOKAHEAD: Self = Self::from_bits_truncate(
        Self::LINE_SLASH_SLASH.bits() | Self::LINE_SEMICOLON.bits() | Self::LINE_HASH.bits(),
    );

    /// Returns `true` if `b` followed by `next` opens a line comment in this set.
    #[inline]
    pub const fn opens_line_comment(self, b: u8, next: u8) -> bool {
        match b {
            b'/' => next == b'/' && self.contains(Self::LINE_SLASH_SLASH),
            b';' => self.contains(Self::LINE_SEMICOLON),
            b'#' => self.contains(Self::LINE_HASH),
            _ => false,
        }
    }

    /// Returns `true` if `b` followed by `next` opens a block comment in this set.
    #[inline]
    pub const fn opens_block_comment(self, b: u8, next: u8) -> bool {
        b == b'/' && next == b'*' && self.contains(Self::BLOCK_SLASH_STAR)
    }
}
