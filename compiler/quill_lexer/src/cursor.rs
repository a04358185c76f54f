//! Byte cursor over the source text.
//!
//! `current()` yields `0` once the end is reached. An interior NUL byte also
//! reads as `0`, so callers confirm the end with [`Cursor::is_eof`].

pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Advance one byte. Only valid while the current byte is ASCII.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance past the whole character at the cursor, returning it.
    pub(crate) fn advance_char(&mut self) -> Option<char> {
        let c = self.source.get(self.pos..)?.chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next occurrence of `byte` (not consuming it) or the end.
    /// Returns `true` if `byte` was found.
    pub(crate) fn eat_until(&mut self, byte: u8) -> bool {
        match self.source.as_bytes()[self.pos..].iter().position(|&b| b == byte) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }

    /// Source text between `start` and the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }
}
