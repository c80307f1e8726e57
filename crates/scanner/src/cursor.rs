/// Character-level traversal over the query text with one step of pushback.
///
/// The cursor is [`Copy`], so a snapshot of it is enough to backtrack
/// (see [`ScannerScope`](crate::ScannerScope)).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    /// Width in bytes of the last character read, zero when there is
    /// nothing to push back.
    width: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0, width: 0 }
    }

    /// Reads the next character, or `None` once the input is exhausted.
    pub fn read(&mut self) -> Option<char> {
        let Some(ch) = self.rest().chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = ch.len_utf8();
        self.pos += self.width;

        Some(ch)
    }

    /// Pushes the last character read back onto the input.
    ///
    /// Only one character can be pushed back; calling this again before the
    /// next [`read`](Self::read), or after `read` returned `None`, does nothing.
    pub fn unread(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read();
        self.unread();
        ch
    }

    /// Skips `len` bytes of already matched input.
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(self.source.is_char_boundary(self.pos + len));
        self.pos += len;
        self.width = 0;
    }

    /// Moves to the end of the input.
    pub(crate) fn exhaust(&mut self) {
        self.pos = self.source.len();
        self.width = 0;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }
}
