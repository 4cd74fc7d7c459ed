use core::fmt;

use heapless::String;

/// Stack buffer that keeps as much of a rendering as fits in `limit` bytes.
///
/// Writes never fail for lack of room: overflowing text is clipped on a
/// character boundary and everything after the clip point is discarded, so
/// the kept text is always a prefix of the full rendering. A `fmt::Error`
/// coming out of `fmt::write` therefore always originates from a user
/// `Display`/`Debug` impl.
pub(crate) struct LineBuffer<const N: usize> {
    text: String<N>,
    limit: usize,
    clipped: bool,
}

impl<const N: usize> LineBuffer<N> {
    /// Creates a buffer that will hold at most `limit` bytes (capped at `N`).
    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit: limit.min(N),
            clipped: false,
        }
    }

    /// Renders `args`, reporting whether the formatting machinery failed.
    pub(crate) fn render(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::write(self, args)
    }

    pub(crate) fn is_truncated(&self) -> bool {
        self.clipped
    }

    pub(crate) fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.clipped {
            return Ok(());
        }

        let room = self.limit.saturating_sub(self.text.len());
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.clipped = true;
        }
        // `take` never exceeds the remaining capacity.
        let _ = self.text.push_str(&s[..take]);
        Ok(())
    }
}

/// Assembles `[LABEL] text` into a fixed buffer of `N` bytes.
///
/// One byte of `N` stays reserved for a terminator, so the assembled line
/// must be shorter than `N`. Returns `None` when it would not be.
pub(crate) fn prefixed_line<const N: usize>(label: &str, text: &str) -> Option<String<N>> {
    let needed = label.len() + 3 + text.len();
    if needed >= N {
        return None;
    }

    let mut line = String::new();
    for part in ["[", label, "] ", text] {
        line.push_str(part).ok()?;
    }
    Some(line)
}
