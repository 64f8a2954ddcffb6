use std::fmt::{self, Write};

/// Per-frame scratch buffer for formatted debug text.
///
/// One allocation is reused across frames: [`FrameArena::reset`] runs at the
/// top of every frame and invalidates everything formatted during the
/// previous one. Slices returned by [`FrameArena::format`] must not be
/// retained past the frame boundary.
pub struct FrameArena {
    buf: String,
}

impl FrameArena {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    /// Drop all of the previous frame's text, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Format into the arena and return the new text.
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> &str {
        let start = self.buf.len();
        // Writing to a String cannot fail.
        let _ = self.buf.write_fmt(args);
        &self.buf[start..]
    }
}

impl Default for FrameArena {
    fn default() -> Self {
        Self::new()
    }
}
