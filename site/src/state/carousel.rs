//! Image carousel position for a single project card.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Milliseconds between automatic slide advances.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// Current slide of a card's image set.
///
/// The index is always `< len`; `len` is at least one because every project
/// has a primary image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1) }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    /// Step forward, wrapping from the last image to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Timer-driven step. Same wrap rule as [`Carousel::next`].
    pub fn advance(&mut self) {
        self.next();
    }

    /// Opacity for the slide at `index`: only the current slide is visible.
    pub fn opacity(&self, index: usize) -> &'static str {
        if self.is_current(index) { "1" } else { "0" }
    }
}
