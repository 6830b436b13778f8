//! Render windows: the rectangle of display RAM, in columns and pages, that one transfer fills.

use crate::config::PanelSize;
use crate::error::Error;

/// An inclusive rectangle of display RAM. With horizontal addressing the controller fills it left
/// to right, then page by page downwards, so the bytes for a window are laid out exactly like a
/// full-panel buffer that happens to be `end_column - start_column + 1` columns wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub start_column: u8,
    pub end_column: u8,
    pub start_page: u8,
    pub end_page: u8,
}

impl Window {
    pub fn new(start_column: u8, end_column: u8, start_page: u8, end_page: u8) -> Self {
        Window {
            start_column,
            end_column,
            start_page,
            end_page,
        }
    }

    /// The window covering every column and page of a panel.
    pub fn full(size: PanelSize) -> Self {
        Window::new(0, size.width() - 1, 0, size.pages() - 1)
    }

    /// Number of bytes needed to fill the window. Always derived from the current bounds, so
    /// moving the window can never leave a stale length behind. Meaningless for an inverted
    /// window, which `render` rejects anyway.
    pub fn buffer_len(&self) -> usize {
        let columns = (self.end_column as usize + 1).saturating_sub(self.start_column as usize);
        let pages = (self.end_page as usize + 1).saturating_sub(self.start_page as usize);
        columns * pages
    }

    /// Check the window is correctly ordered and lies within `size`.
    pub(crate) fn check<E>(&self, size: PanelSize) -> Result<(), Error<E>> {
        if false
            || self.start_column > self.end_column
            || self.start_page > self.end_page
            || self.end_column >= size.width()
            || self.end_page >= size.pages()
        {
            return Err(Error::WindowOutOfBounds);
        }
        Ok(())
    }
}
