//! The error type shared by the driver and the rasterizer.

use core::convert::Infallible;
use core::fmt;

/// Errors reported by the driver.
///
/// `E` is the error type of the underlying bus. Operations that never touch the bus (building a
/// `PanelSize` or a `Canvas`) use the default `Infallible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = Infallible> {
    /// The bus rejected or failed a write. The controller state is unknown afterwards and the
    /// display should be re-initialized.
    Transport(E),
    /// A command argument lies outside the range accepted by the controller.
    InvalidArgument,
    /// A render window extends past the panel, or has its start after its end.
    WindowOutOfBounds,
    /// The buffer handed to `render` is shorter than the window it should fill.
    BufferTooShort,
    /// A data transfer does not fit in the interface's transmit scratch buffer.
    PayloadTooLarge,
    /// The panel dimensions cannot be driven by the SSD1306.
    UnsupportedSize,
    /// A canvas buffer is not exactly `pages * width` bytes long.
    BufferSizeMismatch,
}

impl Error<Infallible> {
    /// Re-type a bus-independent error so it can be returned from a bus operation.
    pub fn widen<F>(self) -> Error<F> {
        match self {
            Error::Transport(never) => match never {},
            Error::InvalidArgument => Error::InvalidArgument,
            Error::WindowOutOfBounds => Error::WindowOutOfBounds,
            Error::BufferTooShort => Error::BufferTooShort,
            Error::PayloadTooLarge => Error::PayloadTooLarge,
            Error::UnsupportedSize => Error::UnsupportedSize,
            Error::BufferSizeMismatch => Error::BufferSizeMismatch,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "bus transfer failed: {:?}", e),
            Error::InvalidArgument => f.write_str("command argument out of range"),
            Error::WindowOutOfBounds => f.write_str("render window outside the panel"),
            Error::BufferTooShort => f.write_str("buffer shorter than the render window"),
            Error::PayloadTooLarge => f.write_str("data transfer exceeds the transmit buffer"),
            Error::UnsupportedSize => f.write_str("panel size not supported by SSD1306"),
            Error::BufferSizeMismatch => f.write_str("buffer length does not match the panel"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
