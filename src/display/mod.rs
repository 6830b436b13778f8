//! The main API to the display driver. It brings the controller up from a `Config`, streams pixel
//! buffers into render windows, and switches the display modes that live in controller registers.
//!
//! The driver is write-only: the SSD1306 cannot be read back over I2C, so nothing about the mode
//! registers is cached here. Every call transmits, and repeating a call repeats the transfer.


pub mod window;

use crate::command::*;
use crate::config::{Config, PanelSize};
use crate::error::Error;
use crate::interface;

pub use self::window::Window;

/// A pixel coordinate pair of `column` and `row`, counted from the top left of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelCoord(pub i16, pub i16);

/// A driver for an SSD1306 display.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    size: PanelSize,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for a panel of `size`, connected to the interface `iface`.
    /// Nothing is transmitted until `init`.
    pub fn new(iface: DI, size: PanelSize) -> Self {
        Display { iface, size }
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    /// Consume the driver and give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Initialize the display with a config message.
    ///
    /// The order matters: the addressing mode and geometry are set while the panel is off, and
    /// the charge pump has to be running before the panel is switched back on. Any bus error
    /// aborts the sequence, leaving the controller half configured; call `init` again.
    pub fn init(&mut self, config: Config) -> Result<(), Error<DI::BusError>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ssd1306: init {=u8}x{=u8}",
            self.size.width(),
            self.size.height()
        );
        self.sleep(true)?;
        Command::SetAddressingMode(AddrMode::Horizontal).send(&mut self.iface)?;
        Command::SetStartLine(0).send(&mut self.iface)?;
        config.send_orientation(&mut self.iface)?;
        Command::SetMuxRatio(self.size.height()).send(&mut self.iface)?;
        Command::SetDisplayOffset(0).send(&mut self.iface)?;
        config.send_com_pins(&mut self.iface, self.size)?;
        config.send_timing(&mut self.iface)?;
        config.send_contrast(&mut self.iface)?;
        Command::SetEntireDisplayOn(false).send(&mut self.iface)?;
        Command::SetInverted(false).send(&mut self.iface)?;
        Command::SetChargePump(true).send(&mut self.iface)?;
        // RAM writes are corrupted if scrolling was left running.
        Command::SetScrollActive(false).send(&mut self.iface)?;
        self.sleep(false)
    }

    /// Send one raw command byte.
    pub fn send_command(&mut self, cmd: u8) -> Result<(), Error<DI::BusError>> {
        self.iface.send_command(cmd)
    }

    /// Send raw command bytes one after the other, each in its own transfer.
    pub fn send_command_list(&mut self, cmds: &[u8]) -> Result<(), Error<DI::BusError>> {
        for &cmd in cmds {
            self.iface.send_command(cmd)?;
        }
        Ok(())
    }

    /// Send a run of display data in a single transfer. It lands wherever the RAM address pointer
    /// currently is; `render` is usually what you want.
    pub fn send_buffer(&mut self, buf: &[u8]) -> Result<(), Error<DI::BusError>> {
        self.iface.send_data(buf)
    }

    /// Fill `window` from the first `window.buffer_len()` bytes of `buf`, laid out a page at a time
    /// like a panel `window` columns wide.
    ///
    /// `buf` is not offset by the window position: to update part of a full-panel buffer, pass a
    /// buffer holding just that part. Nothing is transmitted if the window lies outside the panel
    /// or `buf` is too short.
    pub fn render(&mut self, buf: &[u8], window: Window) -> Result<(), Error<DI::BusError>> {
        window.check::<DI::BusError>(self.size)?;
        let data = buf
            .get(..window.buffer_len())
            .ok_or(Error::<DI::BusError>::BufferTooShort)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("ssd1306: render {} ({=usize} bytes)", window, data.len());
        Command::SetColumnAddress(window.start_column, window.end_column).send(&mut self.iface)?;
        Command::SetPageAddress(window.start_page, window.end_page).send(&mut self.iface)?;
        self.send_buffer(data)
    }

    /// Render a full-panel buffer.
    pub fn render_frame(&mut self, buf: &[u8]) -> Result<(), Error<DI::BusError>> {
        self.render(buf, Window::full(self.size))
    }

    /// Start or stop continuous rightward scrolling of the whole panel, stepping every `interval`.
    pub fn scroll(
        &mut self,
        enabled: bool,
        interval: ScrollInterval,
    ) -> Result<(), Error<DI::BusError>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306: scroll {=bool} every {}", enabled, interval);
        Command::SetupHorizontalScroll(
            ScrollDirection::Right,
            0,
            interval,
            self.size.pages() - 1,
        )
        .send(&mut self.iface)?;
        Command::SetScrollActive(enabled).send(&mut self.iface)
    }

    /// Show the RAM contents inverted, or normally.
    pub fn invert(&mut self, enabled: bool) -> Result<(), Error<DI::BusError>> {
        Command::SetInverted(enabled).send(&mut self.iface)
    }

    /// Light every pixel regardless of RAM contents, or go back to showing RAM.
    pub fn all_pixels_on(&mut self, enabled: bool) -> Result<(), Error<DI::BusError>> {
        Command::SetEntireDisplayOn(enabled).send(&mut self.iface)
    }

    /// Control the contrast, 0-255.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::BusError>> {
        Command::SetContrast(contrast).send(&mut self.iface)
    }

    /// Control sleep mode. The RAM contents survive sleeping.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::BusError>> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }
}
