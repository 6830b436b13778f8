//! The command set for the SSD1306.
//!
//! Note 1: The display RAM of the SSD1306 is 128 columns by 64 rows, one bit per pixel. The rows
//! are grouped into 8 "pages" of 8 rows each, and every byte of RAM is one column of one page, with
//! the least significant bit at the top. Anywhere there is a "page" address, it refers to such a
//! band of 8 rows.
//!
//! Note 2: Over I2C, every byte of a command, including its arguments, is sent as its own command
//! transfer (see `interface::i2c`). `Command::send` takes care of this.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub const NUM_COLUMNS: u8 = 128;
pub const NUM_ROWS: u8 = 64;
pub const NUM_PAGES: u8 = NUM_ROWS / 8;
pub const COLUMN_MAX: u8 = NUM_COLUMNS - 1;
pub const ROW_MAX: u8 = NUM_ROWS - 1;
pub const PAGE_MAX: u8 = NUM_PAGES - 1;
/// Smallest MUX ratio the charge pump and COM drivers support.
pub const MUX_RATIO_MIN: u8 = 16;

/// Longest encoded command, the horizontal scroll setup.
pub const MAX_COMMAND_LEN: usize = 7;

/// How the RAM address pointer advances as display data is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrMode {
    /// The column address increments after each byte, wrapping to the start column of the next
    /// page at the end column. A whole rectangular window streams in a single transfer.
    Horizontal,
    /// The page address increments after each byte, wrapping to the next column at the end page.
    Vertical,
    /// The column address increments within the current page only.
    Page,
}

/// Setting of the COM output scan direction. Changing this setting flips the image vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComScanDirection {
    /// Scan from COM0 to COM[N-1].
    RowZeroFirst,
    /// Scan from COM[N-1] to COM0.
    RowZeroLast,
}

/// Setting the layout of the COM pins to the panel rows. This is dictated by how the module wires
/// the OLED matrix to the driver chip, and the wrong setting yields every other row missing or
/// doubled. 128x32 modules are usually `Sequential`, 128x64 modules `Alternative`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComLayout {
    Sequential,
    Alternative,
}

/// VCOMH deselect level, as a fraction of Vcc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VcomhLevel {
    /// ~0.65 x Vcc
    V065,
    /// ~0.77 x Vcc (power-on default)
    V077,
    /// ~0.83 x Vcc
    V083,
}

/// Direction of continuous horizontal scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Right,
    Left,
}

/// Time between horizontal scroll steps, in frames. The controller's encoding of these is not
/// monotonic, so always go through this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollInterval {
    Frames5,
    Frames64,
    Frames128,
    Frames256,
    Frames3,
    Frames4,
    Frames25,
    Frames2,
}

impl ScrollInterval {
    /// The 3-bit code the controller expects for this interval.
    pub fn code(self) -> u8 {
        match self {
            ScrollInterval::Frames5 => 0b000,
            ScrollInterval::Frames64 => 0b001,
            ScrollInterval::Frames128 => 0b010,
            ScrollInterval::Frames256 => 0b011,
            ScrollInterval::Frames3 => 0b100,
            ScrollInterval::Frames4 => 0b101,
            ScrollInterval::Frames25 => 0b110,
            ScrollInterval::Frames2 => 0b111,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Control sleep mode. Sleeping turns the panel off; RAM contents are kept.
    SetSleepMode(bool),
    /// Set how the RAM address pointer advances as data is written. See enum for details.
    SetAddressingMode(AddrMode),
    /// Set the column start and end address range used by `Horizontal` and `Vertical` addressing,
    /// and reset the column pointer to the start. Range is 0-127, start <= end.
    SetColumnAddress(u8, u8),
    /// Set the page start and end address range used by `Horizontal` and `Vertical` addressing,
    /// and reset the page pointer to the start. Range is 0-7, start <= end. (Note 1)
    SetPageAddress(u8, u8),
    /// Set the RAM row shown on the first COM line, rolling the image upwards. Range is 0-63.
    SetStartLine(u8),
    /// Control segment remapping. When set, column address 127 is mapped to SEG0, mirroring the
    /// image horizontally.
    SetSegmentRemap(bool),
    /// Set the COM output scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the MUX ratio, the number of active COM lines and thus panel rows. Range 16-64.
    SetMuxRatio(u8),
    /// Set the vertical shift between COM lines and RAM rows. Range is 0-63.
    SetDisplayOffset(u8),
    /// Set the COM pin hardware layout and whether left/right COM halves are swapped.
    SetComPins(ComLayout, bool),
    /// Set the oscillator frequency Fosc (0-15, higher is faster) and the display clock divide
    /// ratio (1-16).
    SetClockFoscDivide(u8, u8),
    /// Set the pre-charge phase 1 and phase 2 periods, each 1-15 DCLKs.
    SetPrechargePeriods(u8, u8),
    /// Set the VCOMH deselect level.
    SetVcomhDeselect(VcomhLevel),
    /// Set the contrast. Range 0-255.
    SetContrast(u8),
    /// Force every pixel on regardless of RAM contents, or go back to following RAM.
    SetEntireDisplayOn(bool),
    /// Invert the displayed image (RAM 0 bits lit, 1 bits dark), or go back to normal.
    SetInverted(bool),
    /// Enable or disable the internal charge pump. Modules without an external Vcc supply stay
    /// blank unless it is enabled before the display is switched on.
    SetChargePump(bool),
    /// Configure continuous horizontal scrolling of pages start through end (0-7, start <= end)
    /// at the given step interval. Takes effect on `SetScrollActive(true)`.
    SetupHorizontalScroll(ScrollDirection, u8, ScrollInterval, u8),
    /// Start or stop scrolling. RAM writes while scrolling is active may be corrupted.
    SetScrollActive(bool),
}

macro_rules! ok_command {
    ($buf:ident, [$($b:expr),+]) => {{
        let bytes = [$($b),+];
        $buf[..bytes.len()].copy_from_slice(&bytes);
        Ok(&$buf[..bytes.len()])
    }};
}

impl Command {
    /// Encode the command byte and its arguments into `buf`, returning the filled part.
    pub fn encode(self, buf: &mut [u8; MAX_COMMAND_LEN]) -> Result<&[u8], Error> {
        match self {
            Command::SetSleepMode(ena) => ok_command!(buf, [if ena { 0xAE } else { 0xAF }]),
            Command::SetAddressingMode(mode) => {
                let m = match mode {
                    AddrMode::Horizontal => 0x00,
                    AddrMode::Vertical => 0x01,
                    AddrMode::Page => 0x02,
                };
                ok_command!(buf, [0x20, m])
            }
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=COLUMN_MAX, 0..=COLUMN_MAX) if start <= end => {
                    ok_command!(buf, [0x21, start, end])
                }
                _ => Err(Error::InvalidArgument),
            },
            Command::SetPageAddress(start, end) => match (start, end) {
                (0..=PAGE_MAX, 0..=PAGE_MAX) if start <= end => ok_command!(buf, [0x22, start, end]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetStartLine(line) => match line {
                0..=ROW_MAX => ok_command!(buf, [0x40 | line]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetSegmentRemap(remap) => ok_command!(buf, [0xA0 | remap as u8]),
            Command::SetComScanDirection(dir) => ok_command!(
                buf,
                [match dir {
                    ComScanDirection::RowZeroFirst => 0xC0,
                    ComScanDirection::RowZeroLast => 0xC8,
                }]
            ),
            Command::SetMuxRatio(ratio) => match ratio {
                MUX_RATIO_MIN..=NUM_ROWS => ok_command!(buf, [0xA8, ratio - 1]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetDisplayOffset(offset) => match offset {
                0..=ROW_MAX => ok_command!(buf, [0xD3, offset]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetComPins(layout, lr_remap) => {
                let alt = match layout {
                    ComLayout::Sequential => 0x00,
                    ComLayout::Alternative => 0x10,
                };
                let remap = if lr_remap { 0x20 } else { 0x00 };
                ok_command!(buf, [0xDA, 0x02 | alt | remap])
            }
            Command::SetClockFoscDivide(fosc, ratio) => match (fosc, ratio) {
                (0..=15, 1..=16) => ok_command!(buf, [0xD5, fosc << 4 | (ratio - 1)]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetPrechargePeriods(phase_1, phase_2) => match (phase_1, phase_2) {
                (1..=15, 1..=15) => ok_command!(buf, [0xD9, phase_2 << 4 | phase_1]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetVcomhDeselect(level) => {
                let l = match level {
                    VcomhLevel::V065 => 0x00,
                    VcomhLevel::V077 => 0x20,
                    VcomhLevel::V083 => 0x30,
                };
                ok_command!(buf, [0xDB, l])
            }
            Command::SetContrast(contrast) => ok_command!(buf, [0x81, contrast]),
            Command::SetEntireDisplayOn(ena) => ok_command!(buf, [if ena { 0xA5 } else { 0xA4 }]),
            Command::SetInverted(ena) => ok_command!(buf, [if ena { 0xA7 } else { 0xA6 }]),
            Command::SetChargePump(ena) => ok_command!(buf, [0x8D, if ena { 0x14 } else { 0x10 }]),
            Command::SetupHorizontalScroll(dir, start, interval, end) => match (start, end) {
                (0..=PAGE_MAX, 0..=PAGE_MAX) if start <= end => {
                    let d = match dir {
                        ScrollDirection::Right => 0x26,
                        ScrollDirection::Left => 0x27,
                    };
                    // The two trailing bytes are fixed dummies required by the controller.
                    ok_command!(buf, [d, 0x00, start, interval.code(), end, 0x00, 0xFF])
                }
                _ => Err(Error::InvalidArgument),
            },
            Command::SetScrollActive(ena) => ok_command!(buf, [if ena { 0x2F } else { 0x2E }]),
        }
    }

    /// Send the command, one framed command transfer per byte. An out-of-range argument is
    /// reported before anything reaches the bus.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::BusError>>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; MAX_COMMAND_LEN];
        let bytes = match self.encode(&mut buf) {
            Ok(bytes) => bytes,
            Err(e) => return Err(e.widen()),
        };
        for &b in bytes {
            iface.send_command(b)?;
        }
        Ok(())
    }
}
