//! Defines structs for the panel geometry and for the register values of commands in the SSD1306
//! that are associated with relatively-static configuration.

use crate::command::*;
use crate::error::Error;
use crate::interface;

/// The visible size of the panel in pixels. The height must be a whole number of pages, and the
/// SSD1306 cannot multiplex fewer than 16 or more than 64 rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelSize {
    width: u8,
    height: u8,
}

impl PanelSize {
    /// The common 0.91" module.
    pub const SIZE_128X32: PanelSize = PanelSize {
        width: 128,
        height: 32,
    };
    /// The common 0.96" and 1.3" modules.
    pub const SIZE_128X64: PanelSize = PanelSize {
        width: 128,
        height: 64,
    };

    pub fn new(width: u8, height: u8) -> Result<Self, Error> {
        match (width, height) {
            (1..=NUM_COLUMNS, MUX_RATIO_MIN..=NUM_ROWS) if height % 8 == 0 => {
                Ok(PanelSize { width, height })
            }
            _ => Err(Error::UnsupportedSize),
        }
    }

    pub fn width(self) -> u8 {
        self.width
    }

    pub fn height(self) -> u8 {
        self.height
    }

    /// Number of 8-row pages covering the panel.
    pub fn pages(self) -> u8 {
        self.height / 8
    }

    /// Length in bytes of a buffer holding the whole panel, `pages * width`.
    pub fn buffer_len(self) -> usize {
        self.pages() as usize * self.width as usize
    }

    /// The COM pin configuration a module of this size is most likely wired for. This is board
    /// specific; 128x32 modules use the sequential layout, 128x64 modules the alternative one, and
    /// anything else falls back to sequential.
    pub(crate) fn default_com_pins(self) -> Command {
        match (self.width, self.height) {
            (128, 32) => Command::SetComPins(ComLayout::Sequential, false),
            (128, 64) => Command::SetComPins(ComLayout::Alternative, false),
            _ => Command::SetComPins(ComLayout::Sequential, false),
        }
    }
}

/// A configuration for the display. The defaults reproduce the usual bring-up values for a module
/// with an internally generated Vcc; builder methods override individual settings. Everything in
/// here is sent once by `Display::init`, and changing the orientation afterwards requires another
/// `init`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    upside_down: bool,
    com_pins_cmd: Option<Command>,
    clock_fosc_divide_cmd: Command,
    precharge_periods_cmd: Command,
    vcomh_deselect_cmd: Command,
    contrast_cmd: Command,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new configuration: normal orientation, COM pins chosen from the panel size, clock
    /// divide 0x80, pre-charge 0xF1, VCOMH deselect 0.83 x Vcc and full contrast.
    pub fn new() -> Self {
        Config {
            upside_down: false,
            com_pins_cmd: None,
            clock_fosc_divide_cmd: Command::SetClockFoscDivide(8, 1),
            precharge_periods_cmd: Command::SetPrechargePeriods(1, 15),
            vcomh_deselect_cmd: Command::SetVcomhDeselect(VcomhLevel::V083),
            contrast_cmd: Command::SetContrast(0xFF),
        }
    }

    /// Extend this `Config` to rotate the image 180 degrees, for modules mounted upside down.
    pub fn upside_down(self, upside_down: bool) -> Self {
        Self {
            upside_down,
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM pin layout instead of guessing it from
    /// the panel size. See `Command::SetComPins`.
    pub fn com_pins(self, layout: ComLayout, lr_remap: bool) -> Self {
        Self {
            com_pins_cmd: Some(Command::SetComPins(layout, lr_remap)),
            ..self
        }
    }

    /// Extend this `Config` to configure the oscillator frequency and clock divide ratio. See
    /// `Command::SetClockFoscDivide`.
    pub fn clock_fosc_divide(self, fosc: u8, ratio: u8) -> Self {
        Self {
            clock_fosc_divide_cmd: Command::SetClockFoscDivide(fosc, ratio),
            ..self
        }
    }

    /// Extend this `Config` to configure the pre-charge periods. See
    /// `Command::SetPrechargePeriods`.
    pub fn precharge_periods(self, phase_1: u8, phase_2: u8) -> Self {
        Self {
            precharge_periods_cmd: Command::SetPrechargePeriods(phase_1, phase_2),
            ..self
        }
    }

    /// Extend this `Config` to configure the VCOMH deselect level. See
    /// `Command::SetVcomhDeselect`.
    pub fn vcomh_deselect(self, level: VcomhLevel) -> Self {
        Self {
            vcomh_deselect_cmd: Command::SetVcomhDeselect(level),
            ..self
        }
    }

    /// Extend this `Config` to configure the contrast set at init time.
    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast_cmd: Command::SetContrast(contrast),
            ..self
        }
    }

    /// Transmit the segment remap and COM scan direction pair for the configured orientation.
    pub(crate) fn send_orientation<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::BusError>>
    where
        DI: interface::DisplayInterface,
    {
        let scan = if self.upside_down {
            ComScanDirection::RowZeroLast
        } else {
            ComScanDirection::RowZeroFirst
        };
        Command::SetSegmentRemap(self.upside_down).send(iface)?;
        Command::SetComScanDirection(scan).send(iface)
    }

    /// Transmit the COM pin configuration, falling back to the guess for `size`.
    pub(crate) fn send_com_pins<DI>(
        &self,
        iface: &mut DI,
        size: PanelSize,
    ) -> Result<(), Error<DI::BusError>>
    where
        DI: interface::DisplayInterface,
    {
        self.com_pins_cmd
            .unwrap_or_else(|| size.default_com_pins())
            .send(iface)
    }

    /// Transmit the timing and driving scheme: clock, pre-charge and VCOMH deselect level.
    pub(crate) fn send_timing<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::BusError>>
    where
        DI: interface::DisplayInterface,
    {
        self.clock_fosc_divide_cmd.send(iface)?;
        self.precharge_periods_cmd.send(iface)?;
        self.vcomh_deselect_cmd.send(iface)
    }

    pub(crate) fn send_contrast<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::BusError>>
    where
        DI: interface::DisplayInterface,
    {
        self.contrast_cmd.send(iface)
    }
}
