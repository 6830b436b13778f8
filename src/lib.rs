//! Driver library for the Solomon Systech SSD1306 monochrome OLED display controller, connected
//! over I2C, plus a small software rasterizer for the controller's page-packed pixel layout.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate core;

extern crate embedded_hal as hal;

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod interface;
pub mod raster;

// Re-exports for primary API.
pub use command::{ComLayout, ScrollInterval, VcomhLevel};
pub use config::{Config, PanelSize};
pub use display::{Display, PixelCoord, Window};
pub use error::Error;
pub use interface::i2c::I2cInterface;
pub use raster::Canvas;
