//! Demo sequence for a 128x32 SSD1306 module. This runs on an STM32F303RE with the module on I2C1,
//! PB6 for SCL and PB7 for SDA, at address 0x3C.
//!
//! It flashes the panel, scrolls a short story, sweeps lines across it and finally ramps the
//! contrast, then starts over.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate heapless;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate ssd1306_i2c;

use core::fmt::Write;
use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::i2c::I2c;
use ssd1306_i2c as oled;
use ssd1306_i2c::interface::i2c::DEFAULT_ADDRESS;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

const STORY: [&str; 4] = ["A long time ago", "  on an OLED ", "   display", " far far away"];

fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // I2C1 is Alternate Function 4 for PB6 and PB7.
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let scl = gpiob.pb6.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let sda = gpiob.pb7.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let i2c = I2c::i2c1(dp.I2C1, (scl, sda), 400.khz(), clocks, &mut rcc.apb1);

    let size = oled::PanelSize::SIZE_128X32;
    let mut disp = oled::Display::new(oled::I2cInterface::new(i2c, DEFAULT_ADDRESS), size);
    disp.init(oled::Config::new()).unwrap();

    let mut buf = [0u8; 512];
    disp.render_frame(&buf).unwrap();

    // Flash the whole panel a few times.
    for _ in 0..3 {
        disp.all_pixels_on(true).unwrap();
        delay.delay_ms(500_u16);
        disp.all_pixels_on(false).unwrap();
        delay.delay_ms(500_u16);
    }

    loop {
        let mut canvas = oled::Canvas::new(&mut buf, size).unwrap();

        // Tell the story while the panel scrolls it around.
        disp.scroll(true, oled::ScrollInterval::Frames2).unwrap();
        for (i, line) in STORY.iter().enumerate() {
            canvas.write_string(oled::PixelCoord(5, i as i16 * 8), line);
        }
        disp.render_frame(canvas.as_bytes()).unwrap();
        delay.delay_ms(3000_u16);
        disp.invert(true).unwrap();
        delay.delay_ms(3000_u16);
        disp.invert(false).unwrap();
        disp.scroll(false, oled::ScrollInterval::Frames2).unwrap();

        // Sweep lines across the panel, drawing on the first pass and erasing on the second.
        for &on in [true, false].iter() {
            for x in 0..128 {
                canvas.draw_line(oled::PixelCoord(x, 0), oled::PixelCoord(127 - x, 31), on);
                disp.render_frame(canvas.as_bytes()).unwrap();
            }
            for y in (0..32).rev() {
                canvas.draw_line(oled::PixelCoord(0, y), oled::PixelCoord(127, 31 - y), on);
                disp.render_frame(canvas.as_bytes()).unwrap();
            }
        }

        // Ramp the contrast, showing the current value.
        disp.invert(true).unwrap();
        for contrast in 0..=255u8 {
            disp.set_contrast(contrast).unwrap();
            let mut text: heapless::String<16> = heapless::String::new();
            write!(text, "CONTRAST: {}", contrast).unwrap();
            canvas.write_string(oled::PixelCoord(5, 20), &text);
            disp.render_frame(canvas.as_bytes()).unwrap();
            delay.delay_ms(50_u16);
        }
        disp.invert(false).unwrap();

        canvas.clear();
        disp.render_frame(canvas.as_bytes()).unwrap();
    }
}
