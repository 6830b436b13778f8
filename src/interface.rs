use crate::error::Error;

/// The two kinds of transfer the SSD1306 understands: a single command byte, or a run of display
/// RAM data.
pub trait DisplayInterface {
    /// Error type of the underlying bus.
    type BusError;

    fn send_command(&mut self, cmd: u8) -> Result<(), Error<Self::BusError>>;
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Error<Self::BusError>>;
}

pub mod i2c {
    //! The I2C interface. Every transaction on the bus starts with a control byte telling the
    //! SSD1306 how to interpret the rest: `0x80` ("Co" set, D/C clear) for one command byte, or
    //! `0x40` (D/C set) for a stream of display data that runs to the end of the transaction.

    use crate::hal;

    use super::DisplayInterface;
    use crate::error::Error;

    /// Bus address of most modules (SA0 pulled low).
    pub const DEFAULT_ADDRESS: u8 = 0x3C;
    /// Bus address with SA0 pulled high.
    pub const ALTERNATE_ADDRESS: u8 = 0x3D;

    /// Control byte announcing a single command byte.
    pub const CONTROL_COMMAND: u8 = 0x80;
    /// Control byte announcing display data up to the end of the transaction.
    pub const CONTROL_DATA: u8 = 0x40;

    /// Largest data transfer, in bytes: a full 128x64 frame.
    pub const MAX_DATA_LEN: usize = 128 * 64 / 8;

    pub struct I2cInterface<I2C> {
        /// The I2C master connected to the SSD1306.
        i2c: I2C,
        /// 7-bit bus address of the SSD1306.
        address: u8,
        /// Staging area where the data control byte is joined to the payload, so that a buffer
        /// always goes out as a single addressed transaction.
        scratch: [u8; MAX_DATA_LEN + 1],
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new I2C interface to communicate with the display driver at `address`
        /// (usually `DEFAULT_ADDRESS`). Bus speed and pin setup belong to whoever built `i2c`.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self {
                i2c,
                address,
                scratch: [0; MAX_DATA_LEN + 1],
            }
        }

        /// The bus address this interface writes to.
        pub fn address(&self) -> u8 {
            self.address
        }

        /// Give back the I2C master.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        type BusError = I2C::Error;

        fn send_command(&mut self, cmd: u8) -> Result<(), Error<I2C::Error>> {
            self.i2c
                .write(self.address, &[CONTROL_COMMAND, cmd])
                .map_err(Error::Transport)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Error<I2C::Error>> {
            if buf.len() > MAX_DATA_LEN {
                return Err(Error::PayloadTooLarge);
            }
            let frame_len = buf.len() + 1;
            self.scratch[0] = CONTROL_DATA;
            self.scratch[1..frame_len].copy_from_slice(buf);
            self.i2c
                .write(self.address, &self.scratch[..frame_len])
                .map_err(Error::Transport)
        }
    }

}
