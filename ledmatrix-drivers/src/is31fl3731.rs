//! IS31FL3731 LED Matrix Driver
//!
//! Driver for 16x9 charlieplexed matrices built on the IS31FL3731
//! (e.g. the Adafruit CharliePlex FeatherWing) via I2C. Every LED has an
//! 8-bit PWM level, which maps directly onto pixel brightness.
//!
//! Drawing only touches a local frame buffer. Call [`Is31fl3731::flush`] to
//! push it to the chip.

use embedded_hal::i2c::I2c;
use ledmatrix_core::PixelSurface;

/// Default I2C address (AD pin to GND)
pub const DEFAULT_ADDRESS: u8 = 0x74;

/// Matrix dimensions
pub const WIDTH: usize = 16;
pub const HEIGHT: usize = 9;
const LED_COUNT: usize = WIDTH * HEIGHT;

/// Number of frame banks on the chip
pub const FRAME_COUNT: u8 = 8;

/// Register map
#[allow(dead_code)]
mod reg {
    /// Bank select, written before any other register
    pub const COMMAND: u8 = 0xFD;
    /// Bank holding the function registers
    pub const BANK_FUNCTION: u8 = 0x0B;

    // Function bank
    pub const CONFIG: u8 = 0x00;
    pub const PICTURE_FRAME: u8 = 0x01;
    pub const AUDIO_SYNC: u8 = 0x06;
    pub const SHUTDOWN: u8 = 0x0A;

    pub const CONFIG_PICTURE_MODE: u8 = 0x00;
    pub const SHUTDOWN_OFF: u8 = 0x00;
    pub const SHUTDOWN_NORMAL: u8 = 0x01;

    // Frame banks
    pub const LED_CONTROL: u8 = 0x00;
    pub const BLINK_CONTROL: u8 = 0x12;
    pub const PWM: u8 = 0x24;

    /// On/off and blink bitmaps, one bit per LED
    pub const CONTROL_LEN: usize = 18;
}

/// IS31FL3731 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Is31Error<E> {
    /// I2C transfer failed
    Bus(E),
    /// Frame number outside `0..FRAME_COUNT`
    InvalidFrame,
}

/// IS31FL3731 driver
pub struct Is31fl3731<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame bank shown on the matrix
    frame: u8,
    /// PWM level per LED, index `x + y * WIDTH`
    buffer: [u8; LED_COUNT],
}

impl<I2C: I2c> Is31fl3731<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at a specific address (0x74 to 0x77)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            frame: 0,
            buffer: [0; LED_COUNT],
        }
    }

    /// Wake the chip and show a dark frame 0
    ///
    /// All LEDs are enabled with blinking off, then the chip leaves
    /// software shutdown in picture mode.
    pub fn init(&mut self) -> Result<(), Is31Error<I2C::Error>> {
        debug!("is31fl3731 init at {=u8:#x}", self.address);

        self.select_bank(reg::BANK_FUNCTION)?;
        self.write_register(reg::SHUTDOWN, reg::SHUTDOWN_OFF)?;
        self.write_register(reg::CONFIG, reg::CONFIG_PICTURE_MODE)?;
        self.write_register(reg::AUDIO_SYNC, 0)?;

        self.buffer.fill(0);
        self.frame = 0;
        self.prepare_frame(0)?;

        self.select_bank(reg::BANK_FUNCTION)?;
        self.write_register(reg::PICTURE_FRAME, 0)?;
        self.write_register(reg::SHUTDOWN, reg::SHUTDOWN_NORMAL)
    }

    /// Push the frame buffer to the displayed frame
    pub fn flush(&mut self) -> Result<(), Is31Error<I2C::Error>> {
        trace!("is31fl3731 flush frame {}", self.frame);
        self.select_bank(self.frame)?;
        self.write_pwm()
    }

    /// Draw the buffer into `frame` and switch the display to it
    ///
    /// Gives tear-free updates: the previous frame stays on screen until
    /// the new one is complete.
    pub fn show_frame(&mut self, frame: u8) -> Result<(), Is31Error<I2C::Error>> {
        if frame >= FRAME_COUNT {
            warn!("is31fl3731 frame {} out of range", frame);
            return Err(Is31Error::InvalidFrame);
        }

        self.prepare_frame(frame)?;
        self.select_bank(reg::BANK_FUNCTION)?;
        self.write_register(reg::PICTURE_FRAME, frame)?;
        self.frame = frame;
        Ok(())
    }

    /// Currently displayed frame bank
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Enter or leave software shutdown
    ///
    /// The chip keeps its frame contents while shut down.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Is31Error<I2C::Error>> {
        let value = if shutdown {
            reg::SHUTDOWN_OFF
        } else {
            reg::SHUTDOWN_NORMAL
        };
        self.select_bank(reg::BANK_FUNCTION)?;
        self.write_register(reg::SHUTDOWN, value)
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Enable every LED of `frame`, stop blinking and upload the buffer
    fn prepare_frame(&mut self, frame: u8) -> Result<(), Is31Error<I2C::Error>> {
        self.select_bank(frame)?;

        let mut control = [0u8; reg::CONTROL_LEN + 1];
        control[0] = reg::LED_CONTROL;
        control[1..].fill(0xFF);
        self.write(&control)?;

        let mut blink = [0u8; reg::CONTROL_LEN + 1];
        blink[0] = reg::BLINK_CONTROL;
        self.write(&blink)?;

        self.write_pwm()
    }

    fn write_pwm(&mut self) -> Result<(), Is31Error<I2C::Error>> {
        let mut data = [0u8; LED_COUNT + 1];
        data[0] = reg::PWM;
        data[1..].copy_from_slice(&self.buffer);
        self.write(&data)
    }

    fn select_bank(&mut self, bank: u8) -> Result<(), Is31Error<I2C::Error>> {
        self.write_register(reg::COMMAND, bank)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Is31Error<I2C::Error>> {
        self.write(&[register, value])
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Is31Error<I2C::Error>> {
        self.i2c.write(self.address, bytes).map_err(Is31Error::Bus)
    }
}

impl<I2C: I2c> PixelSurface for Is31fl3731<I2C> {
    fn size(&self) -> (u8, u8) {
        (WIDTH as u8, HEIGHT as u8)
    }

    fn draw_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buffer[x as usize + y as usize * WIDTH] = brightness;
        }
    }

    fn get_pixel(&self, x: u8, y: u8) -> u8 {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buffer[x as usize + y as usize * WIDTH]
        } else {
            0
        }
    }

    fn fill_screen(&mut self, brightness: u8) {
        self.buffer.fill(brightness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use ledmatrix_core::LedMatrix;

    /// Mock I2C bus recording every write
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buf) => buf.fill(0),
                }
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl embedded_hal::delay::DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn last_pwm(bus: &MockI2c) -> &[u8] {
        bus.writes
            .iter()
            .rev()
            .find(|(_, bytes)| bytes[0] == reg::PWM && bytes.len() == LED_COUNT + 1)
            .map(|(_, bytes)| &bytes[1..])
            .unwrap()
    }

    #[test]
    fn test_init_sequence() {
        let mut driver = Is31fl3731::new(MockI2c::default());
        driver.init().unwrap();

        let bus = driver.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == DEFAULT_ADDRESS));

        // Starts by shutting down through the function bank
        assert_eq!(bus.writes[0].1, [reg::COMMAND, reg::BANK_FUNCTION]);
        assert_eq!(bus.writes[1].1, [reg::SHUTDOWN, reg::SHUTDOWN_OFF]);

        // All LEDs enabled in frame 0
        let control = bus
            .writes
            .iter()
            .find(|(_, bytes)| bytes[0] == reg::LED_CONTROL && bytes.len() == 19)
            .unwrap();
        assert!(control.1[1..].iter().all(|&b| b == 0xFF));

        // Ends by leaving shutdown
        let last = bus.writes.last().unwrap();
        assert_eq!(last.1, [reg::SHUTDOWN, reg::SHUTDOWN_NORMAL]);
    }

    #[test]
    fn test_pixels_are_buffered_until_flush() {
        let mut driver = Is31fl3731::new(MockI2c::default());
        driver.draw_pixel(0, 0, 10);
        driver.draw_pixel(15, 8, 200);
        driver.draw_pixel(16, 0, 99);

        assert!(driver.i2c.writes.is_empty());
        assert_eq!(driver.get_pixel(15, 8), 200);
        assert_eq!(driver.get_pixel(16, 0), 0);

        driver.flush().unwrap();
        let bus = driver.release();
        assert_eq!(bus.writes[0].1, [reg::COMMAND, 0]);

        let pwm = last_pwm(&bus);
        assert_eq!(pwm[0], 10);
        assert_eq!(pwm[15 + 8 * WIDTH], 200);
        assert_eq!(pwm.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn test_show_frame() {
        let mut driver = Is31fl3731::with_address(MockI2c::default(), 0x75);
        driver.fill_screen(7);

        driver.show_frame(3).unwrap();
        assert_eq!(driver.frame(), 3);
        assert_eq!(driver.show_frame(8), Err(Is31Error::InvalidFrame));
        assert_eq!(driver.frame(), 3);

        let bus = driver.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == 0x75));
        assert!(bus.writes.contains(&(0x75, vec![reg::COMMAND, 3])));
        assert!(bus.writes.contains(&(0x75, vec![reg::PICTURE_FRAME, 3])));
        assert!(last_pwm(&bus).iter().all(|&b| b == 7));
    }

    #[test]
    fn test_bus_error_propagates() {
        let bus = MockI2c {
            fail: true,
            ..Default::default()
        };
        let mut driver = Is31fl3731::new(bus);
        assert_eq!(driver.init(), Err(Is31Error::Bus(ErrorKind::Other)));
        assert_eq!(driver.flush(), Err(Is31Error::Bus(ErrorKind::Other)));
    }

    #[test]
    fn test_shutdown_toggle() {
        let mut driver = Is31fl3731::new(MockI2c::default());
        driver.set_shutdown(true).unwrap();
        driver.set_shutdown(false).unwrap();

        let bus = driver.release();
        let shutdown: Vec<u8> = bus
            .writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == reg::SHUTDOWN && bytes.len() == 2)
            .map(|(_, bytes)| bytes[1])
            .collect();
        assert_eq!(shutdown, [reg::SHUTDOWN_OFF, reg::SHUTDOWN_NORMAL]);
    }

    #[test]
    fn test_engine_on_driver() {
        let driver = Is31fl3731::new(MockI2c::default());
        let mut matrix = LedMatrix::new(driver, NoDelay).unwrap();
        assert_eq!((matrix.width(), matrix.height()), (16, 9));

        matrix.draw_string(0, 0, "HI", 255);
        matrix.surface_mut().flush().unwrap();

        let (driver, _) = matrix.into_parts();
        let bus = driver.release();
        // 'H' top-left cell
        assert_eq!(last_pwm(&bus)[0], 255);
    }
}
