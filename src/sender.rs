//! Boundary to the hardware that clocks the buffer out to the LEDs

use core::fmt::Debug;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::{SmartLedsWrite, brightness};

use crate::buffer::BYTES_PER_LED;
use crate::color::Rgb;

/// Identity of the data line a strip is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pin(pub u8);

/// Abstract strip sender trait
///
/// Implement this trait to support different hardware platforms. The buffer
/// holds 3 bytes per LED in green, red, blue order; brightness scaling is up
/// to the implementation. Transmission failures are not reported back.
///
/// `send` runs inside the critical section guarding the shared buffer:
/// interrupts stay masked for the whole transmission, and the sender must
/// not touch the same [`SharedBuffer`](crate::SharedBuffer) (for example
/// through `copy_to`), or the buffer borrow panics.
pub trait StripSender {
    /// Transmit the whole buffer on `pin`
    fn send(&mut self, buffer: &[u8], pin: Pin, brightness: u8);
}

impl<T: StripSender + ?Sized> StripSender for &mut T {
    fn send(&mut self, buffer: &[u8], pin: Pin, brightness: u8) {
        (**self).send(buffer, pin, brightness);
    }
}

/// Strip sender on top of any [`SmartLedsWrite`] driver
///
/// The driver is already bound to its data line, so the pin is ignored.
#[derive(Debug)]
pub struct SmartLedsSender<W> {
    writer: W,
}

impl<W> SmartLedsSender<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripSender for SmartLedsSender<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: Debug,
{
    fn send(&mut self, buffer: &[u8], _pin: Pin, level: u8) {
        let colors = buffer
            .chunks_exact(BYTES_PER_LED)
            .map(|grb| Rgb::new(grb[1], grb[0], grb[2]));
        let result = self.writer.write(brightness(colors, level));
        #[cfg(feature = "esp32-log")]
        if let Err(error) = &result {
            println!("[SmartLedsSender.send] write failed: {:?}", error);
        }
        let _ = result;
    }
}
