#![allow(dead_code)]

use heapless::Vec;
use zip_strip::{Duration, Pin, StripSender, StripWindow, ZipStripConfig};

pub const MAX_FRAME_BYTES: usize = 96;

/// Sender that keeps the last transmitted frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSender {
    pub frame: Vec<u8, MAX_FRAME_BYTES>,
    pub pin: Option<Pin>,
    pub brightness: Option<u8>,
    pub sends: usize,
}

impl StripSender for RecordingSender {
    fn send(&mut self, buffer: &[u8], pin: Pin, brightness: u8) {
        self.frame.clear();
        self.frame
            .extend_from_slice(buffer)
            .expect("frame fits");
        self.pin = Some(pin);
        self.brightness = Some(brightness);
        self.sends += 1;
    }
}

/// Config without the brightness settle pause
pub fn config(start: usize, length: usize) -> ZipStripConfig {
    ZipStripConfig {
        brightness_settle: Duration::from_millis(0),
        ..ZipStripConfig::new(Pin(0), StripWindow::new(start, length))
    }
}
