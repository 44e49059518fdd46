use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::SharedBuffer;
use crate::color::PackedColor;
use crate::effect::{BarGraphEffect, Effect, RainbowEffect, StaticColorEffect};
use crate::pixels::StripPixels;
use crate::sender::{Pin, StripSender};
use crate::window::StripWindow;

/// Brightness a strip starts with
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Pause after a brightness change, some strip firmwares need it to settle
pub const DEFAULT_BRIGHTNESS_SETTLE: Duration = Duration::from_millis(1);

/// Configuration for a strip instance
#[derive(Debug, Clone)]
pub struct ZipStripConfig {
    /// Data line the strip is attached to
    pub pin: Pin,
    /// Pixels of the shared buffer this strip controls
    pub window: StripWindow,
    /// Initial brightness (0-255)
    pub brightness: u8,
    /// Pause after every brightness change, zero to skip
    pub brightness_settle: Duration,
}

impl ZipStripConfig {
    pub const fn new(pin: Pin, window: StripWindow) -> Self {
        Self {
            pin,
            window,
            brightness: DEFAULT_BRIGHTNESS,
            brightness_settle: DEFAULT_BRIGHTNESS_SETTLE,
        }
    }
}

/// ZIP LED strip - a window into a shared pixel buffer plus its sender
///
/// Strips sharing a buffer only ever write inside their own window.
/// Nothing prevents windows from overlapping.
pub struct ZipStrip<'a, S: StripSender, const MAX_BYTES: usize> {
    buffer: &'a SharedBuffer<MAX_BYTES>,
    sender: S,
    pin: Pin,
    window: StripWindow,
    brightness: u8,
    brightness_settle: Duration,
}

impl<'a, S: StripSender, const MAX_BYTES: usize> ZipStrip<'a, S, MAX_BYTES> {
    /// Create a strip over `buffer`
    ///
    /// A window reaching past the end of the buffer is clamped to fit.
    pub fn new(buffer: &'a SharedBuffer<MAX_BYTES>, sender: S, config: &ZipStripConfig) -> Self {
        let total_pixels = buffer.pixel_count();
        let window = config.window.fit(total_pixels);
        #[cfg(feature = "esp32-log")]
        if window != config.window {
            println!(
                "[ZipStrip.new] window {:?} clamped to {:?} ({} pixels)",
                config.window, window, total_pixels
            );
        }

        Self {
            buffer,
            sender,
            pin: config.pin,
            window,
            brightness: config.brightness,
            brightness_settle: config.brightness_settle,
        }
    }

    /// Create a strip over part of this one, sharing the same buffer
    ///
    /// `start` is relative to this strip; the range is clamped to it.
    pub fn range(&self, start: usize, length: usize) -> Self
    where
        S: Clone,
    {
        Self {
            buffer: self.buffer,
            sender: self.sender.clone(),
            pin: self.pin,
            window: self.window.sub_window(start, length),
            brightness: self.brightness,
            brightness_settle: self.brightness_settle,
        }
    }

    pub const fn window(&self) -> StripWindow {
        self.window
    }

    /// Number of LEDs this strip controls
    pub const fn length(&self) -> usize {
        self.window.length
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn sender(&self) -> &S {
        &self.sender
    }

    pub fn sender_mut(&mut self) -> &mut S {
        &mut self.sender
    }

    pub fn into_sender(self) -> S {
        self.sender
    }

    /// Run `f` on the pixels of this strip
    pub fn with_pixels<R>(&self, f: impl FnOnce(&mut StripPixels<'_>) -> R) -> R {
        self.buffer
            .with(|buffer| f(&mut buffer.window_mut(self.window)))
    }

    /// Set a single LED. Call [`Self::show`] to make the change visible.
    pub fn set_pixel(&mut self, index: i32, color: PackedColor) {
        self.with_pixels(|pixels| pixels.set_pixel(index, color));
    }

    /// Read a single LED back from the buffer
    pub fn pixel(&self, index: i32) -> Option<PackedColor> {
        self.with_pixels(|pixels| pixels.pixel(index))
    }

    /// Set every LED to one color without showing it
    pub fn set_color(&mut self, color: PackedColor) {
        self.render(&StaticColorEffect::new(color));
    }

    /// Set every LED to one color and show it
    pub fn show_color(&mut self, color: PackedColor) {
        self.show_effect(&StaticColorEffect::new(color));
    }

    /// Turn off all LEDs of this strip. Call [`Self::show`] to make it visible.
    pub fn clear(&mut self) {
        self.with_pixels(|pixels| pixels.clear());
    }

    /// Rotate LEDs forward by `offset`. Call [`Self::show`] to make it visible.
    pub fn rotate(&mut self, offset: i32) {
        self.with_pixels(|pixels| pixels.rotate(offset));
    }

    /// Set brightness for future [`Self::show`] calls
    ///
    /// Values outside 0-255 are clamped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = brightness.clamp(0, 255) as u8;
        #[cfg(feature = "esp32-log")]
        println!(
            "[ZipStrip.set_brightness] pin {:?} brightness {} (requested {})",
            self.pin, self.brightness, brightness
        );
        if self.brightness_settle.as_ticks() > 0 {
            block_for(self.brightness_settle);
        }
    }

    /// Transmit the whole shared buffer on this strip's pin
    ///
    /// The buffer stays locked while the sender runs, see [`StripSender`].
    pub fn show(&mut self) {
        let sender = &mut self.sender;
        let pin = self.pin;
        let brightness = self.brightness;
        self.buffer
            .with(|buffer| sender.send(buffer.as_bytes(), pin, brightness));
    }

    /// Render an effect into this strip without showing it
    pub fn render<E: Effect + ?Sized>(&mut self, effect: &E) {
        self.with_pixels(|pixels| effect.render(pixels));
    }

    /// Render an effect and show it
    pub fn show_effect<E: Effect + ?Sized>(&mut self, effect: &E) {
        self.render(effect);
        self.show();
    }

    /// Show a rainbow from `start_hue` to `end_hue` across the strip
    ///
    /// Does nothing, not even a transmission, on an empty strip.
    pub fn show_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        if self.length() == 0 {
            return;
        }
        self.show_effect(&RainbowEffect::new(start_hue, end_hue));
    }

    /// Show a bar graph of `value` on a scale up to `high`
    pub fn show_bar_graph(&mut self, value: i32, high: i32) {
        self.show_effect(&BarGraphEffect::new(value, high));
    }
}
