//! Effects that render into a strip window
//!
//! Each effect computes its colors through the color module and writes them
//! into [`StripPixels`]. Effects never transmit; the strip does that after
//! rendering.

mod bar_graph;
mod rainbow;
mod static_color;

pub use bar_graph::{BAR_GRAPH_EMPTY_COLOR, BAR_GRAPH_WARNING_COLOR, BarGraphEffect};
pub use rainbow::{RAINBOW_LUMINANCE, RAINBOW_SATURATION, RainbowEffect};
pub use static_color::StaticColorEffect;

use crate::pixels::StripPixels;

pub trait Effect {
    /// Render the effect into the pixels of a window
    fn render(&self, pixels: &mut StripPixels<'_>);
}

impl<E: Effect + ?Sized> Effect for &E {
    fn render(&self, pixels: &mut StripPixels<'_>) {
        (**self).render(pixels);
    }
}
