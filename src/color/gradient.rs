use super::codec::PackedColor;
use super::hsl::{HUE_DEGREES, Hsl, MAX_PERCENT, hsl_to_rgb};

/// Scale of the interpolation accumulators (two decimal places)
const STEP_SCALE: i32 = 100;

/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueInterpolationDirection {
    /// Increasing hue, wrapping from 359 to 0
    Clockwise,
    /// Decreasing hue, wrapping from 0 to 359
    CounterClockwise,
    /// Whichever way round the circle is shorter
    Shortest,
}

/// HSL gradient between two colors over a fixed number of steps
///
/// Steps are kept in x100 fixed point. The first and last steps hit the
/// endpoint colors exactly; a single-step gradient lands one full step past
/// the start color.
///
/// Endpoints are normalized first: hue modulo 360, saturation and luminance
/// clamped to `0..=99`. Saturation and luminance interpolate in the same
/// x100 steps as hue, which generalizes the constant values the rainbow uses.
#[derive(Debug, Clone, Copy)]
pub struct HslGradient {
    start: Hsl,
    end: Hsl,
    steps: i32,
    hue_step: i32,
    saturation_step: i32,
    luminance_step: i32,
}

impl HslGradient {
    /// Create a gradient from `start` to `end` spread over `steps` colors
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn new(start: Hsl, end: Hsl, steps: usize, direction: HueInterpolationDirection) -> Self {
        let steps = (steps.min(i32::MAX as usize) as i32).max(1);
        let start = normalize(start);
        let end = normalize(end);

        let distance_cw = (end.hue + HUE_DEGREES - start.hue).rem_euclid(HUE_DEGREES);
        let step_cw = (distance_cw * STEP_SCALE) / steps;
        let distance_ccw = (start.hue + HUE_DEGREES - end.hue).rem_euclid(HUE_DEGREES);
        let step_ccw = -(distance_ccw * STEP_SCALE) / steps;

        let hue_step = match direction {
            HueInterpolationDirection::Clockwise => step_cw,
            HueInterpolationDirection::CounterClockwise => step_ccw,
            HueInterpolationDirection::Shortest => {
                if distance_cw < distance_ccw {
                    step_cw
                } else {
                    step_ccw
                }
            }
        };

        Self {
            start,
            end,
            steps,
            hue_step,
            saturation_step: ((end.saturation - start.saturation) * STEP_SCALE) / steps,
            luminance_step: ((end.luminance - start.luminance) * STEP_SCALE) / steps,
        }
    }

    /// Number of colors in the gradient
    #[allow(clippy::cast_sign_loss)]
    pub const fn steps(&self) -> usize {
        self.steps as usize
    }

    /// Hue increment per step, in hundredths of a degree
    pub const fn hue_step(&self) -> i32 {
        self.hue_step
    }

    /// Color of the gradient at `index`
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn color_at(&self, index: usize) -> PackedColor {
        if self.steps == 1 {
            // Hue moves by the whole x100 step, taken as plain degrees
            return hsl_to_rgb(
                self.start.hue + self.hue_step,
                self.start.saturation + self.saturation_step / STEP_SCALE,
                self.start.luminance + self.luminance_step / STEP_SCALE,
            );
        }

        let index = index.min(i32::MAX as usize) as i32;
        if index <= 0 {
            return self.start.to_packed();
        }
        if index >= self.steps - 1 {
            return self.end.to_packed();
        }

        let hue = (self.start.hue * STEP_SCALE + index * self.hue_step) / STEP_SCALE + HUE_DEGREES;
        let saturation =
            (self.start.saturation * STEP_SCALE + index * self.saturation_step) / STEP_SCALE;
        let luminance =
            (self.start.luminance * STEP_SCALE + index * self.luminance_step) / STEP_SCALE;
        hsl_to_rgb(hue, saturation, luminance)
    }

    /// Iterate over every color of the gradient in order
    pub fn colors(&self) -> impl Iterator<Item = PackedColor> + '_ {
        (0..self.steps()).map(|index| self.color_at(index))
    }
}

fn normalize(color: Hsl) -> Hsl {
    Hsl {
        hue: color.hue.rem_euclid(HUE_DEGREES),
        saturation: color.saturation.clamp(0, MAX_PERCENT),
        luminance: color.luminance.clamp(0, MAX_PERCENT),
    }
}
