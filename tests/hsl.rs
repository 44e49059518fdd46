mod tests {
    use zip_strip::color::{
        Hsl, HslGradient, HueInterpolationDirection, hsl_to_rgb, unpack_b, unpack_g, unpack_r,
    };

    #[test]
    fn test_primary_hues() {
        // Saturation tops out at 99, so primaries keep a little of the others
        assert_eq!(hsl_to_rgb(0, 100, 50), 0xFE_0101);
        assert_eq!(hsl_to_rgb(120, 100, 50), 0x01_FE01);
        assert_eq!(hsl_to_rgb(240, 100, 50), 0x01_01FE);
    }

    #[test]
    fn test_primary_hues_dominant_channel() {
        let red = hsl_to_rgb(0, 100, 50);
        assert!(unpack_r(red) > unpack_g(red) && unpack_r(red) > unpack_b(red));
        let green = hsl_to_rgb(120, 100, 50);
        assert!(unpack_g(green) > unpack_r(green) && unpack_g(green) > unpack_b(green));
        let blue = hsl_to_rgb(240, 100, 50);
        assert!(unpack_b(blue) > unpack_r(blue) && unpack_b(blue) > unpack_g(blue));
    }

    #[test]
    fn test_intermediate_hues() {
        assert_eq!(hsl_to_rgb(1, 100, 50), 0xFE_0401);
        assert_eq!(hsl_to_rgb(30, 100, 50), 0xFE_7F01);
        assert_eq!(hsl_to_rgb(45, 100, 50), 0xFE_BE01);
        assert_eq!(hsl_to_rgb(60, 100, 50), 0xFE_FE01);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for hue in [0, 1, 59, 60, 180, 270, 359] {
            assert_eq!(hsl_to_rgb(hue, 0, 50), 0x80_8080);
        }
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_rgb(360, 100, 50), hsl_to_rgb(0, 100, 50));
        assert_eq!(hsl_to_rgb(405, 100, 50), hsl_to_rgb(45, 100, 50));
        assert_eq!(hsl_to_rgb(-120, 100, 50), hsl_to_rgb(240, 100, 50));
    }

    #[test]
    fn test_saturation_and_luminance_clamp() {
        assert_eq!(hsl_to_rgb(30, 150, 50), hsl_to_rgb(30, 99, 50));
        assert_eq!(hsl_to_rgb(30, -10, 50), hsl_to_rgb(30, 0, 50));
        assert_eq!(hsl_to_rgb(0, 100, 0), 0x00_0000);
        assert_eq!(hsl_to_rgb(0, 100, 100), 0xFF_FAFA);
        assert_eq!(hsl_to_rgb(0, 100, 100), hsl_to_rgb(0, 100, 99));
    }

    #[test]
    fn test_hsl_to_packed() {
        assert_eq!(Hsl::new(120, 100, 50).to_packed(), hsl_to_rgb(120, 100, 50));
    }

    #[test]
    fn test_gradient_endpoints() {
        let start = Hsl::new(1, 100, 50);
        let end = Hsl::new(360, 100, 50);
        let gradient = HslGradient::new(start, end, 8, HueInterpolationDirection::Clockwise);
        assert_eq!(gradient.steps(), 8);
        assert_eq!(gradient.hue_step(), 4487);
        assert_eq!(gradient.color_at(0), start.to_packed());
        assert_eq!(gradient.color_at(7), end.to_packed());
        assert_eq!(gradient.color_at(1), hsl_to_rgb(45, 100, 50));
        assert_eq!(gradient.colors().count(), 8);
    }

    #[test]
    fn test_gradient_directions() {
        let start = Hsl::new(10, 100, 50);
        let end = Hsl::new(350, 100, 50);
        let cw = HslGradient::new(start, end, 4, HueInterpolationDirection::Clockwise);
        let ccw = HslGradient::new(start, end, 4, HueInterpolationDirection::CounterClockwise);
        let shortest = HslGradient::new(start, end, 4, HueInterpolationDirection::Shortest);
        assert_eq!(cw.hue_step(), 8500);
        assert_eq!(ccw.hue_step(), -500);
        assert_eq!(shortest.hue_step(), ccw.hue_step());
        // (1000 - 500) / 100 + 360 = 365
        assert_eq!(ccw.color_at(1), hsl_to_rgb(5, 100, 50));

        let shortest = HslGradient::new(end, start, 4, HueInterpolationDirection::Shortest);
        assert_eq!(shortest.hue_step(), 500);
    }

    #[test]
    fn test_gradient_saturation_and_luminance() {
        let gradient = HslGradient::new(
            Hsl::new(0, 0, 10),
            Hsl::new(0, 80, 90),
            5,
            HueInterpolationDirection::Clockwise,
        );
        assert_eq!(gradient.color_at(2), hsl_to_rgb(0, 32, 42));
    }

    #[test]
    fn test_gradient_extreme_hues() {
        // i32::MIN is 232 degrees round the circle
        let gradient = HslGradient::new(
            Hsl::new(i32::MIN, 100, 50),
            Hsl::new(0, 100, 50),
            3,
            HueInterpolationDirection::Clockwise,
        );
        assert_eq!(gradient.hue_step(), 4266);
        assert_eq!(gradient.color_at(0), hsl_to_rgb(232, 100, 50));
        assert_eq!(gradient.color_at(1), hsl_to_rgb(274, 100, 50));
        assert_eq!(gradient.color_at(2), hsl_to_rgb(0, 100, 50));

        for direction in [
            HueInterpolationDirection::Clockwise,
            HueInterpolationDirection::CounterClockwise,
            HueInterpolationDirection::Shortest,
        ] {
            let gradient = HslGradient::new(
                Hsl::new(i32::MAX, 100, 50),
                Hsl::new(i32::MIN, 100, 50),
                16,
                direction,
            );
            assert_eq!(gradient.color_at(0), hsl_to_rgb(127, 100, 50));
            assert_eq!(gradient.color_at(15), hsl_to_rgb(232, 100, 50));
            assert_eq!(gradient.colors().count(), 16);
        }
    }

    #[test]
    fn test_gradient_extreme_saturation_and_luminance() {
        let gradient = HslGradient::new(
            Hsl::new(0, i32::MAX, i32::MIN),
            Hsl::new(0, i32::MIN, i32::MAX),
            3,
            HueInterpolationDirection::Clockwise,
        );
        assert_eq!(gradient.color_at(0), hsl_to_rgb(0, 99, 0));
        assert_eq!(gradient.color_at(1), hsl_to_rgb(0, 66, 33));
        assert_eq!(gradient.color_at(2), hsl_to_rgb(0, 0, 99));
    }

    #[test]
    fn test_single_step_gradient_moves_a_full_step() {
        // Characterizes the single pixel case: start hue plus the x100 step
        let gradient = HslGradient::new(
            Hsl::new(1, 100, 50),
            Hsl::new(360, 100, 50),
            1,
            HueInterpolationDirection::Clockwise,
        );
        assert_eq!(gradient.color_at(0), hsl_to_rgb(1 + 35_900, 100, 50));
        assert_eq!(gradient.color_at(0), hsl_to_rgb(261, 100, 50));
    }
}
