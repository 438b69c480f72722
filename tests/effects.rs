mod tests {
    use disco_light::audio::AudioCalibration;
    use disco_light::color::{BLACK, Rgb, wheel};
    use disco_light::effect::{
        AudioMeterEffect, Effect, EffectId, Frame, RainbowEffect, RenderContext, ScanDirection,
        ScannerEffect, SolidEffect, scanner_hold, volume_color,
    };
    use disco_light::{Duration, MeterConfig, UserParameters};

    const N: usize = 10;
    const EYE: Rgb = Rgb {
        r: 80,
        g: 160,
        b: 240,
    };
    const PEAK: Rgb = Rgb {
        r: 100,
        g: 0,
        b: 255,
    };

    fn params(effect: EffectId) -> UserParameters {
        UserParameters::new(effect, EYE, 5.0)
    }

    fn square_wave(amplitude: u16) -> [u16; 160] {
        let mut samples = [32_768; 160];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = if i % 2 == 0 {
                32_768 + amplitude
            } else {
                32_768 - amplitude
            };
        }
        samples
    }

    #[test]
    fn test_effect_id_as_str() {
        assert_eq!(EffectId::Solid.as_str(), "solid");
        assert_eq!(EffectId::Rainbow.as_str(), "rainbow");
    }

    #[test]
    fn test_solid_fills_strip() {
        let params = params(EffectId::Solid);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut leds = [BLACK; N];
        let frame = SolidEffect.render(&ctx, &mut leds);
        assert_eq!(frame, Frame::IMMEDIATE);
        assert_eq!(leds, [EYE; N]);
    }

    #[test]
    fn test_rainbow_spreads_wheel_and_rotates() {
        let params = params(EffectId::Rainbow);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut rainbow = RainbowEffect::new();
        let mut leds = [BLACK; 4];

        let frame = rainbow.render(&ctx, &mut leds);
        assert_eq!(
            leds,
            [
                Rgb::new(0, 255, 0),
                Rgb::new(192, 63, 0),
                Rgb::new(126, 0, 129),
                Rgb::new(0, 66, 189),
            ]
        );
        assert_eq!(frame.hold, Duration::from_millis(1));
        assert!(!frame.ends_cycle);

        rainbow.render(&ctx, &mut leds);
        assert_eq!(leds[0], wheel(1));
        assert_eq!(leds[3], wheel(193));
    }

    #[test]
    fn test_rainbow_cycle_is_256_frames() {
        let params = params(EffectId::Rainbow);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut rainbow = RainbowEffect::new();
        let mut leds = [BLACK; N];

        for step in 1..256 {
            assert!(!rainbow.render(&ctx, &mut leds).ends_cycle, "step {step}");
        }
        assert!(rainbow.render(&ctx, &mut leds).ends_cycle);
        assert_eq!(rainbow.phase(), 0);
    }

    #[test]
    fn test_scanner_draws_gradient() {
        let params = params(EffectId::Scanner);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut scanner = ScannerEffect::new();
        let mut leds = [BLACK; N];

        scanner.render(&ctx, &mut leds);
        assert_eq!(leds[0], EYE);
        assert_eq!(leds[1], Rgb::new(40, 80, 120));
        assert_eq!(leds[2], Rgb::new(10, 20, 30));
        assert_eq!(leds[3..], [BLACK; N - 3]);
        scanner.finish_frame(&mut leds);
        assert_eq!(leds, [BLACK; N]);

        for _ in 1..5 {
            scanner.render(&ctx, &mut leds);
            scanner.finish_frame(&mut leds);
        }
        assert_eq!(scanner.position(), 5);

        scanner.render(&ctx, &mut leds);
        assert_eq!(
            leds,
            [
                BLACK,
                BLACK,
                BLACK,
                Rgb::new(10, 20, 30),
                Rgb::new(40, 80, 120),
                EYE,
                Rgb::new(40, 80, 120),
                Rgb::new(10, 20, 30),
                BLACK,
                BLACK,
            ]
        );
    }

    #[test]
    fn test_scanner_bounces_once_per_sweep() {
        let params = params(EffectId::Scanner);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut scanner = ScannerEffect::new();
        let mut leds = [BLACK; N];
        let mut flips = 0;
        let mut direction = scanner.direction();

        for _ in 0..N - 1 {
            assert!(scanner.position() < N);
            scanner.render(&ctx, &mut leds);
            scanner.finish_frame(&mut leds);
            if scanner.direction() != direction {
                flips += 1;
                direction = scanner.direction();
            }
            assert!(scanner.position() < N);
        }

        assert_eq!(flips, 1);
        assert_eq!(scanner.direction(), ScanDirection::Backward);
        assert_eq!(scanner.position(), N - 2);
    }

    #[test]
    fn test_scanner_stays_in_bounds() {
        let params = params(EffectId::Scanner);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        for pixels in [1, 2, 3, 5, N] {
            let mut scanner = ScannerEffect::new();
            let mut leds = vec![BLACK; pixels];
            for _ in 0..(4 * pixels + 3) {
                scanner.render(&ctx, &mut leds);
                scanner.finish_frame(&mut leds);
                assert!(scanner.position() < pixels, "{pixels} pixels");
            }
        }
    }

    #[test]
    fn test_scanner_hold_follows_speed() {
        assert_eq!(scanner_hold(10.0), Duration::from_millis(10));
        assert_eq!(scanner_hold(5.0), Duration::from_millis(155));
        assert_eq!(scanner_hold(0.0), Duration::from_millis(300));
        assert!(scanner_hold(1.0) > scanner_hold(2.0));
        // Slowest setting the speed buttons can reach
        let slowest = scanner_hold(1.0);
        assert!(slowest > Duration::from_millis(270) && slowest <= Duration::from_millis(271));
    }

    #[test]
    fn test_scanner_frame_hold_uses_speed() {
        let params = UserParameters::new(EffectId::Scanner, EYE, 10.0);
        let ctx = RenderContext {
            params: &params,
            samples: &[],
        };
        let mut leds = [BLACK; N];
        let frame = ScannerEffect::new().render(&ctx, &mut leds);
        assert_eq!(frame.hold, Duration::from_millis(10));
    }

    #[test]
    fn test_audio_meter_bar_and_peak() {
        let params = params(EffectId::AudioMeter);
        let mut meter = AudioMeterEffect::new(
            AudioCalibration::new(10.0, 510.0),
            &MeterConfig::default(),
        );
        let mut leds = [BLACK; N];

        let loud = square_wave(1000);
        let frame = meter.render(
            &RenderContext {
                params: &params,
                samples: &loud,
            },
            &mut leds,
        );
        assert_eq!(frame, Frame::IMMEDIATE);
        assert_eq!(meter.level(), 10.0);
        for (i, led) in leds.iter().enumerate().take(N - 1) {
            assert_eq!(*led, volume_color(i, N));
        }
        assert_eq!(leds[N - 1], PEAK);

        let quiet = square_wave(0);
        meter.render(
            &RenderContext {
                params: &params,
                samples: &quiet,
            },
            &mut leds,
        );
        assert_eq!(meter.peak().peak(), 8.0);
        let mut expected = [BLACK; N];
        expected[8] = PEAK;
        assert_eq!(leds, expected);
    }

    #[test]
    fn test_volume_color_ramps_green() {
        assert_eq!(volume_color(0, N), Rgb::new(200, 0, 0));
        assert_eq!(volume_color(9, N), Rgb::new(200, 225, 0));
        assert_eq!(volume_color(299, 300), Rgb::new(200, 0, 0));
    }
}
