//! Integration tests for the dispatch loop

mod common;

mod tests {
    use crate::common::*;

    use bannister_lights::{
        AnimationId, Clock, Controller, ControllerConfig, Duration, Instant, LedStrip, Mode,
        PinSensors, SystemClock, Zone,
    };

    const LEDS: usize = 8;

    /// 8 growth steps, hold, 60 fade steps
    const FILL_MS: u64 = 8 * 10 + 20_000 + 60 * 20;
    /// 120 rise steps, hold, 119 fall steps
    const PINK_FADE_MS: u64 = 120 * 20 + 30_000 + 119 * 20;
    const SETTLE_MS: u64 = 1_000;

    type TestController = Controller<ScriptedSensors, RecordingStrip<LEDS>, MockClock>;

    fn controller(sensors: ScriptedSensors) -> TestController {
        Controller::new(
            sensors,
            RecordingStrip::new(),
            MockClock::new(),
            ControllerConfig::DEFAULT,
        )
    }

    fn controller_in(mode: Mode, sensors: ScriptedSensors) -> TestController {
        Controller::with_mode(
            sensors,
            RecordingStrip::new(),
            MockClock::new(),
            ControllerConfig::DEFAULT,
            mode,
        )
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_starts_in_night() {
        let controller = controller(ScriptedSensors::new(&[0]));
        assert_eq!(controller.mode(), Mode::Night);
        assert_eq!(controller.last_trigger(), None);
    }

    #[test]
    fn test_no_motion_keeps_strip_untouched() {
        let mut controller = controller(ScriptedSensors::new(&[50]));
        controller.run_for(3);

        let (sensors, strip, clock) = controller.into_parts();
        assert!(strip.frames().is_empty());
        assert!(clock.delays().is_empty());
        assert_eq!(
            sensors.reads(),
            &[
                SensorRead::Light,
                SensorRead::Motion(Zone::Lower),
                SensorRead::Motion(Zone::Upper),
            ]
            .repeat(3)
        );
    }

    #[test]
    fn test_light_is_read_every_iteration() {
        let mut controller = controller(ScriptedSensors::new(&[50, 350, 600, 250, 50]));
        let modes: Vec<Mode> = (0..5).map(|_| controller.tick()).collect();

        assert_eq!(
            modes,
            vec![
                Mode::Night,
                Mode::Morning,
                Mode::Day,
                Mode::Evening,
                Mode::Night
            ]
        );
    }

    #[test]
    fn test_motion_in_morning_plays_pink_fade() {
        let sensors = ScriptedSensors::new(&[600]).with_lower(&[true]);
        let mut controller = controller(sensors);

        assert_eq!(controller.tick(), Mode::Morning);

        let trigger = controller.last_trigger().unwrap();
        assert_eq!(trigger.animation, AnimationId::PinkFade);
        assert_eq!(trigger.at, at(0));

        // 120 rise, 119 fall, 1 clear
        let strip = controller.strip();
        assert_eq!(strip.frames().len(), 240);
        assert!(strip.last_frame().unwrap().is_dark());
        assert_eq!(
            controller.clock().elapsed(),
            Duration::from_millis(PINK_FADE_MS + SETTLE_MS)
        );
    }

    #[test]
    fn test_day_without_motion_returns_immediately() {
        let mut controller = controller_in(Mode::Day, ScriptedSensors::new(&[800]));
        assert_eq!(controller.tick(), Mode::Day);

        assert!(controller.strip().frames().is_empty());
        assert_eq!(controller.last_trigger(), None);
    }

    #[test]
    fn test_dusk_with_lower_motion_only_fills_from_bottom() {
        let sensors = ScriptedSensors::new(&[50])
            .with_lower(&[true])
            .with_upper(&[false]);
        let mut controller = controller_in(Mode::Day, sensors);

        assert_eq!(controller.tick(), Mode::Evening);
        assert_eq!(
            controller.last_trigger().unwrap().animation,
            AnimationId::FillFromBottom
        );

        let frames = controller.strip().frames();
        assert_eq!(frames.len(), LEDS + 60 + 1);
        assert_eq!(frames[0].lit_indices(), vec![LEDS - 1]);
        // the bottom pixel stays lit through the whole growth phase
        assert!(frames[..LEDS].iter().all(|f| f.lit_indices().contains(&(LEDS - 1))));
        assert_eq!(
            controller.clock().elapsed(),
            Duration::from_millis(FILL_MS + SETTLE_MS)
        );
    }

    #[test]
    fn test_night_with_both_zones_runs_both_fills_in_order() {
        let sensors = ScriptedSensors::new(&[50])
            .with_lower(&[true])
            .with_upper(&[true]);
        let mut controller = controller(sensors);

        assert_eq!(controller.tick(), Mode::Night);

        let fill_frames = LEDS + 60 + 1;
        let frames = controller.strip().frames();
        assert_eq!(frames.len(), 2 * fill_frames);
        assert_eq!(frames[0].lit_indices(), vec![LEDS - 1]);
        assert!(frames[fill_frames - 1].is_dark());
        assert_eq!(frames[fill_frames].lit_indices(), vec![0]);

        // upper fill starts once the lower fill and its settle delay are over
        let trigger = controller.last_trigger().unwrap();
        assert_eq!(trigger.animation, AnimationId::FillFromTop);
        assert_eq!(trigger.at, at(FILL_MS + SETTLE_MS));
        assert_eq!(
            controller.clock().elapsed(),
            Duration::from_millis(2 * (FILL_MS + SETTLE_MS))
        );
    }

    #[test]
    fn test_upper_sensor_is_read_after_lower_fill() {
        let sensors = ScriptedSensors::new(&[50]).with_lower(&[true, false]);
        let mut controller = controller(sensors);
        controller.tick();

        assert_eq!(
            controller.sensors_mut().reads(),
            &[
                SensorRead::Light,
                SensorRead::Motion(Zone::Lower),
                SensorRead::Motion(Zone::Upper),
            ]
        );
        assert_eq!(
            controller.last_trigger().unwrap().animation,
            AnimationId::FillFromBottom
        );
    }

    #[test]
    fn test_evening_shares_night_routine() {
        let sensors = ScriptedSensors::new(&[200]).with_upper(&[true]);
        let mut controller = controller_in(Mode::Evening, sensors);

        assert_eq!(controller.tick(), Mode::Evening);
        assert_eq!(
            controller.last_trigger().unwrap().animation,
            AnimationId::FillFromTop
        );
        assert_eq!(controller.strip().frames()[0].lit_indices(), vec![0]);
    }

    #[test]
    fn test_morning_routine_plays_rainbow() {
        let config = ControllerConfig {
            rainbow_iterations: 5,
            ..ControllerConfig::DEFAULT
        };
        let sensors = ScriptedSensors::new(&[400]).with_upper(&[true]);
        let mut controller = Controller::with_mode(
            sensors,
            RecordingStrip::<LEDS>::new(),
            MockClock::new(),
            config,
            Mode::Morning,
        );

        controller.morning_routine();

        assert_eq!(
            controller.last_trigger().unwrap().animation,
            AnimationId::Rainbow
        );
        assert_eq!(controller.strip().frames().len(), 6);
        assert_eq!(controller.clock().elapsed(), Duration::from_millis(5 * 50));
    }

    #[test]
    fn test_morning_routine_without_motion_does_nothing() {
        let mut controller = controller_in(Mode::Morning, ScriptedSensors::new(&[400]));
        controller.morning_routine();

        assert!(controller.strip().frames().is_empty());
    }

    #[test]
    fn test_drives_hardware_adapters() {
        let sensors = PinSensors::new(FixedPin(false), FixedPin(true), || 20);
        let strip: LedStrip<CaptureDriver, LEDS> = LedStrip::new(CaptureDriver::default());
        let mut controller = Controller::new(sensors, strip, MockClock::new(), ControllerConfig::DEFAULT);

        assert_eq!(controller.tick(), Mode::Night);

        let (_, strip, _) = controller.into_parts();
        let frames = &strip.driver().frames;
        assert_eq!(frames.len(), LEDS + 60 + 1);
        assert_ne!(frames[0][LEDS - 1], Default::default());
        assert!(frames.last().unwrap().iter().all(|p| *p == Default::default()));
    }

    #[test]
    fn test_system_clock_blocks_for_duration() {
        let mut clock = SystemClock;
        let start = clock.now();
        clock.delay(Duration::from_millis(5));
        assert!(clock.now() >= start + Duration::from_millis(5));
    }
}
