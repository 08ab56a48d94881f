//! Dispatch loop
//!
//! Reads the sensors, advances the light mode and plays the routine the
//! mode and motion call for. Everything runs on the caller's thread and
//! blocks: motion that happens while an animation is playing is not seen.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::FrameSink;
use crate::animation::AnimationId;
use crate::clock::Clock;
use crate::config::ControllerConfig;
use crate::mode::Mode;
use crate::sensor::{SensorGateway, Zone};

/// Animation most recently started by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub animation: AnimationId,
    pub at: Instant,
}

/// Bannister controller - the main orchestrator
pub struct Controller<G, S, C> {
    // External dependencies and configuration
    sensors: G,
    strip: S,
    clock: C,
    config: ControllerConfig,

    // Internal state
    mode: Mode,
    last_trigger: Option<Trigger>,
}

impl<G, S, C> Controller<G, S, C>
where
    G: SensorGateway,
    S: FrameSink,
    C: Clock,
{
    /// Create a controller starting in [`Mode::Night`]
    pub const fn new(sensors: G, strip: S, clock: C, config: ControllerConfig) -> Self {
        Self::with_mode(sensors, strip, clock, config, Mode::Night)
    }

    /// Create a controller starting in `mode`
    pub const fn with_mode(
        sensors: G,
        strip: S,
        clock: C,
        config: ControllerConfig,
        mode: Mode,
    ) -> Self {
        Self {
            sensors,
            strip,
            clock,
            config,
            mode,
            last_trigger: None,
        }
    }

    /// Run the control loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Run a fixed number of control loop iterations
    pub fn run_for(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.tick();
        }
    }

    /// Process one control loop iteration
    ///
    /// Returns the mode the iteration ran in.
    pub fn tick(&mut self) -> Mode {
        let intensity = self.sensors.read_ambient_light();
        let next = self.mode.next(intensity);
        if next != self.mode {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Controller.tick] mode {} -> {} (light {})",
                self.mode.as_str(),
                next.as_str(),
                intensity.value()
            );
            self.mode = next;
        }

        if self.mode.is_bright() {
            self.day_routine();
        } else {
            self.night_routine();
        }

        self.mode
    }

    /// Pink fade when anyone is on the stairs
    pub fn day_routine(&mut self) {
        let motion = self.sensors.read_motion_state();
        if !motion.any() {
            return;
        }

        self.play(AnimationId::PinkFade);
        self.clock.delay(self.config.day_settle);
    }

    /// Safety lighting shared by Night and Evening.
    ///
    /// Zones are checked one after the other: the upper sensor is only read
    /// once the lower fill and its settle delay are over.
    pub fn night_routine(&mut self) {
        if self.sensors.read_motion(Zone::Lower) {
            self.play(AnimationId::FillFromBottom);
            self.clock.delay(self.config.night_settle);
        }

        if self.sensors.read_motion(Zone::Upper) {
            self.play(AnimationId::FillFromTop);
            self.clock.delay(self.config.night_settle);
        }
    }

    /// Rainbow when anyone is on the stairs.
    ///
    /// Not dispatched by [`tick`](Self::tick): Morning shares the day routine.
    pub fn morning_routine(&mut self) {
        let motion = self.sensors.read_motion_state();
        if !motion.any() {
            return;
        }

        self.play(AnimationId::Rainbow);
    }

    fn play(&mut self, animation: AnimationId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller.play] {} in {} mode",
            animation.as_str(),
            self.mode.as_str()
        );
        self.last_trigger = Some(Trigger {
            animation,
            at: self.clock.now(),
        });
        animation
            .to_slot(&self.config)
            .play(&mut self.strip, &mut self.clock);
    }

    /// Current light mode
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Animation most recently started, if any
    pub const fn last_trigger(&self) -> Option<Trigger> {
        self.last_trigger
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sensors_mut(&mut self) -> &mut G {
        &mut self.sensors
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (G, S, C) {
        (self.sensors, self.strip, self.clock)
    }
}
