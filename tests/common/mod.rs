//! Shared test infrastructure for bannister-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use smart_leds::SmartLedsWrite;

use bannister_lights::color::DARK;
use bannister_lights::{
    Clock, Color, Duration, FrameSink, Instant, LightIntensity, Rgb, SensorGateway, Zone,
};

// ============================================================================
// Mock Clock
// ============================================================================

/// Clock that advances virtual time on every delay
#[derive(Debug)]
pub struct MockClock {
    elapsed: Duration,
    delays: Vec<Duration>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::from_millis(0),
            delays: Vec::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        Instant::from_millis(0) + self.elapsed
    }

    fn delay(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.delays.push(duration);
    }
}

// ============================================================================
// Recording Strip
// ============================================================================

/// One presented frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<Color>,
    /// Presented through `clear_and_present`
    pub cleared: bool,
}

impl Frame {
    pub fn lit_indices(&self) -> Vec<usize> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, pixel)| pixel.is_lit())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_dark(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == DARK)
    }
}

/// Frame sink that keeps every presented frame
pub struct RecordingStrip<const N: usize> {
    buffer: [Color; N],
    frames: Vec<Frame>,
}

impl<const N: usize> RecordingStrip<N> {
    pub fn new() -> Self {
        Self {
            buffer: [DARK; N],
            frames: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &[Color; N] {
        &self.buffer
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl<const N: usize> FrameSink for RecordingStrip<N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) {
        self.frames.push(Frame {
            pixels: self.buffer.to_vec(),
            cleared: false,
        });
    }

    fn clear_and_present(&mut self) {
        self.buffer = [DARK; N];
        self.frames.push(Frame {
            pixels: self.buffer.to_vec(),
            cleared: true,
        });
    }
}

// ============================================================================
// Scripted Sensors
// ============================================================================

/// Sensor read, in the order the controller performed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorRead {
    Light,
    Motion(Zone),
}

/// Sensor gateway replaying scripted values.
///
/// Once a script runs out its last value keeps being returned.
#[derive(Debug, Default)]
pub struct ScriptedSensors {
    light: VecDeque<u16>,
    upper: VecDeque<bool>,
    lower: VecDeque<bool>,
    last_light: u16,
    last_upper: bool,
    last_lower: bool,
    reads: Vec<SensorRead>,
}

impl ScriptedSensors {
    pub fn new(light: &[u16]) -> Self {
        Self {
            light: light.iter().copied().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_upper(mut self, script: &[bool]) -> Self {
        self.upper = script.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_lower(mut self, script: &[bool]) -> Self {
        self.lower = script.iter().copied().collect();
        self
    }

    pub fn reads(&self) -> &[SensorRead] {
        &self.reads
    }

    fn next(queue: &mut VecDeque<bool>, last: &mut bool) -> bool {
        if let Some(value) = queue.pop_front() {
            *last = value;
        }
        *last
    }
}

impl SensorGateway for ScriptedSensors {
    fn read_ambient_light(&mut self) -> LightIntensity {
        self.reads.push(SensorRead::Light);
        if let Some(value) = self.light.pop_front() {
            self.last_light = value;
        }
        LightIntensity::new(self.last_light)
    }

    fn read_motion(&mut self, zone: Zone) -> bool {
        self.reads.push(SensorRead::Motion(zone));
        match zone {
            Zone::Upper => Self::next(&mut self.upper, &mut self.last_upper),
            Zone::Lower => Self::next(&mut self.lower, &mut self.last_lower),
        }
    }
}

// ============================================================================
// Hardware doubles
// ============================================================================

/// Input pin with a fixed level
#[derive(Debug, Clone, Copy)]
pub struct FixedPin(pub bool);

impl ErrorType for FixedPin {
    type Error = Infallible;
}

impl InputPin for FixedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0)
    }
}

/// `smart-leds` driver capturing transmitted frames
#[derive(Debug, Default)]
pub struct CaptureDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl SmartLedsWrite for CaptureDriver {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}
