//! Sensor gateway
//!
//! Abstracts the two motion detectors and the ambient light sensor.

use embedded_hal::digital::InputPin;

/// Highest value an ambient light reading can take (10-bit ADC)
pub const LIGHT_INTENSITY_MAX: u16 = 1023;

/// Ambient light level in `[0, 1024)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LightIntensity(u16);

impl LightIntensity {
    /// Create a reading, saturating values outside the ADC range
    pub const fn new(raw: u16) -> Self {
        if raw > LIGHT_INTENSITY_MAX {
            Self(LIGHT_INTENSITY_MAX)
        } else {
            Self(raw)
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Location of a motion sensor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Top of the stairs
    Upper,
    /// Bottom of the stairs
    Lower,
}

/// Snapshot of both motion sensors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionState {
    pub upper: bool,
    pub lower: bool,
}

impl MotionState {
    pub const fn any(self) -> bool {
        self.upper || self.lower
    }
}

/// Source of sensor readings.
///
/// Implement this trait for your board. Reads are assumed to always succeed.
pub trait SensorGateway {
    /// Read the ambient light level
    fn read_ambient_light(&mut self) -> LightIntensity;

    /// Read whether the sensor in `zone` currently detects motion
    fn read_motion(&mut self, zone: Zone) -> bool;

    /// Read both motion sensors
    fn read_motion_state(&mut self) -> MotionState {
        MotionState {
            upper: self.read_motion(Zone::Upper),
            lower: self.read_motion(Zone::Lower),
        }
    }
}

/// Raw analog reader for the light sensor
pub trait AmbientLightReader {
    /// Read the raw ADC value
    fn read_raw(&mut self) -> u16;
}

impl<F: FnMut() -> u16> AmbientLightReader for F {
    fn read_raw(&mut self) -> u16 {
        self()
    }
}

/// Sensor gateway built from two active-high motion inputs and a light reader
pub struct PinSensors<U, L, A> {
    upper: U,
    lower: L,
    light: A,
}

impl<U, L, A> PinSensors<U, L, A>
where
    U: InputPin,
    L: InputPin,
    A: AmbientLightReader,
{
    pub const fn new(upper: U, lower: L, light: A) -> Self {
        Self {
            upper,
            lower,
            light,
        }
    }
}

impl<U, L, A> SensorGateway for PinSensors<U, L, A>
where
    U: InputPin,
    L: InputPin,
    A: AmbientLightReader,
{
    fn read_ambient_light(&mut self) -> LightIntensity {
        LightIntensity::new(self.light.read_raw())
    }

    fn read_motion(&mut self, zone: Zone) -> bool {
        // A pin that cannot be read reports no motion
        match zone {
            Zone::Upper => self.upper.is_high().unwrap_or(false),
            Zone::Lower => self.lower.is_high().unwrap_or(false),
        }
    }
}
