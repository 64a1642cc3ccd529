//! Compile-time configuration of the LED actuator.

/// Lowest brightness the LED is ever driven at while on, in percent
pub const MIN_BRIGHTNESS: u8 = 2;

/// Brightness used at boot and on `TurnOn`, in percent
pub const MAX_BRIGHTNESS: u8 = 100;

/// PWM carrier frequency
pub const PWM_FREQUENCY_HZ: u32 = 1_000_000;

/// Error returned for an invalid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Minimum brightness is above the maximum
    InvertedRange { min: u8, max: u8 },
    /// Maximum brightness is above 100%
    MaxOutOfRange(u8),
}

/// Brightness limits applied before driving the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    /// Create a new brightness range
    pub const fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        if max > 100 {
            return Err(ConfigError::MaxOutOfRange(max));
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    /// Clamp a requested level into the range
    pub const fn clamp(self, level: u8) -> u8 {
        if level < self.min {
            self.min
        } else if level > self.max {
            self.max
        } else {
            level
        }
    }

    /// Hardware duty cycle for a requested level.
    ///
    /// The LED is wired active-low, so the duty cycle is the complement of
    /// the clamped brightness.
    pub const fn duty_cycle(self, level: u8) -> u8 {
        100 - self.clamp(level)
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        ActuatorConfig::DEFAULT.brightness
    }
}

/// Configuration for the LED actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorConfig {
    pub brightness: BrightnessRange,
    pub frequency_hz: u32,
}

impl ActuatorConfig {
    pub const DEFAULT: Self = Self {
        brightness: BrightnessRange {
            min: MIN_BRIGHTNESS,
            max: MAX_BRIGHTNESS,
        },
        frequency_hz: PWM_FREQUENCY_HZ,
    };
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
