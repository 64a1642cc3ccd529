#![no_std]

pub mod actuator;
pub mod command;
pub mod config;
pub mod output;

pub use actuator::{ActuatorState, LedActuator, Step, Transition};
pub use command::{
    COMMAND_CHANNEL_SIZE, Command, CommandChannel, CommandDecodeError, CommandReceiver,
    CommandSender, RawCommand,
};
pub use config::{
    ActuatorConfig, BrightnessRange, ConfigError, MAX_BRIGHTNESS, MIN_BRIGHTNESS,
    PWM_FREQUENCY_HZ,
};
pub use output::{HalPwmOutput, PwmOutput};

pub use embassy_sync::channel::{TryReceiveError, TrySendError};
pub use embassy_time::{Duration, TimeoutError};
