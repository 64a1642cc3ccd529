//! LED actuator
//!
//! Owns the PWM output and turns received commands into output changes.
//! The output is only started when it is stopped and only stopped when it
//! is running.

use embassy_time::{Duration, with_timeout};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{Command, CommandReceiver, RawCommand};
use crate::config::ActuatorConfig;
use crate::output::PwmOutput;

/// Actuator state, mirrors the physical output.
///
/// Owned by [`LedActuator`]; copies are only handed out for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
    /// Output is started
    pub is_on: bool,
    /// Last programmed brightness after clamping, in percent
    pub brightness: u8,
}

/// Effect of a single command on the actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Command did not change anything
    Ignored,
    /// Output started at maximum brightness
    PoweredOn,
    /// Output stopped
    PoweredOff,
    /// Duty cycle reprogrammed for the given (clamped) brightness
    BrightnessChanged(u8),
}

/// Outcome of one actuator step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A command was received and applied
    Applied(Transition),
    /// No command arrived before the timeout
    Idle,
}

/// Drives a single dimmable LED from commands
pub struct LedActuator<O: PwmOutput> {
    output: O,
    config: ActuatorConfig,
    state: ActuatorState,
}

impl<O: PwmOutput> LedActuator<O> {
    /// Create a new actuator.
    ///
    /// Programs the maximum brightness and starts the output, so the LED is
    /// lit as soon as the actuator exists.
    pub fn new(output: O, config: &ActuatorConfig) -> Self {
        let brightness = config.brightness.max();
        let mut actuator = Self {
            output,
            config: *config,
            state: ActuatorState {
                is_on: true,
                brightness,
            },
        };
        actuator.program(brightness);
        actuator.output.start();
        actuator
    }

    /// Snapshot of the current state for diagnostics and tests.
    ///
    /// The actuation path never reads this back from outside.
    pub const fn state(&self) -> ActuatorState {
        self.state
    }

    /// Get a reference to the output
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::TurnOn => self.turn_on(),
            Command::TurnOff => self.turn_off(),
            Command::SetBrightness(level) => self.set_brightness(level),
        };
        #[cfg(feature = "esp32-log")]
        println!(
            "[LedActuator.apply] {:?} -> {:?} ({:?})",
            command, transition, self.state
        );
        transition
    }

    /// Apply a raw command record, ignoring unknown tags
    pub fn apply_raw(&mut self, raw: RawCommand) -> Transition {
        match Command::from_raw(raw) {
            Ok(command) => self.apply(command),
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedActuator.apply_raw] ignoring command: {:?}", _err);
                Transition::Ignored
            }
        }
    }

    /// Wait for the next command and apply it.
    ///
    /// With a timeout, returns [`Step::Idle`] if nothing arrives in time.
    pub async fn step(
        &mut self,
        commands: CommandReceiver<'_>,
        timeout: Option<Duration>,
    ) -> Step {
        let command = match timeout {
            Some(timeout) => match with_timeout(timeout, commands.receive()).await {
                Ok(command) => command,
                Err(_) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[LedActuator.step] no command within {:?}", timeout);
                    return Step::Idle;
                }
            },
            None => commands.receive().await,
        };
        Step::Applied(self.apply(command))
    }

    /// Apply commands from the channel forever
    pub async fn run(&mut self, commands: CommandReceiver<'_>) -> ! {
        loop {
            self.step(commands, None).await;
        }
    }

    fn turn_on(&mut self) -> Transition {
        if self.state.is_on {
            return Transition::Ignored;
        }
        self.program(self.config.brightness.max());
        self.output.start();
        self.state.is_on = true;
        Transition::PoweredOn
    }

    fn turn_off(&mut self) -> Transition {
        if !self.state.is_on {
            return Transition::Ignored;
        }
        self.output.stop();
        self.state.is_on = false;
        Transition::PoweredOff
    }

    fn set_brightness(&mut self, level: u8) -> Transition {
        if !self.state.is_on && level == 0 {
            return Transition::Ignored;
        }
        let brightness = self.config.brightness.clamp(level);
        self.program(brightness);
        if !self.state.is_on {
            self.output.start();
            self.state.is_on = true;
        }
        Transition::BrightnessChanged(brightness)
    }

    /// Program the duty cycle for a clamped brightness
    fn program(&mut self, brightness: u8) {
        let duty = self.config.brightness.duty_cycle(brightness);
        self.output.set_duty_cycle(duty, self.config.frequency_hz);
        self.state.brightness = brightness;
    }
}
