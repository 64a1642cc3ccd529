//! Actuation commands exchanged between the sensing side and the LED actuator.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

const COMMAND_TAG_TURN_ON: u8 = 0;
const COMMAND_TAG_TURN_OFF: u8 = 1;
const COMMAND_TAG_SET_BRIGHTNESS: u8 = 2;

/// Number of commands the actuator channel can hold.
///
/// With a single slot, `send` waits until the actuator has taken the
/// previous command.
pub const COMMAND_CHANNEL_SIZE: usize = 1;

/// A discrete instruction for the LED actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch the LED on at full brightness
    TurnOn,
    /// Switch the LED off
    TurnOff,
    /// Set brightness in percent (0-100, larger values are clamped)
    SetBrightness(u8),
}

/// Command record as produced by the touch sensing firmware:
/// a command tag plus a brightness byte that only matters for
/// brightness updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCommand {
    pub tag: u8,
    pub brightness: u8,
}

/// Error returned when a raw command carries an unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandDecodeError {
    UnknownTag(u8),
}

impl Command {
    /// Decode a command from its raw tag and brightness byte
    pub const fn from_raw(raw: RawCommand) -> Result<Self, CommandDecodeError> {
        Ok(match raw.tag {
            COMMAND_TAG_TURN_ON => Self::TurnOn,
            COMMAND_TAG_TURN_OFF => Self::TurnOff,
            COMMAND_TAG_SET_BRIGHTNESS => Self::SetBrightness(raw.brightness),
            tag => return Err(CommandDecodeError::UnknownTag(tag)),
        })
    }

    /// Encode the command into the raw record layout
    pub const fn to_raw(self) -> RawCommand {
        match self {
            Self::TurnOn => RawCommand {
                tag: COMMAND_TAG_TURN_ON,
                brightness: 0,
            },
            Self::TurnOff => RawCommand {
                tag: COMMAND_TAG_TURN_OFF,
                brightness: 0,
            },
            Self::SetBrightness(brightness) => RawCommand {
                tag: COMMAND_TAG_SET_BRIGHTNESS,
                brightness,
            },
        }
    }
}

impl TryFrom<RawCommand> for Command {
    type Error = CommandDecodeError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

/// Type alias for command sender
pub type CommandSender<'a> =
    Sender<'a, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for the command channel
pub type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;
