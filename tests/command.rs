mod tests {
    use myrtio_led_dimmer::{Command, CommandDecodeError, RawCommand};

    const fn raw(tag: u8, brightness: u8) -> RawCommand {
        RawCommand { tag, brightness }
    }

    #[test]
    fn test_command_from_raw() {
        assert_eq!(Command::from_raw(raw(0, 0)), Ok(Command::TurnOn));
        assert_eq!(Command::from_raw(raw(1, 0)), Ok(Command::TurnOff));
        assert_eq!(
            Command::from_raw(raw(2, 60)),
            Ok(Command::SetBrightness(60))
        );
    }

    #[test]
    fn test_command_from_raw_ignores_brightness_for_power() {
        assert_eq!(Command::from_raw(raw(0, 42)), Ok(Command::TurnOn));
        assert_eq!(Command::from_raw(raw(1, 42)), Ok(Command::TurnOff));
    }

    #[test]
    fn test_command_from_raw_unknown_tag() {
        assert_eq!(
            Command::from_raw(raw(3, 0)),
            Err(CommandDecodeError::UnknownTag(3))
        );
        assert_eq!(
            Command::try_from(raw(255, 10)),
            Err(CommandDecodeError::UnknownTag(255))
        );
    }

    #[test]
    fn test_command_to_raw() {
        assert_eq!(Command::SetBrightness(75).to_raw(), raw(2, 75));
        assert_eq!(
            Command::from_raw(Command::TurnOff.to_raw()),
            Ok(Command::TurnOff)
        );
    }
}
