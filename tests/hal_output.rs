mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::{ErrorType, SetDutyCycle};
    use myrtio_led_dimmer::{ActuatorConfig, Command, HalPwmOutput, LedActuator, PwmOutput};

    /// PWM channel with a 0..=1000 duty range that records raw writes
    #[derive(Default)]
    struct FakeChannel {
        writes: Vec<u16>,
    }

    impl ErrorType for FakeChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.writes.push(duty);
            Ok(())
        }
    }

    #[test]
    fn test_duty_is_held_until_start() {
        let mut output = HalPwmOutput::new(FakeChannel::default());
        output.set_duty_cycle(40, 1_000_000);
        assert!(!output.is_running());

        output.start();
        assert!(output.is_running());
        assert_eq!(output.into_inner().writes, [400]);
    }

    #[test]
    fn test_duty_applies_while_running() {
        let mut output = HalPwmOutput::new(FakeChannel::default());
        output.start();
        output.set_duty_cycle(25, 1_000_000);
        output.set_duty_cycle(150, 1_000_000);
        assert_eq!(output.into_inner().writes, [1000, 250, 1000]);
    }

    #[test]
    fn test_stop_parks_channel_dark() {
        let mut output = HalPwmOutput::new(FakeChannel::default());
        output.set_duty_cycle(10, 1_000_000);
        output.start();
        output.stop();
        assert!(!output.is_running());

        output.set_duty_cycle(70, 1_000_000);
        output.start();
        assert_eq!(output.into_inner().writes, [100, 1000, 700]);
    }

    #[test]
    fn test_actuator_over_hal_channel() {
        let output = HalPwmOutput::new(FakeChannel::default());
        let mut actuator = LedActuator::new(output, &ActuatorConfig::DEFAULT);
        assert!(actuator.output().is_running());

        actuator.apply(Command::SetBrightness(60));
        actuator.apply(Command::TurnOff);
        actuator.apply(Command::SetBrightness(0));
        assert!(!actuator.output().is_running());

        actuator.apply(Command::TurnOn);
        assert!(actuator.output().is_running());
    }
}
