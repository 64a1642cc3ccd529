//! PWM output capability driven by the LED actuator.

use embedded_hal::pwm::SetDutyCycle;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Abstract PWM output
///
/// Implement this trait to support different hardware platforms.
/// Initialization of the peripheral happens when the implementor is
/// constructed, before it is handed to the actuator.
pub trait PwmOutput {
    /// Program the duty cycle in percent at the given carrier frequency
    fn set_duty_cycle(&mut self, percent: u8, frequency_hz: u32);

    /// Start driving the output
    fn start(&mut self);

    /// Stop driving the output
    fn stop(&mut self);
}

impl<T: PwmOutput + ?Sized> PwmOutput for &mut T {
    fn set_duty_cycle(&mut self, percent: u8, frequency_hz: u32) {
        (**self).set_duty_cycle(percent, frequency_hz);
    }

    fn start(&mut self) {
        (**self).start();
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// [`PwmOutput`] over an `embedded-hal` PWM channel driving an active-low LED.
///
/// `embedded-hal` has no notion of a stopped channel, so stopping parks the
/// channel at 100% duty (LED dark) and starting re-applies the last programmed
/// duty cycle. The carrier frequency is fixed by the timer setup and the
/// `frequency_hz` argument is ignored.
pub struct HalPwmOutput<P> {
    pwm: P,
    duty: u8,
    running: bool,
}

impl<P: SetDutyCycle> HalPwmOutput<P> {
    /// Wrap a configured PWM channel. The channel is left untouched until
    /// the first `start`.
    pub const fn new(pwm: P) -> Self {
        Self {
            pwm,
            duty: 100,
            running: false,
        }
    }

    /// Check if the channel is currently driven
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Release the underlying PWM channel
    pub fn into_inner(self) -> P {
        self.pwm
    }

    fn write(&mut self, percent: u8) {
        if let Err(_err) = self.pwm.set_duty_cycle_percent(percent) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[HalPwmOutput.write] failed to set duty cycle {}%: {:?}",
                percent, _err
            );
        }
    }
}

impl<P: SetDutyCycle> PwmOutput for HalPwmOutput<P> {
    fn set_duty_cycle(&mut self, percent: u8, _frequency_hz: u32) {
        self.duty = percent.min(100);
        if self.running {
            self.write(self.duty);
        }
    }

    fn start(&mut self) {
        self.running = true;
        self.write(self.duty);
    }

    fn stop(&mut self) {
        self.running = false;
        self.write(100);
    }
}
