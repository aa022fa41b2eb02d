use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPower, Nrf24Error, Nrf24l01Plus};

use super::{bit_fields::Config, mnemonics, registers};

/// Microseconds needed to reach standby mode from power down (Tpd2stby).
const POWER_UP_DELAY_US: u32 = 1500;

impl<SPI, DO, DELAY> EsbPower for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn power(&mut self, enable: bool) -> Result<(), Self::PowerErrorType> {
        self.write_register_bits(registers::CONFIG, mnemonics::PWR_UP, enable)
    }

    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType> {
        self.power(true)?;
        let delay = delay.unwrap_or(POWER_UP_DELAY_US);
        if delay > 0 {
            self._delay_impl.delay_us(delay);
        }
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register_byte(registers::CONFIG)?);
        Ok(config.pwr_up())
    }
}
