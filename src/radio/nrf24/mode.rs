use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbMode, Nrf24Error, Nrf24l01Plus},
    Mode,
};

use super::{bit_fields::Config, registers};

/// Microseconds to settle after toggling CE around a mode change (Tstby2a).
const MODE_SETTLE_US: u32 = 130;

/// Microseconds that CE is held high to transmit a payload (Thce).
const CE_PULSE_US: u32 = 10;

impl<SPI, DO, DELAY> EsbMode for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ModeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_mode(&self) -> Mode {
        self._mode
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::ModeErrorType> {
        if mode == self._mode {
            return Ok(());
        }
        if self._mode.is_active() {
            self.set_ce(false)?;
            self._delay_impl.delay_us(MODE_SETTLE_US);
        }
        if mode.is_active() {
            let config = Config::from_bits(self.read_register_byte(registers::CONFIG)?)
                .with_prim_rx(mode == Mode::PrimaryReceive);
            self.write_register_byte(registers::CONFIG, config.into_bits())?;
        }
        if mode == Mode::PrimaryReceive {
            self.set_ce(true)?;
            self._delay_impl.delay_us(MODE_SETTLE_US);
        }
        self._mode = mode;
        Ok(())
    }

    fn tx_send_payload(&mut self) -> Result<(), Self::ModeErrorType> {
        self.set_ce(true)?;
        self._delay_impl.delay_us(CE_PULSE_US);
        self.set_ce(false)
    }
}
