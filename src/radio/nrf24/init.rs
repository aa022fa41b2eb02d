use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Nrf24Error, Nrf24l01Plus};
use crate::{
    radio::{
        prelude::{EsbFifo, EsbInit, EsbMode, EsbPipe, EsbPower, EsbStatus},
        RadioConfig,
    },
    Mode, StatusFlags,
};

impl<SPI, DO, DELAY> EsbInit for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The radio is left powered down with [`Mode::None`];
    /// use [`EsbPower::power_up()`] before changing modes.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.set_mode(Mode::None)?;
        self.power(false)?;

        // Flush buffers
        self.rx_flush()?;
        self.tx_flush()?;
        self.clear_status_flags(StatusFlags::all_irq())?;

        self.write_register_byte(registers::SETUP_RETR, config.auto_retries.into_bits())?;
        self.write_register_byte(registers::EN_AA, config.auto_ack())?;
        self.write_register_byte(registers::EN_RXADDR, config.rx_pipes())?;
        self.write_register_byte(registers::RF_CH, config.channel())?;

        for pipe in 0..6 {
            self.rx_set_address(pipe, &config.rx_address(pipe))?;
            self.write_register_byte(registers::RX_PW_P0 + pipe, config.payload_width())?;
        }
        self.tx_set_address(&config.tx_address())?;

        self.write_register_byte(registers::DYNPD, config.dynamic_payloads())?;
        self.write_register_byte(registers::FEATURE, config.features())?;

        // CRC and IRQ settings; powered down in standby (PRIM_RX cleared)
        let config_reg = config.config_reg.with_pwr_up(false).with_prim_rx(false);
        self.write_register_byte(registers::CONFIG, config_reg.into_bits())
    }
}
