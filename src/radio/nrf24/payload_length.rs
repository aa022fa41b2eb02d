use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPayloadLength, Nrf24Error, Nrf24l01Plus};

use super::{mnemonics, registers};

impl<SPI, DO, DELAY> EsbPayloadLength for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn rx_set_payload_width_pipe(
        &mut self,
        pipe: u8,
        width: u8,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.write_register_byte(registers::RX_PW_P0 + pipe, width & mnemonics::RX_PW_MASK)
    }

    fn rx_set_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadLengthErrorType> {
        for pipe in 0..6 {
            self.rx_set_payload_width_pipe(pipe, width)?;
        }
        Ok(())
    }

    /// Returns 0 (without any SPI traffic) if `pipe` is not in range [0, 5].
    fn rx_get_payload_width(&mut self, pipe: u8) -> Result<u8, Self::PayloadLengthErrorType> {
        if pipe > 5 {
            return Ok(0);
        }
        Ok(self.read_register_byte(registers::RX_PW_P0 + pipe)? & mnemonics::RX_PW_MASK)
    }

    fn rx_set_dynamic_payload_length_pipe(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.write_register_bits(registers::DYNPD, 1 << pipe, enable)
    }

    fn rx_set_dynamic_payload_length(
        &mut self,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        self.write_register_byte(registers::DYNPD, mnemonics::ALL_PIPES * enable as u8)
    }
}
