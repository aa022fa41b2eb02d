use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbAutoAck, Nrf24Error, Nrf24l01Plus};

use super::{bit_fields::SetupRetry, mnemonics, registers};

impl<SPI, DO, DELAY> EsbAutoAck for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn rx_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.write_register_bits(registers::EN_AA, 1 << pipe, enable)
    }

    fn rx_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register_byte(registers::EN_AA, mnemonics::ALL_PIPES * enable as u8)
    }

    fn auto_retransmit(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        self.write_register_byte(
            registers::SETUP_RETR,
            SetupRetry::pack(delay, count).into_bits(),
        )
    }

    fn set_features(&mut self, features: u8) -> Result<(), Self::AutoAckErrorType> {
        self.write_register_byte(registers::FEATURE, features)
    }

    fn features(&mut self) -> Result<u8, Self::AutoAckErrorType> {
        self.read_register_byte(registers::FEATURE)
    }
}
