use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbChannel, Nrf24Error, Nrf24l01Plus};

use super::{mnemonics, registers};

impl<SPI, DO, DELAY> EsbChannel for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01+ supports 126 channels. The specified `channel` is
    /// masked to the 7 bits of the RF_CH register (values above 125 are not rejected).
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register_byte(registers::RF_CH, channel & mnemonics::RF_CH_MASK)
    }

    /// See also [`EsbChannel::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.read_register_byte(registers::RF_CH)? & mnemonics::RF_CH_MASK)
    }
}
