use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbFifo, Exchange, Nrf24Error, Nrf24l01Plus},
    FifoStatus,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbFifo for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType> {
        Ok(FifoStatus::from_bits(self.read_register_byte(registers::FIFO_STATUS)?))
    }

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn rx_flush(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_RX, Exchange::None, false)
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn tx_flush(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_TX, Exchange::None, false)
    }

    fn tx_reuse_payload(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::REUSE_TX_PL, Exchange::None, false)
    }
}
