use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{EsbMode, EsbPayload},
    Exchange, Nrf24Error, Nrf24l01Plus,
};

use super::commands;

/// The maximum size (in bytes) of a payload in either FIFO.
const MAX_PAYLOAD: usize = 32;

impl<SPI, DO, DELAY> EsbPayload for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType> {
        let mut width = [0u8];
        self.send_command(commands::R_RX_PL_WID, Exchange::Read(&mut width), false)?;
        Ok(width[0])
    }

    fn rx_read_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType> {
        let len = buf.len().min(MAX_PAYLOAD);
        self.send_command(
            commands::R_RX_PAYLOAD,
            Exchange::Read(&mut buf[..len]),
            false,
        )
    }

    fn tx_write_payload(&mut self, buf: &[u8], no_ack: bool) -> Result<(), Self::PayloadErrorType> {
        let len = buf.len().min(MAX_PAYLOAD);
        let command = if no_ack {
            commands::W_TX_PAYLOAD_NO_ACK
        } else {
            commands::W_TX_PAYLOAD
        };
        self.send_command(command, Exchange::Write(&buf[..len]), false)?;
        self.tx_send_payload()
    }

    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<(), Self::PayloadErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let len = buf.len().min(MAX_PAYLOAD);
        self.send_command(
            commands::W_ACK_PAYLOAD | pipe,
            Exchange::Write(&buf[..len]),
            false,
        )
    }
}
