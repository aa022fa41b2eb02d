use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, Nrf24l01Plus},
    Address,
};

use super::{mnemonics, registers};

impl<SPI, DO, DELAY> EsbPipe for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn rx_enabled_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.write_register_bits(registers::EN_RXADDR, 1 << pipe, enable)
    }

    fn rx_enabled(&mut self, enable: bool) -> Result<(), Self::PipeErrorType> {
        self.write_register_byte(registers::EN_RXADDR, mnemonics::ALL_PIPES * enable as u8)
    }

    /// Returns a zeroed address (without any SPI traffic)
    /// if `pipe` is not in range [0, 5].
    fn rx_get_address(&mut self, pipe: u8) -> Result<Address, Self::PipeErrorType> {
        match pipe {
            0 | 1 => Ok(Address::new(
                self.read_register_array(registers::RX_ADDR_P0 + pipe, true)?,
            )),
            2..=5 => {
                let base = Address::new(self.read_register_array(registers::RX_ADDR_P1, true)?);
                let end = self.read_register_byte(registers::RX_ADDR_P0 + pipe)?;
                Ok(Address::with_last_byte(&base, end))
            }
            _ => Ok(Address::default()),
        }
    }

    fn rx_set_address(&mut self, pipe: u8, address: &Address) -> Result<(), Self::PipeErrorType> {
        match pipe {
            0 | 1 => self.write_register_array(
                registers::RX_ADDR_P0 + pipe,
                address.as_bytes(),
                true,
            ),
            2..=5 => self.write_register_byte(registers::RX_ADDR_P0 + pipe, address.last_byte()),
            _ => Ok(()),
        }
    }

    fn tx_get_address(&mut self) -> Result<Address, Self::PipeErrorType> {
        Ok(Address::new(self.read_register_array(registers::TX_ADDR, true)?))
    }

    fn tx_set_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType> {
        self.write_register_array(registers::TX_ADDR, address.as_bytes(), true)
    }
}
