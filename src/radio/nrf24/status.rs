use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Exchange, Nrf24Error, Nrf24l01Plus},
    StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn no_operation(&mut self) -> Result<(), Self::StatusErrorType> {
        self.send_command(commands::NOP, Exchange::None, false)
    }

    fn last_status(&self) -> StatusFlags {
        self._status
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_register_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, EsbStatus, StatusFlags};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn what_happened() {
        let spi_expectations = spi_test_expects![
            // get the STATUS byte with all IRQ flags asserted
            (commands::NOP, 0x70u8),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // nothing cached before the first transaction
        assert_eq!(radio.last_status_byte(), 0);
        radio.no_operation().unwrap();
        let flags = radio.last_status();
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        assert_eq!(radio.last_status_byte(), 0x70);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn clear_status_flags() {
        let spi_expectations = spi_test_expects![
            // only the IRQ bits are written
            (
                registers::STATUS | commands::W_REGISTER,
                0x7Eu8,
                SpiTransaction::write_vec(vec![0x70u8]),
            ),
            (
                registers::STATUS | commands::W_REGISTER,
                0x0Eu8,
                SpiTransaction::write_vec(vec![0x20u8]),
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.clear_status_flags(StatusFlags::from_bits(0xFF)).unwrap();
        radio
            .clear_status_flags(StatusFlags::default().with_tx_ds(true))
            .unwrap();
        // the STATUS byte clocked out during the last write
        assert_eq!(radio.last_status_byte(), 0x0E);
        spi.done();
        ce_pin.done();
    }
}
