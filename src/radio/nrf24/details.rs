use super::{Nrf24Error, Nrf24l01Plus};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "defmt", feature = "std"))]
use super::{bit_fields::Config, bit_fields::SetupRetry, mnemonics, registers};
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::prelude::{
    EsbChannel, EsbFifo, EsbMode, EsbPayloadLength, EsbPipe, EsbStatus,
};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(all(feature = "defmt", not(feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        let retry = SetupRetry::from_bits(self.read_register_byte(registers::SETUP_RETR)?);
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            retry.ard() as u16 * 250 + 250
        );
        defmt::println!("Auto retry attempts_______{=u8} maximum", retry.arc());

        let observer = self.read_register_byte(registers::OBSERVE_TX)?;
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            (observer & mnemonics::PLOS_CNT) >> 4
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            observer & mnemonics::ARC_CNT
        );

        let config = Config::from_bits(self.read_register_byte(registers::CONFIG)?);
        defmt::println!("CRC enabled_______________{=bool}", config.en_crc());
        defmt::println!(
            "CRC length________________{=u8} bytes",
            1 + config.crco() as u8
        );
        defmt::println!("IRQ on Data Ready_________{=bool}", !config.mask_rx_dr());
        defmt::println!("IRQ on Data Sent__________{=bool}", !config.mask_tx_ds());
        defmt::println!("IRQ on Max Retries________{=bool}", !config.mask_max_rt());
        defmt::println!("Powered Up________________{=bool}", config.pwr_up());
        defmt::println!("Mode______________________{}", self.get_mode());
        defmt::println!("Status____________________{}", self.last_status());
        defmt::println!("FIFO______________________{}", self.fifo_status()?);

        let features = self.read_register_byte(registers::FEATURE)?;
        defmt::println!(
            "Dynamic payloads allowed__{=bool}",
            features & mnemonics::EN_DPL > 0
        );
        defmt::println!(
            "ACK payloads allowed______{=bool}",
            features & mnemonics::EN_ACK_PAY > 0
        );
        defmt::println!(
            "Ask no ACK allowed________{=bool}",
            features & mnemonics::EN_DYN_ACK > 0
        );
        defmt::println!(
            "Dynamic Payloads__________0b{=0..8}",
            self.read_register_byte(registers::DYNPD)?
        );
        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_register_byte(registers::EN_AA)?
        );

        defmt::println!("TX address________________{}", self.tx_get_address()?);
        let open_pipes = self.read_register_byte(registers::EN_RXADDR)?;
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in 0..=5 {
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {} width {=u8}",
                pipe,
                if (open_pipes & (1u8 << pipe)) > 0 {
                    opened
                } else {
                    closed
                },
                self.rx_get_address(pipe)?,
                self.rx_get_payload_width(pipe)?,
            );
        }
        Ok(())
    }

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        let retry = SetupRetry::from_bits(self.read_register_byte(registers::SETUP_RETR)?);
        std::println!(
            "Auto retry delay__________{} microseconds",
            retry.ard() as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{} maximum", retry.arc());

        let observer = self.read_register_byte(registers::OBSERVE_TX)?;
        std::println!(
            "Packets lost\n    on current channel____{}",
            (observer & mnemonics::PLOS_CNT) >> 4
        );
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            observer & mnemonics::ARC_CNT
        );

        let config = Config::from_bits(self.read_register_byte(registers::CONFIG)?);
        std::println!("CRC enabled_______________{}", config.en_crc());
        std::println!("CRC length________________{} bytes", 1 + config.crco() as u8);
        std::println!("IRQ on Data Ready_________{}", !config.mask_rx_dr());
        std::println!("IRQ on Data Sent__________{}", !config.mask_tx_ds());
        std::println!("IRQ on Max Retries________{}", !config.mask_max_rt());
        std::println!("Powered Up________________{}", config.pwr_up());
        std::println!("Mode______________________{}", self.get_mode());
        std::println!("Status____________________{}", self.last_status());
        std::println!("FIFO______________________{}", self.fifo_status()?);

        let features = self.read_register_byte(registers::FEATURE)?;
        std::println!(
            "Dynamic payloads allowed__{}",
            features & mnemonics::EN_DPL > 0
        );
        std::println!(
            "ACK payloads allowed______{}",
            features & mnemonics::EN_ACK_PAY > 0
        );
        std::println!(
            "Ask no ACK allowed________{}",
            features & mnemonics::EN_DYN_ACK > 0
        );
        std::println!(
            "Dynamic Payloads__________{:#010b}",
            self.read_register_byte(registers::DYNPD)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_register_byte(registers::EN_AA)?
        );

        std::println!("TX address________________{}", self.tx_get_address()?);
        let open_pipes = self.read_register_byte(registers::EN_RXADDR)?;
        for pipe in 0..=5 {
            std::println!(
                "Pipe {pipe} ({}) bound to {} width {}",
                if (open_pipes & (1u8 << pipe)) > 0 {
                    " open "
                } else {
                    "closed"
                },
                self.rx_get_address(pipe)?,
                self.rx_get_payload_width(pipe)?,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::EsbDetails;

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    #[test]
    fn print_nothing() {
        use crate::test::mk_radio;

        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.print_details().is_ok());
        spi.done();
        ce_pin.done();
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_everything() {
        use crate::sim::Sim;

        let sim = Sim::default();
        let mut radio = sim.radio();
        assert!(radio.print_details().is_ok());
        // nothing is written while dumping registers
        assert!(sim
            .take_events()
            .iter()
            .all(|event| matches!(event, crate::sim::Event::Spi { command, .. } if *command < 0x20)));
    }
}
