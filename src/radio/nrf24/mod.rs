use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod details;
mod fifo;
mod init;
mod mode;
mod payload;
mod payload_length;
mod pipe;
mod power;
mod status;
pub use constants::{commands, mnemonics, registers};
use crate::{Mode, StatusFlags};

/// The longest payload any command exchanges after its opcode.
const MAX_EXCHANGE: usize = 32;

/// An collection of error types to describe hardware malfunctions.
///
/// Errors from the SPI device and the CE pin are passed through unmodified.
/// Radio events (like reaching the maximum number of retransmissions) are not errors;
/// they are reported via [`StatusFlags`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
}

/// The bytes exchanged after the opcode of a single SPI command.
pub enum Exchange<'a> {
    /// An opcode-only command.
    None,
    /// Clock `buf.len()` bytes (32 at most) out of the radio into `buf`.
    Read(&'a mut [u8]),
    /// Clock the given bytes (32 at most) into the radio.
    Write(&'a [u8]),
}

/// Get the size (in bytes) of the register at the given `address`.
///
/// Returns 5 for the [`registers::TX_ADDR`], [`registers::RX_ADDR_P0`] and
/// [`registers::RX_ADDR_P1`] registers, 1 for any other register.
pub const fn register_bytes(address: u8) -> u8 {
    match address {
        registers::RX_ADDR_P0 | registers::RX_ADDR_P1 | registers::TX_ADDR => 5,
        _ => 1,
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01+ transceiver.
///
/// Additionally, the command framing primitives are exposed as inherent functions
/// for direct register access.
pub struct Nrf24l01Plus<SPI, DO, DELAY> {
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to change modes using
    /// [`EsbMode::set_mode()`](fn@crate::radio::prelude::EsbMode::set_mode)
    /// because the driver tracks the CE state through the current [`Mode`].
    pub ce_pin: DO,
    _spi: SPI,
    _delay_impl: DELAY,
    _buf: [u8; MAX_EXCHANGE],
    _status: StatusFlags,
    _mode: Mode,
}

impl<SPI, DO, DELAY> Nrf24l01Plus<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24l01Plus`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// No SPI traffic occurs here; the recorded mode starts as [`Mode::None`].
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24l01Plus<SPI, DO, DELAY> {
        Nrf24l01Plus {
            ce_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _buf: [0u8; MAX_EXCHANGE],
            _status: StatusFlags::from_bits(0),
            _mode: Mode::None,
        }
    }

    /// Release the SPI device, the CE pin and the delay provider.
    pub fn release(self) -> (SPI, DO, DELAY) {
        (self._spi, self.ce_pin, self._delay_impl)
    }

    /// Send a SPI command to the radio.
    ///
    /// The whole command is a single [`SpiDevice::transaction()`], so the CSN pin is
    /// held active for the opcode and the payload, then released (also on error).
    /// The byte clocked out with the `command` opcode is the STATUS register; it is
    /// cached and available via
    /// [`EsbStatus::last_status()`](fn@crate::radio::prelude::EsbStatus::last_status).
    ///
    /// With `lsbyte_first` the payload is exchanged in reverse order, which is how
    /// the radio expects multi-byte address fields.
    ///
    /// At most 32 bytes follow the opcode; the rest of a longer `exchange` is ignored
    /// (a read leaves the tail of its buffer untouched).
    pub fn send_command(
        &mut self,
        command: u8,
        exchange: Exchange<'_>,
        lsbyte_first: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let mut status = [command];
        match exchange {
            Exchange::Read(buf) if !buf.is_empty() => {
                let len = buf.len().min(MAX_EXCHANGE);
                let buf = &mut buf[..len];
                self._spi
                    .transaction(&mut [
                        Operation::TransferInPlace(&mut status),
                        Operation::Read(&mut *buf),
                    ])
                    .map_err(Nrf24Error::Spi)?;
                if lsbyte_first {
                    buf.reverse();
                }
            }
            Exchange::Write(buf) if !buf.is_empty() && lsbyte_first => {
                // reverse into the scratch buffer to leave the caller's data untouched
                let len = buf.len().min(MAX_EXCHANGE);
                for (dest, src) in self._buf[..len].iter_mut().zip(buf[..len].iter().rev()) {
                    *dest = *src;
                }
                self._spi
                    .transaction(&mut [
                        Operation::TransferInPlace(&mut status),
                        Operation::Write(&self._buf[..len]),
                    ])
                    .map_err(Nrf24Error::Spi)?;
            }
            Exchange::Write(buf) if !buf.is_empty() => {
                self._spi
                    .transaction(&mut [
                        Operation::TransferInPlace(&mut status),
                        Operation::Write(&buf[..buf.len().min(MAX_EXCHANGE)]),
                    ])
                    .map_err(Nrf24Error::Spi)?;
            }
            _ => {
                self._spi
                    .transaction(&mut [Operation::TransferInPlace(&mut status)])
                    .map_err(Nrf24Error::Spi)?;
            }
        }
        self._status = StatusFlags::from_bits(status[0]);
        Ok(())
    }

    /// Read the register at `address` into `buf`.
    ///
    /// Only [`register_bytes()`] bytes are read (fewer if `buf` is shorter).
    pub fn read_register(
        &mut self,
        address: u8,
        buf: &mut [u8],
        lsbyte_first: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(register_bytes(address) as usize);
        self.send_command(
            commands::R_REGISTER | address,
            Exchange::Read(&mut buf[..len]),
            lsbyte_first,
        )
    }

    /// Read the register at `address` into a new array of `N` bytes.
    ///
    /// ```ignore
    /// let tx_address: [u8; 5] = radio.read_register_array(registers::TX_ADDR, true)?;
    /// ```
    pub fn read_register_array<const N: usize>(
        &mut self,
        address: u8,
        lsbyte_first: bool,
    ) -> Result<[u8; N], Nrf24Error<SPI::Error, DO::Error>> {
        let mut buf = [0u8; N];
        self.read_register(address, &mut buf, lsbyte_first)?;
        Ok(buf)
    }

    /// Read a single byte register.
    pub fn read_register_byte(
        &mut self,
        address: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        let [value] = self.read_register_array::<1>(address, false)?;
        Ok(value)
    }

    /// Write `buf` into the register at `address`.
    ///
    /// Only [`register_bytes()`] bytes are written (fewer if `buf` is shorter).
    pub fn write_register(
        &mut self,
        address: u8,
        buf: &[u8],
        lsbyte_first: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(register_bytes(address) as usize);
        self.send_command(
            commands::W_REGISTER | address,
            Exchange::Write(&buf[..len]),
            lsbyte_first,
        )
    }

    /// Write an array of `N` bytes into the register at `address`.
    pub fn write_register_array<const N: usize>(
        &mut self,
        address: u8,
        buf: &[u8; N],
        lsbyte_first: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(address, buf, lsbyte_first)
    }

    /// Write a single byte register.
    pub fn write_register_byte(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(address, &[value], false)
    }

    /// Read-modify-write the bits of a 1 byte register selected by `mask`.
    fn write_register_bits(
        &mut self,
        address: u8,
        mask: u8,
        value: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let reg_val = self.read_register_byte(address)?;
        self.write_register_byte(address, reg_val & !mask | (mask * value as u8))
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if high {
            self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
        } else {
            self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
        }
    }
}
