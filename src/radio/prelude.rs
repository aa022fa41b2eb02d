//! This module defines the traits that group the radio's operations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01plus::radio::prelude::*;
//! ```

use crate::{Address, FifoStatus, Mode, StatusFlags};

use super::RadioConfig;

/// A trait to represent access to the STATUS byte.
pub trait EsbStatus {
    type StatusErrorType;

    /// Send a No Operation command.
    ///
    /// This is only useful to refresh the cached STATUS byte
    /// (which is also saved from every SPI transaction).
    fn no_operation(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Get the [`StatusFlags`] that were cached from the latest SPI transaction.
    fn last_status(&self) -> StatusFlags;

    /// Get the raw STATUS byte that was cached from the latest SPI transaction.
    fn last_status_byte(&self) -> u8 {
        self.last_status().into_bits()
    }

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any of `rx_dr`, `tx_ds` or `max_rt` to `true` to clear the corresponding
    /// event. Flags set to `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent the radio's operating mode.
pub trait EsbMode {
    type ModeErrorType;

    /// Get the mode recorded by the last successful call to [`EsbMode::set_mode()`].
    fn get_mode(&self) -> Mode;

    /// Change the radio's operating mode.
    ///
    /// Nothing happens if `mode` is the current mode.
    /// Leaving an active mode deactivates CE and waits 130 microseconds before any
    /// register is touched. The PRIM_RX bit of the CONFIG register is then updated
    /// (cleared for [`Mode::PrimaryTransmit`], set for [`Mode::PrimaryReceive`],
    /// left as is for [`Mode::None`]). Entering [`Mode::PrimaryReceive`] activates CE
    /// and waits another 130 microseconds.
    ///
    /// The new mode is only recorded once all of this succeeded.
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::ModeErrorType>;

    /// Transmit the first payload in the TX FIFO.
    ///
    /// Pulses the CE pin high for 10 microseconds.
    fn tx_send_payload(&mut self) -> Result<(), Self::ModeErrorType>;
}

/// A trait to represent power management.
pub trait EsbPower {
    type PowerErrorType;

    /// Set or clear the PWR_UP bit of the CONFIG register.
    ///
    /// All other CONFIG bits are preserved.
    fn power(&mut self, enable: bool) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio, then wait for it to reach standby mode.
    ///
    /// The `delay` (in microseconds) defaults to 1500 (Tpd2stby) when `None`.
    /// Pass `Some(0)` to return without waiting.
    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up (according to the CONFIG register)?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency).
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's channel (an offset in MHz from 2400 MHz).
    ///
    /// Bits outside the 7 bit channel field are dropped.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs.
pub trait EsbFifo {
    type FifoErrorType;

    /// Get the FIFO_STATUS register.
    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType>;

    /// Flush the radio's RX FIFO.
    fn rx_flush(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn tx_flush(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Keep retransmitting the last transmitted payload.
    ///
    /// The payload is reused until [`EsbFifo::tx_flush()`] or a new payload is written.
    fn tx_reuse_payload(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent the exchange of payloads.
pub trait EsbPayload {
    type PayloadErrorType;

    /// Read the width of the payload at the top of the RX FIFO.
    ///
    /// Only meaningful with dynamic payload lengths enabled.
    fn rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType>;

    /// Read the first available payload into `buf` (up to 32 bytes).
    ///
    /// If the RX FIFO is empty, the radio clocks out meaningless bytes.
    /// With dynamic payload lengths, check [`EsbPayload::rx_payload_width()`] first.
    fn rx_read_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType>;

    /// Write `buf` (up to 32 bytes) into the TX FIFO, then transmit it with
    /// [`EsbMode::tx_send_payload()`].
    ///
    /// With `no_ack`, the payload asks the receiver not to acknowledge it.
    /// This needs the EN_DYN_ACK bit of the FEATURE register.
    fn tx_write_payload(&mut self, buf: &[u8], no_ack: bool)
        -> Result<(), Self::PayloadErrorType>;

    /// Write a payload (up to 32 bytes) to attach to the next ACK sent on `pipe`.
    ///
    /// This needs the EN_ACK_PAY bit of the FEATURE register.
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<(), Self::PayloadErrorType>;
}

/// A trait to represent manipulation of data pipes.
///
/// Pipes 0 and 1 store a full 5 byte address. Pipes 2 - 5 only store the last byte
/// and share the first 4 bytes with pipe 1.
pub trait EsbPipe {
    type PipeErrorType;

    /// Enable or disable a given RX `pipe`, leaving the other pipes untouched.
    ///
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn rx_enabled_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::PipeErrorType>;

    /// Enable or disable all RX pipes.
    fn rx_enabled(&mut self, enable: bool) -> Result<(), Self::PipeErrorType>;

    /// Get the full address of a given RX `pipe`.
    ///
    /// For pipes 2 - 5 the first 4 bytes are read from pipe 1.
    fn rx_get_address(&mut self, pipe: u8) -> Result<Address, Self::PipeErrorType>;

    /// Set the address of a given RX `pipe`.
    ///
    /// For pipes 2 - 5 only the last byte of `address` is written.
    /// Set the address of pipe 1 to change the other 4 bytes.
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn rx_set_address(&mut self, pipe: u8, address: &Address) -> Result<(), Self::PipeErrorType>;

    /// Get the address used to transmit.
    fn tx_get_address(&mut self) -> Result<Address, Self::PipeErrorType>;

    /// Set the address used to transmit.
    ///
    /// To receive auto-acknowledgements, pipe 0 must use the same address.
    fn tx_set_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement
/// and retransmission features.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable or disable auto-acknowledgement for a given `pipe`,
    /// leaving the other pipes untouched.
    ///
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn rx_auto_ack_pipe(&mut self, pipe: u8, enable: bool)
        -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable auto-acknowledgement for all pipes.
    fn rx_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Set the retransmission `delay` (steps of 250 microseconds, plus 250) and
    /// `count`. Both are 4 bit values; higher bits are dropped.
    ///
    /// Setting both to 0 disables auto-retransmission.
    fn auto_retransmit(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Write the FEATURE register (see `EN_DPL`, `EN_ACK_PAY` and `EN_DYN_ACK`
    /// in [`mnemonics`](mod@crate::radio::mnemonics)).
    fn set_features(&mut self, features: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Read the FEATURE register.
    fn features(&mut self) -> Result<u8, Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of payload lengths.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload width of a given `pipe`.
    ///
    /// The `width` is masked to 6 bits. Values above 32 are not rejected.
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn rx_set_payload_width_pipe(
        &mut self,
        pipe: u8,
        width: u8,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Set the static payload width of all pipes.
    fn rx_set_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the static payload width of a given `pipe`.
    fn rx_get_payload_width(&mut self, pipe: u8) -> Result<u8, Self::PayloadLengthErrorType>;

    /// Enable or disable dynamic payload length for a given `pipe`,
    /// leaving the other pipes untouched.
    ///
    /// The EN_DPL bit of the FEATURE register must also be set.
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn rx_set_dynamic_payload_length_pipe(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Enable or disable dynamic payload length for all pipes.
    fn rx_set_dynamic_payload_length(
        &mut self,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType>;
}

/// A trait to apply a complete [`RadioConfig`].
pub trait EsbInit {
    type ConfigErrorType;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for details.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to dump the radio's configuration.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about the radio's current configuration.
    ///
    /// This uses `defmt::println!` with the `defmt` feature,
    /// `std::println!` with the `std` feature, and does nothing otherwise.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
