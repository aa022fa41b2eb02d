//! This module defines types used by various traits.
//! These types are typed views of values exchanged with the radio.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// The operating mode recorded by the driver.
///
/// See [`EsbMode::set_mode()`](fn@crate::radio::prelude::EsbMode::set_mode)
/// for the transitions between these modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// No mode. The radio is either powered down or in standby with CE inactive.
    #[default]
    None,
    /// Primary transmitter. CE is only asserted while transmitting a payload.
    PrimaryTransmit,
    /// Primary receiver. CE stays asserted while listening.
    ///
    /// The radio cannot receive while registers are being written.
    PrimaryReceive,
}

impl Mode {
    /// Is this an active mode (either primary transmitter or primary receiver)?
    pub const fn is_active(self) -> bool {
        !matches!(self, Mode::None)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::None => defmt::write!(fmt, "None"),
            Mode::PrimaryTransmit => defmt::write!(fmt, "PTX"),
            Mode::PrimaryReceive => defmt::write!(fmt, "PRX"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::None => write!(f, "None"),
            Mode::PrimaryTransmit => write!(f, "PTX"),
            Mode::PrimaryReceive => write!(f, "PRX"),
        }
    }
}

/// The radio's STATUS byte, as clocked out at the start of every SPI command.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24l01plus::StatusFlags;
///
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert_eq!(flags.into_bits(), 0x40);
/// ```
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// Data is ready in the RX FIFO (write 1 to clear).
    pub rx_dr: bool,

    /// A payload was transmitted (write 1 to clear).
    ///
    /// With auto-acknowledgement enabled, this is only asserted once the ACK arrived.
    pub tx_ds: bool,

    /// The maximum number of retransmissions was reached (write 1 to clear).
    ///
    /// This must be cleared before the radio will transmit again.
    pub max_rt: bool,

    /// The pipe number of the payload available at the top of the RX FIFO.
    ///
    /// `7` means the RX FIFO is empty.
    #[bits(3)]
    pub rx_pipe: u8,

    /// The TX FIFO is full.
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor with all 3 IRQ flags asserted.
    ///
    /// Pass this to
    /// [`EsbStatus::clear_status_flags()`](fn@crate::radio::prelude::EsbStatus::clear_status_flags)
    /// to clear every event.
    pub const fn all_irq() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// The pipe number of the payload at the top of the RX FIFO, if any.
    pub const fn rx_payload_pipe(&self) -> Option<u8> {
        match self.rx_pipe() {
            pipe @ 0..=5 => Some(pipe),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

/// The radio's FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct FifoStatus {
    #[bits(1)]
    _reserved_high: u8,

    /// The last TX payload is being reused (see `REUSE_TX_PL`).
    pub tx_reuse: bool,

    /// The TX FIFO is full.
    pub tx_full: bool,

    /// The TX FIFO is empty.
    pub tx_empty: bool,

    #[bits(2)]
    _reserved_low: u8,

    /// The RX FIFO is full.
    pub rx_full: bool,

    /// The RX FIFO is empty.
    pub rx_empty: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FifoStatus tx_reuse: {}, tx_full: {}, tx_empty: {}, rx_full: {}, rx_empty: {}",
            self.tx_reuse(),
            self.tx_full(),
            self.tx_empty(),
            self.rx_full(),
            self.rx_empty()
        )
    }
}

impl Display for FifoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "FifoStatus tx_reuse: {}, tx_full: {}, tx_empty: {}, rx_full: {}, rx_empty: {}",
            self.tx_reuse(),
            self.tx_full(),
            self.tx_empty(),
            self.rx_full(),
            self.rx_empty()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{FifoStatus, Mode, StatusFlags};
    extern crate std;
    use std::{format, string::String};

    #[test]
    fn display_mode() {
        assert_eq!(format!("{}", Mode::None), String::from("None"));
        assert_eq!(format!("{}", Mode::PrimaryTransmit), String::from("PTX"));
        assert_eq!(format!("{}", Mode::PrimaryReceive), String::from("PRX"));
    }

    #[test]
    fn active_modes() {
        assert!(!Mode::default().is_active());
        assert!(Mode::PrimaryTransmit.is_active());
        assert!(Mode::PrimaryReceive.is_active());
    }

    #[test]
    fn status_bits() {
        // power-on value of the STATUS register
        let flags = StatusFlags::from_bits(0x0E);
        assert!(!flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.max_rt());
        assert_eq!(flags.rx_pipe(), 7);
        assert_eq!(flags.rx_payload_pipe(), None);
        assert!(!flags.tx_full());

        let flags = StatusFlags::from_bits(0x75);
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        assert_eq!(flags.rx_payload_pipe(), Some(2));
        assert!(flags.tx_full());
    }

    #[test]
    fn status_builder() {
        let flags = StatusFlags::default().with_tx_ds(true).with_max_rt(true);
        assert_eq!(flags.into_bits(), 0x30);
        assert_eq!(StatusFlags::all_irq().into_bits(), StatusFlags::IRQ_MASK);
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::from_bits(0x0E)),
            String::from("StatusFlags rx_dr: false, tx_ds: false, max_rt: false, rx_pipe: 7, tx_full: false")
        );
    }

    #[test]
    fn fifo_bits() {
        // power-on value of the FIFO_STATUS register
        let fifo = FifoStatus::from_bits(0x11);
        assert!(fifo.tx_empty());
        assert!(fifo.rx_empty());
        assert!(!fifo.tx_full());
        assert!(!fifo.rx_full());
        assert!(!fifo.tx_reuse());

        let fifo = FifoStatus::from_bits(0x62);
        assert!(fifo.tx_reuse());
        assert!(fifo.tx_full());
        assert!(fifo.rx_full());
        assert!(!fifo.tx_empty());
        assert!(!fifo.rx_empty());
    }
}
