//! The 5-byte pipe address value type.

use core::{
    array::TryFromSliceError,
    fmt::{Display, Formatter, Result},
    write,
};

/// An nRF24L01+ pipe address.
///
/// Always exactly 5 bytes, stored in the order they are written by the caller.
/// The 5th byte is the one that distinguishes pipes 2 - 5 from pipe 1: those pipes
/// only store a single byte and borrow the other 4 bytes from pipe 1's address.
///
/// ```
/// use nrf24l01plus::Address;
///
/// let pipe1 = Address::new([0xC2; 5]);
/// let pipe3 = Address::with_last_byte(&pipe1, 0xC4);
/// assert_eq!(pipe3.as_bytes(), &[0xC2, 0xC2, 0xC2, 0xC2, 0xC4]);
/// assert!(pipe3 == 0xC4u8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address([u8; Address::LEN]);

impl Address {
    /// The number of bytes in an address.
    pub const LEN: usize = 5;

    /// Construct an address from its 5 bytes.
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Construct an address using the first 4 bytes of `base` and `end` as the 5th byte.
    pub const fn with_last_byte(base: &Address, end: u8) -> Self {
        let mut bytes = base.0;
        bytes[Self::LEN - 1] = end;
        Self(bytes)
    }

    /// All 5 bytes of this address.
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// The 5th byte of this address.
    pub const fn last_byte(&self) -> u8 {
        self.0[Self::LEN - 1]
    }
}

impl From<[u8; Address::LEN]> for Address {
    fn from(bytes: [u8; Address::LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; Address::LEN] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = TryFromSliceError;

    /// Fails unless `bytes` is exactly 5 bytes long.
    fn try_from(bytes: &[u8]) -> core::result::Result<Self, Self::Error> {
        Ok(Self(<[u8; Address::LEN]>::try_from(bytes)?))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compares only the 5th byte of the address.
impl PartialEq<u8> for Address {
    fn eq(&self, other: &u8) -> bool {
        self.last_byte() == *other
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let [b0, b1, b2, b3, b4] = self.0;
        write!(f, "{b0:02X} {b1:02X} {b2:02X} {b3:02X} {b4:02X}")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:02X}", self.0.as_slice())
    }
}
