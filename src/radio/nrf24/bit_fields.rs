use bitfield_struct::bitfield;

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Hide the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Hide the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Hide the "Max Retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    /// CRC is forced high if auto-ack is enabled on any pipe.
    #[bits(1, default = true)]
    pub en_crc: bool,

    /// 2 byte CRC when set, 1 byte otherwise.
    pub crco: bool,

    pub pwr_up: bool,

    pub prim_rx: bool,
}

/// The SETUP_RETR register.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retransmit delay, in steps of 250 microseconds (plus 250).
    #[bits(4)]
    pub ard: u8,

    /// The auto-retransmit count. 0 disables auto-retransmission.
    #[bits(4, default = 3)]
    pub arc: u8,
}

impl SetupRetry {
    /// Pack a 4-bit `delay` and a 4-bit `count`; higher bits are dropped.
    pub const fn pack(delay: u8, count: u8) -> Self {
        Self::new().with_ard(delay & 0xF).with_arc(count & 0xF)
    }
}
