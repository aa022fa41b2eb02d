/// Register addresses of the nRF24L01+.
///
/// Every register is 1 byte wide except [`RX_ADDR_P0`], [`RX_ADDR_P1`] and [`TX_ADDR`],
/// which hold a 5 byte address. See [`register_bytes()`](fn@crate::radio::register_bytes).
pub mod registers {
    /// Chip configuration.
    pub const CONFIG: u8 = 0x00;
    /// Enable auto-acknowledgement per RX pipe.
    pub const EN_AA: u8 = 0x01;
    /// Enabled RX pipes.
    pub const EN_RXADDR: u8 = 0x02;
    /// Setup of address widths.
    pub const SETUP_AW: u8 = 0x03;
    /// Setup of automatic retransmission.
    pub const SETUP_RETR: u8 = 0x04;
    /// RF channel.
    pub const RF_CH: u8 = 0x05;
    /// RF setup.
    pub const RF_SETUP: u8 = 0x06;
    /// Status (also clocked out at the start of every command).
    pub const STATUS: u8 = 0x07;
    /// Transmit observe.
    pub const OBSERVE_TX: u8 = 0x08;
    /// Received power detector.
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    /// Status of the TX and RX FIFOs.
    pub const FIFO_STATUS: u8 = 0x17;
    /// Enable dynamic payload length per RX pipe.
    pub const DYNPD: u8 = 0x1C;
    /// Feature flags.
    pub const FEATURE: u8 = 0x1D;
}

/// SPI command opcodes of the nRF24L01+.
pub mod commands {
    /// OR'd with a register address.
    pub const R_REGISTER: u8 = 0x00;
    /// OR'd with a register address.
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    /// Requires `EN_DYN_ACK` in the FEATURE register.
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    /// OR'd with a pipe number. Requires `EN_ACK_PAY` in the FEATURE register.
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics for the registers' fields.
pub mod mnemonics {
    // CONFIG
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
    pub const EN_CRC: u8 = 1 << 3;
    pub const CRCO: u8 = 1 << 2;
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;

    // STATUS
    pub const RX_DR: u8 = 1 << 6;
    pub const TX_DS: u8 = 1 << 5;
    pub const MAX_RT: u8 = 1 << 4;
    pub const RX_P_NO: u8 = 0b111 << 1;
    pub const TX_FULL: u8 = 1;

    // OBSERVE_TX
    pub const PLOS_CNT: u8 = 0xF0;
    pub const ARC_CNT: u8 = 0x0F;

    // FIFO_STATUS
    pub const TX_REUSE: u8 = 1 << 6;
    pub const FIFO_TX_FULL: u8 = 1 << 5;
    pub const TX_EMPTY: u8 = 1 << 4;
    pub const RX_FULL: u8 = 1 << 1;
    pub const RX_EMPTY: u8 = 1;

    // RF_SETUP
    pub const CONT_WAVE: u8 = 1 << 7;
    pub const RF_DR_LOW: u8 = 1 << 5;
    pub const PLL_LOCK: u8 = 1 << 4;
    pub const RF_DR_HIGH: u8 = 1 << 3;
    pub const RF_PWR: u8 = 0b11 << 1;

    // FEATURE
    pub const EN_DPL: u8 = 1 << 2;
    pub const EN_ACK_PAY: u8 = 1 << 1;
    pub const EN_DYN_ACK: u8 = 1;

    /// One bit per RX pipe in EN_AA, EN_RXADDR and DYNPD.
    pub const ALL_PIPES: u8 = 0x3F;
    /// The valid bits of RF_CH.
    pub const RF_CH_MASK: u8 = 0x7F;
    /// The valid bits of RX_PW_Px.
    pub const RX_PW_MASK: u8 = 0x3F;
}
