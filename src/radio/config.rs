use crate::{
    radio::nrf24::bit_fields::{Config, SetupRetry},
    Address, StatusFlags,
};

/// A struct to contain configuration about pipe addresses.
#[derive(Debug, Clone, Copy)]
struct PipeAddresses {
    tx_address: Address,
    pipe0: Address,
    pipe1: Address,
    /// The last byte of pipes 2 - 5.
    pipe_ends: [u8; 4],
}

impl Default for PipeAddresses {
    fn default() -> Self {
        Self {
            tx_address: Address::new([0xE7; 5]),
            pipe0: Address::new([0xE7; 5]),
            pipe1: Address::new([0xC2; 5]),
            pipe_ends: [0xC3, 0xC4, 0xC5, 0xC6],
        }
    }
}

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01plus::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Apply it with [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config).
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) auto_retries: SetupRetry,
    channel: u8,
    payload_width: u8,
    auto_ack: u8,
    rx_pipes: u8,
    dynamic_payloads: u8,
    features: u8,
    pipes: PipeAddresses,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with the radio's power-on values.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `2` |
    /// | [`RadioConfig::crc_enabled()`] | `true` |
    /// | [`RadioConfig::crc_2bytes()`] | `false` |
    /// | [`RadioConfig::irq_mask()`] | no events masked |
    /// | [`RadioConfig::auto_retry_delay()`] | `0` |
    /// | [`RadioConfig::auto_retry_count()`] | `3` |
    /// | [`RadioConfig::payload_width()`] | `0` |
    /// | [`RadioConfig::auto_ack()`] | `0x3F` (enabled for pipes 0 - 5) |
    /// | [`RadioConfig::rx_pipes()`] | `0x03` (pipes 0 and 1 open) |
    /// | [`RadioConfig::dynamic_payloads()`] | `0` |
    /// | [`RadioConfig::features()`] | `0` |
    /// | [`RadioConfig::tx_address()`] | `[0xE7; 5]` |
    /// | [`RadioConfig::rx_address()`] | See below table |
    ///
    /// | pipe number | address |
    /// |-------------|---------|
    /// | 0 | `[0xE7; 5]` |
    /// | 1 | `[0xC2; 5]` |
    /// | 2 - 5 | `0xC3` - `0xC6` (with the first 4 bytes of pipe 1) |
    fn default() -> Self {
        Self {
            // CRC enabled (1 byte), powered down, no IRQ event masked
            config_reg: Config::default(),
            // 250 us between attempts, 3 attempts
            auto_retries: SetupRetry::default(),
            channel: 2,
            payload_width: 0,
            auto_ack: 0x3F,
            rx_pipes: 0x03,
            dynamic_payloads: 0,
            features: 0,
            pipes: PipeAddresses::default(),
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is masked to 7 bits.
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value & 0x7F,
            ..self
        }
    }

    /// Is CRC enabled? Set via [`RadioConfig::with_crc()`].
    pub const fn crc_enabled(&self) -> bool {
        self.config_reg.en_crc()
    }

    /// Is the CRC 2 bytes long? Set via [`RadioConfig::with_crc()`].
    pub const fn crc_2bytes(&self) -> bool {
        self.config_reg.crco()
    }

    /// Enable or disable the CRC and choose its length.
    ///
    /// The radio forces CRC on while auto-ack is enabled on any pipe.
    pub fn with_crc(self, enable: bool, two_bytes: bool) -> Self {
        let new_config = self.config_reg.with_en_crc(enable).with_crco(two_bytes);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// The events hidden from the radio's IRQ pin (set via [`RadioConfig::with_irq_mask()`]).
    pub const fn irq_mask(&self) -> StatusFlags {
        StatusFlags::new()
            .with_rx_dr(self.config_reg.mask_rx_dr())
            .with_tx_ds(self.config_reg.mask_tx_ds())
            .with_max_rt(self.config_reg.mask_max_rt())
    }

    /// Hide the asserted events of `mask` from the radio's IRQ pin.
    pub fn with_irq_mask(self, mask: StatusFlags) -> Self {
        let new_config = self
            .config_reg
            .with_mask_rx_dr(mask.rx_dr())
            .with_mask_tx_ds(mask.tx_ds())
            .with_mask_max_rt(mask.max_rt());
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// The auto-retry feature's `delay` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// See [`EsbAutoAck::auto_retransmit()`](fn@crate::radio::prelude::EsbAutoAck::auto_retransmit).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: SetupRetry::pack(delay, count),
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_payload_width()`].
    pub const fn payload_width(&self) -> u8 {
        self.payload_width
    }

    /// The static payload width used for all pipes (masked to 6 bits).
    ///
    /// A width of 0 leaves a pipe unusable with static payloads.
    pub fn with_payload_width(self, width: u8) -> Self {
        Self {
            payload_width: width & 0x3F,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// Enable or disable auto-ACK feature.
    ///
    /// The given value (in binary form) is used to control the auto-ack feature for each pipe.
    /// Bit 0 controls the feature for pipe 0. Bit 1 controls the feature for pipe 1. And so on.
    pub fn with_auto_ack(self, enable: u8) -> Self {
        Self {
            auto_ack: enable & 0x3F,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_rx_pipes()`].
    pub const fn rx_pipes(&self) -> u8 {
        self.rx_pipes
    }

    /// Open RX pipes, one bit per pipe (like [`RadioConfig::with_auto_ack()`]).
    pub fn with_rx_pipes(self, enable: u8) -> Self {
        Self {
            rx_pipes: enable & 0x3F,
            ..self
        }
    }

    /// Is a specified RX pipe open (`true`) or closed (`false`)?
    pub const fn is_rx_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && self.rx_pipes & (1u8 << pipe) > 0
    }

    /// Return the value set by [`RadioConfig::with_dynamic_payloads()`].
    pub const fn dynamic_payloads(&self) -> u8 {
        self.dynamic_payloads
    }

    /// Enable dynamically sized payloads, one bit per pipe.
    ///
    /// This also requires the `EN_DPL` flag in [`RadioConfig::with_features()`].
    pub fn with_dynamic_payloads(self, enable: u8) -> Self {
        Self {
            dynamic_payloads: enable & 0x3F,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_features()`].
    pub const fn features(&self) -> u8 {
        self.features
    }

    /// The FEATURE register.
    ///
    /// See `EN_DPL`, `EN_ACK_PAY` and `EN_DYN_ACK` in
    /// [`mnemonics`](mod@crate::radio::mnemonics).
    pub fn with_features(self, features: u8) -> Self {
        Self {
            features: features & 0x07,
            ..self
        }
    }

    /// Get the address set by [`RadioConfig::with_tx_address()`]
    pub const fn tx_address(&self) -> Address {
        self.pipes.tx_address
    }

    /// Set the TX address.
    ///
    /// To receive auto-acknowledgements, pipe 0 should use the same address.
    pub fn with_tx_address(self, address: &Address) -> Self {
        let mut pipes = self.pipes;
        pipes.tx_address = *address;
        Self { pipes, ..self }
    }

    /// Get the address of a specified `pipe` (set by [`RadioConfig::with_rx_address()`]).
    ///
    /// For pipes 2 - 5, the first 4 bytes come from pipe 1.
    /// Returns a zeroed address if `pipe` is not in range [0, 5].
    pub const fn rx_address(&self, pipe: u8) -> Address {
        match pipe {
            0 => self.pipes.pipe0,
            1 => self.pipes.pipe1,
            2..=5 => {
                Address::with_last_byte(&self.pipes.pipe1, self.pipes.pipe_ends[pipe as usize - 2])
            }
            _ => Address::new([0; 5]),
        }
    }

    /// Set the address of a specified RX `pipe`.
    ///
    /// This does nothing if the given `pipe` is greater than `5`.
    /// For pipes 2 - 5, only the last byte of `address` is kept.
    /// This does not open the pipe (see [`RadioConfig::with_rx_pipes()`]).
    pub fn with_rx_address(self, pipe: u8, address: &Address) -> Self {
        let mut pipes = self.pipes;
        match pipe {
            0 => pipes.pipe0 = *address,
            1 => pipes.pipe1 = *address,
            2..=5 => pipes.pipe_ends[pipe as usize - 2] = address.last_byte(),
            _ => (),
        }
        Self { pipes, ..self }
    }
}
