//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{
    commands, mnemonics, register_bytes, registers, Exchange, Nrf24Error, Nrf24l01Plus,
};

mod config;
pub use config::RadioConfig;
