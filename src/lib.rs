#![doc = include_str!("../README.md")]
//!
//! ## Command API
//!
//! - [`Nrf24l01Plus::new()`](fn@crate::radio::Nrf24l01Plus::new)
//! - [`Nrf24l01Plus::send_command()`](radio/struct.Nrf24l01Plus.html#method.send_command)
//! - [`Nrf24l01Plus::read_register()`](radio/struct.Nrf24l01Plus.html#method.read_register)
//! - [`Nrf24l01Plus::write_register()`](radio/struct.Nrf24l01Plus.html#method.write_register)
//! - [`Nrf24l01Plus::no_operation()`](radio/struct.Nrf24l01Plus.html#method.no_operation)
//! - [`register_bytes()`](fn@crate::radio::register_bytes)
//!
//! ## Mode API
//!
//! - [`Nrf24l01Plus::get_mode()`](radio/struct.Nrf24l01Plus.html#method.get_mode)
//! - [`Nrf24l01Plus::set_mode()`](radio/struct.Nrf24l01Plus.html#method.set_mode)
//! - [`Nrf24l01Plus::power()`](radio/struct.Nrf24l01Plus.html#method.power)
//! - [`Nrf24l01Plus::tx_write_payload()`](radio/struct.Nrf24l01Plus.html#method.tx_write_payload)
//! - [`Nrf24l01Plus::tx_send_payload()`](radio/struct.Nrf24l01Plus.html#method.tx_send_payload)
//! - [`Nrf24l01Plus::rx_read_payload()`](radio/struct.Nrf24l01Plus.html#method.rx_read_payload)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01Plus::with_config()`](radio/struct.Nrf24l01Plus.html#method.with_config)
//! - [`Nrf24l01Plus::auto_retransmit()`](radio/struct.Nrf24l01Plus.html#method.auto_retransmit)
//! - [`Nrf24l01Plus::set_channel()`](radio/struct.Nrf24l01Plus.html#method.set_channel)
//! - [`Nrf24l01Plus::tx_set_address()`](radio/struct.Nrf24l01Plus.html#method.tx_set_address)
//! - [`Nrf24l01Plus::rx_set_address()`](radio/struct.Nrf24l01Plus.html#method.rx_set_address)
//! - [`Nrf24l01Plus::rx_enabled()`](radio/struct.Nrf24l01Plus.html#method.rx_enabled)
//! - [`Nrf24l01Plus::rx_auto_ack()`](radio/struct.Nrf24l01Plus.html#method.rx_auto_ack)
//! - [`Nrf24l01Plus::rx_set_payload_width()`](radio/struct.Nrf24l01Plus.html#method.rx_set_payload_width)
//! - [`Nrf24l01Plus::rx_set_dynamic_payload_length()`](radio/struct.Nrf24l01Plus.html#method.rx_set_dynamic_payload_length)
//!
#![no_std]

mod address;
pub use address::Address;
mod types;
pub use types::{FifoStatus, Mode, StatusFlags};
pub mod radio;

#[cfg(test)]
pub(crate) mod sim;
