//! A simulated nRF24L01+ used by unit tests that care about register contents,
//! ordering of pin/bus events, or delays rather than exact SPI frames.
//!
//! The SPI device, the CE pin and the delay provider all share one [`Chip`], so
//! every event lands in a single journal in the order the driver caused it.
extern crate std;
use core::cell::RefCell;
use std::{rc::Rc, vec, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    spi::{self, Operation, SpiDevice},
};

use crate::{
    radio::{commands, mnemonics, register_bytes, registers, Nrf24l01Plus},
    StatusFlags,
};

/// Something the driver did to the simulated chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// One SPI transaction: the opcode and the bytes exchanged after it
    /// (as seen on the wire).
    Spi { command: u8, data: Vec<u8> },
    /// The CE pin was driven high (`true`) or low (`false`).
    Ce(bool),
    /// A blocking delay, in nanoseconds.
    Delay(u32),
}

/// The error injected by [`Chip::fail_spi`] and [`Chip::fail_ce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimError;

impl spi::Error for SimError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl digital::Error for SimError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// The chip's state.
pub struct Chip {
    /// Register storage, in the order bytes travel on the wire (LSByte first).
    registers: [[u8; 5]; 0x20],
    /// Only the IRQ bits of the STATUS register; the rest is derived.
    irq: u8,
    tx_fifo: Vec<Vec<u8>>,
    tx_reuse: bool,
    rx_fifo: Vec<(u8, Vec<u8>)>,
    ce: bool,
    /// Every event, in order.
    pub events: Vec<Event>,
    /// Fail every SPI transaction.
    pub fail_spi: bool,
    /// Fail every CE pin write.
    pub fail_ce: bool,
    /// Every transmission ends with MAX_RT.
    pub tx_fails: bool,
}

impl Default for Chip {
    /// A freshly powered chip.
    fn default() -> Self {
        let mut registers = [[0u8; 5]; 0x20];
        registers[registers::CONFIG as usize][0] = 0x08;
        registers[registers::EN_AA as usize][0] = 0x3F;
        registers[registers::EN_RXADDR as usize][0] = 0x03;
        registers[registers::SETUP_AW as usize][0] = 0x03;
        registers[registers::SETUP_RETR as usize][0] = 0x03;
        registers[registers::RF_CH as usize][0] = 0x02;
        registers[registers::RF_SETUP as usize][0] = 0x0E;
        registers[registers::RX_ADDR_P0 as usize] = [0xE7; 5];
        registers[registers::RX_ADDR_P1 as usize] = [0xC2; 5];
        registers[registers::RX_ADDR_P2 as usize][0] = 0xC3;
        registers[registers::RX_ADDR_P3 as usize][0] = 0xC4;
        registers[registers::RX_ADDR_P4 as usize][0] = 0xC5;
        registers[registers::RX_ADDR_P5 as usize][0] = 0xC6;
        registers[registers::TX_ADDR as usize] = [0xE7; 5];
        Self {
            registers,
            irq: 0,
            tx_fifo: Vec::new(),
            tx_reuse: false,
            rx_fifo: Vec::new(),
            ce: false,
            events: Vec::new(),
            fail_spi: false,
            fail_ce: false,
            tx_fails: false,
        }
    }
}

impl Chip {
    fn status(&self) -> u8 {
        let rx_pipe = self.rx_fifo.first().map(|(pipe, _)| *pipe).unwrap_or(7);
        self.irq | (rx_pipe << 1) | (self.tx_fifo.len() >= 3) as u8
    }

    fn fifo_status(&self) -> u8 {
        ((self.tx_reuse as u8) << 6)
            | (((self.tx_fifo.len() >= 3) as u8) << 5)
            | ((self.tx_fifo.is_empty() as u8) << 4)
            | (((self.rx_fifo.len() >= 3) as u8) << 1)
            | self.rx_fifo.is_empty() as u8
    }

    /// The stored bytes of a register (wire order).
    pub fn register(&self, address: u8) -> Vec<u8> {
        let len = register_bytes(address) as usize;
        match address {
            registers::STATUS => vec![self.status()],
            registers::FIFO_STATUS => vec![self.fifo_status()],
            _ => self.registers[address as usize][..len].to_vec(),
        }
    }

    /// The stored value of a 1 byte register.
    pub fn register_byte(&self, address: u8) -> u8 {
        self.register(address)[0]
    }

    /// Overwrite a 1 byte register as if it had a different reset value.
    pub fn set_register_byte(&mut self, address: u8, value: u8) {
        self.registers[address as usize][0] = value;
    }

    /// Queue a received payload on `pipe`, asserting RX_DR.
    pub fn receive(&mut self, pipe: u8, payload: &[u8]) {
        if self.rx_fifo.len() < 3 {
            self.rx_fifo.push((pipe, payload.to_vec()));
        }
        self.irq |= mnemonics::RX_DR;
    }

    /// The payloads waiting in the TX FIFO.
    pub fn tx_pending(&self) -> &[Vec<u8>] {
        &self.tx_fifo
    }

    /// Is the CE pin currently high?
    pub fn ce(&self) -> bool {
        self.ce
    }

    fn write_register(&mut self, address: u8, data: &[u8]) {
        match address {
            registers::STATUS => self.irq &= !(data[0] & StatusFlags::IRQ_MASK),
            registers::OBSERVE_TX | registers::RPD | registers::FIFO_STATUS => (),
            _ => {
                let len = data.len().min(register_bytes(address) as usize);
                self.registers[address as usize][..len].copy_from_slice(&data[..len]);
            }
        }
    }

    fn execute(&mut self, command: u8, read: Option<&mut [u8]>, written: &[u8]) {
        match command {
            commands::NOP => (),
            commands::FLUSH_TX => {
                self.tx_fifo.clear();
                self.tx_reuse = false;
            }
            commands::FLUSH_RX => self.rx_fifo.clear(),
            commands::REUSE_TX_PL => self.tx_reuse = true,
            commands::R_RX_PL_WID => {
                if let Some(buf) = read {
                    buf[0] = self.rx_fifo.first().map(|(_, p)| p.len() as u8).unwrap_or(0);
                }
            }
            commands::R_RX_PAYLOAD => {
                if let Some(buf) = read {
                    if !self.rx_fifo.is_empty() {
                        let (_, payload) = self.rx_fifo.remove(0);
                        for (dest, src) in buf.iter_mut().zip(payload.iter()) {
                            *dest = *src;
                        }
                    }
                }
            }
            commands::W_TX_PAYLOAD | commands::W_TX_PAYLOAD_NO_ACK => {
                self.tx_reuse = false;
                if self.tx_fifo.len() < 3 {
                    self.tx_fifo.push(written.to_vec());
                }
            }
            _ if command & 0xE0 == commands::R_REGISTER => {
                if let Some(buf) = read {
                    let value = self.register(command & 0x1F);
                    let len = buf.len().min(value.len());
                    buf[..len].copy_from_slice(&value[..len]);
                }
            }
            _ if command & 0xE0 == commands::W_REGISTER => {
                if !written.is_empty() {
                    self.write_register(command & 0x1F, written);
                }
            }
            // ACK payloads are accepted and dropped
            _ => (),
        }
    }

    /// The radio leaves standby-I for TX mode when CE rises.
    fn on_ce_rising(&mut self) {
        let config = self.registers[registers::CONFIG as usize][0];
        if config & mnemonics::PWR_UP == 0 || config & mnemonics::PRIM_RX != 0 {
            return;
        }
        if self.tx_fifo.is_empty() {
            return;
        }
        if self.tx_fails {
            self.irq |= mnemonics::MAX_RT;
            return;
        }
        if !self.tx_reuse {
            self.tx_fifo.remove(0);
        }
        self.irq |= mnemonics::TX_DS;
    }
}

/// A handle to a simulated chip.
#[derive(Clone, Default)]
pub struct Sim(pub Rc<RefCell<Chip>>);

/// The [`SpiDevice`] side of a [`Sim`].
pub struct SimSpi(Rc<RefCell<Chip>>);

/// The CE pin of a [`Sim`].
pub struct SimPin(Rc<RefCell<Chip>>);

/// The delay provider of a [`Sim`]; it only records the delays.
pub struct SimDelay(Rc<RefCell<Chip>>);

pub type SimRadio = Nrf24l01Plus<SimSpi, SimPin, SimDelay>;

impl Sim {
    /// Create a driver wired to this simulated chip.
    pub fn radio(&self) -> SimRadio {
        Nrf24l01Plus::new(
            SimPin(self.0.clone()),
            SimSpi(self.0.clone()),
            SimDelay(self.0.clone()),
        )
    }

    pub fn chip(&self) -> core::cell::Ref<'_, Chip> {
        self.0.borrow()
    }

    pub fn chip_mut(&self) -> core::cell::RefMut<'_, Chip> {
        self.0.borrow_mut()
    }

    /// Take all recorded events, leaving the journal empty.
    pub fn take_events(&self) -> Vec<Event> {
        core::mem::take(&mut self.0.borrow_mut().events)
    }
}

impl spi::ErrorType for SimSpi {
    type Error = SimError;
}

impl SpiDevice for SimSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), SimError> {
        let mut chip = self.0.borrow_mut();
        if chip.fail_spi {
            return Err(SimError);
        }
        let (first, rest) = match operations.split_first_mut() {
            Some((Operation::TransferInPlace(buf), rest)) if buf.len() == 1 => (buf, rest),
            // the driver always starts with a 1 byte opcode exchange
            _ => return Err(SimError),
        };
        let command = first[0];
        first[0] = chip.status();
        let mut data = Vec::new();
        match rest {
            [] => chip.execute(command, None, &[]),
            [Operation::Read(buf)] => {
                chip.execute(command, Some(&mut **buf), &[]);
                data.extend_from_slice(&**buf);
            }
            [Operation::Write(buf)] => {
                chip.execute(command, None, *buf);
                data.extend_from_slice(*buf);
            }
            _ => return Err(SimError),
        }
        chip.events.push(Event::Spi { command, data });
        Ok(())
    }
}

impl digital::ErrorType for SimPin {
    type Error = SimError;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), SimError> {
        let mut chip = self.0.borrow_mut();
        if chip.fail_ce {
            return Err(SimError);
        }
        chip.ce = false;
        chip.events.push(Event::Ce(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), SimError> {
        let mut chip = self.0.borrow_mut();
        if chip.fail_ce {
            return Err(SimError);
        }
        let rising = !chip.ce;
        chip.ce = true;
        chip.events.push(Event::Ce(true));
        if rising {
            chip.on_ce_rising();
        }
        Ok(())
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ns));
    }
}

#[cfg(test)]
mod test {
    extern crate std;
    use super::{Event, Sim};
    use crate::radio::{commands, registers};
    use std::vec;

    #[test]
    fn reset_values() {
        let sim = Sim::default();
        let chip = sim.chip();
        assert_eq!(chip.register_byte(registers::CONFIG), 0x08);
        assert_eq!(chip.register_byte(registers::STATUS), 0x0E);
        assert_eq!(chip.register_byte(registers::FIFO_STATUS), 0x11);
        assert_eq!(chip.register(registers::RX_ADDR_P1), [0xC2; 5]);
        assert_eq!(chip.register(registers::RX_ADDR_P3), [0xC4]);
    }

    #[test]
    fn journal() {
        let sim = Sim::default();
        let mut radio = sim.radio();
        radio.write_register_byte(registers::RF_CH, 76).unwrap();
        assert_eq!(
            sim.take_events(),
            [Event::Spi {
                command: registers::RF_CH | commands::W_REGISTER,
                data: vec![76]
            }]
        );
        assert!(sim.take_events().is_empty());
        assert_eq!(sim.chip().register_byte(registers::RF_CH), 76);
    }
}
