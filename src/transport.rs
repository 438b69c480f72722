//! Wireless link abstraction
//!
//! The engine only needs a byte stream plus connection state. The radio
//! stack usually runs in its own task or interrupt, so [`LinkBuffer`]
//! provides an interrupt-safe hand-off built on `critical-section` and a
//! `heapless::Deque`.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use critical_section::Mutex;
use heapless::Deque;

/// Byte-oriented duplex link to the companion app
pub trait Transport {
    type Error;

    /// Whether a central is currently connected
    fn is_connected(&self) -> bool;

    /// Start advertising. Must be safe to call while already advertising.
    fn start_advertising(&mut self) -> Result<(), Self::Error>;

    /// Whether received bytes are waiting to be read
    fn bytes_waiting(&self) -> bool;

    /// Read one received byte without blocking
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Connection state as seen by the main loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connected,
}

/// Shared receive queue and link flags
///
/// The radio side calls [`push`](Self::push) and
/// [`set_connected`](Self::set_connected); the engine reads through
/// [`transport`](Self::transport).
pub struct LinkBuffer<const SIZE: usize> {
    rx: Mutex<RefCell<Deque<u8, SIZE>>>,
    connected: Mutex<Cell<bool>>,
    advertising: Mutex<Cell<bool>>,
    overflowed: Mutex<Cell<u32>>,
}

impl<const SIZE: usize> LinkBuffer<SIZE> {
    pub const fn new() -> Self {
        Self {
            rx: Mutex::new(RefCell::new(Deque::new())),
            connected: Mutex::new(Cell::new(false)),
            advertising: Mutex::new(Cell::new(false)),
            overflowed: Mutex::new(Cell::new(0)),
        }
    }

    /// Get a transport handle reading from this buffer
    pub const fn transport(&self) -> BufferedTransport<'_, SIZE> {
        BufferedTransport { link: self }
    }

    /// Queue received bytes
    ///
    /// Returns how many bytes were accepted. Bytes that do not fit are
    /// dropped and counted.
    pub fn push(&self, bytes: &[u8]) -> usize {
        critical_section::with(|cs| {
            let mut rx = self.rx.borrow(cs).borrow_mut();
            let accepted = bytes.iter().take_while(|&&b| rx.push_back(b).is_ok()).count();
            let rejected = u32::try_from(bytes.len() - accepted).unwrap_or(u32::MAX);
            if rejected > 0 {
                let overflowed = self.overflowed.borrow(cs);
                overflowed.set(overflowed.get().saturating_add(rejected));
            }
            accepted
        })
    }

    /// Update the connection state reported by the radio
    ///
    /// A new connection ends advertising.
    pub fn set_connected(&self, connected: bool) {
        critical_section::with(|cs| {
            self.connected.borrow(cs).set(connected);
            if connected {
                self.advertising.borrow(cs).set(false);
            }
        });
    }

    pub fn is_connected(&self) -> bool {
        critical_section::with(|cs| self.connected.borrow(cs).get())
    }

    /// Whether the engine asked the radio to advertise
    pub fn is_advertising(&self) -> bool {
        critical_section::with(|cs| self.advertising.borrow(cs).get())
    }

    /// Number of received bytes lost to a full queue
    pub fn overflowed(&self) -> u32 {
        critical_section::with(|cs| self.overflowed.borrow(cs).get())
    }

    fn request_advertising(&self) {
        critical_section::with(|cs| self.advertising.borrow(cs).set(true));
    }

    fn has_bytes(&self) -> bool {
        critical_section::with(|cs| !self.rx.borrow(cs).borrow().is_empty())
    }

    fn pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.rx.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for LinkBuffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Transport`] reading from a [`LinkBuffer`]
#[derive(Clone, Copy)]
pub struct BufferedTransport<'a, const SIZE: usize> {
    link: &'a LinkBuffer<SIZE>,
}

impl<const SIZE: usize> Transport for BufferedTransport<'_, SIZE> {
    type Error = Infallible;

    fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    fn start_advertising(&mut self) -> Result<(), Self::Error> {
        self.link.request_advertising();
        Ok(())
    }

    fn bytes_waiting(&self) -> bool {
        self.link.has_bytes()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.link.pop())
    }
}
