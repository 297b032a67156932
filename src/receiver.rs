//! Receive side: forward data and verify the trailing frame check sequence.

use std::io::{self, Write};

use log::{debug, trace, warn};

use crate::delay_window::DelayWindow;
use crate::{Engine, Error, Sink, State, Variant};

/// Size of the frame check sequence in bytes.
pub const FCS_SIZE: usize = 2;

/// Forwards bytes to a downstream sink and verifies the checksum trailing them.
///
/// The last [`FCS_SIZE`] bytes of a stream are its frame check sequence.
/// Since the stream length is not known in advance, every byte is held back
/// until [`FCS_SIZE`] more bytes have arrived. Only then is it added to the
/// checksum and forwarded. The downstream sink thus never sees the trailer.
///
/// Once finalized, the receiver rejects further writes with [`Error::Finalized`]
/// until it is [`reset`](Self::reset).
#[derive(Debug)]
pub struct Receiver<T> {
    sink: T,
    engine: Engine,
    seed: u16,
    register: u16,
    window: DelayWindow<FCS_SIZE>,
    state: State,
}

impl<T> Receiver<T>
where
    T: Sink,
{
    /// Creates a new receiver with a zero seed.
    #[must_use]
    pub const fn new(sink: T, variant: Variant) -> Self {
        Self::with_seed(sink, variant, 0)
    }

    /// Creates a new receiver with the given seed.
    #[must_use]
    pub const fn with_seed(sink: T, variant: Variant, seed: u16) -> Self {
        Self::with_engine(sink, Engine::new(variant), seed)
    }

    /// Creates a new receiver with the given engine and seed.
    #[must_use]
    pub const fn with_engine(sink: T, engine: Engine, seed: u16) -> Self {
        Self {
            sink,
            engine,
            seed,
            register: engine.initial_register(),
            window: DelayWindow::new(),
            state: State::Active,
        }
    }

    /// Returns the CRC engine.
    #[must_use]
    pub const fn engine(&self) -> Engine {
        self.engine
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u16 {
        self.seed
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns a reference to the downstream sink.
    #[must_use]
    pub const fn sink(&self) -> &T {
        &self.sink
    }

    /// Returns the downstream sink.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.sink
    }

    /// Accepts the next byte of the stream.
    ///
    /// If this evicts a byte from the delay window,
    /// that byte is added to the checksum and forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Finalized`] if the stream has been finalized,
    /// or [`Error::Downstream`] if the sink rejects the forwarded byte.
    /// In the latter case neither the delay window nor the checksum has changed,
    /// so the same byte may be written again. Otherwise, call [`abort`](Self::abort).
    pub fn write_next(&mut self, byte: u8) -> Result<(), Error> {
        self.state.ensure_active()?;

        if let Some(data) = self.window.next_evicted() {
            self.sink.write_u8(data)?;
            self.register = self.engine.update(self.register, data);
        }

        self.window.push(byte);
        Ok(())
    }

    /// Verifies the trailing frame check sequence.
    ///
    /// On success, the sink is finalized. On mismatch, the sink is aborted.
    /// The receiver is finalized afterwards in either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Finalized`] if the stream has already been finalized,
    /// [`Error::ChecksumMismatch`] if the trailer does not match the data
    /// or the stream is shorter than [`FCS_SIZE`],
    /// or [`Error::Downstream`] if the sink fails to finalize.
    pub fn finalize(&mut self) -> Result<(), Error> {
        self.state.ensure_active()?;
        self.state = State::Finalized;
        let expected = self.engine.format(self.register) ^ self.seed;
        let received = self.window.contents().map(u16::from_be_bytes);
        self.window.clear();

        if received == Some(expected) {
            trace!("Verified FCS: {expected:#06X}");
            self.sink.finalize()?;
            debug!("Finalized {} stream.", self.engine);
            Ok(())
        } else {
            let error = Error::ChecksumMismatch { expected, received };
            warn!("{}: {error}", self.engine);
            self.sink.abort();
            Err(error)
        }
    }

    /// Starts a new stream.
    pub fn reset(&mut self) {
        debug!("Resetting {} receiver.", self.engine);
        self.register = self.engine.initial_register();
        self.window.clear();
        self.state = State::Active;
    }

    /// Discards the current stream downstream and starts a new one.
    pub fn abort(&mut self) {
        self.sink.abort();
        self.reset();
    }
}

impl<T> Sink for Receiver<T>
where
    T: Sink,
{
    fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        self.write_next(byte).map_err(io::Error::from)
    }

    fn finalize(&mut self) -> io::Result<()> {
        Self::finalize(self).map_err(io::Error::from)
    }

    fn abort(&mut self) {
        Self::abort(self);
    }
}

impl<T> Write for Receiver<T>
where
    T: Sink,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (written, &byte) in buf.iter().enumerate() {
            if let Err(error) = self.write_next(byte) {
                return if written == 0 {
                    Err(error.into())
                } else {
                    Ok(written)
                };
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
