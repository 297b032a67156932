//! Transmit side: forward data and append a frame check sequence.

use std::io::{self, Write};

use log::{debug, trace};

use crate::{Engine, Error, Sink, State, Variant};

/// Forwards bytes to a downstream sink and appends their checksum on finalization.
///
/// The appended frame check sequence is the formatted checksum XORed with the seed,
/// written in big-endian byte order.
///
/// Once finalized, the transmitter rejects further writes with [`Error::Finalized`]
/// until it is [`reset`](Self::reset).
#[derive(Debug)]
pub struct Transmitter<T> {
    sink: T,
    engine: Engine,
    seed: u16,
    register: u16,
    state: State,
}

impl<T> Transmitter<T>
where
    T: Sink,
{
    /// Creates a new transmitter with a zero seed.
    #[must_use]
    pub const fn new(sink: T, variant: Variant) -> Self {
        Self::with_seed(sink, variant, 0)
    }

    /// Creates a new transmitter with the given seed.
    #[must_use]
    pub const fn with_seed(sink: T, variant: Variant, seed: u16) -> Self {
        Self::with_engine(sink, Engine::new(variant), seed)
    }

    /// Creates a new transmitter with the given engine and seed.
    #[must_use]
    pub const fn with_engine(sink: T, engine: Engine, seed: u16) -> Self {
        Self {
            sink,
            engine,
            seed,
            register: engine.initial_register(),
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

    /// Returns the frame check sequence of the data written so far.
    #[must_use]
    pub fn fcs(&self) -> u16 {
        self.engine.format(self.register) ^ self.seed
    }

    /// Forwards a byte and adds it to the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Finalized`] if the stream has been finalized,
    /// or [`Error::Downstream`] if the sink rejects the byte.
    /// In the latter case the checksum has not changed,
    /// so the same byte may be written again. Otherwise, call [`abort`](Self::abort).
    pub fn write_next(&mut self, byte: u8) -> Result<(), Error> {
        self.state.ensure_active()?;
        self.sink.write_u8(byte)?;
        self.register = self.engine.update(self.register, byte);
        Ok(())
    }

    /// Appends the frame check sequence and finalizes the sink.
    ///
    /// The transmitter is finalized afterwards, even if the sink failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Finalized`] if the stream has already been finalized,
    /// or [`Error::Downstream`] if the sink fails to write the checksum or to finalize.
    pub fn finalize(&mut self) -> Result<(), Error> {
        self.state.ensure_active()?;
        self.state = State::Finalized;
        let fcs = self.fcs();
        trace!("Appending FCS: {fcs:#06X}");
        self.sink.write_u16(fcs)?;
        self.sink.finalize()?;
        debug!("Finalized {} stream.", self.engine);
        Ok(())
    }

    /// Starts a new stream.
    pub fn reset(&mut self) {
        debug!("Resetting {} transmitter.", self.engine);
        self.register = self.engine.initial_register();
        self.state = State::Active;
    }

    /// Discards the current stream downstream and starts a new one.
    pub fn abort(&mut self) {
        self.sink.abort();
        self.reset();
    }
}

impl<T> Sink for Transmitter<T>
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

impl<T> Write for Transmitter<T>
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
