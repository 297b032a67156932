//! Downstream byte sinks.

use std::io::{self, ErrorKind, Write};

/// A byte sink that a streaming checksum stage forwards its output to.
pub trait Sink {
    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the byte could not be written.
    fn write_u8(&mut self, byte: u8) -> io::Result<()>;

    /// Writes a 16-bit value in big-endian byte order.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if either byte could not be written.
    fn write_u16(&mut self, value: u16) -> io::Result<()> {
        let [high, low] = value.to_be_bytes();
        self.write_u8(high)?;
        self.write_u8(low)
    }

    /// Completes the current message.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the message could not be completed.
    fn finalize(&mut self) -> io::Result<()>;

    /// Discards the current message.
    ///
    /// The default implementation does nothing.
    fn abort(&mut self) {}
}

impl<T> Sink for &mut T
where
    T: Sink + ?Sized,
{
    fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        (**self).write_u8(byte)
    }

    fn write_u16(&mut self, value: u16) -> io::Result<()> {
        (**self).write_u16(value)
    }

    fn finalize(&mut self) -> io::Result<()> {
        (**self).finalize()
    }

    fn abort(&mut self) {
        (**self).abort();
    }
}

impl Sink for Vec<u8> {
    fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        self.push(byte);
        Ok(())
    }

    fn finalize(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<const SIZE: usize> Sink for heapless::Vec<u8, SIZE> {
    fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        self.push(byte).map_err(|byte| {
            io::Error::new(
                ErrorKind::OutOfMemory,
                format!("Sink buffer overflow: {byte:#04X}"),
            )
        })
    }

    fn finalize(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Adapts a [`Write`] implementor into a [`Sink`].
///
/// Finalizing the sink flushes the writer.
#[derive(Debug)]
pub struct IoSink<T> {
    inner: T,
}

impl<T> IoSink<T> {
    /// Create a new `IoSink` with the given writer.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Return the inner writer.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Sink for IoSink<T>
where
    T: Write,
{
    fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_all(&[byte])
    }

    fn write_u16(&mut self, value: u16) -> io::Result<()> {
        self.inner.write_all(&value.to_be_bytes())
    }

    fn finalize(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
