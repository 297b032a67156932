//! CRC16 checksums with streaming append and verify stages
//!
//! This library computes the `Kermit` (reflected) and `Xmodem` (non-reflected) CRC16 variants,
//! either in one go over a buffer or byte by byte while data streams into a [`Sink`].
//!
//! A [`Transmitter`] forwards data and appends its frame check sequence when finalized.
//! A [`Receiver`] forwards data delayed by two bytes, so that the frame check sequence
//! trailing the stream is never forwarded, and verifies it when finalized.
//!
//! ```
//! use crc16_stream::{Receiver, Transmitter, Variant};
//!
//! let mut frame: Vec<u8> = Vec::new();
//! let mut transmitter = Transmitter::with_seed(&mut frame, Variant::Xmodem, 0x1D0F);
//! b"123456789".iter().try_for_each(|&byte| transmitter.write_next(byte))?;
//! transmitter.finalize()?;
//!
//! let mut payload: Vec<u8> = Vec::new();
//! let mut receiver = Receiver::with_seed(&mut payload, Variant::Xmodem, 0x1D0F);
//! frame.iter().try_for_each(|&byte| receiver.write_next(byte))?;
//! receiver.finalize()?;
//! assert_eq!(payload, b"123456789");
//! # Ok::<(), crc16_stream::Error>(())
//! ```

pub use checksum::{kermit, xmodem};
pub use engine::{Engine, Granularity};
pub use error::Error;
pub use receiver::{Receiver, FCS_SIZE};
pub use sink::{IoSink, Sink};
pub use state::State;
pub use transmitter::Transmitter;
pub use variant::Variant;

mod checksum;
mod delay_window;
mod engine;
mod error;
mod receiver;
mod sink;
mod state;
mod transmitter;
mod variant;
