//! One-shot checksums over in-memory buffers.

use crate::{Engine, Variant};

const KERMIT: Engine = Engine::new(Variant::Kermit);
const XMODEM: Engine = Engine::new(Variant::Xmodem);

/// Calculates the CRC-16/KERMIT checksum of `bytes`.
///
/// The result is in wire order, i.e. `0x8921` for `b"123456789"`.
#[must_use]
pub fn kermit(bytes: &[u8]) -> u16 {
    KERMIT.checksum(bytes)
}

/// Calculates the CRC-16/XMODEM checksum of `bytes`.
#[must_use]
pub fn xmodem(bytes: &[u8]) -> u16 {
    XMODEM.checksum(bytes)
}
