//! Lookup tables, generated at compile time from the catalogue polynomials.
//!
//! The nibble tables hold the CRC of every 4-bit index.
//! The byte tables are the nibble tables applied twice.
//! The `Xmodem` byte table is stored byte-swapped, so that its register
//! advances by right-shift just like the reflected `Kermit` register.

use crc::{CRC_16_KERMIT, CRC_16_XMODEM};

const NIBBLE_ENTRIES: usize = 16;
const BYTE_ENTRIES: usize = 256;
const NIBBLE_MASK: u16 = 0x0F;
const TOP_BIT: u16 = 0x8000;

/// Reflected `Kermit` polynomial (`0x8408`).
const KERMIT_POLY: u16 = CRC_16_KERMIT.poly.reverse_bits();

/// Non-reflected `Xmodem` polynomial (`0x1021`).
const XMODEM_POLY: u16 = CRC_16_XMODEM.poly;

/// Nibble table for `Kermit`, indexed by the low nibble of `register ^ data`.
pub static KERMIT_NIBBLE: [u16; NIBBLE_ENTRIES] = reflected_nibble_table(KERMIT_POLY);

/// Nibble table for `Xmodem`, indexed by the high nibble of the register XOR data.
pub static XMODEM_NIBBLE: [u16; NIBBLE_ENTRIES] = nibble_table(XMODEM_POLY);

/// Byte table for `Kermit`.
pub static KERMIT_BYTE: [u16; BYTE_ENTRIES] =
    expand_reflected(&reflected_nibble_table(KERMIT_POLY));

/// Byte-swapped byte table for `Xmodem`.
pub static XMODEM_BYTE: [u16; BYTE_ENTRIES] = expand_swapped(&nibble_table(XMODEM_POLY));

const fn reflected_nibble_table(poly: u16) -> [u16; NIBBLE_ENTRIES] {
    let mut table = [0; NIBBLE_ENTRIES];
    let mut index = 0;

    while index < NIBBLE_ENTRIES {
        let mut crc = index as u16;
        let mut bit = 0;

        while bit < 4 {
            crc = if crc & 1 == 0 {
                crc >> 1
            } else {
                (crc >> 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

const fn nibble_table(poly: u16) -> [u16; NIBBLE_ENTRIES] {
    let mut table = [0; NIBBLE_ENTRIES];
    let mut index = 0;

    while index < NIBBLE_ENTRIES {
        let mut crc = (index as u16) << 12;
        let mut bit = 0;

        while bit < 4 {
            crc = if crc & TOP_BIT == 0 {
                crc << 1
            } else {
                (crc << 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

const fn expand_reflected(nibbles: &[u16; NIBBLE_ENTRIES]) -> [u16; BYTE_ENTRIES] {
    let mut table = [0; BYTE_ENTRIES];
    let mut index = 0;

    while index < BYTE_ENTRIES {
        let mut crc = index as u16;
        crc = (crc >> 4) ^ nibbles[(crc & NIBBLE_MASK) as usize];
        crc = (crc >> 4) ^ nibbles[(crc & NIBBLE_MASK) as usize];
        table[index] = crc;
        index += 1;
    }

    table
}

const fn expand_swapped(nibbles: &[u16; NIBBLE_ENTRIES]) -> [u16; BYTE_ENTRIES] {
    let mut table = [0; BYTE_ENTRIES];
    let mut index = 0;

    while index < BYTE_ENTRIES {
        let mut crc = (index as u16) << 8;
        crc = (crc << 4) ^ nibbles[(crc >> 12) as usize];
        crc = (crc << 4) ^ nibbles[(crc >> 12) as usize];
        table[index] = crc.swap_bytes();
        index += 1;
    }

    table
}
