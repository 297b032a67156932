//! CRC16 state transitions.
//!
//! The [`Engine`] advances a raw 16-bit register one byte at a time and
//! converts the final register into the variant's conventional output.
//!
//! Two table granularities are available. They keep the register in
//! different internal representations, which [`Engine::format`] accounts for:
//!
//! | Granularity | `Kermit` register | `Xmodem` register | `format`                 |
//! |-------------|-------------------|-------------------|--------------------------|
//! | `Nibble`    | right-shift       | left-shift        | swap `Kermit` only       |
//! | `Byte`      | right-shift       | right-shift       | swap both                |

use core::fmt::{Display, Formatter};

use crate::Variant;

mod tables;

const NIBBLE_MASK: u16 = 0x0F;
const BYTE_MASK: u16 = 0xFF;
const INITIAL_REGISTER: u16 = 0x0000;

/// Size of the lookup tables used to update the register.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Granularity {
    /// Process four bits per table lookup (16-entry tables).
    Nibble,
    /// Process eight bits per table lookup (256-entry tables).
    #[default]
    Byte,
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Nibble => write!(f, "nibble"),
            Self::Byte => write!(f, "byte"),
        }
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for Granularity {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Nibble, Self::Byte]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Nibble => clap::builder::PossibleValue::new("nibble")
                .alias("4")
                .alias("Nibble"),
            Self::Byte => clap::builder::PossibleValue::new("byte")
                .alias("8")
                .alias("Byte"),
        })
    }
}

/// CRC16 arithmetic for one variant at one table granularity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Engine {
    variant: Variant,
    granularity: Granularity,
}

impl Engine {
    /// Creates a new engine using byte-wise tables.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self::with_granularity(variant, Granularity::Byte)
    }

    /// Creates a new engine using the given table granularity.
    #[must_use]
    pub const fn with_granularity(variant: Variant, granularity: Granularity) -> Self {
        Self {
            variant,
            granularity,
        }
    }

    /// Returns the CRC variant.
    #[must_use]
    pub const fn variant(self) -> Variant {
        self.variant
    }

    /// Returns the table granularity.
    #[must_use]
    pub const fn granularity(self) -> Granularity {
        self.granularity
    }

    /// Returns the register value at the start of a computation.
    #[must_use]
    pub const fn initial_register(self) -> u16 {
        INITIAL_REGISTER
    }

    /// Advances the register by one byte.
    #[must_use]
    pub fn update(self, register: u16, byte: u8) -> u16 {
        match (self.variant, self.granularity) {
            (Variant::Kermit, Granularity::Nibble) => kermit_nibbles(register, byte),
            (Variant::Xmodem, Granularity::Nibble) => xmodem_nibbles(register, byte),
            (Variant::Kermit, Granularity::Byte) => {
                shift_right(&tables::KERMIT_BYTE, register, byte)
            }
            (Variant::Xmodem, Granularity::Byte) => {
                shift_right(&tables::XMODEM_BYTE, register, byte)
            }
        }
    }

    /// Advances the register by every byte of `bytes`.
    #[must_use]
    pub fn update_slice(self, register: u16, bytes: &[u8]) -> u16 {
        bytes
            .iter()
            .fold(register, |register, &byte| self.update(register, byte))
    }

    /// Converts a raw register into the variant's conventional output.
    #[must_use]
    pub const fn format(self, register: u16) -> u16 {
        match (self.variant, self.granularity) {
            (Variant::Xmodem, Granularity::Nibble) => register,
            (Variant::Kermit, _) | (Variant::Xmodem, Granularity::Byte) => register.swap_bytes(),
        }
    }

    /// Calculates the formatted checksum of `bytes`.
    #[must_use]
    pub fn checksum(self, bytes: &[u8]) -> u16 {
        self.format(self.update_slice(self.initial_register(), bytes))
    }
}

impl From<Variant> for Engine {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.variant, self.granularity)
    }
}

/// Low nibble first, register shifts right.
fn kermit_nibbles(register: u16, byte: u8) -> u16 {
    let byte = u16::from(byte);
    let register =
        (register >> 4) ^ tables::KERMIT_NIBBLE[((register ^ byte) & NIBBLE_MASK) as usize];
    (register >> 4) ^ tables::KERMIT_NIBBLE[((register ^ (byte >> 4)) & NIBBLE_MASK) as usize]
}

/// High nibble first, register shifts left.
fn xmodem_nibbles(register: u16, byte: u8) -> u16 {
    let byte = u16::from(byte);
    let register = (register << 4)
        ^ tables::XMODEM_NIBBLE[(((register >> 12) ^ (byte >> 4)) & NIBBLE_MASK) as usize];
    (register << 4) ^ tables::XMODEM_NIBBLE[(((register >> 12) ^ byte) & NIBBLE_MASK) as usize]
}

fn shift_right(table: &[u16; 256], register: u16, byte: u8) -> u16 {
    (register >> 8) ^ table[((register ^ u16::from(byte)) & BYTE_MASK) as usize]
}

#[cfg(test)]
mod tests {
    use crc::Crc;

    use super::{Engine, Granularity};
    use crate::Variant;

    const CHECK_INPUT: &[u8] = b"123456789";
    const VARIANTS: [Variant; 2] = [Variant::Kermit, Variant::Xmodem];
    const INPUTS: [&[u8]; 6] = [
        b"",
        b"\x00",
        b"A",
        CHECK_INPUT,
        b"The quick brown fox jumps over the lazy dog",
        &[0xFF, 0x00, 0x7E, 0x7D, 0x11, 0x13, 0x18, 0x1A, 0x80, 0x01],
    ];

    #[test]
    fn test_known_vectors() {
        for granularity in [Granularity::Nibble, Granularity::Byte] {
            assert_eq!(
                Engine::with_granularity(Variant::Kermit, granularity).checksum(CHECK_INPUT),
                0x8921
            );
            assert_eq!(
                Engine::with_granularity(Variant::Xmodem, granularity).checksum(CHECK_INPUT),
                0x31C3
            );
        }
    }

    #[test]
    fn test_granularities_agree() {
        for variant in VARIANTS {
            let nibble = Engine::with_granularity(variant, Granularity::Nibble);
            let byte = Engine::with_granularity(variant, Granularity::Byte);

            for input in INPUTS {
                assert_eq!(nibble.checksum(input), byte.checksum(input), "{variant}");
            }

            for value in 0..=u8::MAX {
                assert_eq!(nibble.checksum(&[value]), byte.checksum(&[value]));
            }
        }
    }

    #[test]
    fn test_matches_catalogue() {
        let kermit: Crc<u16> = Crc::<u16>::new(Variant::Kermit.algorithm());
        let xmodem: Crc<u16> = Crc::<u16>::new(Variant::Xmodem.algorithm());

        for input in INPUTS {
            assert_eq!(
                Engine::new(Variant::Kermit).checksum(input),
                kermit.checksum(input).swap_bytes()
            );
            assert_eq!(
                Engine::new(Variant::Xmodem).checksum(input),
                xmodem.checksum(input)
            );
        }
    }

    #[test]
    fn test_check_values() {
        assert_eq!(
            Engine::new(Variant::Kermit).checksum(CHECK_INPUT),
            Variant::Kermit.check().swap_bytes()
        );
        assert_eq!(
            Engine::new(Variant::Xmodem).checksum(CHECK_INPUT),
            Variant::Xmodem.check()
        );
    }

    #[test]
    fn test_empty_input() {
        for variant in VARIANTS {
            let engine = Engine::new(variant);
            assert_eq!(
                engine.checksum(&[]),
                engine.format(engine.initial_register())
            );
            assert_eq!(engine.checksum(&[]), 0x0000);
        }
    }

    #[test]
    fn test_format() {
        let kermit = Engine::with_granularity(Variant::Kermit, Granularity::Nibble);
        let xmodem = Engine::with_granularity(Variant::Xmodem, Granularity::Nibble);
        assert_eq!(kermit.format(0x1234), 0x3412);
        assert_eq!(xmodem.format(0x1234), 0x1234);

        let kermit = Engine::new(Variant::Kermit);
        let xmodem = Engine::new(Variant::Xmodem);
        assert_eq!(kermit.format(0x1234), 0x3412);
        assert_eq!(xmodem.format(0x1234), 0x3412);
    }

    #[test]
    fn test_update_slice_is_incremental() {
        for variant in VARIANTS {
            let engine = Engine::new(variant);
            let (head, tail) = CHECK_INPUT.split_at(4);
            let register = engine.update_slice(engine.initial_register(), head);
            let register = engine.update_slice(register, tail);
            assert_eq!(engine.format(register), engine.checksum(CHECK_INPUT));
        }
    }

    #[test]
    fn test_default_granularity() {
        assert_eq!(Engine::new(Variant::Xmodem).granularity(), Granularity::Byte);
        assert_eq!(Engine::from(Variant::Kermit), Engine::new(Variant::Kermit));
    }

    #[test]
    fn test_to_string() {
        let engine = Engine::with_granularity(Variant::Kermit, Granularity::Nibble);
        assert_eq!(&engine.to_string(), "Kermit (nibble)");
    }
}
