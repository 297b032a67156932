//! The two supported CRC16 parameter sets.

use core::fmt::{Display, Formatter};

use crc::{Algorithm, CRC_16_KERMIT, CRC_16_XMODEM};

/// A CRC16 variant.
///
/// The variants differ in their polynomial's bit order:
/// `Kermit` is reflected (least significant bit first),
/// `Xmodem` is not (most significant bit first).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Variant {
    /// CRC-16/KERMIT.
    Kermit,
    /// CRC-16/XMODEM.
    Xmodem,
}

impl Variant {
    /// Returns the catalogue parameters of the variant.
    #[must_use]
    pub const fn algorithm(self) -> &'static Algorithm<u16> {
        match self {
            Self::Kermit => &CRC_16_KERMIT,
            Self::Xmodem => &CRC_16_XMODEM,
        }
    }

    /// Returns whether the variant processes the least significant bit first.
    #[must_use]
    pub const fn is_reflected(self) -> bool {
        self.algorithm().refin
    }

    /// Returns the catalogue check value, i.e. the checksum of `b"123456789"`.
    ///
    /// Note that the catalogue states the reflected `Kermit` value in its
    /// natural bit order. The formatted output of this crate is byte-swapped
    /// for `Kermit`, since its frame check sequence goes on the wire least
    /// significant byte first.
    #[must_use]
    pub const fn check(self) -> u16 {
        self.algorithm().check
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Kermit => write!(f, "Kermit"),
            Self::Xmodem => write!(f, "Xmodem"),
        }
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for Variant {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Kermit, Self::Xmodem]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Kermit => clap::builder::PossibleValue::new("kermit")
                .alias("KERMIT")
                .alias("Kermit"),
            Self::Xmodem => clap::builder::PossibleValue::new("xmodem")
                .alias("XMODEM")
                .alias("Xmodem"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Variant;

    #[test]
    fn test_is_reflected() {
        assert!(Variant::Kermit.is_reflected());
        assert!(!Variant::Xmodem.is_reflected());
    }

    #[test]
    fn test_check() {
        assert_eq!(Variant::Kermit.check(), 0x2189);
        assert_eq!(Variant::Xmodem.check(), 0x31C3);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(&Variant::Kermit.to_string(), "Kermit");
        assert_eq!(&Variant::Xmodem.to_string(), "Xmodem");
    }
}
