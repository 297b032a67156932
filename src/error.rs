use core::fmt::{Display, Formatter};
use std::io::{self, ErrorKind};

/// Errors raised by the streaming checksum stages.
#[derive(Debug)]
pub enum Error {
    /// The stream has already been finalized.
    ///
    /// Writing to or finalizing a finalized stream is a usage error.
    /// Call `reset()` to start a new stream.
    Finalized,
    /// The downstream sink failed.
    Downstream(io::Error),
    /// The trailing checksum does not match the received data.
    ChecksumMismatch {
        /// The checksum calculated over the received data, XORed with the seed.
        expected: u16,
        /// The trailing checksum, if at least two bytes were received.
        received: Option<u16>,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Finalized => write!(f, "Stream has already been finalized."),
            Self::Downstream(error) => write!(f, "Downstream error: {error}"),
            Self::ChecksumMismatch {
                expected,
                received: Some(received),
            } => write!(
                f,
                "Checksum mismatch. Expected {expected:#06X}, but received {received:#06X}."
            ),
            Self::ChecksumMismatch {
                expected,
                received: None,
            } => write!(
                f,
                "Checksum mismatch. Expected {expected:#06X}, but the stream is too short."
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Downstream(error) => Some(error),
            Self::Finalized | Self::ChecksumMismatch { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Downstream(error)
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Downstream(error) => error,
            Error::ChecksumMismatch { .. } => Self::new(ErrorKind::InvalidData, error),
            Error::Finalized => Self::other(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io::{self, ErrorKind};

    use super::Error;

    #[test]
    fn test_to_string() {
        assert_eq!(
            &Error::Finalized.to_string(),
            "Stream has already been finalized."
        );
        assert_eq!(
            &Error::ChecksumMismatch {
                expected: 0x31C3,
                received: Some(0x1234)
            }
            .to_string(),
            "Checksum mismatch. Expected 0x31C3, but received 0x1234."
        );
        assert_eq!(
            &Error::ChecksumMismatch {
                expected: 0x0000,
                received: None
            }
            .to_string(),
            "Checksum mismatch. Expected 0x0000, but the stream is too short."
        );
    }

    #[test]
    fn test_source() {
        let error = Error::Downstream(io::Error::new(ErrorKind::BrokenPipe, "gone"));
        assert!(error.source().is_some());
        assert!(Error::Finalized.source().is_none());
    }

    #[test]
    fn test_into_io_error() {
        let error: io::Error =
            Error::Downstream(io::Error::new(ErrorKind::BrokenPipe, "gone")).into();
        assert_eq!(error.kind(), ErrorKind::BrokenPipe);

        let error: io::Error = Error::ChecksumMismatch {
            expected: 0,
            received: None,
        }
        .into();
        assert_eq!(error.kind(), ErrorKind::InvalidData);

        let error: io::Error = Error::Finalized.into();
        assert_eq!(error.kind(), ErrorKind::Other);
    }
}
