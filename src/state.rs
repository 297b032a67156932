use log::warn;

use crate::Error;

/// Lifecycle of a streaming checksum stage.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum State {
    /// The stage accepts data.
    #[default]
    Active,
    /// The stream has been finalized. Only `reset()` or `abort()` leave this state.
    Finalized,
}

impl State {
    /// Returns an error unless the stage accepts data.
    pub(crate) fn ensure_active(self) -> Result<(), Error> {
        match self {
            Self::Active => Ok(()),
            Self::Finalized => {
                warn!("Attempted to use a finalized stream.");
                Err(Error::Finalized)
            }
        }
    }
}
