use core::fmt;
use std::error::Error;

/// A collaborative key generation error.
#[derive(Debug, thiserror::Error)]
pub struct CkgError {
    kind: ErrorKind,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// Kind of a [`CkgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation was invoked in the wrong state.
    CallSequence,
    /// Wrong message size, unsupported parameters or an out of range scalar.
    Parameter,
    /// A point failed decoding or validation.
    InvalidInput,
    /// The opening does not match the commitment.
    Integrity,
    /// The random number generator failed.
    Rng,
}

impl CkgError {
    pub(crate) fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    pub(crate) fn call_sequence(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::CallSequence, msg.into())
    }

    pub(crate) fn parameter(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parameter, msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, msg.into())
    }

    pub(crate) fn integrity() -> Self {
        Self {
            kind: ErrorKind::Integrity,
            source: None,
        }
    }

    pub(crate) fn rng(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Rng, msg.into())
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if an operation was invoked in the wrong state.
    pub fn is_call_sequence(&self) -> bool {
        self.kind == ErrorKind::CallSequence
    }

    /// Returns `true` if the error is a parameter error.
    pub fn is_parameter(&self) -> bool {
        self.kind == ErrorKind::Parameter
    }

    /// Returns `true` if a received point was invalid.
    pub fn is_invalid_input(&self) -> bool {
        self.kind == ErrorKind::InvalidInput
    }

    /// Returns `true` if the opening did not match the commitment.
    ///
    /// This is the only error which indicates a misbehaving peer rather than
    /// malformed input or misuse of the API.
    pub fn is_integrity(&self) -> bool {
        self.kind == ErrorKind::Integrity
    }
}

impl fmt::Display for CkgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::CallSequence => write!(f, "call sequence error")?,
            ErrorKind::Parameter => write!(f, "parameter error")?,
            ErrorKind::InvalidInput => write!(f, "invalid input")?,
            ErrorKind::Integrity => write!(f, "opening does not match commitment")?,
            ErrorKind::Rng => write!(f, "rng error")?,
        }

        if let Some(ref source) = self.source {
            write!(f, " caused by: {}", source)?;
        }

        Ok(())
    }
}
