use crate::loader::LoadError;
use crate::sys;
use crate::types::Version;
use std::ffi::{NulError, c_int};
use std::path::PathBuf;
use thiserror::Error;

/// Error produced by the safe wrappers around LibRaw.
#[derive(Debug, Error)]
pub enum Error {
    /// The shared library could not be loaded from any configured location.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The loaded library does not export the requested entry point.
    #[error("symbol '{symbol}' not found in LibRaw: {reason}")]
    SymbolNotFound { symbol: String, reason: String },

    /// A LibRaw call returned a non-zero status.
    #[error("{operation} failed with LibRaw error {code}: {message}")]
    Native {
        operation: &'static str,
        code: c_int,
        /// Text from `libraw_strerror`.
        message: String,
    },

    /// The loaded library is not the version the layouts were written for.
    #[error("LibRaw {found} is not supported; expected {}.{}.x", .expected.major, .expected.minor)]
    VersionMismatch { found: Version, expected: Version },

    /// `libraw_init` returned null.
    #[error("libraw_init returned null")]
    InitFailed,

    #[error("string contains interior NUL: {0}")]
    Nul(#[from] NulError),

    #[error("path cannot be passed to LibRaw: {}", .0.display())]
    InvalidPath(PathBuf),

    /// A memory view could not be built over the given address.
    #[error("invalid view: {0}")]
    InvalidView(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn symbol_not_found(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SymbolNotFound {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    pub fn native(operation: &'static str, code: c_int, message: impl Into<String>) -> Self {
        Self::Native {
            operation,
            code,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_view(msg: impl Into<String>) -> Self {
        Self::InvalidView(msg.into())
    }

    /// LibRaw status code, if this error came from a native call.
    pub fn code(&self) -> Option<c_int> {
        match self {
            Self::Native { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether LibRaw considers the failure fatal for the current file
    /// (`LIBRAW_FATAL_ERROR`). The processor must be recycled before reuse.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Native { code, .. } if *code < sys::LIBRAW_FATAL_ERROR_THRESHOLD)
    }
}

/// Map a LibRaw status code to `Ok(())` or a [`Error::Native`] whose
/// message comes from `describe`.
pub(crate) fn check(
    operation: &'static str,
    code: c_int,
    describe: impl FnOnce(c_int) -> String,
) -> Result<()> {
    if code == sys::LIBRAW_SUCCESS {
        return Ok(());
    }
    Err(Error::native(operation, code, describe(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success_and_skips_describe() {
        let result = check("unpack", 0, |_| panic!("describe must not run on success"));
        assert!(result.is_ok());
    }

    #[test]
    fn non_zero_carries_description() {
        let err = check("unpack", sys::LIBRAW_OUT_OF_ORDER_CALL, |code| {
            format!("described {code}")
        })
        .unwrap_err();
        assert_eq!(err.code(), Some(sys::LIBRAW_OUT_OF_ORDER_CALL));
        match &err {
            Error::Native { message, operation, .. } => {
                assert_eq!(message, "described -4");
                assert_eq!(*operation, "unpack");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("described -4"));
    }

    #[test]
    fn fatal_range_follows_libraw_macro() {
        assert!(Error::native("unpack", sys::LIBRAW_UNSUFFICIENT_MEMORY, "").is_fatal());
        assert!(Error::native("unpack", sys::LIBRAW_IO_ERROR, "").is_fatal());
        assert!(!Error::native("unpack", sys::LIBRAW_FILE_UNSUPPORTED, "").is_fatal());
        assert!(!Error::InitFailed.is_fatal());
    }
}
