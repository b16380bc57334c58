use crate::binding::{BindingTable, owned_text};
use crate::error::{self, Error, Result};
use crate::loader::{self, NativeLibrary, SearchPath, SymbolSource};
use crate::sys;
use crate::types::Version;
use std::ffi::{c_int, c_uint};
use std::path::Path;
use std::sync::Arc;

/// Handle on a loaded LibRaw with its own entry point cache.
///
/// Library-wide calls (`version`, `cameraList`, `strerror`, ...) live here;
/// per-image calls go through [`crate::Processor`], which owns one of these.
#[derive(Debug)]
pub struct Library {
    table: BindingTable,
}

impl Library {
    /// Use the process-wide library, loading it on first use.
    pub fn shared() -> Result<Self> {
        let native = loader::shared()?;
        Ok(Self::from_source(native))
    }

    /// Load a private copy from `search`, bypassing the process-wide one.
    pub fn with_search_path(search: &SearchPath) -> Result<Self> {
        let native = NativeLibrary::load(search)?;
        Ok(Self::from_source(Arc::new(native)))
    }

    /// Load a private copy from one file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let native = NativeLibrary::open(path)?;
        Ok(Self::from_source(Arc::new(native)))
    }

    /// Bind against any symbol source.
    pub fn from_source(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            table: BindingTable::new(source),
        }
    }

    /// A second handle on the same library with a fresh cache.
    pub fn reopen(&self) -> Self {
        Self::from_source(Arc::clone(self.table.source()))
    }

    pub(crate) fn table(&self) -> &BindingTable {
        &self.table
    }

    /// `libraw_version`, e.g. `"0.20.2-Release"`.
    pub fn version(&self) -> Result<String> {
        let f: sys::VersionFn = unsafe { self.table.bind("version")? };
        Ok(unsafe { owned_text(f()) })
    }

    /// `libraw_versionNumber`, decoded.
    pub fn version_number(&self) -> Result<Version> {
        let f: sys::VersionNumberFn = unsafe { self.table.bind("versionNumber")? };
        Ok(Version::from_number(unsafe { f() }))
    }

    /// Fail with [`Error::VersionMismatch`] unless the loaded library is the
    /// series the struct layouts were written for.
    pub fn ensure_supported(&self) -> Result<Version> {
        let version = self.version_number()?;
        if !version.is_supported() {
            tracing::error!(%version, "Unsupported LibRaw version");
            return Err(Error::VersionMismatch {
                found: version,
                expected: Version::SUPPORTED,
            });
        }
        Ok(version)
    }

    /// `libraw_capabilities`: `LIBRAW_CAPS_*` bits.
    pub fn capabilities(&self) -> Result<c_uint> {
        let f: sys::CapabilitiesFn = unsafe { self.table.bind("capabilities")? };
        Ok(unsafe { f() })
    }

    pub fn camera_count(&self) -> Result<usize> {
        let f: sys::CameraCountFn = unsafe { self.table.bind("cameraCount")? };
        Ok(unsafe { f() }.max(0) as usize)
    }

    /// Every camera model the library can decode.
    pub fn camera_list(&self) -> Result<Vec<String>> {
        let count = self.camera_count()?;
        let f: sys::CameraListFn = unsafe { self.table.bind("cameraList")? };
        let list = unsafe { f() };
        if list.is_null() {
            return Ok(Vec::new());
        }
        let mut cameras = Vec::with_capacity(count);
        for i in 0.. {
            // SAFETY: the list is null-terminated and static for the life of
            // the library.
            let entry = unsafe { *list.add(i) };
            if entry.is_null() {
                break;
            }
            cameras.push(unsafe { owned_text(entry) });
        }
        Ok(cameras)
    }

    /// `libraw_strerror`. Falls back to a generic message if the symbol is
    /// unavailable, since this runs while reporting another failure.
    pub fn strerror(&self, code: c_int) -> String {
        match unsafe { self.table.bind::<sys::StrErrorFn>("strerror") } {
            Ok(f) => unsafe { owned_text(f(code)) },
            Err(e) => {
                tracing::warn!(code, error = %e, "libraw_strerror unavailable");
                format!("LibRaw error {code}")
            }
        }
    }

    /// Turn a status code from `operation` into a result.
    pub(crate) fn check(&self, operation: &'static str, code: c_int) -> Result<()> {
        error::check(operation, code, |code| self.strerror(code)).inspect_err(|e| {
            tracing::debug!(operation, code, error = %e, "LibRaw call failed");
        })
    }
}
