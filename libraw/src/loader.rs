//! Locating and loading the LibRaw shared library.
//!
//! Nothing is linked at build time. A [`SearchPath`] lists candidate files
//! or bare library names; [`NativeLibrary::load`] tries them in order and
//! keeps the first that the platform loader accepts. [`shared`] does this
//! once per process.

use crate::error::{Error, Result};
use crate::sys;
use crate::types::Version;
use libloading::Library;
use std::env;
use std::ffi::{CString, OsStr, c_void};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::ptr::NonNull;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Environment variable holding extra search entries, in the platform's
/// path-list syntax. Entries are tried before the defaults.
pub const ENV_VAR: &str = "LIBRAW_PATH";

#[cfg(all(unix, not(target_os = "macos")))]
const INSTALL_PATHS: &[&str] = &["/usr/local/lib/libraw.so.20.0.0", "/usr/local/lib/libraw.so.20"];
#[cfg(all(unix, not(target_os = "macos")))]
const FILE_NAMES: &[&str] = &["libraw.so.20", "libraw_r.so.20", "libraw.so"];

#[cfg(target_os = "macos")]
const INSTALL_PATHS: &[&str] = &[
    "/usr/local/lib/libraw.20.dylib",
    "/opt/homebrew/lib/libraw.20.dylib",
];
#[cfg(target_os = "macos")]
const FILE_NAMES: &[&str] = &["libraw.20.dylib", "libraw.dylib"];

#[cfg(windows)]
const INSTALL_PATHS: &[&str] = &[];
#[cfg(windows)]
const FILE_NAMES: &[&str] = &["libraw.dll"];

/// Anything that can hand out the address of an exported LibRaw symbol.
///
/// [`NativeLibrary`] is the real implementation. Tests provide their own to
/// run the binding against recorded fakes.
pub trait SymbolSource: Send + Sync {
    /// Resolve `symbol` (full exported name, e.g. `libraw_unpack`).
    fn resolve(&self, symbol: &str) -> Result<NonNull<c_void>>;
}

/// Ordered list of places to look for the shared library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    candidates: Vec<PathBuf>,
}

impl SearchPath {
    /// An empty search path. Loading from it always fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical install locations followed by the platform library
    /// names, which the dynamic loader resolves through its own search.
    pub fn defaults() -> Self {
        let candidates = INSTALL_PATHS
            .iter()
            .chain(FILE_NAMES)
            .map(PathBuf::from)
            .collect();
        Self { candidates }
    }

    /// Entries from [`ENV_VAR`] followed by [`SearchPath::defaults`].
    pub fn from_env() -> Self {
        let mut search = env::var_os(ENV_VAR)
            .map(|value| Self::from_list(&value))
            .unwrap_or_default();
        search.candidates.extend(Self::defaults().candidates);
        search
    }

    /// Parse a platform path list (`:` or `;` separated).
    pub fn from_list(list: &OsStr) -> Self {
        let mut search = Self::new();
        for entry in env::split_paths(list).filter(|p| !p.as_os_str().is_empty()) {
            search.push(entry);
        }
        search
    }

    /// Append an entry. Entries naming a directory when the library is
    /// loaded stand for the platform library names inside it.
    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.candidates.push(entry.into());
    }

    /// Builder form of [`SearchPath::push`].
    pub fn with(mut self, entry: impl Into<PathBuf>) -> Self {
        self.push(entry);
        self
    }

    /// Put the entries of `other` before this path's own.
    pub fn prepend(&mut self, other: SearchPath) {
        let mut candidates = other.candidates;
        candidates.append(&mut self.candidates);
        self.candidates = candidates;
    }

    /// Entries as given, before directory expansion.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

/// Files to try for one search entry. Bare names are left to the dynamic
/// loader's own search even if a directory of that name exists here.
fn expand(entry: &Path) -> Vec<PathBuf> {
    let bare = matches!(
        entry.components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    );
    if !bare && entry.is_dir() {
        FILE_NAMES.iter().map(|name| entry.join(name)).collect()
    } else {
        vec![entry.to_path_buf()]
    }
}

/// One failed attempt to load a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
    pub candidate: PathBuf,
    pub reason: String,
}

impl fmt::Display for LoadAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.candidate.display(), self.reason)
    }
}

/// No candidate on the search path could be loaded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("LibRaw shared library not found; {}", describe_attempts(.attempts))]
pub struct LoadError {
    pub attempts: Vec<LoadAttempt>,
}

fn describe_attempts(attempts: &[LoadAttempt]) -> String {
    if attempts.is_empty() {
        return "the search path is empty".to_string();
    }
    let tried: Vec<String> = attempts.iter().map(ToString::to_string).collect();
    format!("tried {}", tried.join(", "))
}

/// A loaded LibRaw shared object.
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Load exactly one file (or bare library name).
    pub fn open(path: impl AsRef<Path>) -> std::result::Result<Self, LoadError> {
        let path = path.as_ref();
        Self::try_open(path).map_err(|attempt| LoadError {
            attempts: vec![attempt],
        })
    }

    /// Try every candidate in order; the first that loads wins.
    pub fn load(search: &SearchPath) -> std::result::Result<Self, LoadError> {
        let mut attempts = Vec::new();
        for candidate in search.candidates().iter().flat_map(|entry| expand(entry)) {
            let candidate = candidate.as_path();
            match Self::try_open(candidate) {
                Ok(library) => {
                    tracing::info!(
                        path = %candidate.display(),
                        version = ?library.version(),
                        "Loaded LibRaw library"
                    );
                    return Ok(library);
                }
                Err(attempt) => {
                    tracing::debug!(
                        path = %candidate.display(),
                        reason = %attempt.reason,
                        "LibRaw candidate rejected"
                    );
                    attempts.push(attempt);
                }
            }
        }
        Err(LoadError { attempts })
    }

    fn try_open(path: &Path) -> std::result::Result<Self, LoadAttempt> {
        // SAFETY: LibRaw's static initializers only set up internal tables;
        // loading it has no effect on the host beyond mapping the object.
        unsafe { Library::new(path) }
            .map(|library| Self {
                library,
                path: path.to_path_buf(),
            })
            .map_err(|e| LoadAttempt {
                candidate: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// `libraw_versionNumber` of this object, if it exports one.
    pub fn version(&self) -> Option<Version> {
        let address = self.resolve("libraw_versionNumber").ok()?;
        // SAFETY: the symbol has the `VersionNumberFn` signature in every
        // LibRaw release that exports it.
        let f: sys::VersionNumberFn = unsafe { std::mem::transmute(address.as_ptr()) };
        Some(Version::from_number(unsafe { f() }))
    }

    /// The candidate this library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SymbolSource for NativeLibrary {
    fn resolve(&self, symbol: &str) -> Result<NonNull<c_void>> {
        let name = CString::new(symbol)?;
        // SAFETY: the address is returned untyped; callers cast it to the
        // signature declared for this symbol in `libraw_sys`.
        let address = unsafe { self.library.get::<*mut c_void>(name.as_bytes_with_nul()) }
            .map_err(|e| Error::symbol_not_found(symbol, e.to_string()))?;
        NonNull::new(*address).ok_or_else(|| Error::symbol_not_found(symbol, "null address"))
    }
}

impl fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

static SHARED: OnceLock<std::result::Result<Arc<NativeLibrary>, LoadError>> = OnceLock::new();

/// The process-wide library, loaded on first use from
/// [`SearchPath::from_env`]. The outcome, success or failure, is cached.
pub fn shared() -> std::result::Result<Arc<NativeLibrary>, LoadError> {
    if let Some(loaded) = SHARED.get() {
        return loaded.clone();
    }
    init_shared(&SearchPath::from_env())
}

/// Load the process-wide library from `search` unless it is already
/// initialized, in which case the existing outcome is returned and `search`
/// is ignored.
pub fn init_shared(search: &SearchPath) -> std::result::Result<Arc<NativeLibrary>, LoadError> {
    SHARED
        .get_or_init(|| NativeLibrary::load(search).map(Arc::new))
        .clone()
}
