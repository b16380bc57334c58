//! Safe Rust bindings for [LibRaw](https://www.libraw.org/), loaded at runtime.
//!
//! No link-time dependency on LibRaw exists: the shared library is located on
//! first use and every `libraw_<op>` entry point is resolved lazily, once per
//! handle. Struct layouts mirror LibRaw 0.20 and are checked against the
//! loaded library's version before any processing starts.
//! - [`Processor`] owns one `libraw_data_t` and exposes the open, unpack,
//!   process and write calls as methods, plus zero-copy [`ndarray`] views of
//!   the decoded buffers.
//! - [`Library`] covers library-wide calls such as [`Library::camera_list`].
//! - [`SearchPath`] controls where the shared library is looked for; the
//!   `LIBRAW_PATH` environment variable is consulted first.
//! - [`view`] and the [`DngColorViews`]/[`ColorDataViews`] traits build
//!   matrix views over native memory without copying.
//!
//! A full develop pipeline lives in `examples/metadata.rs` and the companion
//! `libraw-develop` CLI.

/// Hand-written `#[repr(C)]` mirror of the LibRaw 0.20 ABI. Most users should
/// favor the safe wrappers re-exported from this crate.
pub use libraw_sys as sys;

mod binding;
mod error;
mod library;
pub mod loader;
mod mirror;
mod processed;
mod processor;
mod types;
pub mod view;

pub use binding::{SYMBOL_PREFIX, symbol_name};
pub use error::{Error, Result};
pub use library::Library;
pub use loader::{LoadAttempt, LoadError, NativeLibrary, SearchPath, SymbolSource};
pub use mirror::{ColorDataViews, DngColorViews};
pub use processed::ProcessedImage;
pub use processor::Processor;
pub use types::*;
