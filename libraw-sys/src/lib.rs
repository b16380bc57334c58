//! Raw layout mirrors for the [LibRaw](https://www.libraw.org) 0.20 C API.
//!
//! Nothing here links against LibRaw. The crate only declares:
//! - `#[repr(C)]` records laid out exactly like the LibRaw 0.20 headers,
//! - the function pointer types of the C entry points (resolved at runtime
//!   by the `libraw` crate),
//! - the numeric constants the C API uses for flags and error codes.
//!
//! The records are valid for one major/minor version family only. Reading a
//! `libraw_data_t` produced by a different LibRaw release silently yields
//! garbage, so the safe wrapper refuses to run against anything but 0.20.x.
//!
//! Enable the `layout-check` feature to compare these layouts against the
//! installed `libraw.h` with bindgen.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

mod consts;
mod functions;
mod types;

pub use consts::*;
pub use functions::*;
pub use types::*;
