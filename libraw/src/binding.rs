//! Lazy, memoized lookup of `libraw_<op>` entry points.

use crate::error::Result;
use crate::loader::SymbolSource;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{CStr, CString, c_char, c_void};
use std::fmt;
use std::mem;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::Arc;

/// Prefix every exported LibRaw C function carries.
pub const SYMBOL_PREFIX: &str = "libraw_";

/// Exported name for an operation name, e.g. `unpack` -> `libraw_unpack`.
pub fn symbol_name(op: &str) -> String {
    format!("{SYMBOL_PREFIX}{op}")
}

/// Per-owner cache of resolved entry points.
///
/// Each operation is resolved the first time it is called and the address
/// reused afterwards. The cache is not shared between owners.
pub(crate) struct BindingTable {
    source: Arc<dyn SymbolSource>,
    cache: RefCell<HashMap<&'static str, NonNull<c_void>>>,
}

// SAFETY: cached entries are code addresses inside the loaded object, which
// the `source` Arc keeps mapped. The RefCell already makes the table !Sync.
unsafe impl Send for BindingTable {}

impl BindingTable {
    pub(crate) fn new(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn source(&self) -> &Arc<dyn SymbolSource> {
        &self.source
    }

    /// Resolve `op` once and cast the address to `F`.
    ///
    /// # Safety
    ///
    /// `F` must be the function pointer type matching the C declaration of
    /// `libraw_<op>`.
    pub(crate) unsafe fn bind<F: Copy>(&self, op: &'static str) -> Result<F> {
        const {
            assert!(mem::size_of::<F>() == mem::size_of::<NonNull<c_void>>());
        }
        let address = self.address(op)?;
        // SAFETY: F is pointer sized and the caller vouches for the signature.
        Ok(unsafe { mem::transmute_copy::<NonNull<c_void>, F>(&address) })
    }

    fn address(&self, op: &'static str) -> Result<NonNull<c_void>> {
        if let Some(address) = self.cache.borrow().get(op) {
            return Ok(*address);
        }
        let symbol = symbol_name(op);
        let address = self.source.resolve(&symbol)?;
        tracing::debug!(symbol = %symbol, "Resolved LibRaw entry point");
        self.cache.borrow_mut().insert(op, address);
        Ok(address)
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl fmt::Debug for BindingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        let mut ops: Vec<&str> = cache.keys().copied().collect();
        ops.sort_unstable();
        f.debug_struct("BindingTable").field("resolved", &ops).finish()
    }
}

/// Text argument for a LibRaw call.
pub(crate) fn native_text(text: &str) -> Result<CString> {
    Ok(CString::new(text)?)
}

/// Path argument for a LibRaw call. On unix the raw OS bytes are passed;
/// elsewhere the path must be valid UTF-8.
pub(crate) fn native_path(path: &Path) -> Result<CString> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Ok(CString::new(path.as_os_str().as_bytes())?)
    }
    #[cfg(not(unix))]
    {
        let text = path
            .to_str()
            .ok_or_else(|| crate::Error::InvalidPath(path.to_path_buf()))?;
        native_text(text)
    }
}

/// Copy a C string returned by LibRaw. Null becomes an empty string.
///
/// # Safety
///
/// `ptr` is null or points to a NUL-terminated string valid for the call.
pub(crate) unsafe fn owned_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null and NUL-terminated per the caller.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Mutex;

    unsafe extern "C" fn answer() -> i32 {
        42
    }

    #[derive(Default)]
    struct Counting {
        lookups: Mutex<Vec<String>>,
    }

    impl SymbolSource for Counting {
        fn resolve(&self, symbol: &str) -> Result<NonNull<c_void>> {
            self.lookups.lock().unwrap().push(symbol.to_string());
            if symbol == "libraw_answer" {
                Ok(NonNull::new(answer as *mut c_void).unwrap())
            } else {
                Err(Error::symbol_not_found(symbol, "not exported"))
            }
        }
    }

    #[test]
    fn symbol_names_carry_prefix() {
        assert_eq!(symbol_name("unpack"), "libraw_unpack");
        assert_eq!(symbol_name("COLOR"), "libraw_COLOR");
    }

    #[test]
    fn resolves_once_and_calls_through() {
        let source = Arc::new(Counting::default());
        let table = BindingTable::new(source.clone());
        for _ in 0..3 {
            let f: unsafe extern "C" fn() -> i32 = unsafe { table.bind("answer") }.unwrap();
            assert_eq!(unsafe { f() }, 42);
        }
        assert_eq!(*source.lookups.lock().unwrap(), vec!["libraw_answer"]);
        assert_eq!(table.cached(), 1);
    }

    #[test]
    fn missing_symbol_is_not_cached() {
        let source = Arc::new(Counting::default());
        let table = BindingTable::new(source.clone());
        let err = unsafe { table.bind::<unsafe extern "C" fn()>("nope") }.unwrap_err();
        assert!(matches!(err, Error::SymbolNotFound { ref symbol, .. } if symbol == "libraw_nope"));
        assert!(unsafe { table.bind::<unsafe extern "C" fn()>("nope") }.is_err());
        assert_eq!(source.lookups.lock().unwrap().len(), 2);
        assert_eq!(table.cached(), 0);
    }

    #[test]
    fn text_arguments_are_nul_checked() {
        assert_eq!(native_text("Füji.RAF").unwrap().as_bytes(), "Füji.RAF".as_bytes());
        assert!(matches!(native_text("a\0b"), Err(Error::Nul(_))));
        assert!(native_path(Path::new("/tmp/x\0y")).is_err());
    }

    #[test]
    fn null_text_is_empty() {
        assert_eq!(unsafe { owned_text(std::ptr::null()) }, "");
        assert_eq!(unsafe { owned_text(c"AAHD".as_ptr()) }, "AAHD");
    }
}
