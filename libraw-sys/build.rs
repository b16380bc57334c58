fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBRAW_INCLUDE_DIR");

    #[cfg(feature = "layout-check")]
    header::generate();
}

#[cfg(feature = "layout-check")]
mod header {
    use std::env;
    use std::path::PathBuf;

    fn locate_include_dir() -> PathBuf {
        if let Some(dir) = env::var_os("LIBRAW_INCLUDE_DIR") {
            return PathBuf::from(dir);
        }
        ["/usr/local/include", "/usr/include", "/opt/homebrew/include"]
            .iter()
            .map(PathBuf::from)
            .find(|dir| dir.join("libraw/libraw.h").is_file())
            .unwrap_or_else(|| PathBuf::from("/usr/local/include"))
    }

    pub fn generate() {
        let include_dir = locate_include_dir();
        let header = include_dir.join("libraw/libraw.h");
        if !header.is_file() {
            panic!(
                "layout-check needs the LibRaw headers; set LIBRAW_INCLUDE_DIR (current: {})",
                include_dir.display()
            );
        }
        println!("cargo:rerun-if-changed={}", header.display());

        // Only the record types are needed; functions are resolved at runtime.
        let bindings = bindgen::Builder::default()
            .header(header.to_string_lossy())
            .clang_arg(format!("-I{}", include_dir.display()))
            .allowlist_type("libraw_.*")
            .allowlist_type("ph1_t")
            .layout_tests(false)
            .derive_debug(false)
            .generate()
            .expect("bindgen failed");

        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
        bindings
            .write_to_file(out_dir.join("header_layout.rs"))
            .expect("failed to write header bindings");
    }
}
