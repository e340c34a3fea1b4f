//! Symbol resolution for the host entry binary.
//!
//! The externally compiled module exports `run` as a no-argument function
//! returning the process exit code. When the host binary is built without
//! the `link_run` feature the symbol is located through the dynamic loader
//! instead of at link time, so the binary can be built and linked even when
//! no module providing `run` is present. All unsafe interaction with the
//! loader is contained in this module.

use libc::{c_int, c_void};
use std::ffi::CString;

/// Name of the entry symbol the external module must export.
pub const RUN_SYMBOL: &str = "run";

/// Signature of the external entry function: no arguments, returns the
/// process exit code.
pub type RunFn = extern "C" fn() -> c_int;

/// Attempts to locate `run` in the global symbol scope.
///
/// Returns `None` when no loaded object exports the symbol.
pub fn resolve_run() -> Option<RunFn> {
    let name = CString::new(RUN_SYMBOL).ok()?;
    unsafe {
        // Clear any existing dlerror state before lookup.
        libc::dlerror();
        let sym = libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) as *mut c_void;
        if sym.is_null() {
            return None;
        }
        // SAFETY: `sym` is non-null and, per the module contract, points to
        // a function with the signature `extern "C" fn() -> c_int`. We
        // perform the minimal unsafe transmute here; the returned pointer
        // is callable as a plain function.
        Some(std::mem::transmute::<*mut c_void, RunFn>(sym))
    }
}

/// Resolves and invokes `run`, returning its exit code if the symbol was
/// present.
pub fn call_run() -> Option<i32> {
    resolve_run().map(|f| f())
}
