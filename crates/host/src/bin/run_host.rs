// Host entry stub for an externally compiled module. The toolchain that
// emits the module cannot mark an arbitrary function as the program entry
// point, so this binary supplies the native `main` the loader expects: it
// calls the module's exported `run()` and exits with whatever code it
// returns. Command-line arguments are accepted from the loader but never
// inspected; `run` takes none.

#[cfg(feature = "link_run")]
unsafe extern "C" {
    // With the feature enabled, `run` must be provided at link time by the
    // external module or another object. This allows a direct call without
    // runtime symbol lookup.
    fn run() -> i32;
}

fn main() {
    #[cfg(feature = "link_run")]
    unsafe {
        let code = run();
        std::process::exit(code);
    }

    #[cfg(not(feature = "link_run"))]
    {
        // Look up `run` dynamically so this binary can be built and linked
        // even when no object providing the symbol is present.
        if let Some(code) = runhost::call_run() {
            std::process::exit(code);
        }
        // No symbol found -> exit 0
        std::process::exit(0);
    }
}
