//! Records the interpreter version this extension is compiled against so
//! module initialization can compare it with the running interpreter.

fn main() {
    let config = pyo3_build_config::get();
    println!(
        "cargo:rustc-env=MYMODULE_BUILT_PYTHON_VERSION={}.{}",
        config.version.major, config.version.minor
    );
    println!("cargo:rerun-if-env-changed=PYO3_PYTHON");
    println!("cargo:rerun-if-env-changed=PYO3_CONFIG_FILE");
}
