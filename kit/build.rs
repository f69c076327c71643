use std::env;
use std::fmt::Write;
use std::path::PathBuf;

/// (name, default) pairs for every setting in `src/config.rs`.
static CONFIGS: &[(&str, usize)] = &[
    // BLE caps an attribute value at 512 bytes
    ("MAX_VALUE_LEN", 512),
];

fn main() {
    let mut data = String::new();

    for (name, default) in CONFIGS {
        let var = format!("BLUECAP_KIT_{}", name);
        println!("cargo:rerun-if-env-changed={}", var);

        let value = match env::var(&var) {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(value) if value > 0 => value,
                _ => panic!("{} must be a positive integer, got {:?}", var, raw),
            },
            Err(_) => *default,
        };

        writeln!(&mut data, "pub const {}: usize = {};", name, value).unwrap();
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    std::fs::write(out_dir.join("config.rs"), data).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
