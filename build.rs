use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables VOTES_* desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "VOTES_CONTAINER_SELECTOR",
        "VOTES_CONTROL_SELECTOR",
        "VOTES_TALLY_SELECTOR",
        "VOTES_MINUS_CLASS",
        "VOTES_PLUS_CLASS",
        "VOTES_ENDPOINT_ATTRIBUTE",
        "VOTES_NOTIFIER_FUNCTION",
        "VOTES_LANGUAGE",
        "VOTES_ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
