use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct PreloadFile {
    #[serde(default)]
    images: Vec<PreloadEntry>,
}

#[derive(Deserialize)]
struct PreloadEntry {
    src: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=VITRINE_PRELOAD_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let manifest_path = resolve_manifest_path(workspace_root);
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let contents = fs::read_to_string(&manifest_path).unwrap_or_else(|err| {
        panic!(
            "failed to read preload manifest at {}: {err}",
            manifest_path.display()
        )
    });

    let manifest: PreloadFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse preload manifest at {}: {err}",
            manifest_path.display()
        )
    });

    validate_entries(&manifest.images, &manifest_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const PRELOAD_IMAGES: &[&str] = &[").unwrap();
    for entry in &manifest.images {
        writeln!(&mut output, "    {},", rust_string(entry.src.trim())).unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("preload_manifest.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_manifest_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("VITRINE_PRELOAD_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("assets/preload.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_entries(entries: &[PreloadEntry], manifest_path: &Path) {
    let mut srcs = HashSet::new();

    for entry in entries {
        let src = entry.src.trim();
        if src.is_empty() {
            panic!("preload src cannot be empty in {}", manifest_path.display());
        }
        if src.starts_with("data:") {
            panic!(
                "preload '{}' cannot be a data URL in {}",
                src,
                manifest_path.display()
            );
        }
        if !srcs.insert(src.to_string()) {
            panic!(
                "duplicate preload src '{}' in {}",
                src,
                manifest_path.display()
            );
        }
    }
}
