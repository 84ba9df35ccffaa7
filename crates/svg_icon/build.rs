use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

#[allow(dead_code)]
#[path = "src/model.rs"]
mod model;

use model::IconRecord;

const DATASET_ENV: &str = "SVG_ICON_DATASET";

fn dataset_path(crate_root: &Path) -> PathBuf {
    match std::env::var_os(DATASET_ENV) {
        Some(path) => PathBuf::from(path),
        None => crate_root.join("icons").join("icons.json"),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = dataset_path(&crate_root);
    println!("cargo:rerun-if-env-changed={DATASET_ENV}");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-changed=src/model.rs");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let records: Vec<IconRecord> = serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("invalid icon dataset {}: {err}", path.display()));
    if records.is_empty() {
        panic!("icon dataset {} is empty", path.display());
    }

    // Duplicate names are a lookup-time fault, so only record shape is checked here.
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            panic!("icon entry #{index} in {} has an empty name", path.display());
        }
    }

    let dataset: Value = serde_json::from_str(&raw).expect("dataset already parsed as records");
    let json = serde_json::to_string(&dataset).expect("serialize icon dataset");
    let generated = format!(
        "/// Build-time bundled icon dataset JSON.\n\
pub(crate) const ICON_DATASET_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("icon_dataset_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
