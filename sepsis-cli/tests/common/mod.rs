#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

/// Shipped gene signature fixture
pub fn signature_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/gene_signature.csv")
}

/// Creates a throwaway project root holding a copy of the shipped signature.
pub fn project_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::copy(signature_fixture(), dir.path().join("data/gene_signature.csv")).unwrap();
    dir
}

/// Runs the sepsis binary against `root` with extra arguments.
pub fn sepsis(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sepsis").unwrap();
    cmd.env_remove("SEPSIS_LOG").arg("--root").arg(root);
    cmd
}

pub fn targets_table(root: &Path) -> PathBuf {
    root.join("outputs/tables/targets_ranked.csv")
}

pub fn compounds_table(root: &Path) -> PathBuf {
    root.join("outputs/tables/compounds_ranked.csv")
}

/// Parses a CSV table written by the pipeline into header + rows.
/// None of the shipped values need quoting, so a plain split is enough.
pub fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    let header = lines
        .next()
        .unwrap()
        .split(',')
        .map(String::from)
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(String::from).collect())
        .collect();
    (header, rows)
}

/// SHA-256 digest of a file, hex encoded.
pub fn sha256_hex(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fs::read(path).unwrap());
    format!("{:x}", hasher.finalize())
}
