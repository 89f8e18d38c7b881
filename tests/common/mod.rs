//! Integration tests for wownero-rename
//!
//! These tests build a miniature monero-oxide checkout on disk and run the
//! binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// (manifest path, package name, internal path dependencies)
#[allow(unused)]
pub const PUBLISHED: &[(&str, &str, &[&str])] = &[
    ("monero-oxide/io/Cargo.toml", "monero-io", &[]),
    ("monero-oxide/primitives/Cargo.toml", "monero-primitives", &["monero-io"]),
    ("monero-oxide/ed25519/Cargo.toml", "monero-ed25519", &["monero-io"]),
    ("monero-oxide/ringct/mlsag/Cargo.toml", "monero-mlsag", &["monero-primitives"]),
    ("monero-oxide/ringct/clsag/Cargo.toml", "monero-clsag", &["monero-primitives"]),
    ("monero-oxide/ringct/borromean/Cargo.toml", "monero-borromean", &["monero-io"]),
    (
        "monero-oxide/ringct/bulletproofs/generators/Cargo.toml",
        "monero-bulletproofs-generators",
        &["monero-ed25519"],
    ),
    (
        "monero-oxide/ringct/bulletproofs/Cargo.toml",
        "monero-bulletproofs",
        &["monero-bulletproofs-generators", "monero-primitives"],
    ),
    (
        "monero-oxide/Cargo.toml",
        "monero-oxide",
        &["monero-io", "monero-clsag", "monero-bulletproofs"],
    ),
    ("monero-oxide/wallet/base58/Cargo.toml", "monero-base58", &[]),
    ("monero-oxide/wallet/address/Cargo.toml", "monero-address", &["monero-base58"]),
    (
        "monero-oxide/wallet/Cargo.toml",
        "monero-wallet",
        &["monero-oxide", "monero-address", "monero-epee"],
    ),
    ("monero-oxide/epee/Cargo.toml", "monero-epee", &[]),
    ("monero-oxide/interface/Cargo.toml", "monero-interface", &["monero-oxide"]),
    ("monero-oxide/interface/daemon/Cargo.toml", "monero-daemon-rpc", &["monero-interface"]),
    (
        "monero-oxide/interface/daemon/simple-request/Cargo.toml",
        "monero-simple-request-rpc",
        &["monero-daemon-rpc"],
    ),
];

#[allow(unused)]
pub const TESTS: &[(&str, &str, &[&str])] = &[
    ("tests/no-std/Cargo.toml", "monero-oxide-no-std", &["monero-wallet"]),
    ("tests/verify-chain/Cargo.toml", "monero-verify-chain", &["monero-simple-request-rpc"]),
];

pub const WORKSPACE: &str = r#"[workspace]
resolver = "2"
members = [
  "monero-oxide/io",
  "monero-oxide/wallet",
  "tests/no-std",
]

[profile.dev.package]
subtle = { opt-level = 3 }
monero-io = { opt-level = 3 }
monero-bulletproofs = {opt-level = 3 }
monero-oxide = { opt-level = 3 }
"#;

/// Manifest text for one fixture crate.
pub fn leaf_manifest(name: &str, deps: &[&str]) -> String {
    let version = if name == "monero-oxide" { "0.1.4-alpha" } else { "0.1.0" };
    let mut manifest = format!(
        r#"[package]
name = "{name}"
version = "{version}"
repository = "https://github.com/monero-oxide/monero-oxide"
edition = "2021"
rust-version = "1.82"

[dependencies]
zeroize = {{ version = "^1.5", default-features = false }}
"#
    );

    for dep in deps {
        manifest.push_str(&format!(
            "{dep} = {{ path = \"../{}\", default-features = false }}\n",
            dep.trim_start_matches("monero-")
        ));
    }

    manifest
}

/// Creates a checkout with every manifest the default plan touches.
#[allow(unused)]
pub fn create_monero_tree() -> TempDir {
    let temp = TempDir::new().unwrap();

    for (path, name, deps) in PUBLISHED.iter().chain(TESTS) {
        write_file(temp.path(), path, &leaf_manifest(name, deps));
    }
    write_file(temp.path(), "Cargo.toml", WORKSPACE);

    temp
}

pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Helper to run the binary against `workspace_root`
#[allow(unused)]
pub fn run_rename(workspace_root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("wownero-rename");
    cmd.arg("--root")
        .arg(workspace_root)
        .args(extra_args)
        .current_dir(workspace_root);

    cmd.assert()
}
