//! End-to-end runs of the default monero → wownero plan

mod common;

use common::*;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_default_run_renames_every_manifest() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();

    for (path, name, _) in PUBLISHED.iter().chain(TESTS) {
        let manifest = read_file(root, path);
        let new_name = name.replacen("monero-", "wownero-", 1);
        assert!(
            manifest.contains(&format!("name = \"{}\"", new_name)),
            "{} not renamed:\n{}",
            path,
            manifest
        );
    }
}

#[test]
fn test_published_crates_keep_import_name() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();

    let wallet = read_file(root, "monero-oxide/wallet/Cargo.toml");
    assert!(wallet.contains("rust-version = \"1.82\"\n\n[lib]\nname = \"monero_wallet\"\n"));

    let rpc = read_file(root, "monero-oxide/interface/daemon/simple-request/Cargo.toml");
    assert!(rpc.contains("[lib]\nname = \"monero_simple_request_rpc\"\n"));
}

#[test]
fn test_test_crates_get_no_lib_block() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();

    for (path, _, _) in TESTS {
        assert!(!read_file(root, path).contains("[lib]"));
    }

    let no_std = read_file(root, "tests/no-std/Cargo.toml");
    assert!(no_std.contains(
        "monero-wallet = { path = \"../wallet\", default-features = false, version = \"0.1\", package = \"wownero-wallet\" }"
    ));
}

#[test]
fn test_dependencies_repository_and_version() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();

    let oxide = read_file(root, "monero-oxide/Cargo.toml");
    assert!(oxide.contains("version = \"0.1.0\"\n"));
    assert!(!oxide.contains("0.1.4-alpha"));
    assert!(oxide.contains("repository = \"https://github.com/Such-Software/monero-oxide\""));
    assert!(oxide.contains(
        "monero-bulletproofs = { path = \"../bulletproofs\", default-features = false, version = \"0.1\", package = \"wownero-bulletproofs\" }"
    ));
    assert!(oxide.contains("zeroize = { version = \"^1.5\", default-features = false }"));

    let wallet = read_file(root, "monero-oxide/wallet/Cargo.toml");
    assert!(wallet.contains("version = \"0.2\", package = \"wownero-epee\""));
}

#[test]
fn test_workspace_profile_overrides() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();

    let workspace = read_file(root, "Cargo.toml");
    assert!(workspace.contains("wownero-io = { opt-level = 3 }"));
    assert!(workspace.contains("wownero-bulletproofs = {opt-level = 3 }"));
    assert!(workspace.contains("wownero-oxide = { opt-level = 3 }"));
    assert!(workspace.contains("\"monero-oxide/io\""));
}

#[test]
fn test_progress_output() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &["--quiet"])
        .success()
        .stdout(predicate::str::contains("Renaming sub-crate Cargo.toml files:"))
        .stdout(predicate::str::contains("Renaming test crate Cargo.toml files:"))
        .stdout(predicate::str::contains("Updating workspace root:"))
        .stdout(predicate::str::contains("verify-chain"))
        .stdout(predicate::str::contains("Done!"))
        .stdout(predicate::str::contains("Changes applied").not());
}

#[test]
fn test_summary_counts_manifests() {
    let temp = create_monero_tree();

    run_rename(temp.path(), &[])
        .success()
        .stdout(predicate::str::contains("Changes applied:"))
        .stdout(predicate::str::contains("0 unchanged"));
}

#[test]
fn test_dry_run_does_not_modify() {
    let temp = create_monero_tree();
    let root = temp.path();
    let before = read_file(root, "monero-oxide/Cargo.toml");

    run_rename(root, &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    assert_eq!(read_file(root, "monero-oxide/Cargo.toml"), before);
    assert!(read_file(root, "Cargo.toml").contains("monero-io = { opt-level = 3 }"));
}

#[test]
fn test_defaults_to_current_directory() {
    let temp = create_monero_tree();
    let root = temp.path();

    let mut cmd = cargo_bin_cmd!("wownero-rename");
    cmd.current_dir(root).assert().success();

    assert!(read_file(root, "monero-oxide/io/Cargo.toml").contains("name = \"wownero-io\""));
}

#[test]
fn test_second_run_is_stable() {
    let temp = create_monero_tree();
    let root = temp.path();

    run_rename(root, &[]).success();
    let first = read_file(root, "monero-oxide/wallet/Cargo.toml");

    run_rename(root, &[])
        .success()
        .stdout(predicate::str::contains("No changes needed"));

    let second = read_file(root, "monero-oxide/wallet/Cargo.toml");
    assert_eq!(first, second);
    assert_eq!(second.matches("package = \"wownero-oxide\"").count(), 1);
}
