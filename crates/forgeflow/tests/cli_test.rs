use assert_cmd::Command;
use predicates::prelude::*;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("マニフェスト"))
        .stdout(predicate::str::contains("TARGETS"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("forge"));
}

/// 0 件指定はビルドを始める前に拒否されることを確認
#[test]
fn test_cli_zero_rejected() {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    // テストからホストのイメージ掃除を実行しない
    cmd.env("FORGE_SKIP_CLEANUP", "1")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1以上"));
}

/// ハイフン入りバージョンはビルドを始める前に拒否されることを確認
#[test]
fn test_cli_hyphenated_version_rejected() {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    // レジストリには到達しないはずだが、万一に備えて閉じたポートを向けておく。
    // ホストのイメージ掃除もテストからは実行しない。
    cmd.env("FORGE_REGISTRY_API", "http://127.0.0.1:1/v2")
        .env("FORGE_SKIP_CLEANUP", "1")
        .arg("1.0-rc1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ハイフン"));
}

/// manifests モードはレジストリに到達できなければ失敗することを確認
#[test]
fn test_cli_manifests_unreachable_registry() {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    cmd.env("FORGE_REGISTRY_API", "http://127.0.0.1:1/v2")
        .env("FORGE_SKIP_CLEANUP", "1")
        .arg("manifests")
        .assert()
        .failure()
        .stderr(predicate::str::contains("リクエストに失敗"));
}
