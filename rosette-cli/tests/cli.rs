// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;

const ENV_VARS: [&str; 6] = [
    "ETH_NODE_URI",
    "ETH_NODE_URI_LOCALHOST",
    "MNEMONIC",
    "MNEMONIC_LOCALHOST",
    "TENDERLY_USERNAME",
    "TENDERLY_ACCESS_KEY",
];

fn rosette(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rosette").unwrap();
    cmd.arg("--root").arg(root);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_rosette_stone(root: &Path) {
    let dir = root.join("artifacts/src/RosetteStone.sol");
    fs::create_dir_all(&dir).unwrap();
    let artifact = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "RosetteStone",
        "sourceName": "src/RosetteStone.sol",
        "abi": [],
        "bytecode": "0x6001600c60003960016000f300",
        "deployedBytecode": "0x00",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;
    fs::write(dir.join("RosetteStone.json"), artifact).unwrap();
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn deploys_rosette_stone_on_simulated_network() {
    let dir = tempfile::tempdir().unwrap();
    write_rosette_stone(dir.path());

    let output = rosette(dir.path())
        .args(["deploy", "--tags", "RosetteStone"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = stdout(&output);
    assert!(stdout.contains("RosetteStone"));
    assert!(stdout.contains("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
}

#[test]
fn deploy_without_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = rosette(dir.path()).arg("deploy").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
}

#[test]
fn prints_config_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = rosette(dir.path())
        .args(["config", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let config: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let compiler = &config["solidity"]["compilers"][0];
    assert_eq!(compiler["version"], "0.8.13");
    assert_eq!(compiler["settings"]["optimizer"]["runs"], 10000);
    assert_eq!(config["networks"]["hardhat"]["initial_base_fee_per_gas"], 0);
    assert_eq!(config["networks"]["localhost"]["url"], "http://localhost:8545");
}

#[test]
fn lists_the_deployer() {
    let dir = tempfile::tempdir().unwrap();
    let output = rosette(dir.path())
        .args(["accounts", "--network", "hardhat"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = stdout(&output);
    assert!(stdout.contains("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    assert!(stdout.contains("deployer"));
}

#[test]
fn rejects_unknown_network() {
    let dir = tempfile::tempdir().unwrap();
    rosette(dir.path())
        .args(["deploy", "--network", "mainnet"])
        .assert()
        .failure();
}
