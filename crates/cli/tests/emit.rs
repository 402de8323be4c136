//! Smoke tests for the JSON emission binary.

use assert_cmd::Command;
use std::fs;

#[test]
fn emits_parseable_model_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.py"),
        "class Dog(Animal):\n    def bark(self):\n        pass\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.py"), "from a import Dog\n").unwrap();

    let output = Command::cargo_bin("repo-atlas")
        .unwrap()
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(model["file_count"], 2);
    assert!(model["classes"].get("a.py::Dog").is_some());
    assert_eq!(model["relationships"].as_array().unwrap().len(), 2);
}

#[test]
fn writes_model_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("m.py"), "def f():\n    pass\n").unwrap();
    let out = dir.path().join("model.json");

    Command::cargo_bin("repo-atlas")
        .unwrap()
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(model["functions"].get("m.py::f").is_some());
}

#[test]
fn missing_root_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("repo-atlas")
        .unwrap()
        .arg(dir.path().join("nope"))
        .assert()
        .failure();
}
