// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn remoconc() -> Command {
    Command::cargo_bin("remoconc").unwrap()
}

fn export_xml() -> String {
    format!("{}/tests/input/export.xml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_no_input_files_prints_usage() {
    remoconc()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: remoconc"));
}

#[test]
fn test_version() {
    remoconc().arg("--version").assert().success().stdout(predicate::str::contains("remoconc"));
}

#[test]
fn test_generates_table_on_stdout() {
    remoconc()
        .arg(export_xml())
        .assert()
        .success()
        .stdout(include_str!("generated/export.rs"));
}

#[test]
fn test_json_output_format() {
    remoconc()
        .arg("--output-format")
        .arg("json")
        .arg(export_xml())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"TV/A\""));
}

#[test]
fn test_exclude_device() {
    remoconc()
        .arg("--exclude-device")
        .arg("TV/A")
        .arg(export_xml())
        .assert()
        .success()
        .stdout(predicate::str::contains("LIGHT").and(predicate::str::contains("TV|A").not()));
}

#[test]
fn test_missing_input_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.xml");
    remoconc()
        .arg(path.as_os_str())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_input_fails_without_output() {
    // Nothing may be written to stdout when parsing fails, even with a
    // valid file earlier in the argument list.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"<remoconlist><remocon>").unwrap();
    drop(file);

    remoconc()
        .arg(export_xml())
        .arg(path.as_os_str())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_duplicate_devices_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duplicate.xml");
    std::fs::write(
        &path,
        r#"<remoconlist>
            <remocon><header><remoconname>TV</remoconname></header></remocon>
            <remocon><header><remoconname>TV</remoconname></header></remocon>
        </remoconlist>"#,
    )
    .unwrap();

    remoconc()
        .arg(path.as_os_str())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("redeclaration of device `TV`"));
}
