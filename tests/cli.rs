use assert_fs::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const WIDGET: &str = "\
class Greeter {
  String greet(required String name, int age) {
    return '$name $age';
  }

  void run() async {
  }
}
";

fn flutterdoc(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flutterdoc"));
    cmd.current_dir(dir.path());
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn generate_prints_buffer_with_comment() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("greeter.dart");
    file.write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let expected = "\
class Greeter {
/// Documentation for greet
/// > * _`@param: [String]`_ - name
///
/// > * _`@param: [int]`_ - age
///
/// > _`@returns: [String]`_

  String greet(required String name, int age) {
";
    assert!(predicate::str::starts_with(expected).eval(&stdout(&output)));

    // Printing never touches the file
    file.assert(WIDGET);
}

#[test]
fn generate_block_for_async_method() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("greeter.dart").write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "5", "--format", "block"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "/// Documentation for run\n/// > _`@returns: [void]`_\n\n"
    );
}

#[test]
fn generate_write_updates_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("greeter.dart");
    file.write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "1", "--write"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    file.assert(predicate::str::contains("/// Documentation for greet\n"));
    file.assert(predicate::str::contains("/// > _`@returns: [String]`_\n\n  String greet("));
}

#[test]
fn generate_is_noop_without_declaration() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("consts.dart");
    file.write_str("const a = 1;\nconst b = 2;\n").unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "consts.dart", "--line", "1", "--format", "edit"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(predicate::str::contains("generated successfully")
        .not()
        .eval(&String::from_utf8_lossy(&output.stderr)));

    let output = flutterdoc(&dir)
        .args(["generate", "consts.dart", "--line", "1", "--write"])
        .output()
        .unwrap();
    assert!(output.status.success());
    file.assert("const a = 1;\nconst b = 2;\n");
}

#[test]
fn generate_reports_success_on_stderr() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("greeter.dart").write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "1", "--format", "edit"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Comment documentation for greet generated successfully").eval(&stderr));

    let edit: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(edit["line"], 1);
    assert_eq!(edit["name"], "greet");
}

#[test]
fn generate_reads_stdin() {
    let dir = assert_fs::TempDir::new().unwrap();

    let mut child = flutterdoc(&dir)
        .args(["generate", "--line", "1", "--format", "block"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\nint add(int a, int b) {\n}\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(predicate::str::contains("/// > * _`@param: [int]`_ - a\n///\n/// > * _`@param: [int]`_ - b\n")
        .eval(&stdout(&output)));
}

#[test]
fn inspect_prints_json_signature() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("greeter.dart").write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["inspect", "greeter.dart", "--line", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sig: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(sig["name"], "greet");
    assert_eq!(sig["returnType"], "String");
    assert_eq!(sig["parameters"][0]["isRequired"], true);
    assert_eq!(sig["parameters"][1]["type"], "int");
}

#[test]
fn config_file_changes_default_format() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("greeter.dart").write_str(WIDGET).unwrap();
    dir.child("flutterdoc.toml")
        .write_str("[output]\nformat = \"block\"\nnotify = false\n")
        .unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("/// Documentation for run\n"));
    assert!(predicate::str::contains("generated successfully")
        .not()
        .eval(&String::from_utf8_lossy(&output.stderr)));
}

#[test]
fn init_writes_config_once() {
    let dir = assert_fs::TempDir::new().unwrap();

    let output = flutterdoc(&dir).arg("init").output().unwrap();
    assert!(output.status.success());
    dir.child("flutterdoc.toml")
        .assert(predicate::str::contains("block_openers"));

    let output = flutterdoc(&dir).arg("init").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn line_zero_is_rejected() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("greeter.dart").write_str(WIDGET).unwrap();

    let output = flutterdoc(&dir)
        .args(["generate", "greeter.dart", "--line", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
