use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const UNSORTED: &str = "class A {\n  void run() {}\n  int b;\n  int a;\n}\n";
const SORTED: &str = "class A {\n  int a;\n  int b;\n\n  void run() {}\n}\n";

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, text) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }
    dir
}

fn source(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn sort_rewrites_files_under_default_root() {
    let dir = project(&[("src/main/java/A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .arg("sort")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(source(&dir, "src/main/java/A.java")).unwrap(),
        SORTED
    );
}

#[test]
fn dry_run_prints_diff_and_exits_2() {
    let dir = project(&[("A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["sort", "--dry-run", "A.java"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("--- A.java").and(predicate::str::contains("@@")));
    assert_eq!(fs::read_to_string(source(&dir, "A.java")).unwrap(), UNSORTED);
}

#[test]
fn dry_run_on_clean_file_succeeds() {
    let dir = project(&[("A.java", SORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["--dry-run", "sort", "A.java"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn parse_failure_exits_1_and_names_the_line() {
    let dir = project(&[("Bad.java", "class Bad {\n  int a\n}\n"), ("A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["sort", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Bad.java: line 2: unrecognized declaration"));
    // Other files are still processed
    assert_eq!(fs::read_to_string(source(&dir, "A.java")).unwrap(), SORTED);
}

#[test]
fn project_config_sets_default_visibility() {
    let dir = project(&[
        ("declfmt.toml", "[visibility]\ndefault = \"private\"\n"),
        ("A.java", "class A {\n  int a;\n}\n"),
    ]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["visibility", "A.java"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(source(&dir, "A.java")).unwrap(),
        "private class A {\n  private int a;\n}\n"
    );
}

#[test]
fn invalid_config_is_rejected() {
    let dir = project(&[
        ("custom.toml", "[sort]\norder = [\"constant\", \"fields\"]\n"),
        ("A.java", UNSORTED),
    ]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["sort", "--config", "custom.toml", "A.java"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown category 'fields'"));
    assert_eq!(fs::read_to_string(source(&dir, "A.java")).unwrap(), UNSORTED);
}

#[test]
fn outline_prints_json() {
    let dir = project(&[("A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["outline", "A.java", "--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"kind\": \"class\"")
                .and(predicate::str::contains("\"name\": \"run\"")),
        );
}

#[test]
fn outline_prints_tree() {
    let dir = project(&[("A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["outline", "A.java"])
        .assert()
        .success()
        .stdout("class A [class]\n  method run [method]\n  field b [field]\n  field a [field]\n");
}

#[test]
fn invalid_log_level_is_rejected() {
    let dir = project(&[("A.java", UNSORTED)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["--log-level", "verbose", "sort", "A.java"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'verbose'"));
    assert_eq!(fs::read_to_string(source(&dir, "A.java")).unwrap(), UNSORTED);
}

#[test]
fn sort_handles_java_and_python_together() {
    let dir = project(&[
        ("src/A.java", UNSORTED),
        ("src/tool.py", "def b():\n    pass\ndef a():\n    pass\n"),
    ]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["sort", "src"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(source(&dir, "src/A.java")).unwrap(), SORTED);
    assert_eq!(
        fs::read_to_string(source(&dir, "src/tool.py")).unwrap(),
        "def a():\n    pass\n\n\ndef b():\n    pass\n"
    );
}

#[test]
fn java_only_pass_skips_python_files() {
    let unsorted_py = "# tool\ndef b():\n    pass\n";
    let dir = project(&[("src/A.java", "class A {\n  int a;\n}\n"), ("src/tool.py", unsorted_py)]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["visibility", "src"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(source(&dir, "src/A.java")).unwrap(),
        "public class A {\n  public int a;\n}\n"
    );
    assert_eq!(fs::read_to_string(source(&dir, "src/tool.py")).unwrap(), unsorted_py);
}

#[test]
fn outline_prints_python_blocks() {
    let dir = project(&[("tool.py", "class Prover:\n    def run(self):\n        pass\n")]);
    cargo_bin_cmd!("declfmt")
        .current_dir(dir.path())
        .args(["outline", "tool.py"])
        .assert()
        .success()
        .stdout("module tool [module]\n  class Prover [class]\n    function run [function]\n");
}
