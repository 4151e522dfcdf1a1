use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn phonepad_with_config<S: AsRef<OsStr>>(config: &Path, args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_phonepad"))
        .args(args)
        .env("PHONEPAD_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn phonepad<S: AsRef<OsStr>>(args: &[S]) -> Output {
    phonepad_with_config(Path::new("this-config-does-not-exist.json"), args)
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_decoded_text() {
    let output = phonepad(&["4433555 555666#"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "HELLO\n");
}

#[test]
fn reports_decode_errors() {
    let output = phonepad(&["123"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("An error occurred"));
    assert!(stderr.contains("terminating"));
}

#[test]
fn empty_argument_is_an_error() {
    let output = phonepad(&[""]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty"));
}

#[test]
fn missing_argument_prints_usage() {
    let output = phonepad::<&str>(&[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_an_invalid_character() {
    use std::os::unix::ffi::OsStrExt;

    let output = phonepad(&[OsStr::from_bytes(b"22\xff#")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("An error occurred"));
    assert!(stderr.contains("invalid input"));
}

#[test]
fn custom_keymap_from_config() {
    let config = config_file(
        r#"{ "keymap": ["_", ".,", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"] }"#,
    );
    let output = phonepad_with_config(config.path(), &["44 444 0 11#"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hi_,\n");
}

#[test]
fn invalid_keymap_in_config_is_an_error() {
    let config = config_file(r#"{ "keymap": ["_", ""] }"#);
    let output = phonepad_with_config(config.path(), &["22#"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid key map"));
}
