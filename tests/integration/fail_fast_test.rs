//! Integration tests for aborting the run on the first failure

#[cfg(unix)]
mod fail_fast_tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::tempdir;

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn run_fnlsync(root: &Path, lister: &str) -> Output {
        Command::new(env!("CARGO_BIN_EXE_fnlsync"))
            .env("HOME", root)
            .arg("--source-dir")
            .arg(root.join("fnl"))
            .arg("--target-dir")
            .arg(root.join("lua"))
            .arg("--compiler")
            .arg(root.join("fennel"))
            .arg("--lister")
            .arg(lister)
            .output()
            .expect("failed to run fnlsync")
    }

    fn setup(root: &Path) {
        fs::create_dir_all(root.join("fnl")).unwrap();
        fs::create_dir_all(root.join("lua")).unwrap();
        for name in ["1.fnl", "2.fnl", "3.fnl"] {
            fs::write(root.join("fnl").join(name), name).unwrap();
        }
        write_script(
            &root.join("lister"),
            "printf './1.fnl\\n./2.fnl\\n./3.fnl\\n'",
        );
        write_script(
            &root.join("fennel"),
            r#"case "$2" in
  */2.fnl) echo "2.fnl:1: unexpected closing delimiter )" >&2; exit 1;;
esac
cat "$2""#,
        );
    }

    #[test]
    fn test_abort_on_first_compiler_failure() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());

        let output = run_fnlsync(tmp.path(), tmp.path().join("lister").to_str().unwrap());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout, "Compiled: 1.fnl\n");
        assert!(
            stderr.contains("unexpected closing delimiter"),
            "compiler diagnostics should be shown: {}",
            stderr
        );

        // Earlier output kept, later files never processed
        assert_eq!(fs::read_to_string(tmp.path().join("lua/1.lua")).unwrap(), "1.fnl");
        assert!(!tmp.path().join("lua/2.lua").exists());
        assert!(!tmp.path().join("lua/3.lua").exists());
    }

    #[test]
    fn test_failing_lister_aborts_before_compiling() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());
        write_script(&tmp.path().join("lister"), "echo 'fd: broken' >&2; exit 1");

        let output = run_fnlsync(tmp.path(), tmp.path().join("lister").to_str().unwrap());

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("fd: broken"));
        assert!(!tmp.path().join("lua/1.lua").exists());
    }

    #[test]
    fn test_missing_lister_aborts() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());

        let output = run_fnlsync(tmp.path(), "/nonexistent/fd");

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("--builtin-lister"));
    }
}
