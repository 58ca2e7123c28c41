//! External process execution

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an external program to completion
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd`, waiting for it to exit.
    ///
    /// Returns the exit code, or `None` if the process was killed by a signal.
    /// An `Err` means the process could not be started at all.
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> io::Result<Option<i32>>;
}

/// Runner spawning real child processes attached to this terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> io::Result<Option<i32>> {
        // Arguments go straight to the program; no shell is involved
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_run_reports_exit_code() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessRunner;

        let ok = runner.run("sh", &args(&["-c", "exit 0"]), temp.path()).unwrap();
        assert_eq!(ok, Some(0));

        let failed = runner.run("sh", &args(&["-c", "exit 3"]), temp.path()).unwrap();
        assert_eq!(failed, Some(3));
    }

    #[test]
    fn test_run_uses_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();

        let code = ProcessRunner
            .run("sh", &args(&["-c", "test -f marker"]), temp.path())
            .unwrap();
        assert_eq!(code, Some(0));
    }

    #[test]
    fn test_killed_by_signal_has_no_exit_code() {
        let temp = TempDir::new().unwrap();

        let code = ProcessRunner
            .run("sh", &args(&["-c", "kill -9 $$"]), temp.path())
            .unwrap();
        assert_eq!(code, None);
    }

    #[test]
    fn test_non_utf8_argument_reaches_program() {
        use std::os::unix::ffi::OsStringExt;

        let temp = TempDir::new().unwrap();
        let name = OsString::from_vec(b"caf\xe9.txt".to_vec());

        let code = ProcessRunner
            .run("touch", &[name.clone()], temp.path())
            .unwrap();
        assert_eq!(code, Some(0));
        assert!(temp.path().join(&name).exists());
    }

    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let temp = TempDir::new().unwrap();

        // `test` receives the literal string, so the file is never created
        let code = ProcessRunner
            .run("test", &args(&["-n", "$(touch injected)"]), temp.path())
            .unwrap();
        assert_eq!(code, Some(0));
        assert!(!temp.path().join("injected").exists());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let result = ProcessRunner.run("sww-definitely-not-a-program", &[], temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_directory_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        let result = ProcessRunner.run("sh", &args(&["-c", "exit 0"]), &missing);
        assert!(result.is_err());
    }
}
