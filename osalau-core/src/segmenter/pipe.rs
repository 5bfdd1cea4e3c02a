//! Subprocess-backed segmenter
//!
//! Osalausestaja runs as a long-lived child process and speaks a line
//! protocol: one line of input on its stdin yields one line of analysis on
//! its stdout. [`PipeSegmenter`] owns that child for the life of the relay
//! and is used exclusively by one thread, so no locking is involved.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use crate::error::{OsalauError, Result};
use crate::segmenter::Segmenter;

/// Description of the `java -jar Osalau.jar` invocation.
#[derive(Debug, Clone)]
pub struct JavaCommand {
    /// Java executable, `java` by default
    pub java: PathBuf,
    /// Path to the Osalausestaja jar
    pub jar: PathBuf,
    /// Ask the segmenter to guess clause boundaries even when commas are
    /// missing from the input. May introduce additional errors.
    pub ignore_missing_commas: bool,
}

impl JavaCommand {
    /// Describe an invocation of the given jar with default settings.
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            java: PathBuf::from("java"),
            jar: jar.into(),
            ignore_missing_commas: false,
        }
    }

    /// Override the java executable.
    pub fn java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = java.into();
        self
    }

    /// Enable the missing-comma guessing mode (`-ins_comma_mis`).
    pub fn ignore_missing_commas(mut self, enabled: bool) -> Self {
        self.ignore_missing_commas = enabled;
        self
    }

    /// Launch the segmenter process described by this command.
    pub fn spawn(&self) -> Result<PipeSegmenter> {
        let mut args: Vec<OsString> = vec![
            "-jar".into(),
            self.jar.as_os_str().to_os_string(),
            "-pyvabamorf".into(),
        ];
        if self.ignore_missing_commas {
            args.push("-ins_comma_mis".into());
        }
        PipeSegmenter::spawn(&self.java, &args)
    }
}

/// Segmenter backed by an external process with piped stdin/stdout.
///
/// The child is launched once and reused for every line. Dropping the
/// handle kills and reaps the child.
pub struct PipeSegmenter {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    command: String,
}

impl PipeSegmenter {
    /// Spawn an arbitrary command as a line-protocol segmenter.
    ///
    /// stderr is inherited so diagnostics from the child remain visible.
    pub fn spawn<S: AsRef<std::ffi::OsStr>>(program: impl AsRef<Path>, args: &[S]) -> Result<Self> {
        let program = program.as_ref();
        let command = std::iter::once(program.display().to_string())
            .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ");

        log::debug!("launching segmenter: {command}");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| OsalauError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Both pipes were requested above, so take() cannot fail.
        let stdin = child.stdin.take().ok_or(OsalauError::SegmenterClosed)?;
        let stdout = child.stdout.take().ok_or(OsalauError::SegmenterClosed)?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            command,
        })
    }

    /// The command line this segmenter was launched with.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl std::fmt::Debug for PipeSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeSegmenter")
            .field("command", &self.command)
            .finish()
    }
}

impl Segmenter for PipeSegmenter {
    fn analyze(&mut self, line: &str) -> Result<String> {
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;

        let mut answer = String::new();
        if self.stdout.read_line(&mut answer)? == 0 {
            return Err(OsalauError::SegmenterClosed);
        }
        Ok(answer)
    }
}

impl Drop for PipeSegmenter {
    fn drop(&mut self) {
        // Terminate the child and reap it so no zombie is left behind.
        // Errors are ignored: the child may already have exited.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
