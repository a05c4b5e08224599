//! Runs the target command and tees its output.

use super::exit_status::exit_code_for;
use super::fanout::FanOutWriter;
use super::report::write_report;
use crate::environment::ComposedEnvironment;
use crate::error::{Result, SenvError};
use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

/// Size of the buffer used when draining child pipes.
const PIPE_CHUNK: usize = 8192;

/// Outcome of running the target command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code of the child, or a best-effort substitute when none was reported.
    pub exit_code: i32,
    /// Everything the child wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything the child wrote to stderr.
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Launches one child process per [`run`](ProcessRunner::run) call.
///
/// The parent-side sinks receive the child's output in real time and, for
/// stdout, the report printed once the child has exited.
pub struct ProcessRunner {
    stdout: Box<dyn Write + Send>,
    stderr: Box<dyn Write + Send>,
    /// Directories searched for bare program names, normally the parent's `PATH`.
    search_path: Option<OsString>,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::with_sinks(Box::new(io::stdout()), Box::new(io::stderr()))
    }
}

impl ProcessRunner {
    /// Create a runner that relays child output to the given sinks instead of
    /// the real standard streams.
    pub fn with_sinks(stdout: Box<dyn Write + Send>, stderr: Box<dyn Write + Send>) -> Self {
        Self {
            stdout,
            stderr,
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Look up bare program names in `paths` instead of the parent's `PATH`.
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Execute `args[0]` with `args[1..]` under exactly the environment `env`.
    ///
    /// Blocks until the child exits. A non-zero exit is reported through
    /// [`ExecutionResult::exit_code`], not as an error.
    ///
    /// # Errors
    ///
    /// - [`SenvError::InvalidInvocation`] if `args` is empty; nothing is spawned.
    /// - [`SenvError::LaunchFailure`] if the child cannot be started.
    pub fn run(&mut self, args: &[String], env: &ComposedEnvironment) -> Result<ExecutionResult> {
        let Some((program, program_args)) = args.split_first() else {
            return Err(SenvError::InvalidInvocation(
                "expected a command and its arguments, e.g. `senv env printenv`".to_string(),
            ));
        };

        // The child's environment may lack PATH, so bare names are resolved
        // against the parent's search path before the environment is replaced.
        let executable = self.resolve_program(program);
        let mut command = Command::new(&executable);
        command
            .args(program_args)
            .env_clear()
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Applied in order: a later entry for the same name replaces an earlier one.
        for (key, value) in env.iter() {
            command.env(key, value);
        }

        tracing::debug!(program = %program, executable = %executable.display(), args = ?program_args, env_entries = env.len(), "spawning child");

        let mut child = command.spawn().map_err(|e| SenvError::LaunchFailure {
            program: program.clone(),
            reason: e.to_string(),
        })?;

        let child_stdout = child.stdout.take();
        let child_stderr = child.stderr.take();
        let stdout_sink = &mut self.stdout;
        let stderr_sink = &mut self.stderr;

        let (status, stdout, stderr) = thread::scope(|scope| {
            let out = scope.spawn(move || pump(child_stdout, &mut **stdout_sink, "stdout"));
            let err = scope.spawn(move || pump(child_stderr, &mut **stderr_sink, "stderr"));

            let status = match child.wait() {
                Ok(status) => Some(status),
                Err(e) => {
                    tracing::warn!(error = %e, "could not obtain child exit status");
                    None
                }
            };

            let stdout = out.join().unwrap_or_else(|_| {
                tracing::warn!("stdout relay thread panicked");
                Vec::new()
            });
            let stderr = err.join().unwrap_or_else(|_| {
                tracing::warn!("stderr relay thread panicked");
                Vec::new()
            });
            (status, stdout, stderr)
        });

        let result = ExecutionResult {
            exit_code: exit_code_for(status),
            stdout,
            stderr,
        };
        tracing::debug!(
            exit_code = result.exit_code,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "child finished"
        );

        if let Err(e) = write_report(&result, &mut *self.stdout) {
            tracing::warn!(error = %e, "failed to write output report");
        }

        Ok(result)
    }
}

impl ProcessRunner {
    /// Absolute path for a bare program name found on the search path.
    ///
    /// Names containing a path separator, and names that cannot be found, are
    /// returned unchanged; spawning then reports the failure.
    fn resolve_program(&self, program: &str) -> PathBuf {
        if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
            return PathBuf::from(program);
        }
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let paths = self.search_path.as_deref().unwrap_or_else(|| OsStr::new(""));
        match which::which_in(program, Some(paths), &cwd) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(program, error = %e, "program not found on search path");
                PathBuf::from(program)
            }
        }
    }
}

/// Drain a child pipe into the parent sink and a capture buffer until EOF.
///
/// Parent write failures are logged once and otherwise ignored so the pipe
/// keeps draining and the child never blocks on a full buffer.
fn pump<R: Read>(reader: Option<R>, parent: &mut (dyn Write + Send), stream: &str) -> Vec<u8> {
    let mut capture = Vec::new();
    let Some(mut reader) = reader else {
        return capture;
    };

    {
        let sinks: Vec<Box<dyn Write + Send + '_>> = vec![Box::new(parent), Box::new(&mut capture)];
        let mut fan = FanOutWriter::new(sinks);
        let mut relay_failed = false;
        let mut buf = [0u8; PIPE_CHUNK];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(stream, error = %e, "reading child output failed");
                    break;
                }
            };
            let written = fan.write_all(&buf[..n]).and_then(|()| fan.flush());
            if let Err(e) = written {
                if !relay_failed {
                    tracing::warn!(stream, error = %e, "relaying child output failed");
                    relay_failed = true;
                }
            }
        }
    }

    capture
}
