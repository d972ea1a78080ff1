//! Search Process Supervisor
//!
//! Owns the external search tool for the duration of one query.
//!
//! ```text
//!   payload ──► [writer thread] ──► stdin ─┐
//!                                           │  search tool
//!   Vec<u8> ◄── [drain, caller thread] ◄── stdout ─┘
//!                     │
//!                     ▼
//!                  wait() → ExitStatus
//! ```
//!
//! The query is written on a scoped helper thread while the caller drains
//! stdout, so neither pipe can fill up and stall the other. The child is
//! always reaped: explicitly through [`SearchProcess::wait`], or by
//! kill-and-wait when a [`SearchProcess`] is dropped early.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors launching or talking to the search tool
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The program could not be started
    #[error("Failed to spawn search tool '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Pipe or wait failure
    #[error("Search tool I/O error: {0}")]
    Io(#[from] io::Error),

    /// A pipe was already taken
    #[error("Search tool {0} pipe was not captured")]
    MissingPipe(&'static str),

    /// The stdin writer thread panicked
    #[error("Query writer thread panicked")]
    WriterPanicked,
}

/// How to launch the external search tool
#[derive(Debug, Clone)]
pub struct SearchCommand {
    /// Program to execute
    pub program: String,
    /// Arguments placed before the search flags
    pub program_args: Vec<String>,
    /// Target database (`-db`)
    pub database: PathBuf,
    /// Output format code (`-outfmt`)
    pub outfmt: String,
    /// Thread count hint (`-num_threads`)
    pub num_threads: u32,
    /// Arguments appended after the search flags
    pub extra_args: Vec<String>,
}

impl SearchCommand {
    /// `blastp`-style command with tabular output on two threads
    pub fn new(program: impl Into<String>, database: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            program_args: Vec::new(),
            database: database.into(),
            outfmt: "6".to_string(),
            num_threads: 2,
            extra_args: Vec::new(),
        }
    }

    /// Full argument list, query read from stdin
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.program_args.iter().map(OsString::from).collect();
        args.push("-query".into());
        args.push("-".into());
        args.push("-db".into());
        args.push(self.database.clone().into_os_string());
        args.push("-outfmt".into());
        args.push(self.outfmt.clone().into());
        args.push("-num_threads".into());
        args.push(self.num_threads.to_string().into());
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        command
    }

    /// Run one query to completion and collect the tool's output.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`SearchOutcome::success`].
    pub fn run(&self, payload: &[u8]) -> Result<SearchOutcome, SupervisorError> {
        let mut process = SearchProcess::spawn(self)?;
        let stdin = process.take_stdin()?;

        let stdout = std::thread::scope(|scope| {
            let writer = scope.spawn(move || feed(stdin, payload));
            let drained = process.drain();
            if drained.is_err() {
                // Unblock the writer before joining it
                process.kill();
            }
            let fed = writer.join().map_err(|_| SupervisorError::WriterPanicked)?;
            fed?;
            drained
        })?;

        let status = process.wait()?;
        Ok(SearchOutcome { status, stdout })
    }
}

/// Write the whole query and close stdin.
///
/// A tool that exits without reading its input closes the pipe; that is left
/// for the exit status to report.
fn feed(mut stdin: ChildStdin, payload: &[u8]) -> Result<(), SupervisorError> {
    match stdin.write_all(payload) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("search tool closed stdin before reading the full query");
            Ok(())
        }
        Err(e) => Err(SupervisorError::Io(e)),
    }
}

/// A running search tool
pub struct SearchProcess {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Option<ChildStdout>,
    reaped: bool,
}

impl SearchProcess {
    /// Launch the tool with stdin and stdout piped
    pub fn spawn(search: &SearchCommand) -> Result<Self, SupervisorError> {
        let mut child = search
            .command()
            .spawn()
            .map_err(|source| SupervisorError::SpawnFailed {
                program: search.program.clone(),
                source,
            })?;
        tracing::trace!(pid = child.id(), program = %search.program, "spawned search tool");

        Ok(Self {
            stdin: child.stdin.take(),
            stdout: child.stdout.take(),
            child,
            reaped: false,
        })
    }

    /// Take the input end, to be written from another thread
    pub fn take_stdin(&mut self) -> Result<ChildStdin, SupervisorError> {
        self.stdin.take().ok_or(SupervisorError::MissingPipe("stdin"))
    }

    /// Read stdout until the tool closes it
    pub fn drain(&mut self) -> Result<Vec<u8>, SupervisorError> {
        let mut stdout = self
            .stdout
            .take()
            .ok_or(SupervisorError::MissingPipe("stdout"))?;
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Close any remaining input and reap the process
    pub fn wait(mut self) -> Result<ExitStatus, SupervisorError> {
        self.stdin.take();
        let status = self.child.wait()?;
        self.reaped = true;
        tracing::trace!(pid = self.child.id(), ?status, "search tool exited");
        Ok(status)
    }

    /// Kill the process; it is reaped by `wait` or on drop
    pub fn kill(&mut self) {
        let _ = self.child.kill();
    }
}

impl Drop for SearchProcess {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Exit status and output of one search
#[derive(Debug)]
pub struct SearchOutcome {
    /// How the tool exited
    pub status: ExitStatus,
    /// Everything the tool wrote to stdout
    pub stdout: Vec<u8>,
}

impl SearchOutcome {
    /// Whether the tool exited with code 0
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` if the tool was terminated by a signal
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Newline-terminated lines of output; one per hit in tabular formats
    pub fn hit_count(&self) -> usize {
        self.stdout.iter().filter(|&&b| b == b'\n').count()
    }
}
