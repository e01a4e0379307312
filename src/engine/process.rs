//! A running UCI engine child process.
//!
//! The child's stdout and stderr are each drained by a reader thread that
//! forwards complete lines into one channel. Reads from the engine are
//! therefore never blocking: [`EngineProcess::read_lines`] returns whatever
//! whole lines have arrived so far, and a line split across pipe writes is
//! held back until its newline shows up.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use super::config::{EngineBinary, EngineConfig};
use super::error::EngineError;
use crate::uci::{parse_line, EngineCommand, EngineResponse};

pub struct EngineProcess {
    child: Child,
    stdin: Option<ChildStdin>,
    lines: Receiver<String>,
    program: String,
    poll_interval: Duration,
    exit_attempts: u32,
    ready: bool,
    stopped: bool,
}

impl EngineProcess {
    /// Start the first candidate that spawns and completes the handshake.
    ///
    /// Candidates that fail are stopped and logged before the next one is
    /// tried.
    pub fn start(config: &EngineConfig) -> Result<Self, EngineError> {
        let mut tried = Vec::with_capacity(config.candidates.len());
        for candidate in &config.candidates {
            tried.push(candidate.to_string());
            match Self::launch(candidate, config) {
                Ok(process) => return Ok(process),
                Err(e) => warn!("{e}"),
            }
        }
        Err(EngineError::NoEngineAvailable { tried })
    }

    /// Spawn a single program and run the `uci`/`isready` handshake.
    pub fn launch(binary: &EngineBinary, config: &EngineConfig) -> Result<Self, EngineError> {
        let mut process = Self::spawn(binary, config)?;
        if process.handshake(config.handshake_attempts) {
            info!("engine '{}' ready (pid {})", process.program, process.id());
            Ok(process)
        } else {
            let program = process.program.clone();
            process.stop();
            Err(EngineError::Handshake { program })
        }
    }

    /// Spawn the program with piped stdio, without talking to it yet.
    pub fn spawn(binary: &EngineBinary, config: &EngineConfig) -> Result<Self, EngineError> {
        let program = binary.to_string();
        let mut child = Command::new(&binary.program)
            .args(&binary.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: program.clone(),
                source,
            })?;
        debug!("spawned '{program}' (pid {})", child.id());

        let (tx, rx) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            forward_lines(stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            forward_lines(stderr, tx);
        }

        Ok(EngineProcess {
            stdin: child.stdin.take(),
            child,
            lines: rx,
            program,
            poll_interval: config.poll_interval,
            exit_attempts: config.exit_attempts,
            ready: false,
            stopped: false,
        })
    }

    fn handshake(&mut self, attempts: u32) -> bool {
        let interval = self.poll_interval;
        self.ready = self.send(&EngineCommand::Uci)
            && self.poll(interval, attempts, |line| {
                parse_line(line) == EngineResponse::UciOk
            })
            && self.send(&EngineCommand::IsReady)
            && self.poll(interval, attempts, |line| {
                parse_line(line) == EngineResponse::ReadyOk
            });
        self.ready
    }

    /// Write one command line to the engine. Returns false if the pipe is
    /// closed or the write fails.
    pub fn send(&mut self, command: &EngineCommand) -> bool {
        self.send_line(&command.to_string())
    }

    /// Write raw text followed by a newline.
    pub fn send_line(&mut self, line: &str) -> bool {
        let Some(stdin) = self.stdin.as_mut() else {
            return false;
        };
        debug!("{} <- {line}", self.program);
        match write_line(stdin, line) {
            Ok(()) => true,
            Err(e) => {
                warn!("write to '{}' failed: {e}", self.program);
                false
            }
        }
    }

    /// All complete lines received since the last call, in arrival order.
    pub fn read_lines(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        loop {
            match self.lines.try_recv() {
                Ok(line) => {
                    debug!("{} -> {line}", self.program);
                    lines.push(line);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        lines
    }

    /// Sleep-then-read up to `attempts` times, handing each line to
    /// `on_line` until it returns true. Returns whether it did.
    pub fn poll<F>(&mut self, interval: Duration, attempts: u32, mut on_line: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        for _ in 0..attempts {
            thread::sleep(interval);
            for line in self.read_lines() {
                if on_line(&line) {
                    return true;
                }
            }
        }
        false
    }

    /// True once the handshake has completed, until `stop`
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// OS process id of the child
    #[inline]
    #[must_use]
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Display name of the launched program and arguments
    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Ask the engine to quit, close its input, and reap it. The child is
    /// killed if it has not exited within the configured budget. Calling
    /// this more than once is a no-op.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.ready = false;

        self.send(&EngineCommand::Quit);
        drop(self.stdin.take());

        for _ in 0..self.exit_attempts {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    debug!("'{}' exited with {status}", self.program);
                    return;
                }
                Ok(None) => thread::sleep(self.poll_interval),
                Err(e) => {
                    warn!("waiting on '{}' failed: {e}", self.program);
                    break;
                }
            }
        }

        warn!("'{}' did not exit after quit, killing it", self.program);
        if let Err(e) = self.child.kill() {
            debug!("kill '{}': {e}", self.program);
        }
        if let Err(e) = self.child.wait() {
            warn!("reaping '{}' failed: {e}", self.program);
        }
    }

    /// Whether `stop` has already run
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        self.stop();
    }
}

fn write_line(stdin: &mut ChildStdin, line: &str) -> io::Result<()> {
    stdin.write_all(line.as_bytes())?;
    stdin.write_all(b"\n")?;
    stdin.flush()
}

/// Forward newline-terminated lines from `source` until EOF. The thread is
/// detached; it ends when the child closes the pipe.
fn forward_lines<R: Read + Send + 'static>(source: R, tx: Sender<String>) {
    thread::spawn(move || {
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&buf);
                    let line = text.trim_end_matches(['\r', '\n']).to_string();
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
