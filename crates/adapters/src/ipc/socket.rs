// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live query bridge over a Unix socket.
//!
//! Wire format: 4-byte length prefix (big-endian) + JSON payload.
//!
//! ```text
//! -> {"channel": "Penumbra.GetCollections"}
//! <- {"names": ["Default", "Raid"]}
//! <- {"error": "not_ready"}
//! ```
//!
//! One connection per query. The whole exchange shares a single deadline, so
//! an engine that trickles bytes cannot stretch a query past its timeout.

use super::{IpcError, LiveQueryBridge};
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Largest response accepted from the engine.
pub const MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    channel: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QueryResponse {
    Names { names: Vec<String> },
    Error { error: String },
}

/// Bridge that queries the engine through a Unix socket.
#[derive(Debug, Clone)]
pub struct SocketBridge {
    path: PathBuf,
    timeout: Duration,
}

impl SocketBridge {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { path: path.into(), timeout }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<UnixStream, IpcError> {
        let stream = UnixStream::connect(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::ConnectionRefused => IpcError::NotRegistered,
            _ => IpcError::Io(e),
        })?;
        Ok(stream)
    }

    fn map_io(&self, e: std::io::Error) -> IpcError {
        match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => IpcError::Timeout(self.timeout),
            _ => IpcError::Io(e),
        }
    }
}

impl LiveQueryBridge for SocketBridge {
    fn query_names(&self, channel: &str) -> Result<Vec<String>, IpcError> {
        let deadline = Instant::now() + self.timeout;
        let mut stream = DeadlineStream { stream: self.connect()?, deadline };

        let request = serde_json::to_vec(&QueryRequest { channel })
            .map_err(|e| IpcError::Serialization(e.to_string()))?;
        write_frame(&mut stream, &request).map_err(|e| self.map_io(e))?;

        let payload = read_frame(&mut stream).map_err(|e| self.map_io(e))?;
        let response: QueryResponse = serde_json::from_slice(&payload)
            .map_err(|e| IpcError::Serialization(e.to_string()))?;

        match response {
            QueryResponse::Names { names } => Ok(names),
            QueryResponse::Error { error } => Err(match error.as_str() {
                "not_registered" => IpcError::NotRegistered,
                "not_ready" => IpcError::NotReady,
                _ => IpcError::Engine(error),
            }),
        }
    }
}

/// Stream whose reads and writes fail with `TimedOut` once `deadline` passes.
struct DeadlineStream {
    stream: UnixStream,
    deadline: Instant,
}

impl DeadlineStream {
    fn remaining(&self) -> std::io::Result<Duration> {
        let left = self.deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Err(std::io::Error::new(ErrorKind::TimedOut, "query deadline elapsed"));
        }
        Ok(left)
    }
}

impl Read for DeadlineStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let left = self.remaining()?;
        self.stream.set_read_timeout(Some(left))?;
        self.stream.read(buf)
    }
}

impl Write for DeadlineStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let left = self.remaining()?;
        self.stream.set_write_timeout(Some(left))?;
        self.stream.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stream.flush()
    }
}

/// Write one length-prefixed frame.
pub fn write_frame(writer: &mut impl Write, payload: &[u8]) -> std::io::Result<()> {
    let len = u32::try_from(payload.len())
        .map_err(|_| std::io::Error::new(ErrorKind::InvalidInput, "frame too large"))?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(payload)?;
    writer.flush()
}

/// Read one length-prefixed frame.
pub fn read_frame(reader: &mut impl Read) -> std::io::Result<Vec<u8>> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("frame of {len} bytes exceeds limit"),
        ));
    }
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

#[cfg(test)]
#[path = "socket_tests.rs"]
mod tests;
