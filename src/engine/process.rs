//! Engine Process Client
//!
//! Speaks a framed request/response protocol with the engine subprocess
//! over its stdin/stdout. Each frame is one JSON header line followed by
//! raw payload bytes:
//!
//! ```text
//! {"id":1,"op":"load_constraints","sizes":[412,96]}\n<412 bytes><96 bytes>
//! {"id":1,"ok":true,"size":0}\n
//! ```
//!
//! A failure response carries `"ok":false` and an `error` message instead
//! of a payload size.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;

use crate::config::EngineCommand;
use crate::engine::{Engine, EngineError};

const OP_LOAD_CONSTRAINTS: &str = "load_constraints";
const OP_VALIDATE_DOCUMENT: &str = "validate_document";

#[derive(Serialize)]
struct RequestHeader<'a> {
    id: u64,
    op: &'a str,
    sizes: Vec<usize>,
}

#[derive(Deserialize)]
struct ResponseHeader {
    id: u64,
    ok: bool,
    #[serde(default)]
    size: usize,
    #[serde(default)]
    error: String,
}

/// Framed request/response client over a byte stream pair.
struct FramedClient<R, W> {
    reader: BufReader<R>,
    writer: W,
    next_id: u64,
}

impl<R, W> FramedClient<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            next_id: 0,
        }
    }

    async fn call(&mut self, op: &str, parts: &[&[u8]]) -> Result<Vec<u8>, EngineError> {
        self.next_id += 1;
        let id = self.next_id;

        let header = RequestHeader {
            id,
            op,
            sizes: parts.iter().map(|part| part.len()).collect(),
        };
        let mut frame = serde_json::to_vec(&header)
            .map_err(|err| EngineError::Protocol(format!("unencodable request header: {err}")))?;
        frame.push(b'\n');
        for part in parts {
            frame.extend_from_slice(part);
        }

        self.writer.write_all(&frame).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(EngineError::Protocol("engine closed the stream".to_string()));
        }

        let response: ResponseHeader = serde_json::from_str(line.trim_end())
            .map_err(|err| EngineError::Protocol(format!("bad response header: {err}")))?;

        if response.id != id {
            return Err(EngineError::Protocol(format!(
                "response id {} does not match request id {id}",
                response.id
            )));
        }

        if !response.ok {
            return Err(EngineError::Rejected(response.error));
        }

        let mut payload = vec![0u8; response.size];
        self.reader.read_exact(&mut payload).await?;

        Ok(payload)
    }
}

/// Validation engine reached through a spawned subprocess.
///
/// Calls are serialized over the single pipe pair; the child is killed when
/// the handle drops.
pub struct ProcessEngine {
    io: Mutex<FramedClient<ChildStdout, ChildStdin>>,
    _child: Child,
}

impl ProcessEngine {
    /// Spawn the configured engine command with piped stdio.
    pub fn spawn(command: &EngineCommand) -> io::Result<Self> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("engine stdin was not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("engine stdout was not captured"))?;

        log::info!("spawned validation engine: {}", command.program);

        Ok(Self {
            io: Mutex::new(FramedClient::new(stdout, stdin)),
            _child: child,
        })
    }
}

#[async_trait]
impl Engine for ProcessEngine {
    async fn load_constraints(&self, sets: Vec<Vec<u8>>) -> Result<(), EngineError> {
        let parts: Vec<&[u8]> = sets.iter().map(Vec::as_slice).collect();
        let mut io = self.io.lock().await;
        io.call(OP_LOAD_CONSTRAINTS, &parts).await?;
        Ok(())
    }

    async fn validate_document(&self, document: Vec<u8>) -> Result<Vec<u8>, EngineError> {
        let mut io = self.io.lock().await;
        io.call(OP_VALIDATE_DOCUMENT, &[&document]).await
    }
}
