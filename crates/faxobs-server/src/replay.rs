//! Line-oriented call replay.
//!
//! Each input line carries one call, `<opnum> <hex stub>`, and produces one
//! output line: `<status> <hex reply>` when the call was answered, `noreply`
//! for unroutable opnums, or `error <message>` when the line or the call
//! failed. Blank lines and lines starting with `#` are skipped.

use msrpc_dispatch::{CallContext, CallOutcome, CancellationHandle, Registry, SyntaxId};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    #[error("invalid opnum '{0}'")]
    InvalidOpnum(String),

    #[error("invalid stub: {0}")]
    InvalidStub(#[from] hex::FromHexError),

    #[error("line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayCall {
    pub opnum: u16,
    pub stub: Vec<u8>,
}

/// Counters reported when the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub replies: usize,
    pub no_replies: usize,
    pub errors: usize,
}

impl ReplayStats {
    pub fn calls(&self) -> usize {
        self.replies + self.no_replies + self.errors
    }
}

/// Parse one raw input line, terminator included.
pub fn parse_raw_line(raw: Vec<u8>) -> Result<Option<ReplayCall>, ReplayError> {
    let line = String::from_utf8(raw)?;
    parse_line(&line)
}

/// Parse a single input line. `Ok(None)` for lines that carry no call.
pub fn parse_line(line: &str) -> Result<Option<ReplayCall>, ReplayError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (opnum, stub) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let opnum = opnum
        .parse()
        .map_err(|_| ReplayError::InvalidOpnum(opnum.to_string()))?;
    let stub = hex::decode(stub.trim())?;
    Ok(Some(ReplayCall { opnum, stub }))
}

pub fn format_outcome(outcome: &CallOutcome) -> String {
    match outcome {
        CallOutcome::Reply { status, stub } => format!("{} {}", status.code(), hex::encode(stub)),
        CallOutcome::NoReply => "noreply".to_string(),
    }
}

/// Replay every call read from `input` against `syntax`, writing one line
/// per call to `output`.
///
/// Stops at end of input or once `shutdown` is cancelled. Calls share the
/// shutdown handle, so handlers observe it as call cancellation.
pub async fn run<R, W>(
    registry: &Registry,
    syntax: SyntaxId,
    mut input: R,
    mut output: W,
    shutdown: &CancellationHandle,
) -> std::io::Result<ReplayStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ReplayStats::default();

    loop {
        let mut buf = Vec::new();
        let read = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                debug!("replay interrupted");
                break;
            }
            read = input.read_until(b'\n', &mut buf) => read?,
        };
        if read == 0 {
            break;
        }

        let call = match parse_raw_line(buf) {
            Ok(Some(call)) => call,
            Ok(None) => continue,
            Err(err) => {
                warn!(error = %err, "skipping malformed line");
                stats.errors += 1;
                output.write_all(format!("error {}\n", err).as_bytes()).await?;
                continue;
            }
        };

        let ctx = CallContext::with_cancellation(shutdown.clone()).with_syntax(syntax);
        let reply = match registry.call(&ctx, &syntax, call.opnum, &call.stub).await {
            Ok(outcome) => {
                match outcome {
                    CallOutcome::Reply { .. } => stats.replies += 1,
                    CallOutcome::NoReply => stats.no_replies += 1,
                }
                format_outcome(&outcome)
            }
            Err(err) => {
                warn!(call_id = ctx.call_id, opnum = call.opnum, error = %err, "call failed");
                stats.errors += 1;
                format!("error {}", err)
            }
        };
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    output.flush().await?;
    Ok(stats)
}
