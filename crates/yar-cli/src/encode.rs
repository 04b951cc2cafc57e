//! Encode requests and responses into framed YAR messages

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use yar_transport::{Envelope, Request, Response};

/// Frame a request whose params are given as a JSON array
pub fn encode_request(id: u32, method: &str, params: &str, envelope: &Envelope) -> Result<Vec<u8>> {
    let params: Vec<Value> =
        serde_json::from_str(params).context("--params must be a JSON array")?;
    let request = Request::new(id, method, params);
    tracing::debug!(id, method, params = request.params.len(), "encoding request");
    Ok(request.to_frame(envelope)?)
}

/// Frame a response whose result is given as JSON text
pub fn encode_response(
    id: u32,
    status: i32,
    result: &str,
    output: &str,
    error: &str,
    envelope: &Envelope,
) -> Result<Vec<u8>> {
    let result: Value = serde_json::from_str(result).context("--result must be valid JSON")?;
    let response = Response {
        id,
        status,
        result,
        output: output.to_string(),
        error: error.to_string(),
    };
    tracing::debug!(id, status, "encoding response");
    Ok(response.to_frame(envelope)?)
}

/// Write `frame` to `out`, or to stdout when no path is given
pub fn emit(frame: &[u8], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, frame)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(frame).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "encode/encode_tests.rs"]
mod encode_tests;
