//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_fetcher;

use std::sync::{Arc, Mutex};

use crate::cassette::format::Interaction;
use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded interaction for a given port and method.
///
/// # Errors
///
/// Returns an error if the cassette has no more interactions for the pair.
pub(crate) fn next_interaction(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<Interaction, String> {
    let mut guard = replayer.lock().map_err(|e| format!("Replayer lock poisoned: {e}"))?;
    guard.next_interaction(port, method).cloned()
}

/// Deserialize a replayed output as `Result<T, String>`.
///
/// The outer `Err` means the output could not be understood at all; the inner
/// one carries a recorded failure.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<Result<T, String>, serde_json::Error> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Ok(Err(msg));
    }
    if let Some(ok_val) = output.get("Ok").or_else(|| output.get("ok")) {
        return serde_json::from_value(ok_val.clone()).map(Ok);
    }
    serde_json::from_value(output).map(Ok)
}
