// SPDX-License-Identifier: PMPL-1.0-or-later
//! Engine adapters - process and HTTP invocation of the wrapped engines.
//!
//! Adapters own the only I/O in the crate: they resolve the input to a
//! reachable address, invoke the engine, and hand its native report
//! untouched to the normalizer. An engine failure, timeout, or empty
//! report surfaces as an error, never as an empty result.

pub mod axe;
pub mod lighthouse;
pub mod wave;

pub use axe::AxeAdapter;
pub use lighthouse::LighthouseAdapter;
pub use wave::WaveAdapter;

use crate::error::{AuditError, Result};
use crate::report::Engine;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Spawn an engine process, enforce the timeout, and return its stdout.
///
/// The child is killed if the timeout elapses or the future is dropped.
pub(crate) async fn run_engine_command(
    mut command: Command,
    engine: Engine,
    timeout_ms: u64,
) -> Result<Vec<u8>> {
    command.stdout(Stdio::piped()).stderr(Stdio::piped()).kill_on_drop(true);
    debug!("Invoking {} engine: {:?}", engine, command.as_std());

    let child = command.spawn().map_err(|e| {
        AuditError::engine(engine, format!("Failed to launch engine process: {}", e))
    })?;

    let output = tokio::time::timeout(Duration::from_millis(timeout_ms), child.wait_with_output())
        .await
        .map_err(|_| AuditError::Timeout { engine, ms: timeout_ms })??;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AuditError::engine(
            engine,
            format!("Engine exited with {}: {}", output.status, stderr.trim()),
        ));
    }
    if output.stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(AuditError::engine(engine, "Engine returned an empty report"));
    }

    Ok(output.stdout)
}
