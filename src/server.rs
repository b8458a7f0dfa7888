// SPDX-License-Identifier: PMPL-1.0-or-later
//! Stdio tool-call shell: a line-delimited JSON-RPC 2.0 loop exposing
//! the three audit tools to MCP clients.
//!
//! One request per line in, one response per line out. Notifications
//! (messages without an id) produce no response. Tool failures are
//! reported in-band as `isError` content so the client can surface the
//! message; protocol violations become JSON-RPC errors.

use crate::error::Result;
use crate::executor::AuditExecutor;
use crate::tools;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

/// Serve tool calls over stdin/stdout until EOF
pub async fn serve(executor: AuditExecutor) -> Result<()> {
    info!("auditbot serving on stdio");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(response) = handle_message(&executor, &line).await else {
            continue;
        };
        let mut bytes = serde_json::to_vec(&response)?;
        bytes.push(b'\n');
        stdout.write_all(&bytes).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

/// Handle one raw message; `None` means no response is owed
async fn handle_message(executor: &AuditExecutor, raw: &str) -> Option<Value> {
    let message: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            return Some(error_response(Value::Null, PARSE_ERROR, &format!("Parse error: {}", e)));
        }
    };

    let method = message.get("method").and_then(Value::as_str).unwrap_or_default();
    let id = message.get("id").cloned();

    // Notifications carry no id and get no response
    let Some(id) = id else {
        debug!("Notification: {}", method);
        return None;
    };

    debug!("Request {}: {}", id, method);
    let response = match method {
        "initialize" => result_response(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": "auditbot",
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        ),
        "ping" => result_response(id, json!({})),
        "tools/list" => result_response(id, json!({ "tools": tools::definitions() })),
        "tools/call" => {
            let params = message.get("params").cloned().unwrap_or(Value::Null);
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return Some(error_response(id, INVALID_PARAMS, "Missing tool name"));
            };
            let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

            match tools::call(executor, name, &args).await {
                Ok(report) => {
                    let text = serde_json::to_string_pretty(&report)
                        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
                    result_response(
                        id,
                        json!({ "content": [{ "type": "text", "text": text }] }),
                    )
                }
                Err(e) => result_response(
                    id,
                    json!({
                        "content": [{ "type": "text", "text": e.to_string() }],
                        "isError": true,
                    }),
                ),
            }
        }
        other => error_response(id, METHOD_NOT_FOUND, &format!("Unknown method: {}", other)),
    };

    Some(response)
}

fn result_response(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}
