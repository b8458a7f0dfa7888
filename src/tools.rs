// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tool definitions and dispatch for the tool-call shell.
//!
//! Three named operations, one per engine, each accepting `{url, options}`
//! and returning the serialized normalized report as the payload.

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::executor::AuditExecutor;
use crate::report::{AuditReport, Engine};
use serde::Serialize;
use serde_json::{json, Value};

/// One advertised tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The three audit tools this server advertises
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "axe_audit",
            description: "Run an accessibility audit using the axe-core DOM-rule engine. \
                          Supports URLs, local file paths, and localhost URLs.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to audit (http://, https://), local file path (./file.html), or file:// URL"
                    },
                    "options": {
                        "type": "object",
                        "description": "Optional axe-core configuration",
                        "properties": {
                            "tags": {
                                "type": "array",
                                "items": { "type": "string" },
                                "description": "WCAG tags to include (e.g., [\"wcag2a\", \"wcag2aa\"])"
                            },
                            "rules": {
                                "type": "object",
                                "description": "Rule-specific configuration"
                            },
                            "timeout": {
                                "type": "number",
                                "description": "Timeout in milliseconds"
                            },
                            "browser": {
                                "type": "string",
                                "enum": ["chromium", "firefox", "webkit"],
                                "description": "Browser to use"
                            }
                        }
                    }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "lighthouse_audit",
            description: "Run an accessibility audit using the Lighthouse page-quality engine. \
                          Supports URLs, local file paths, and localhost URLs.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to audit (http://, https://), local file path (./file.html), or file:// URL"
                    },
                    "categories": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Lighthouse categories to include (default: accessibility)"
                    },
                    "options": {
                        "type": "object",
                        "description": "Optional Lighthouse configuration",
                        "properties": {
                            "onlyCategories": {
                                "type": "array",
                                "items": { "type": "string" },
                                "description": "Categories to include"
                            },
                            "skipAudits": {
                                "type": "array",
                                "items": { "type": "string" },
                                "description": "Audits to skip"
                            },
                            "timeout": {
                                "type": "number",
                                "description": "Timeout in milliseconds"
                            }
                        }
                    }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "wave_audit",
            description: "Run an accessibility audit using the WAVE remote scanning API \
                          (requires WAVE_API_KEY). Local files are served via a temporary \
                          local server.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to audit (http://, https://), local file path (./file.html), or localhost URL"
                    },
                    "apiKey": {
                        "type": "string",
                        "description": "WAVE API key (optional, uses WAVE_API_KEY env var if not provided)"
                    }
                },
                "required": ["url"]
            }),
        },
    ]
}

/// Dispatch a named tool call to the executor
pub async fn call(executor: &AuditExecutor, name: &str, args: &Value) -> Result<AuditReport> {
    let engine = match name {
        "axe_audit" => Engine::Axe,
        "lighthouse_audit" => Engine::Lighthouse,
        "wave_audit" => Engine::Wave,
        other => {
            return Err(AuditError::InvalidInput(format!("Unknown tool: {}", other)));
        }
    };

    let url = args
        .get("url")
        .and_then(Value::as_str)
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AuditError::InvalidInput("URL is required".to_string()))?;

    let mut config: AuditConfig = match args.get("options") {
        Some(options) if options.is_object() => serde_json::from_value(options.clone())?,
        _ => AuditConfig::default(),
    };

    // Two options live at the argument top level in the tool schemas
    if config.categories.is_none() {
        if let Some(categories) = args.get("categories") {
            config.categories = serde_json::from_value(categories.clone()).ok();
        }
    }
    if config.api_key.is_none() {
        if let Some(key) = args.get("apiKey").and_then(Value::as_str) {
            config.api_key = Some(key.to_string());
        }
    }

    executor.run(engine, url, &config).await
}
