//! Tool registry - central routing for MCP tools.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::batch_rejection;
use crate::mcp::content::{ContentItem, ToolResult};
use crate::narrative::report_batch;

use super::susun_narasi::{self, SusunNarasiRequest};

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
pub struct ToolRegistry {
    max_batch_size: usize,
}

impl ToolRegistry {
    pub fn new(max_batch_size: usize) -> Self {
        Self { max_batch_size }
    }

    /// List all available tools per MCP spec.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![susun_narasi::descriptor()]
    }

    /// Call a tool by name with the given arguments.
    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match name {
            susun_narasi::TOOL_NAME => self.call_susun_narasi(arguments),
            _ => ToolResult::error(format!(
                "Tool '{}' tidak tersedia. Tools yang tersedia: {}",
                name,
                susun_narasi::TOOL_NAME
            )),
        }
    }

    fn call_susun_narasi(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<SusunNarasiRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        if let Some(message) = batch_rejection(request.documents.len(), self.max_batch_size) {
            return ToolResult::error(message);
        }

        let reports = report_batch(&request.documents);

        let mut content: Vec<ContentItem> = reports
            .iter()
            .map(|report| ContentItem::text(report.narrative.clone()))
            .collect();

        let findings: Vec<String> = reports
            .iter()
            .filter(|report| !report.warnings.is_empty())
            .map(|report| {
                format!(
                    "Dokumen {}:\n{}",
                    report.index + 1,
                    report
                        .warnings
                        .iter()
                        .map(|w| format!("- {}", w))
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            })
            .collect();

        if !findings.is_empty() {
            content.push(ContentItem::text(format!(
                "Catatan pemeriksaan data:\n{}",
                findings.join("\n\n")
            )));
        }

        ToolResult::success(content)
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Argumen tidak valid: {}", err))
}
