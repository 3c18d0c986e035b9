//! MCP tools exposed by this server.

pub mod registry;
pub mod susun_narasi;

pub use registry::{ToolDescriptor, ToolRegistry};
