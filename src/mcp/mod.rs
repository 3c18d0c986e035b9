//! MCP (Model Context Protocol) surface over stateless HTTP.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::McpState;
pub use service::McpService;
