// MCP (Model Context Protocol) server exposing Synchro Bus transit data
// as tools to agent clients over stdio.

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::McpConfig;
pub use server::McpServer;
