//! HTTP API → MCP mapping assessment.
//!
//! This crate is used by `unrelated-mcp-assess` to decide how each endpoint of an existing HTTP
//! API should be exposed to MCP clients (tool vs resource), and to render the resulting advisory
//! report.
//!
//! The classification, advice, findings and rendering modules are pure and synchronous. Only
//! [`source`] performs I/O.

pub mod advise;
pub mod classify;
pub mod endpoint;
pub mod error;
pub mod findings;
pub mod report;
pub mod source;

pub use classify::{Classification, Primitive, classify};
pub use endpoint::{Endpoint, HttpMethod};
pub use report::{MappingReport, assess, render_markdown, render_report};
pub use source::EndpointSource;
