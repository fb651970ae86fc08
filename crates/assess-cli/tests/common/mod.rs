use anyhow::Context as _;
use std::process::{Command, Output};

pub use unrelated_test_support::DocumentServer;

pub const PETSTORE_YAML: &str = r#"
openapi: "3.0.0"
info:
  title: Petstore
  version: "1"
paths:
  /api/v1/pets:
    get:
      operationId: listPets
      summary: List all pets
    post:
      operationId: createPet
      summary: Create a pet
  /api/v1/pets/{petId}:
    get:
      operationId: showPetById
    delete:
      operationId: deletePet
  /admin/reports:
    get: {}
"#;

/// Run the assess binary to completion with a clean environment for its own env vars.
pub fn run_assess(args: &[&str]) -> anyhow::Result<Output> {
    let bin = env!("CARGO_BIN_EXE_unrelated-mcp-assess");
    Command::new(bin)
        .args(args)
        .env_remove("MCP_ASSESS_OUT")
        .env_remove("MCP_ASSESS_FORMAT")
        .env_remove("MCP_ASSESS_LOG")
        .output()
        .context("run unrelated-mcp-assess")
}
