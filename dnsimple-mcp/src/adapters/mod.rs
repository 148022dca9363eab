//! Platform adapters for the MCP server
//!
//! Implement the core credential collaborators on the local machine:
//! - **`OnePasswordCli`**: reads the token from 1Password through the `op` CLI.
//! - **`FileTokenCache`**: keeps a discovered token in an owner-only `.env` file.

mod secret_source;
mod token_cache;

pub use secret_source::OnePasswordCli;
pub use token_cache::FileTokenCache;
