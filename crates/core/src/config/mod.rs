//! Configuration loading, schema, and validation
//!
//! Static build declarations with optional `droidforge.toml` overrides.

mod loader;
mod schema;
mod validate;

pub use loader::Config;
pub use schema::*;
pub use validate::validate;
