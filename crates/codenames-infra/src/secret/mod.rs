//! API key lookup.
//!
//! Keys only come from the environment; the variable name is part of the
//! provider configuration.

pub mod env;

pub use env::EnvSecretProvider;
