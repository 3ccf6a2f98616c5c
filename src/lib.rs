// Client Registry - Core Library
// Exposes the registry for the console binary and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod registry;
pub mod shell;

// Re-export commonly used types
pub use entities::{Category, Client, ClientKind, DEFAULT_VIP_DISCOUNT};
pub use error::{RegistryError, Result};
pub use registry::{CategoryChange, ClientRegistry, EmailChange};
pub use shell::{run_demo, Flow, Shell};
