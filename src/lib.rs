pub mod config;
pub mod core;
pub mod domain;
pub mod idl;
pub mod utils;

pub use uuid;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::InterfaceManifest;

pub use crate::core::{demo::Demo, registry::iid_of, registry::InterfaceRegistry};
pub use domain::model::{InterfaceDescriptor, InterfaceId};
pub use utils::error::{DemoError, Result};
