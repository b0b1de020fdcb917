pub mod demo;
pub mod greeter;
pub mod registry;

pub use crate::domain::model::{InterfaceDescriptor, InterfaceId};
pub use crate::domain::ports::{ConfigProvider, Interface, InterfaceResolver};
pub use crate::utils::error::Result;
