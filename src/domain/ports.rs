use crate::domain::model::{InterfaceDescriptor, InterfaceId};
use crate::utils::error::Result;

/// Type-level interface descriptor, implemented by the marker types that
/// [`define_interface!`](crate::define_interface) emits.
pub trait Interface {
    const NAME: &'static str;
    const IID: InterfaceId;
    const BASE: Option<&'static str>;

    const DESCRIPTOR: InterfaceDescriptor =
        InterfaceDescriptor::builtin(Self::NAME, Self::IID, Self::BASE);
}

/// Resolves an interface name to its identifier.
pub trait InterfaceResolver {
    fn identifier_of(&self, name: &str) -> Result<InterfaceId>;
}

pub trait ConfigProvider {
    fn name(&self) -> Option<&str>;
    fn interface(&self) -> &str;
    fn braced(&self) -> bool;
}
