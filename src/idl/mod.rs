//! Interfaces produced by the interface-definition tooling.
//!
//! Each interface is a zero-sized marker type carrying its name and GUID as
//! associated constants, so `iid_of::<ICalculator>()` is resolved at compile
//! time. Identifiers are assigned once here and never regenerated.

use crate::domain::model::InterfaceDescriptor;
use crate::domain::ports::Interface;

/// Declares an interface marker type with a fixed identifier.
///
/// ```
/// use idl_demo::define_interface;
/// use idl_demo::domain::ports::Interface;
/// use idl_demo::idl::IUnknown;
///
/// define_interface! {
///     /// Scientific extensions.
///     pub IScientific = "6A1C3B52-8D4E-4F0A-9B7C-2E5D1F3A4B6C": IUnknown
/// }
///
/// assert_eq!(IScientific::NAME, "IScientific");
/// assert_eq!(IScientific::BASE, Some("IUnknown"));
/// ```
#[macro_export]
macro_rules! define_interface {
    (@base) => {
        None
    };
    (@base $base:ident) => {
        Some(<$base as $crate::domain::ports::Interface>::NAME)
    };
    ($(#[$meta:meta])* $vis:vis $name:ident = $iid:literal $(: $base:ident)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::domain::ports::Interface for $name {
            const NAME: &'static str = stringify!($name);
            const IID: $crate::domain::model::InterfaceId =
                $crate::domain::model::InterfaceId::from_uuid($crate::uuid::uuid!($iid));
            const BASE: Option<&'static str> = $crate::define_interface!(@base $($base)?);
        }
    };
}

define_interface! {
    /// Root of every COM-style interface hierarchy.
    pub IUnknown = "00000000-0000-0000-C000-000000000046"
}

define_interface! {
    /// Calculator capability. Its operations are not part of this crate.
    pub ICalculator = "7F5A1C3E-9B2D-4E6F-8A0C-1D3E5F7A9B2C": IUnknown
}

/// Every interface defined above, bases first.
pub static BUILTIN_INTERFACES: &[InterfaceDescriptor] = &[IUnknown::DESCRIPTOR, ICalculator::DESCRIPTOR];
