use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 128-bit identifier naming an interface across binaries and builds.
///
/// The canonical text form is uppercase and hyphenated
/// (`XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`); [`InterfaceId::braced`] gives
/// the `{...}` form used by COM registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterfaceId(Uuid);

impl InterfaceId {
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Registry form, e.g. `{00000000-0000-0000-C000-000000000046}`.
    pub fn braced(&self) -> String {
        format!("{:X}", self.0.braced())
    }

    pub fn parse(value: &str) -> Result<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|source| DemoError::InvalidIdentifier {
                value: value.to_string(),
                source,
            })
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.hyphenated())
    }
}

impl FromStr for InterfaceId {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InterfaceId {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<InterfaceId> for String {
    fn from(iid: InterfaceId) -> Self {
        iid.to_string()
    }
}

impl From<Uuid> for InterfaceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A named interface contract and the identifier assigned to it.
///
/// Built-in descriptors borrow `'static` strings; descriptors loaded from a
/// manifest own theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub name: Cow<'static, str>,
    pub iid: InterfaceId,
    pub base: Option<Cow<'static, str>>,
}

impl InterfaceDescriptor {
    pub const fn builtin(name: &'static str, iid: InterfaceId, base: Option<&'static str>) -> Self {
        let base = match base {
            Some(base) => Some(Cow::Borrowed(base)),
            None => None,
        };
        Self {
            name: Cow::Borrowed(name),
            iid,
            base,
        }
    }

    pub fn new(name: impl Into<String>, iid: InterfaceId, base: Option<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            iid,
            base: base.map(Cow::Owned),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }
}
