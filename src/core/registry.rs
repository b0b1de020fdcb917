use crate::config::manifest::InterfaceManifest;
use crate::domain::model::{InterfaceDescriptor, InterfaceId};
use crate::domain::ports::{Interface, InterfaceResolver};
use crate::idl::BUILTIN_INTERFACES;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::Validate;
use std::collections::HashMap;

/// Identifier of `I`, resolved at compile time.
pub const fn iid_of<I: Interface>() -> InterfaceId {
    I::IID
}

/// Name and identifier table for known interfaces.
///
/// Names and identifiers are both unique. Registration order is preserved so
/// a base interface always precedes the interfaces deriving from it.
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    descriptors: Vec<InterfaceDescriptor>,
    by_name: HashMap<String, usize>,
    by_iid: HashMap<InterfaceId, usize>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every generated interface.
    pub fn builtin() -> Result<Self> {
        Self::from_descriptors(BUILTIN_INTERFACES.iter().cloned())
    }

    pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = InterfaceDescriptor>,
    {
        let mut registry = Self::new();
        registry.extend(descriptors)?;
        Ok(registry)
    }

    /// Built-in interfaces followed by the manifest's, in declaration order.
    pub fn with_manifest(manifest: InterfaceManifest) -> Result<Self> {
        manifest.validate()?;
        let mut registry = Self::builtin()?;
        registry.extend(manifest.into_descriptors()?)?;
        tracing::info!("Loaded {} interfaces", registry.len());
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: InterfaceDescriptor) -> Result<()> {
        if let Some(&index) = self
            .by_name
            .get(descriptor.name())
            .or_else(|| self.by_iid.get(&descriptor.iid))
        {
            let existing = &self.descriptors[index];
            return Err(DemoError::DuplicateInterface {
                name: descriptor.name().to_string(),
                iid: existing.iid,
            });
        }

        if let Some(base) = descriptor.base() {
            if !self.by_name.contains_key(base) {
                return Err(DemoError::UnknownBaseInterface {
                    name: descriptor.name().to_string(),
                    base: base.to_string(),
                });
            }
        }

        tracing::debug!("Registered interface {} {}", descriptor.name(), descriptor.iid.braced());

        let index = self.descriptors.len();
        self.by_name.insert(descriptor.name().to_string(), index);
        self.by_iid.insert(descriptor.iid, index);
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Registers each descriptor in order, stopping at the first failure.
    pub fn extend<I>(&mut self, descriptors: I) -> Result<()>
    where
        I: IntoIterator<Item = InterfaceDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    pub fn descriptor_of(&self, name: &str) -> Result<&InterfaceDescriptor> {
        self.by_name
            .get(name)
            .map(|&index| &self.descriptors[index])
            .ok_or_else(|| DemoError::UnknownInterface {
                name: name.to_string(),
            })
    }

    pub fn identifier_of(&self, name: &str) -> Result<InterfaceId> {
        self.descriptor_of(name).map(|descriptor| descriptor.iid)
    }

    pub fn name_of(&self, iid: InterfaceId) -> Option<&str> {
        self.by_iid
            .get(&iid)
            .map(|&index| self.descriptors[index].name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Base chain of `name`, starting with the interface itself.
    pub fn ancestry(&self, name: &str) -> Result<Vec<&InterfaceDescriptor>> {
        let mut chain = vec![self.descriptor_of(name)?];
        while let Some(base) = chain.last().copied().and_then(|d| d.base()) {
            chain.push(self.descriptor_of(base)?);
        }
        Ok(chain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl InterfaceResolver for InterfaceRegistry {
    fn identifier_of(&self, name: &str) -> Result<InterfaceId> {
        InterfaceRegistry::identifier_of(self, name)
    }
}
