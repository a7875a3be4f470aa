//! Static capability type registry.
//!
//! Stands in for the host's runtime type introspection: every capability
//! type an extension schema may name is registered up front with its member
//! list, usually from the `[[types]]` section of a build snapshot.

use std::collections::HashMap;

use tracing::trace;

use buildlens_core::{application::ports::CapabilityDescriber, domain::TypeDescription};

/// Type descriptions keyed by fully qualified type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescription>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `description` under `name`, replacing any earlier entry.
    pub fn register(&mut self, name: impl Into<String>, description: TypeDescription) {
        self.types.insert(name.into(), description);
    }

    pub fn with_type(mut self, name: impl Into<String>, description: TypeDescription) -> Self {
        self.register(name, description);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl CapabilityDescriber for TypeRegistry {
    fn describe(&self, capability_type: &str) -> Option<TypeDescription> {
        let found = self.types.get(capability_type).cloned();
        if found.is_none() {
            trace!(capability_type, "type not registered");
        }
        found
    }
}
