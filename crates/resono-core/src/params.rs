//! Node-instance parameter collections.
//!
//! Each node instance owns a [`ParameterSet`]: an explicit mapping from
//! identifier to runtime handle, built at construction time from the node
//! type's descriptor list. The descriptors themselves are defined once per
//! node type; the set creates one [`NodeParameter`] per descriptor, each
//! initialized to its default and wired to the shared engine collaborator.

use std::sync::Arc;

use crate::engine::DspEngine;
use crate::handle::NodeParameter;
use crate::parameter::ParameterDef;
use crate::types::ParameterAddress;

/// The parameter handles owned by one node instance.
///
/// Lookup is a linear scan: parameter counts per node are small (the largest
/// nodes carry a handful of controls), so a map would cost more than it
/// saves.
#[derive(Debug, Default)]
pub struct ParameterSet {
    params: Vec<NodeParameter>,
}

impl ParameterSet {
    /// Build a set from shared descriptors, one handle per descriptor.
    ///
    /// Duplicate identifiers are kept but logged; identifier lookup then
    /// resolves to the first match.
    pub fn new(defs: Vec<Arc<ParameterDef>>, engine: &Arc<dyn DspEngine>) -> Self {
        let mut params: Vec<NodeParameter> = Vec::with_capacity(defs.len());
        for def in defs {
            if params.iter().any(|p| p.def().identifier() == def.identifier()) {
                log::warn!("duplicate parameter identifier {:?} in set", def.identifier());
            }
            params.push(NodeParameter::new(def, Arc::clone(engine)));
        }
        Self { params }
    }

    /// Build a set from owned descriptors (convenience for node types that
    /// construct their descriptor list inline).
    pub fn from_defs(defs: Vec<ParameterDef>, engine: &Arc<dyn DspEngine>) -> Self {
        Self::new(defs.into_iter().map(Arc::new).collect(), engine)
    }

    /// Number of parameters in the set.
    pub fn count(&self) -> usize {
        self.params.len()
    }

    /// True when the node exposes no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Handle by position in declaration order.
    pub fn get(&self, index: usize) -> Option<&NodeParameter> {
        self.params.get(index)
    }

    /// Handle by stable identifier.
    pub fn by_identifier(&self, identifier: &str) -> Option<&NodeParameter> {
        self.params.iter().find(|p| p.def().identifier() == identifier)
    }

    /// Handle by engine-assigned address.
    pub fn by_address(&self, address: ParameterAddress) -> Option<&NodeParameter> {
        self.params.iter().find(|p| p.def().address() == address)
    }

    /// Iterate handles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeParameter> {
        self.params.iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a NodeParameter;
    type IntoIter = std::slice::Iter<'a, NodeParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Trait for node types exposing their parameter set.
///
/// Hosts use this to inspect and automate any node uniformly, without
/// knowing its concrete type.
pub trait HasParameters {
    /// The node instance's parameter set.
    fn parameters(&self) -> &ParameterSet;
}
