use hashbrown::HashMap;

use crate::{program::ReferenceId, values::Value};

/// Bindings of one interpreted call, keyed by reference identity.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    bindings: HashMap<ReferenceId, Value>,
}

impl Frame {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, reference: ReferenceId, value: Value) {
        self.bindings.insert(reference, value);
    }

    pub(crate) fn lookup(&self, reference: ReferenceId) -> Option<&Value> {
        self.bindings.get(&reference)
    }
}
