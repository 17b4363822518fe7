use crate::value::ValueTree;

use super::RenderState;

/// In-memory render state. Applies partial trees with [`ValueTree::merge`]
/// and keeps a log of what was written, which hosts use to flush dirty keys.
#[derive(Debug, Default, Clone)]
pub struct StateStore {
    state: ValueTree,
    updates: Vec<ValueTree>,
}

impl StateStore {
    pub fn new(initial: ValueTree) -> Self {
        Self {
            state: initial,
            updates: Vec::new(),
        }
    }

    /// Number of `update_state` calls since construction or the last drain.
    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    pub fn last_update(&self) -> Option<&ValueTree> {
        self.updates.last()
    }

    pub fn drain_updates(&mut self) -> Vec<ValueTree> {
        std::mem::take(&mut self.updates)
    }

    pub fn into_inner(self) -> ValueTree {
        self.state
    }
}

impl RenderState for StateStore {
    fn state(&self) -> &ValueTree {
        &self.state
    }

    fn update_state(&mut self, partial: &ValueTree) {
        self.state.merge(partial);
        self.updates.push(partial.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_merges_and_records() {
        let mut store = StateStore::new(ValueTree::node().with("x", 1.0).with("y", 2.0));
        store.update_state(&ValueTree::node().with("x", 5.0));
        assert_eq!(store.state().get_path("x").and_then(ValueTree::as_leaf), Some(5.0));
        assert_eq!(store.state().get_path("y").and_then(ValueTree::as_leaf), Some(2.0));
        assert_eq!(store.update_count(), 1);
        assert_eq!(store.drain_updates().len(), 1);
        assert_eq!(store.update_count(), 0);
    }
}
