use std::collections::HashMap;

use super::entities::TaskInfo;

/// Every task seen during one model build, keyed by task name.
///
/// Constructed per invocation and threaded through the traversal. Inserting a
/// name that is already present replaces the stored entry (last writer wins)
/// but keeps the slot of the first insertion, so iteration order is the order
/// in which names were first seen.
#[derive(Debug, Clone, Default)]
pub struct TaskCache {
    entries: Vec<TaskInfo>,
    index: HashMap<String, usize>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `task`. Returns the entry it replaced, if any.
    pub fn insert(&mut self, task: TaskInfo) -> Option<TaskInfo> {
        match self.index.get(&task.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot], task)),
            None => {
                self.index.insert(task.name.clone(), self.entries.len());
                self.entries.push(task);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TaskInfo> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
