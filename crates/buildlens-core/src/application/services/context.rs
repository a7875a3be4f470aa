use crate::domain::{ModelDiagnostics, TaskCache};

/// Mutable state of one model build.
///
/// Created fresh for every invocation and passed down the traversal, so two
/// builds never share a task cache.
#[derive(Debug, Default)]
pub struct AssemblyContext {
    pub cache: TaskCache,
    pub diagnostics: ModelDiagnostics,
}

impl AssemblyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for reuse across invocations.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.diagnostics = ModelDiagnostics::default();
    }
}
