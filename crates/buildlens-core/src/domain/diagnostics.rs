//! Counters for everything the model build leaves out.
//!
//! The model itself stays silent about omissions; these counters make them
//! observable to callers debugging an incomplete model.

use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDiagnostics {
    /// Configurations skipped because the host reports them non-resolvable.
    pub non_resolvable_configurations: usize,
    /// Configuration nodes dropped because nothing resolved under them.
    pub empty_configurations_pruned: usize,
    /// Dependency edges skipped because the host failed to resolve them.
    pub unresolved_edges: usize,
    /// Revisited coordinates cut to childless leaves.
    pub truncated_revisits: usize,
    /// Subproject references the host could not produce.
    pub missing_subprojects: usize,
    /// Extension types the describer knows nothing about.
    pub undescribed_capability_types: usize,
    /// Task cache entries replaced by a later task of the same name.
    pub task_cache_overwrites: usize,
    /// Tasks appended to the root during reconciliation.
    pub backfilled_tasks: usize,
}

impl ModelDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of omission events (backfills are additions, not counted).
    pub fn omissions(&self) -> usize {
        self.non_resolvable_configurations
            + self.empty_configurations_pruned
            + self.unresolved_edges
            + self.truncated_revisits
            + self.missing_subprojects
            + self.undescribed_capability_types
            + self.task_cache_overwrites
    }

    pub fn is_clean(&self) -> bool {
        self.omissions() == 0
    }
}

impl AddAssign for ModelDiagnostics {
    fn add_assign(&mut self, rhs: Self) {
        self.non_resolvable_configurations += rhs.non_resolvable_configurations;
        self.empty_configurations_pruned += rhs.empty_configurations_pruned;
        self.unresolved_edges += rhs.unresolved_edges;
        self.truncated_revisits += rhs.truncated_revisits;
        self.missing_subprojects += rhs.missing_subprojects;
        self.undescribed_capability_types += rhs.undescribed_capability_types;
        self.task_cache_overwrites += rhs.task_cache_overwrites;
        self.backfilled_tasks += rhs.backfilled_tasks;
    }
}

impl fmt::Display for ModelDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "non-resolvable configurations: {}", self.non_resolvable_configurations)?;
        writeln!(f, "empty configurations pruned:   {}", self.empty_configurations_pruned)?;
        writeln!(f, "unresolved edges:              {}", self.unresolved_edges)?;
        writeln!(f, "truncated revisits:            {}", self.truncated_revisits)?;
        writeln!(f, "missing subprojects:           {}", self.missing_subprojects)?;
        writeln!(f, "undescribed capability types:  {}", self.undescribed_capability_types)?;
        writeln!(f, "task cache overwrites:         {}", self.task_cache_overwrites)?;
        write!(f, "backfilled tasks:              {}", self.backfilled_tasks)
    }
}
