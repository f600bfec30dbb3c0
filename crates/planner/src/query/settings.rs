use serde::{Deserialize, Serialize};

/// Tunables for [`HqlFilterCompiler`](super::compiler::HqlFilterCompiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    /// Deepest expression tree the tree compiler accepts. `None` means
    /// unbounded; set a limit when trees come from untrusted input.
    pub max_depth: Option<usize>,

    /// Log a warning when a compiled clause uses one parameter name for
    /// several placeholders.
    pub warn_on_param_collision: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            max_depth: None,
            warn_on_param_collision: true,
        }
    }
}

impl CompilerSettings {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_collision_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_param_collision = enabled;
        self
    }
}
