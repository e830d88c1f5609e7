use std::fmt;

use serde::{Deserialize, Serialize};

/// Forma de un step respecto al contexto de la cadena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind { Action, Consumer, Producer, Transform }

impl StepKind {
    pub const ALL: [StepKind; 4] = [StepKind::Action, StepKind::Consumer, StepKind::Producer, StepKind::Transform];

    /// El step recibe el contexto actual.
    pub fn reads_context(self) -> bool {
        matches!(self, StepKind::Consumer | StepKind::Transform)
    }

    /// El step deja un contexto nuevo (posiblemente de otro tipo).
    pub fn replaces_context(self) -> bool {
        matches!(self, StepKind::Producer | StepKind::Transform)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Action => "action",
            StepKind::Consumer => "consumer",
            StepKind::Producer => "producer",
            StepKind::Transform => "transform",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
