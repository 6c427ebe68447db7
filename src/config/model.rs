// src/config/model.rs

use serde::Deserialize;

use crate::types::TieBreak;

/// Manager configuration, as read from TOML.
///
/// ```toml
/// [graph]
/// reject_cycles = true
///
/// [ordering]
/// tie_break = "ascending_id"
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagerConfig {
    #[serde(default)]
    pub graph: GraphSection,

    #[serde(default)]
    pub ordering: OrderingSection,
}

/// `[graph]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSection {
    /// Refuse `add_dependency` calls that would close a cycle.
    ///
    /// When disabled, cyclic edges are stored and ordering queries over a
    /// cyclic closure fail with `DagCycle` instead.
    #[serde(default = "default_reject_cycles")]
    pub reject_cycles: bool,
}

fn default_reject_cycles() -> bool {
    true
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            reject_cycles: default_reject_cycles(),
        }
    }
}

/// `[ordering]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderingSection {
    /// Rule for ready tasks with equal cumulative urgency.
    #[serde(default)]
    pub tie_break: TieBreak,
}
