use serde::{Deserialize, Serialize};
use wmhint_core::IdlePriority;

/// User settings, read from `config.ron` (or `config.toml`) in the `wmhint` config directory.
/// Missing fields take their default.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub legacy_whitespace_markers: bool,
    pub arbitrate_activation: bool,
    pub suspend_during_overview: bool,
    pub refresh_priority: IdlePriority,
    /// A `tracing` filter such as `info` or `wmhint_core=trace`. `RUST_LOG` takes precedence.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legacy_whitespace_markers: true,
            arbitrate_activation: true,
            suspend_during_overview: true,
            refresh_priority: IdlePriority::Low,
            log_level: None,
        }
    }
}

impl wmhint_core::Config for Config {
    fn legacy_whitespace_markers(&self) -> bool {
        self.legacy_whitespace_markers
    }

    fn arbitrate_activation(&self) -> bool {
        self.arbitrate_activation
    }

    fn suspend_during_overview(&self) -> bool {
        self.suspend_during_overview
    }

    fn refresh_priority(&self) -> IdlePriority {
        self.refresh_priority
    }
}
