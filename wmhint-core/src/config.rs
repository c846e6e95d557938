use crate::scheduler::IdlePriority;

/// Behaviour switches for hint emulation. The defaults reproduce what legacy clients expect.
pub trait Config {
    /// Read titles ending in spaces as the fixed directives some toolkits fall back to.
    fn legacy_whitespace_markers(&self) -> bool;

    /// After workspace-affecting events, hand focus to the top-most window that is not pinned
    /// to the bottom.
    fn arbitrate_activation(&self) -> bool;

    /// Hold off refresh passes while the overview is on screen.
    fn suspend_during_overview(&self) -> bool;

    fn refresh_priority(&self) -> IdlePriority;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub whitespace_markers: bool,
    pub arbitrate_activation: bool,
    pub suspend_during_overview: bool,
    pub refresh_priority: IdlePriority,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            whitespace_markers: true,
            arbitrate_activation: true,
            suspend_during_overview: true,
            refresh_priority: IdlePriority::Low,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn legacy_whitespace_markers(&self) -> bool {
        self.whitespace_markers
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
