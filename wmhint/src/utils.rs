pub mod file_handler;
pub mod log;

/// The template used by the `--help` output of every binary.
#[must_use]
pub const fn get_help_template() -> &'static str {
    "{before-help}{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}"
}
