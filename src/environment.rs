use crate::constant::*;

/// Read access to the named external variables consulted under `--env`.
///
/// The logic only ever sees this trait, so tests substitute an in-memory table for the
/// process environment.
pub trait Environment {
    /// Produce the value of the variable `name`, or `None` when it is unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment, via [`std::env::var`].
#[derive(Default)]
pub struct ProcessEnvironment {}

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        // A non-unicode value cannot hold a decimal integer; treat it as unset.
        std::env::var(name).ok()
    }
}

// The ten slot names, in index order: NB0, NB1, .., NB9.
pub(crate) fn slots() -> impl Iterator<Item = String> {
    (0..SLOT_COUNT).map(|index| format!("{SLOT_PREFIX}{index}"))
}
