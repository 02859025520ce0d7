//! Choosing which packages to reinstall.
//!
//! Selection is a capability picked once at startup:
//!
//! - [`ChecklistSelector`] shows a terminal checklist with everything checked
//! - [`PassThroughSelector`] keeps every candidate, for headless runs
//! - [`ScriptedSelector`] answers from a script, for tests
//!
//! Callers only see the [`Selector`] trait and never test for a terminal
//! themselves.

pub mod checklist;
pub mod passthrough;
pub mod scripted;

pub use checklist::ChecklistSelector;
pub use passthrough::PassThroughSelector;
pub use scripted::ScriptedSelector;

use crate::error::Result;

/// Narrows a list of candidate package names.
pub trait Selector {
    /// Return the subset of `candidates` to keep.
    ///
    /// Kept names are returned exactly as given, duplicates included.
    fn select(&self, title: &str, candidates: &[String]) -> Result<Vec<String>>;

    /// Whether a human makes the choice.
    fn is_interactive(&self) -> bool;
}

/// Pick the selector for this run.
///
/// The checklist is used only when `interactive` is requested and stdout
/// is a terminal.
pub fn create_selector(interactive: bool) -> Box<dyn Selector> {
    if interactive && console::Term::stdout().is_term() {
        Box::new(ChecklistSelector::new())
    } else {
        Box::new(PassThroughSelector)
    }
}
