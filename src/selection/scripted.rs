//! Scripted selector for tests.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::{MacsnapError, Result};

use super::Selector;

/// Answers selections as a human would, without a terminal.
///
/// Names listed with [`ScriptedSelector::untick`] are removed from every
/// list; everything else stays checked. Each call is recorded.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    unticked: HashSet<String>,
    fail: bool,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedSelector {
    /// Create a selector that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Untick `name` wherever it appears.
    pub fn untick(mut self, name: &str) -> Self {
        self.unticked.insert(name.to_string());
        self
    }

    /// Make every selection fail as if the prompt broke.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(title, candidates)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, title: &str, candidates: &[String]) -> Result<Vec<String>> {
        self.calls
            .borrow_mut()
            .push((title.to_string(), candidates.to_vec()));

        if self.fail {
            return Err(MacsnapError::Prompt {
                message: "not a terminal".to_string(),
            });
        }

        Ok(candidates
            .iter()
            .filter(|name| !self.unticked.contains(*name))
            .cloned()
            .collect())
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
