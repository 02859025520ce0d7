//! Terminal checklist selection.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;

use crate::error::{MacsnapError, Result};

use super::Selector;

/// Rows kept free around the list for the prompt and its help line.
const RESERVED_ROWS: usize = 4;

/// Lists all candidates checked and lets the user untick some.
pub struct ChecklistSelector {
    term: Term,
}

impl ChecklistSelector {
    /// Create a checklist on stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Rows of the list shown at once; longer lists scroll.
    fn page_size(&self) -> usize {
        let (rows, _cols) = self.term.size();
        (rows as usize).saturating_sub(RESERVED_ROWS).max(5)
    }
}

impl Default for ChecklistSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

fn map_dialoguer_err(e: dialoguer::Error) -> MacsnapError {
    MacsnapError::Prompt {
        message: e.to_string(),
    }
}

impl Selector for ChecklistSelector {
    fn select(&self, title: &str, candidates: &[String]) -> Result<Vec<String>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let defaults = vec![true; candidates.len()];
        let picked = MultiSelect::with_theme(&prompt_theme())
            .with_prompt(format!("{} (space toggles, enter confirms)", title))
            .items(candidates)
            .defaults(&defaults)
            .max_length(self.page_size())
            .interact_on_opt(&self.term)
            .map_err(map_dialoguer_err)?;

        match picked {
            Some(indices) => Ok(chosen(candidates, indices)),
            None => {
                // Dismissing the list keeps nothing, like closing the window.
                tracing::debug!("Selection '{}' dismissed", title);
                Ok(Vec::new())
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Names at `indices`, in candidate order.
fn chosen(candidates: &[String], mut indices: Vec<usize>) -> Vec<String> {
    indices.sort_unstable();
    indices
        .into_iter()
        .filter_map(|i| candidates.get(i).cloned())
        .collect()
}
