//! Selector that keeps everything.

use crate::error::Result;

use super::Selector;

/// Returns every candidate unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughSelector;

impl Selector for PassThroughSelector {
    fn select(&self, _title: &str, candidates: &[String]) -> Result<Vec<String>> {
        Ok(candidates.to_vec())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn returns_input_unchanged() {
        let candidates = strings(&["wget", "git", "wget", "node@20"]);
        let selected = PassThroughSelector
            .select("Select Homebrew Formulae to install", &candidates)
            .unwrap();
        assert_eq!(selected, candidates);
    }

    #[test]
    fn empty_input_stays_empty() {
        let selected = PassThroughSelector.select("Casks", &[]).unwrap();
        assert!(selected.is_empty());
    }
}
