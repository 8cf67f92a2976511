use super::{Rule, Violation};
use crate::analysis::ChainBuilder;
use crate::ladder::{ElementKind, LadderProgram};
use crate::utils::LabelType;
use anyhow::Result;

/// The default maximal number of contacts allowed in series.
pub const DEFAULT_MAX_SERIES_CONTACTS: usize = 4;

/// The rule checking that no rung chains too many contacts in series.
///
/// For each rung, the maximal series chains of its contact elements are enumerated;
/// a rung whose longest chain exceeds the allowed length is reported once,
/// with the variables of that chain.
pub struct SeriesContactsRule {
    max_len: usize,
}

impl Default for SeriesContactsRule {
    fn default() -> Self {
        Self::with_max_len(DEFAULT_MAX_SERIES_CONTACTS)
    }
}

impl SeriesContactsRule {
    /// Builds the rule with the provided maximal series length.
    pub fn with_max_len(max_len: usize) -> Self {
        SeriesContactsRule { max_len }
    }
}

impl<T> Rule<T> for SeriesContactsRule
where
    T: LabelType,
{
    fn name(&self) -> &str {
        "series-contacts"
    }

    fn description(&self) -> &str {
        "Reports rungs chaining too many contacts in series"
    }

    fn check(&self, program: &LadderProgram<T>) -> Result<Vec<Violation>> {
        let builder = ChainBuilder::default();
        let mut violations = Vec::new();
        for rung in program.iter_rungs() {
            let contacts = rung.elements_of_kinds(&[ElementKind::Contact]);
            let chains = builder.build_chains(&contacts)?;
            let longest = match chains.iter().max_by_key(|c| c.len()) {
                Some(c) => c,
                None => continue,
            };
            if longest.len() > self.max_len {
                let variables = longest
                    .iter()
                    .map(|e| e.variable().to_string())
                    .collect::<Vec<String>>()
                    .join(" -> ");
                violations.push(Violation::new(
                    <SeriesContactsRule as Rule<T>>::name(self),
                    rung.label().to_string(),
                    format!(
                        "{} contacts in series ({}) but at most {} are allowed",
                        longest.len(),
                        variables,
                        self.max_len
                    ),
                ));
            }
        }
        Ok(violations)
    }
}
