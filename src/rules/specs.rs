use super::{CoilGroupsRule, CommentCompletenessRule, SeriesContactsRule};
use crate::ladder::LadderProgram;
use crate::utils::LabelType;
use anyhow::Result;
use std::fmt::Display;

/// A violation of a structural rule, as reported by a [`Rule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    rule: String,
    location: String,
    message: String,
}

impl Violation {
    /// Builds a new violation given the name of the violated rule, the location of the violation
    /// (a rung label or a variable name) and a human-readable message.
    pub fn new(rule: &str, location: String, message: String) -> Self {
        Violation {
            rule: rule.to_string(),
            location,
            message,
        }
    }

    /// Returns the name of the violated rule.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns the location of the violation.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the message describing the violation.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.location, self.message)
    }
}

/// A trait for the structural rules of the catalog.
///
/// A rule checks a whole program and reports the violations it finds.
/// Rules never fail on the content of the program itself;
/// an error is only returned when a resource limit is hit during the analysis.
pub trait Rule<T>
where
    T: LabelType,
{
    /// Returns the name of the rule, as used in reports and on the command line.
    fn name(&self) -> &str;

    /// Returns a one-line description of the rule.
    fn description(&self) -> &str;

    /// Checks the program against this rule, returning the violations found.
    fn check(&self, program: &LadderProgram<T>) -> Result<Vec<Violation>>;
}

/// Returns the default rule catalog.
pub fn default_rules<T>() -> Vec<Box<dyn Rule<T>>>
where
    T: LabelType + Ord,
{
    vec![
        Box::new(SeriesContactsRule::default()),
        Box::new(CoilGroupsRule),
        Box::new(CommentCompletenessRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let v = Violation::new(
            "series-contacts",
            "main".to_string(),
            "too many contacts".to_string(),
        );
        assert_eq!("[series-contacts] main: too many contacts", v.to_string());
    }

    #[test]
    fn test_default_rules_have_unique_names() {
        let rules = default_rules::<String>();
        let mut names = rules.iter().map(|r| r.name()).collect::<Vec<&str>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(rules.len(), names.len());
    }
}
