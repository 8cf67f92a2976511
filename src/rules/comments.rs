use super::{Rule, Violation};
use crate::ladder::LadderProgram;
use crate::utils::LabelType;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEVICE_VARIABLE_PATTERN: Regex = Regex::new(r"^[A-Z]+\d+$").unwrap();
}

/// The rule checking that every device variable carries a comment.
///
/// Device variables are recognized by their naming convention
/// (an uppercase device prefix followed by an address, e.g. `X001` or `Y12`);
/// other variables are ignored.
/// A device variable bound to an element must have a non-blank entry
/// in the program's comment table.
pub struct CommentCompletenessRule;

impl<T> Rule<T> for CommentCompletenessRule
where
    T: LabelType,
{
    fn name(&self) -> &str {
        "comment-completeness"
    }

    fn description(&self) -> &str {
        "Reports device variables with a missing or blank comment"
    }

    fn check(&self, program: &LadderProgram<T>) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        let mut seen = Vec::new();
        for element in program.iter_elements() {
            let variable = element.variable();
            if seen.contains(variable) {
                continue;
            }
            seen.push(variable.clone());
            if !DEVICE_VARIABLE_PATTERN.is_match(&variable.to_string()) {
                continue;
            }
            match program.comment_of(variable) {
                None => violations.push(Violation::new(
                    <CommentCompletenessRule as Rule<T>>::name(self),
                    variable.to_string(),
                    "device variable has no comment".to_string(),
                )),
                Some(c) if c.trim().is_empty() => violations.push(Violation::new(
                    <CommentCompletenessRule as Rule<T>>::name(self),
                    variable.to_string(),
                    "device variable has a blank comment".to_string(),
                )),
                Some(_) => {}
            }
        }
        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{LadderReader, ProgramReader};

    fn check_instance(instance: &str) -> Vec<Violation> {
        let reader = LadderReader::default();
        let program = reader.read(&mut instance.as_bytes()).unwrap();
        CommentCompletenessRule.check(&program).unwrap()
    }

    #[test]
    fn test_commented_variables() {
        let instance = r#"
        rung(main).
        contact(main, X001, [], [w1]).
        coil(main, Y001, [w1], []).
        comment(X001, start push button).
        comment(Y001, motor relay).
        "#;
        assert!(check_instance(instance).is_empty());
    }

    #[test]
    fn test_missing_comment() {
        let instance = r#"
        rung(main).
        contact(main, X001, [], [w1]).
        coil(main, Y001, [w1], []).
        comment(X001, start push button).
        "#;
        let violations = check_instance(instance);
        assert_eq!(1, violations.len());
        assert_eq!("Y001", violations[0].location());
        assert!(violations[0].message().contains("no comment"));
    }

    #[test]
    fn test_blank_comment() {
        let instance = r#"
        rung(main).
        contact(main, X001, [], []).
        comment(X001, ).
        "#;
        let violations = check_instance(instance);
        assert_eq!(1, violations.len());
        assert!(violations[0].message().contains("blank comment"));
    }

    #[test]
    fn test_non_device_variables_are_ignored() {
        let instance = r#"
        rung(main).
        contact(main, start_button, [], []).
        "#;
        assert!(check_instance(instance).is_empty());
    }

    #[test]
    fn test_variable_reported_once() {
        let instance = r#"
        rung(r0).
        contact(r0, X001, [], []).
        rung(r1).
        contact(r1, X001, [], []).
        "#;
        let violations = check_instance(instance);
        assert_eq!(1, violations.len());
    }
}
