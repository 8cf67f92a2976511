use super::{ProgramReader, WarningHandler};
use crate::ladder::{Element, ElementKind, LadderProgram, Rung};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const IDENT_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref RUNG_LINE_PATTERN: Regex = Regex::new(r"^\s*rung\([^)]+\)\.\s*$").unwrap();
    static ref RUNG_LINE_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*rung\(({})\)\.\s*$", IDENT_AND_SPACE_PATTERN)).unwrap();
    static ref ELEMENT_LINE_PATTERN: Regex =
        Regex::new(r"^\s*(?:contact|coil)\(.*\)\.\s*$").unwrap();
    static ref ELEMENT_LINE_FIELDS_PATTERN: Regex = Regex::new(&format!(
        r"^\s*(contact|coil)\(({}),({})(?:,\s*\[([^\]]*)\]\s*,\s*\[([^\]]*)\]\s*)?\)\.\s*$",
        IDENT_AND_SPACE_PATTERN, IDENT_AND_SPACE_PATTERN,
    ))
    .unwrap();
    static ref COMMENT_LINE_PATTERN: Regex = Regex::new(r"^\s*comment\(.*\)\.\s*$").unwrap();
    static ref COMMENT_LINE_FIELDS_PATTERN: Regex = Regex::new(&format!(
        r"^\s*comment\(({}),([^)]*)\)\.\s*$",
        IDENT_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

/// A reader for the line-oriented ladder program format.
///
/// Each non-blank line is a fact.
/// Rungs must be declared before the elements they contain.
/// The connection lists of an element may be omitted altogether, in which case they are empty.
/// The [LabelType](crate::utils::LabelType) of the returned programs is [String].
///
/// ```text
/// rung(main).
/// contact(main, X001, [w1 w2], [w3]).
/// coil(main, Y001, [w3], []).
/// comment(X001, start push button).
/// ```
///
/// # Example
///
/// ```
/// # use rungcheck::io::{LadderReader, ProgramReader};
/// # use rungcheck::ladder::LadderProgram;
/// fn read_program_from_str(s: &str) -> LadderProgram<String> {
///     let reader = LadderReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid ladder program")
/// }
/// # read_program_from_str("rung(main).");
/// ```
#[derive(Default)]
pub struct LadderReader {
    warning_handlers: Vec<WarningHandler>,
}

impl ProgramReader<String> for LadderReader {
    fn read(&self, reader: &mut dyn Read) -> Result<LadderProgram<String>> {
        let mut program = LadderProgram::new();
        let mut comment_locations = Vec::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if RUNG_LINE_PATTERN.is_match(l) {
                self.read_rung_line(l, 1 + i, &mut program)
                    .with_context(context)?;
            } else if ELEMENT_LINE_PATTERN.is_match(l) {
                self.read_element_line(l, 1 + i, &mut program)
                    .with_context(context)?;
            } else if COMMENT_LINE_PATTERN.is_match(l) {
                self.read_comment_line(l, 1 + i, &mut program, &mut comment_locations)
                    .with_context(context)?;
            } else {
                return Err(anyhow!("cannot parse line {}", l.trim())).with_context(context);
            }
        }
        for (variable, line_number) in comment_locations {
            if !program.has_variable(&variable) {
                self.raise_warning(
                    line_number,
                    format!(
                        r#"variable "{}" has a comment but is bound to no element"#,
                        variable
                    ),
                );
            }
        }
        Ok(program)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

impl LadderReader {
    fn raise_warning(&self, line_number: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line_number, message.clone()));
    }

    fn captured_ident(&self, c: &Captures, i: usize, line_number: usize) -> String {
        let str_ident = c.get(i).unwrap().as_str();
        let trimmed = str_ident.trim();
        if trimmed.len() != str_ident.len() {
            self.raise_warning(
                line_number,
                "names beginning or ending by spaces may be ambiguous".to_string(),
            );
        }
        trimmed.to_string()
    }

    fn read_rung_line(
        &self,
        l: &str,
        line_number: usize,
        program: &mut LadderProgram<String>,
    ) -> Result<()> {
        let captures = RUNG_LINE_NAME_PATTERN
            .captures(l)
            .ok_or_else(|| anyhow!("invalid rung name in {}", l.trim()))?;
        let name = self.captured_ident(&captures, 1, line_number);
        if program.rung_mut(&name).is_some() {
            self.raise_warning(
                line_number,
                format!(r#"rung "{}" is declared multiple times"#, name),
            );
        } else {
            program.add_rung(Rung::new(name));
        }
        Ok(())
    }

    fn read_element_line(
        &self,
        l: &str,
        line_number: usize,
        program: &mut LadderProgram<String>,
    ) -> Result<()> {
        let captures = ELEMENT_LINE_FIELDS_PATTERN
            .captures(l)
            .ok_or_else(|| anyhow!("invalid element description in {}", l.trim()))?;
        let kind = captures
            .get(1)
            .unwrap()
            .as_str()
            .parse::<ElementKind>()
            .unwrap();
        let rung_name = self.captured_ident(&captures, 2, line_number);
        let variable = self.captured_ident(&captures, 3, line_number);
        if captures.get(4).is_none() {
            self.raise_warning(
                line_number,
                format!(
                    r#"element "{}" has no connection lists; assuming empty ones"#,
                    variable
                ),
            );
        }
        let in_list = captures
            .get(4)
            .map(|m| read_label_list(m.as_str()))
            .unwrap_or_default();
        let out_list = captures
            .get(5)
            .map(|m| read_label_list(m.as_str()))
            .unwrap_or_default();
        let rung = program
            .rung_mut(&rung_name)
            .ok_or_else(|| anyhow!(r#"no rung "{}" declared"#, rung_name))?;
        rung.add_element(Element::new(kind, variable, in_list, out_list));
        Ok(())
    }

    fn read_comment_line(
        &self,
        l: &str,
        line_number: usize,
        program: &mut LadderProgram<String>,
        comment_locations: &mut Vec<(String, usize)>,
    ) -> Result<()> {
        let captures = COMMENT_LINE_FIELDS_PATTERN
            .captures(l)
            .ok_or_else(|| anyhow!("invalid comment in {}", l.trim()))?;
        let variable = self.captured_ident(&captures, 1, line_number);
        let comment = captures.get(2).unwrap().as_str().trim().to_string();
        if program.new_comment(variable.clone(), comment).is_some() {
            self.raise_warning(
                line_number,
                format!(r#"comment of variable "{}" is redefined"#, variable),
            );
        }
        comment_locations.push((variable, line_number));
        Ok(())
    }
}

fn read_label_list(s: &str) -> Vec<String> {
    s.split_whitespace().map(|l| l.to_string()).collect()
}
