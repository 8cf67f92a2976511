use super::{Element, ElementKind};
use crate::utils::LabelType;
use std::collections::HashMap;

/// A rung: one row of ladder logic, holding an ordered sequence of elements.
///
/// The order of the elements is the one in which they were added;
/// it determines the traversal order of the connectivity analysis.
///
/// # Example
///
/// ```
/// # use rungcheck::ladder::{Element, ElementKind, Rung};
/// let mut rung = Rung::new("main".to_string());
/// rung.add_element(Element::new_unconnected(ElementKind::Contact, "X001".to_string()));
/// assert_eq!(1, rung.n_elements());
/// ```
pub struct Rung<T>
where
    T: LabelType,
{
    label: T,
    elements: Vec<Element<T>>,
}

impl<T> Rung<T>
where
    T: LabelType,
{
    /// Builds a new rung with no elements.
    pub fn new(label: T) -> Self {
        Rung {
            label,
            elements: Vec::new(),
        }
    }

    /// Returns the label of the rung.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Adds an element at the end of the rung.
    pub fn add_element(&mut self, element: Element<T>) {
        self.elements.push(element);
    }

    /// Returns the elements of the rung, in addition order.
    pub fn elements(&self) -> &[Element<T>] {
        &self.elements
    }

    /// Returns the number of elements in the rung.
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// Returns the elements of the rung whose kind belongs to the provided ones, preserving their relative order.
    ///
    /// This is the extraction step used by rules that reason on a single element kind
    /// (or a couple of kinds) before handing the sequence to the connectivity analysis.
    pub fn elements_of_kinds(&self, kinds: &[ElementKind]) -> Vec<Element<T>> {
        self.elements
            .iter()
            .filter(|e| kinds.contains(&e.kind()))
            .cloned()
            .collect()
    }
}

/// A ladder logic program: a sequence of rungs and a variable comment table.
///
/// The comment table maps device variables to the human-readable comments
/// attached to them in the source program.
#[derive(Default)]
pub struct LadderProgram<T>
where
    T: LabelType,
{
    rungs: Vec<Rung<T>>,
    comments: HashMap<T, String>,
}

impl<T> LadderProgram<T>
where
    T: LabelType,
{
    /// Builds a new program with no rungs and no comments.
    pub fn new() -> Self {
        LadderProgram {
            rungs: Vec::new(),
            comments: HashMap::new(),
        }
    }

    /// Adds a rung at the end of the program.
    pub fn add_rung(&mut self, rung: Rung<T>) {
        self.rungs.push(rung);
    }

    /// Provides an iterator to the rungs of the program, in addition order.
    pub fn iter_rungs(&self) -> impl Iterator<Item = &Rung<T>> + '_ {
        self.rungs.iter()
    }

    /// Returns a mutable reference to the rung with the provided label, if any.
    pub fn rung_mut(&mut self, label: &T) -> Option<&mut Rung<T>> {
        self.rungs.iter_mut().find(|r| r.label() == label)
    }

    /// Returns the number of rungs in the program.
    pub fn n_rungs(&self) -> usize {
        self.rungs.len()
    }

    /// Returns the number of elements in the program, all rungs together.
    pub fn n_elements(&self) -> usize {
        self.rungs.iter().map(|r| r.n_elements()).sum()
    }

    /// Provides an iterator to the elements of the program, rung by rung.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element<T>> + '_ {
        self.rungs.iter().flat_map(|r| r.elements().iter())
    }

    /// Returns `true` if and only if some element of the program is bound to the provided variable.
    pub fn has_variable(&self, variable: &T) -> bool {
        self.iter_elements().any(|e| e.variable() == variable)
    }

    /// Sets the comment attached to a variable, returning the previous comment in case the variable already had one.
    pub fn new_comment(&mut self, variable: T, comment: String) -> Option<String> {
        self.comments.insert(variable, comment)
    }

    /// Returns the comment attached to a variable, if any.
    pub fn comment_of(&self, variable: &T) -> Option<&str> {
        self.comments.get(variable).map(|s| s.as_str())
    }

    /// Returns the number of variables with a comment.
    pub fn n_comments(&self) -> usize {
        self.comments.len()
    }

    /// Provides an iterator to the commented variables and their comments.
    pub fn iter_comments(&self) -> impl Iterator<Item = (&T, &str)> + '_ {
        self.comments.iter().map(|(v, c)| (v, c.as_str()))
    }
}
