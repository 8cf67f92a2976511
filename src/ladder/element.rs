use crate::utils::LabelType;
use strum_macros::{Display, EnumString};

/// The kind of a ladder element.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    /// An input-like element (a logical condition check)
    Contact,
    /// An output-like element (an actuation/assignment)
    Coil,
}

/// A ladder element: one contact or coil instance on a rung.
///
/// An element carries the device variable it is bound to and the labels of the
/// wires feeding it (`in_list`) and driven by it (`out_list`).
/// Elements have no intrinsic identity beyond their position in the rung;
/// once built, they are never mutated.
///
/// # Example
///
/// ```
/// # use rungcheck::ladder::{Element, ElementKind};
/// let contact = Element::new(
///     ElementKind::Contact,
///     "X001",
///     vec!["w1"],
///     vec!["w2"],
/// );
/// let coil = Element::new(ElementKind::Coil, "Y001", vec!["w2"], vec![]);
/// assert!(contact.feeds(&coil));
/// assert!(!coil.feeds(&contact));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<T>
where
    T: LabelType,
{
    kind: ElementKind,
    variable: T,
    in_list: Vec<T>,
    out_list: Vec<T>,
}

impl<T> Element<T>
where
    T: LabelType,
{
    /// Builds a new element given its kind, its device variable and its connection labels.
    ///
    /// Connection labels act as sets: neither their order nor their multiplicity matters.
    pub fn new(kind: ElementKind, variable: T, in_list: Vec<T>, out_list: Vec<T>) -> Self {
        Element {
            kind,
            variable,
            in_list,
            out_list,
        }
    }

    /// Builds a new element with no connection labels at all.
    ///
    /// This is the fallback used for elements whose connection lists are absent from the input;
    /// such elements can never feed nor be fed.
    pub fn new_unconnected(kind: ElementKind, variable: T) -> Self {
        Self::new(kind, variable, Vec::new(), Vec::new())
    }

    /// Returns the kind of the element.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the device variable the element is bound to.
    pub fn variable(&self) -> &T {
        &self.variable
    }

    /// Returns the labels of the connections feeding this element.
    pub fn in_list(&self) -> &[T] {
        &self.in_list
    }

    /// Returns the labels of the connections driven by this element.
    pub fn out_list(&self) -> &[T] {
        &self.out_list
    }

    /// Returns `true` if and only if this element feeds the other one,
    /// that is, some label driven by this element also feeds the other.
    pub fn feeds(&self, other: &Element<T>) -> bool {
        self.out_list.iter().any(|l| other.in_list.contains(l))
    }
}
