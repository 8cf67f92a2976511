use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The trait for connection labels and variable names.
///
/// Wires and device variables may be identified by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}
