//! This module contains the main material used to describe ladder logic programs.

mod element;
pub use element::Element;
pub use element::ElementKind;

mod program;
pub use program::LadderProgram;
pub use program::Rung;
