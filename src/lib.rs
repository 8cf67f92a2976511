//! Rungcheck is a structural rule checker for PLC ladder logic programs.

#![warn(missing_docs)]

pub mod analysis;

pub mod io;

pub mod ladder;

pub mod rules;

pub mod utils;
