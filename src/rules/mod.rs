//! The catalog of structural rules checked against ladder programs.

mod specs;
pub use specs::default_rules;
pub use specs::Rule;
pub use specs::Violation;

mod series_contacts;
pub use series_contacts::SeriesContactsRule;

mod coil_groups;
pub use coil_groups::CoilGroupsRule;

mod comments;
pub use comments::CommentCompletenessRule;
