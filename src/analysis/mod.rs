//! The connectivity analysis at the heart of the checker: series chain building and label group merging.

mod chain_builder;
pub use chain_builder::Chain;
pub use chain_builder::ChainBuilder;
pub use chain_builder::DEFAULT_MAX_CHAINS;

mod group_merger;
pub use group_merger::find_group_for;
pub use group_merger::merge_into_groups;
