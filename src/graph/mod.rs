// Follows graph: inferring who follows whom from @-mentions.

pub mod builder;
pub mod follows;

pub use builder::{build_follows_graph, build_follows_graph_with};
pub use follows::FollowsGraph;
