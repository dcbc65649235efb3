// Ranking: who looks most followed, according to the inferred graph.

pub mod influence;

pub use influence::{follower_counts, rank_influencers, rank_with_counts, Influencer};
