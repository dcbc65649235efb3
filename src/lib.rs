// mentiongraph: who follows whom, guessed from @-mentions
//
// This is the library root. Posts flow one way through the modules:
// posts -> mentions -> graph -> ranking, with output rendering at the end.

pub mod config;
pub mod graph;
pub mod mentions;
pub mod output;
pub mod posts;
pub mod ranking;
