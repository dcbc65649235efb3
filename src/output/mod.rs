// Output formatting: terminal display of graphs and rankings.

pub mod terminal;
