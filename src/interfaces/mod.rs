pub mod cli;
pub mod input_ranges;
pub mod roster;
