pub mod cli;
pub mod logic;
