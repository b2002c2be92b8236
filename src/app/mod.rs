//! Terminal front end

pub mod cli;
pub mod display;
pub mod repl;
pub mod startup;
