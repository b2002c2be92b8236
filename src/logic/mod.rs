//! Command language: tokenizing, parsing and executing user input

pub mod commands;
pub mod error;
pub mod history;
pub mod index;
pub mod manager;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

pub use error::LogicError;
pub use manager::LogicManager;
