pub mod cli;
pub mod config;
pub mod conjugation;
pub mod error;
pub mod fetch;
pub mod lexicon;
pub mod prompt;
pub mod session;
pub mod workbook;
