//! CLI module graph.

pub mod command;
pub mod dispatch;
pub mod menu;
pub mod output;
pub mod parse;
pub mod paths;
pub mod repl;
pub mod run;
