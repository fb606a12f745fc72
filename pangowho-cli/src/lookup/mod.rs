pub mod cli;
pub mod handlers;
pub mod interrupt;
pub mod repl;
