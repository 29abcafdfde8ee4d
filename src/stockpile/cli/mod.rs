mod commands;
mod menu;
mod print;
mod setup;

pub use commands::run;
