mod commands;
mod markdown;
mod print;
mod setup;

pub use commands::run;
