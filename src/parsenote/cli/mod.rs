mod commands;
mod render;
mod setup;

pub use commands::run;
pub use render::print_error;
