//! Boundary I/O for the commands: stdin, key files, stdout.

mod input;
mod output;

pub use input::{read_input, read_key_file};
pub use output::write_output;
