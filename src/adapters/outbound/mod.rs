pub mod console;
pub mod filesystem;
