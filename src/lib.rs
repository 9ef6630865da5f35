pub mod error;
pub mod extract;
pub mod process;
pub mod render;
