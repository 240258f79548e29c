pub mod loader;
pub mod saver;

pub use loader::*;
pub use saver::*;
