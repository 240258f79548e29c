pub mod grayscale;
pub mod thumbnail;

pub use grayscale::*;
pub use thumbnail::*;
