pub mod bench;
pub mod generate;

pub use bench::*;
pub use generate::*;
