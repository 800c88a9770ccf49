pub mod bootstrap;
pub mod chain;
pub mod extract;
pub mod keymat;
pub mod source;

pub use bootstrap::*;
pub use chain::*;
pub use extract::*;
pub use keymat::*;
pub use source::*;
