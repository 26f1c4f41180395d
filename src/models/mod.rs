pub mod advisory;
pub mod analysis;
pub mod conditions;
pub mod prediction;
pub mod recommendation;

pub use advisory::*;
pub use analysis::*;
pub use conditions::*;
pub use prediction::*;
pub use recommendation::*;
