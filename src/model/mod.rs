pub mod context;
pub mod loader;
pub mod power;
pub mod validation;


pub use context::*;
pub use loader::*;
pub use power::*;
pub use validation::*;
