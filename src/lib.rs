pub mod config;
pub mod model;
pub mod telemetry;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use model::{Current, Power, PowerOperations};
pub use units::{PowerError, UnitsPower};
