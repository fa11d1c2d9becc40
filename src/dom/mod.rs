// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod events;

pub use element::*;
pub use events::*;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod fixtures;
