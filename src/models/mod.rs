//! Data models for bindings, layers and the layer grid.
//!
//! Models are independent of parsing and of the store that owns them.

pub mod binding;
pub mod keymap;
pub mod layer;
pub mod rgb;

// Re-export all model types
pub use binding::{Arity, Binding};
pub use keymap::{positions_for, Keymap, LayoutVariant};
pub use layer::{Layer, Position};
pub use rgb::RgbColor;
