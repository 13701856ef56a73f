//! Creature reference data: kinds, image assets, definitions and catalog.
//!
//! ## Key Types
//!
//! - `CreatureKind`: Closed enum of the four slugs (name, asset id, art)
//! - `ImageAsset`: Closed enum of bundled images
//! - `Creature` / `Attack`: Battler data
//! - `Catalog`: The fixed, immutable creature registry

pub mod assets;
pub mod catalog;
pub mod definition;

pub use assets::{CreatureKind, ImageAsset};
pub use catalog::Catalog;
pub use definition::{Attack, Creature, CreatureId};
