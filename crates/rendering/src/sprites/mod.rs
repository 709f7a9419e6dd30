//! Procedural pixel-art plant sprites.
//!
//! Every sprite is a pure function of `(Species, GrowthState)`. The whole
//! set is generated once at startup and kept in [`SpriteCache`].

pub mod cache;
pub mod generators;


pub use cache::SpriteCache;
pub use generators::generate_sprite;
