//! Core processing building blocks: gradient maps, the summed-area window
//! search, resize/transcode helpers, and crop extraction. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
