//! Installed component packages
//!
//! This module models component manifests and finds them, along with
//! loose Sass partials, under a component root.

mod discovery;
mod manifest;

pub use discovery::{component_dirs, find_manifests, find_partials};
pub use manifest::{MainEntry, Manifest};
