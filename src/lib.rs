pub mod commands;
pub mod error;
pub mod gravatar;
pub mod package;
pub mod resolver;
pub mod runtime;
pub mod search_path;

pub use error::ResolveError;
pub use resolver::{Resolver, ResolverConfig, resolve};
pub use search_path::{SearchPaths, merge_into_search_path};
