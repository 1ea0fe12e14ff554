//! Command implementations behind the `sasspath` subcommands.

mod env;
mod exec;
mod gravatar;
mod resolve;

pub use env::{env, render_export};
pub use exec::exec;
pub use gravatar::gravatar;
pub use resolve::{render_paths, resolve};
