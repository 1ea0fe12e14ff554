//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `path` - Path utility functions (normalize, absolutize, parent_or_self)
//! - `env` - Environment variables and working directory
//! - `fs` - File system operations (read, directory listing, glob)
//! - `process` - Spawning the downstream compiler with an extended environment

mod env;
mod fs;
pub mod path;
mod process;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

pub use path::{absolutize, normalize_path};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Expand a glob pattern into the matching paths, sorted.
    /// `**` matches any number of directories, including hidden ones.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    // Process
    /// Run `program` with `args`, adding `envs` on top of the inherited environment.
    /// Returns the exit code (1 when the child was terminated by a signal).
    fn run(&self, program: &str, args: &[String], envs: &[(String, String)]) -> Result<i32>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        self.glob_impl(pattern)
    }

    fn run(&self, program: &str, args: &[String], envs: &[(String, String)]) -> Result<i32> {
        self.run_impl(program, args, envs)
    }
}
