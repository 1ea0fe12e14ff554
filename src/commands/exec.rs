use anyhow::Result;
use log::debug;

use crate::{
    error::ResolveError,
    resolver::{Resolver, ResolverConfig},
    runtime::Runtime,
};

/// Run `program` with the merged search-path variable in its environment.
///
/// Returns the child's exit code.
#[tracing::instrument(skip(runtime, config))]
pub fn exec<R: Runtime>(
    runtime: R,
    config: ResolverConfig,
    var: &str,
    program: &str,
    args: &[String],
) -> Result<i32> {
    let resolver = Resolver::new(runtime, config);
    let value = resolver.merged_search_path(var)?;

    if value.contains('\0') {
        return Err(ResolveError::InvalidSearchPath {
            var: var.to_string(),
        }
        .into());
    }

    debug!("Running {} with {}={}", program, var, value);
    resolver
        .runtime()
        .run(program, args, &[(var.to_string(), value)])
}
