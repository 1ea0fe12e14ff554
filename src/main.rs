use anyhow::Result;
use clap::Parser;
use sasspath::commands;
use sasspath::gravatar::DEFAULT_SIZE;
use sasspath::resolver::{
    DEFAULT_COMPONENT_ROOT, DEFAULT_MANIFEST_NAME, DEFAULT_SEARCH_PATH_VAR, ManifestErrorPolicy,
    ResolverConfig,
};
use std::path::PathBuf;

/// sasspath - Sass include paths from installed Bower components
///
/// Scans the component root for `.bower.json` manifests and collects the
/// directories of their Sass main files, for use as SASS_PATH.
///
/// Examples:
///   sasspath resolve                   # List include directories
///   eval "$(sasspath env --export)"    # Extend SASS_PATH in the current shell
///   sasspath exec -- sass main.scss    # Run the compiler with SASS_PATH extended
#[derive(Parser, Debug)]
#[command(author, version = env!("SASSPATH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Component root directory (also via SASSPATH_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "SASSPATH_ROOT",
        value_name = "PATH",
        default_value = DEFAULT_COMPONENT_ROOT,
        global = true
    )]
    pub component_root: PathBuf,

    /// Manifest file name looked up in every package
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MANIFEST_NAME, global = true)]
    pub manifest: String,

    /// Environment variable holding the compiler search path
    #[arg(long = "var", value_name = "NAME", default_value = DEFAULT_SEARCH_PATH_VAR, global = true)]
    pub var: String,

    /// Fail on the first unreadable or malformed manifest instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Do not match manifest-less components against `_<name>.scss` partials
    #[arg(long = "no-fallback", global = true)]
    pub no_fallback: bool,
}

impl Cli {
    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            component_root: self.component_root.clone(),
            manifest_name: self.manifest.clone(),
            on_manifest_error: if self.strict {
                ManifestErrorPolicy::Abort
            } else {
                ManifestErrorPolicy::Warn
            },
            partial_fallback: !self.no_fallback,
            ..ResolverConfig::default()
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the include directories, one per line
    Resolve(ResolveArgs),

    /// Print the search-path variable with the include directories merged in
    Env(EnvArgs),

    /// Run a command (usually the Sass compiler) with the merged search path
    Exec(ExecArgs),

    /// Print the Gravatar URL for an e-mail address
    Gravatar(GravatarArgs),
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Print a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct EnvArgs {
    /// Print an `export NAME='value'` line for a POSIX shell
    #[arg(long)]
    pub export: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExecArgs {
    /// Program to run
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Arguments passed to the program
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct GravatarArgs {
    /// E-mail address
    #[arg(value_name = "EMAIL")]
    pub email: String,

    /// Image size in pixels
    #[arg(long, short = 's', default_value_t = DEFAULT_SIZE)]
    pub size: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = sasspath::runtime::RealRuntime;
    let config = cli.resolver_config();

    match cli.command {
        Commands::Resolve(args) => commands::resolve(runtime, config, args.json)?,
        Commands::Env(args) => commands::env(runtime, config, &cli.var, args.export)?,
        Commands::Exec(args) => {
            let code = commands::exec(runtime, config, &cli.var, &args.program, &args.args)?;
            std::process::exit(code);
        }
        Commands::Gravatar(args) => commands::gravatar(&args.email, args.size)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_resolve_parsing() {
        let cli = Cli::try_parse_from(["sasspath", "resolve", "--json"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => assert!(args.json),
            _ => panic!("Expected Resolve command"),
        }
        assert_eq!(cli.manifest, ".bower.json");
        assert_eq!(cli.var, "SASS_PATH");
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_global_root_parsing() {
        let cli = Cli::try_parse_from(["sasspath", "--root", "/tmp/vendor", "env"]).unwrap();
        assert_eq!(cli.component_root, PathBuf::from("/tmp/vendor"));
        assert!(matches!(cli.command, Commands::Env(EnvArgs { export: false })));
    }

    #[test]
    fn test_cli_resolver_config() {
        let cli = Cli::try_parse_from([
            "sasspath",
            "resolve",
            "--root",
            "/tmp/vendor",
            "--manifest",
            "bower.json",
            "--strict",
            "--no-fallback",
        ])
        .unwrap();
        let config = cli.resolver_config();

        assert_eq!(config.component_root, PathBuf::from("/tmp/vendor"));
        assert_eq!(config.manifest_name, "bower.json");
        assert_eq!(config.on_manifest_error, ManifestErrorPolicy::Abort);
        assert!(!config.partial_fallback);
        assert_eq!(config.extensions, vec!["scss", "sass"]);
    }

    #[test]
    fn test_cli_exec_parsing_keeps_hyphen_args() {
        let cli = Cli::try_parse_from([
            "sasspath", "exec", "--", "sass", "--style", "compressed", "in.scss",
        ])
        .unwrap();
        match cli.command {
            Commands::Exec(args) => {
                assert_eq!(args.program, "sass");
                assert_eq!(args.args, vec!["--style", "compressed", "in.scss"]);
            }
            _ => panic!("Expected Exec command"),
        }
    }

    #[test]
    fn test_cli_gravatar_parsing() {
        let cli = Cli::try_parse_from(["sasspath", "gravatar", "a@b.c", "-s", "64"]).unwrap();
        match cli.command {
            Commands::Gravatar(args) => {
                assert_eq!(args.email, "a@b.c");
                assert_eq!(args.size, 64);
            }
            _ => panic!("Expected Gravatar command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["sasspath"]);
        assert!(result.is_err());
    }
}
