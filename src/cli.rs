use clap::Parser;
use uv_deps_csv::config::CliOverrides;

/// List the locked dependencies of a uv project as CSV
#[derive(Parser, Debug)]
#[command(name = "uv-deps-csv")]
#[command(version)]
#[command(
    about = "List the locked dependencies of a uv project with file, licenses and description as CSV",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to uv-deps-csv.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exclude dependencies only reachable through dev-dependency groups
    #[arg(long)]
    pub no_dev: bool,

    /// Base URL of the package index (defaults to https://pypi.org)
    #[arg(long, value_name = "URL")]
    pub index_url: Option<String>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output: self.output.clone(),
            no_dev: self.no_dev,
            index_url: self.index_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["uv-deps-csv"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.no_dev);
        assert!(args.index_url.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "uv-deps-csv",
            "-p",
            "project",
            "-o",
            "deps.csv",
            "-c",
            "custom.yml",
            "--no-dev",
            "--index-url",
            "https://pypi.example.org",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("project"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));

        let overrides = args.overrides();
        assert_eq!(overrides.output.as_deref(), Some("deps.csv"));
        assert!(overrides.no_dev);
        assert_eq!(
            overrides.index_url.as_deref(),
            Some("https://pypi.example.org")
        );
    }

    #[test]
    fn test_parse_unknown_flag_fails() {
        assert!(Args::try_parse_from(["uv-deps-csv", "--format", "json"]).is_err());
    }
}
