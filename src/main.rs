mod cli;

use clap::Parser;
use cli::Args;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use uv_deps_csv::adapters::outbound::console::StderrProgressReporter;
use uv_deps_csv::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use uv_deps_csv::adapters::outbound::formatters::CsvFormatter;
use uv_deps_csv::adapters::outbound::network::{CachingPyPiClient, PyPiClient};
use uv_deps_csv::application::dto::ReportRequest;
use uv_deps_csv::application::use_cases::GenerateReportUseCase;
use uv_deps_csv::config::{self, ConfigFile, ReportSettings};
use uv_deps_csv::ports::outbound::{OutputPresenter, ReportFormatter};
use uv_deps_csv::shared::error::{ExitCode, ReportError};
use uv_deps_csv::shared::Result;

#[tokio::main]
async fn main() {
    init_logging();

    // clap exits with 2 on invalid arguments and 0 for --help/--version
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: Args) -> Result<()> {
    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let settings = ReportSettings::resolve(args.overrides(), config)?;
    tracing::debug!(?settings, "effective settings");

    let index = CachingPyPiClient::new(PyPiClient::new(&settings.index_url)?);

    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        index.clone(),
        index,
        StderrProgressReporter::new(),
    );

    let request = ReportRequest::new(project_path, settings.include_dev)
        .with_request_delay(settings.request_delay);
    let response = use_case.execute(request).await?;

    eprintln!("📝 Generating CSV output...");
    let formatted_output = CsvFormatter::new().format(&response.report)?;

    let presenter: Box<dyn OutputPresenter> = match settings.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)
}

/// An explicit `--config` must exist; otherwise the project directory is searched
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(project_path),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| ReportError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. Symbolic links are not allowed."
                .to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_project_path(&file_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("project");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err_string = format!("{}", validate_project_path(&link).unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }

    #[test]
    fn test_load_config_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let args = Args::try_parse_from(["uv-deps-csv", "-c", "/nonexistent/config.yml"]).unwrap();

        assert!(load_config(&args, temp_dir.path()).is_err());
    }

    #[test]
    fn test_load_config_discovers_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(config::CONFIG_FILENAME),
            "include_dev: false\n",
        )
        .unwrap();
        let args = Args::try_parse_from(["uv-deps-csv"]).unwrap();

        let config = load_config(&args, temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.include_dev, Some(false));
    }
}
