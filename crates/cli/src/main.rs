use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fixtures_core::config::install_dir_from_env_value;
use fixtures_core::{
    list_configuration_templates, list_test_cases, load_test_cases, test_case_ids, FixturesConfig,
    PathSet,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fixtures")]
#[command(about = "Inspect log-collector test fixture paths")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fixture paths for a test module
    Paths {
        /// Source file of the test module
        module_file: PathBuf,
    },
    /// Check that the fixture directories exist
    Check {
        /// Source file of the test module
        module_file: PathBuf,
    },
    /// List test cases and configuration templates
    List {
        /// Source file of the test module
        module_file: PathBuf,
    },
    /// Print the product log file path
    LogPath {
        /// Product installation directory (defaults to AGENT_INSTALL_DIR, then /var/ossec)
        #[arg(long)]
        install_dir: Option<PathBuf>,
    },
}

fn render_paths(paths: &PathSet) -> String {
    format!(
        "test data:               {}\ntest cases:              {}\nconfiguration templates: {}\n",
        paths.test_data_path().display(),
        paths.test_cases_path().display(),
        paths.configurations_path().display()
    )
}

fn render_listing(paths: &PathSet) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "test cases:")?;
    for file in list_test_cases(paths)? {
        let cases = load_test_cases(&file)?;
        writeln!(out, "  {}", file.display())?;
        for id in test_case_ids(&cases) {
            writeln!(out, "    - {id}")?;
        }
    }

    writeln!(out, "configuration templates:")?;
    for file in list_configuration_templates(paths)? {
        writeln!(out, "  {}", file.display())?;
    }

    Ok(out)
}

fn resolve_config(install_dir: Option<PathBuf>) -> anyhow::Result<FixturesConfig> {
    let install_dir = install_dir.unwrap_or_else(|| {
        install_dir_from_env_value(std::env::var("AGENT_INSTALL_DIR").ok())
    });
    Ok(FixturesConfig::new(install_dir)?)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fixtures=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Paths { module_file }) => {
            print!("{}", render_paths(&PathSet::for_module_file(&module_file)));
        }
        Some(Commands::Check { module_file }) => {
            let paths = PathSet::for_module_file(&module_file);
            paths.ensure_layout()?;
            println!("fixture layout OK: {}", paths.test_data_path().display());
        }
        Some(Commands::List { module_file }) => {
            print!("{}", render_listing(&PathSet::for_module_file(&module_file))?);
        }
        Some(Commands::LogPath { install_dir }) => {
            let config = resolve_config(install_dir)?;
            tracing::debug!("install dir: {}", config.product().install_dir().display());
            println!("{}", config.product().log_file().display());
        }
        None => {
            println!("Use 'fixtures --help' for commands");
        }
    }

    Ok(())
}
