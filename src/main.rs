use clap::{Parser, Subcommand};
use colored::control as color_control;
use compdoc::manager::{DocsError, DocumentationManager, RunOptions};
use compdoc::output::{self, OutputFormat, Reporter};
use compdoc::project::Project;
use compdoc::{config, exchange, scaffold, scan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "compdoc")]
#[command(about = "Keep component documentation pages in sync with their sources")]
#[command(long_about = "\
Keep component documentation pages in sync with their sources

A component opts into documentation by exporting three markers:

  export const SUGGESTED_FILE = \"AccountCard.tsx\";
  export const SUGGESTED_DISPLAYNAME = \"Account Card\";
  export const examplesAccountCard: ComponentDoc[] = [ ... ];

Project layout (defaults):

  <path>/
  ├── compdoc.toml                 # Optional layout overrides
  ├── metadata.json                # Metadata manifest, keyed by display name
  ├── app/
  │   ├── global.ts                # export const APPNAME = \"accounts\";
  │   └── accounts/docs/components/
  │       ├── navLinks.json        # Navigation manifest
  │       └── account-card/
  │           └── page.tsx         # Generated documentation page
  └── components/
      └── account-card.tsx         # Component source

Existing pages are never overwritten without --force.

Run 'compdoc gen-config' to generate a documented compdoc.toml.")]
#[command(version)]
struct Cli {
    /// Project root
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// Show advisory messages and debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Overwrite existing files
    #[arg(short, long, global = true)]
    force: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Chalk, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate, check, and list component documentation
    Docs {
        #[command(subcommand)]
        command: DocsCommand,
    },
    /// Manage component sources
    Component {
        #[command(subcommand)]
        command: ComponentCommand,
    },
    /// Print a stock compdoc.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum DocsCommand {
    /// Generate pages, navigation links, and the metadata manifest
    Generate {
        /// Only document the component with this display name
        #[arg(short, long)]
        component: Option<String>,
    },
    /// Check whether a component's documentation needs regenerating
    Check {
        /// Component file name, with or without extension
        name: String,
    },
    /// List components and their documentation state
    List,
}

#[derive(Subcommand)]
enum ComponentCommand {
    /// Create a component skeleton with documentation markers
    Create {
        /// Component name, e.g. MyWidget or my-widget
        name: String,
    },
    /// List component source files
    List,
    /// Export a component's source to a YAML file
    Export {
        /// Component file name, with or without extension
        name: String,
    },
    /// Restore a component from an exported YAML file
    Import {
        /// Export file, relative to the project root
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose, cli.output);

    let mut reporter = cli.output.reporter();
    let result = run(&cli, reporter.as_mut());
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "command failed");
        reporter.error(&format!("Error: {e}"));
    }
    if cli.output == OutputFormat::Json {
        println!("{}", reporter.format_output());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run(cli: &Cli, reporter: &mut dyn Reporter) -> Result<(), DocsError> {
    let project = Project::load(&cli.path)?;
    let options = RunOptions {
        verbose: cli.verbose,
        force: cli.force,
    };

    match &cli.command {
        Command::Docs { command } => match command {
            DocsCommand::Generate { component } => {
                DocumentationManager::new(&project, options, reporter)
                    .generate_documentation(component.as_deref())?;
            }
            DocsCommand::Check { name } => {
                DocumentationManager::new(&project, options, reporter)
                    .check_if_documentation_needs_update(name)?;
            }
            DocsCommand::List => {
                let inventory =
                    DocumentationManager::new(&project, options, reporter).list_components()?;
                output::report_inventory(&inventory, reporter);
            }
        },
        Command::Component { command } => match command {
            ComponentCommand::Create { name } => {
                let path = scaffold::create_component(&project, name, cli.force)?;
                reporter.success(&format!("Component created: {}", path.display()));
            }
            ComponentCommand::List => {
                let config = project.config();
                for file in
                    scan::discover_components(&project.components_dir(), &config.component_extension)?
                {
                    reporter.log(&file.filename);
                }
            }
            ComponentCommand::Export { name } => {
                let path = exchange::export_component(&project, name)?;
                reporter.success(&format!("Component exported: {}", path.display()));
            }
            ComponentCommand::Import { file } => {
                let path = exchange::import_component(&project, file, cli.force)?;
                reporter.success(&format!("Component imported: {}", path.display()));
            }
        },
        // Printed in main, before any project is loaded.
        Command::GenConfig => {}
    }

    Ok(())
}

/// Install the diagnostics subscriber on stderr.
///
/// Diagnostics are quiet by default and silenced further in json mode unless
/// `--verbose` asks for them.
fn init_logging(verbose: bool, format: OutputFormat) {
    let level = if verbose {
        Level::DEBUG
    } else if format == OutputFormat::Json {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    if format == OutputFormat::Json || std::env::var_os("NO_COLOR").is_some() {
        color_control::set_override(false);
    }
}
