use clap::{Parser, Subcommand};
use navmeta::compile::{self, Mode};
use navmeta::config;
use navmeta::descriptor::NavigationDescriptor;
use navmeta::output::{self, EventPrinter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "navmeta")]
#[command(about = "Generate sidebar meta.json files from a docs navigation descriptor")]
#[command(long_about = "\
Generate sidebar meta.json files from a docs navigation descriptor

The navigation descriptor (docs.json) is the source of truth. Every directory
it implies gets a meta.json listing its title and entries in navigation order.

Docs layout:

  docs/
  ├── docs.json                       # Navigation descriptor
  ├── navmeta.toml                    # Optional config
  └── en/
      ├── meta.json                   # Root: one entry per dropdown
      └── use-dify/
          ├── meta.json               # Dropdown: its subdirectories
          └── getting-started/
              ├── meta.json           # Group: pages and nested groups
              ├── introduction.mdx
              └── quick-start.mdx

Directories the navigation references but that do not exist are reported and
skipped. Run 'navmeta gen-config' to print a documented navmeta.toml.")]
#[command(version)]
struct Cli {
    /// Docs root holding the language directories
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Navigation descriptor (defaults to `navigation_file` from config, relative to the root)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write meta.json files for every directory in the navigation (default)
    Generate,
    /// Verify existing meta.json files match the navigation without writing
    Check,
    /// Print a stock navmeta.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            println!("Generating meta.json files from navigation...\n");
            let report = run(&cli.root, cli.input.as_deref(), Mode::Write)?;
            output::print_generate_summary(&report);
        }
        Command::Check => {
            println!("Checking meta.json files against navigation...\n");
            let report = run(&cli.root, cli.input.as_deref(), Mode::Check)?;
            output::print_check_summary(&report);
            if !report.is_in_sync() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config and descriptor for `root`, then compile in the given mode.
fn run(
    root: &Path,
    input: Option<&Path>,
    mode: Mode,
) -> Result<compile::CompileReport, Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;
    let descriptor_path = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(&config.navigation_file));
    let descriptor = NavigationDescriptor::load(&descriptor_path)?;

    let mut printer = EventPrinter::default();
    let report = compile::compile(&descriptor, root, &config, mode, |event| {
        printer.print(event)
    })?;
    Ok(report)
}
