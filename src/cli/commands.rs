//! Command handlers

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::TreeService;
use crate::application::{parse_attributes, TreeOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{DepthPolicy, LaneState, SymbolOverrides};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::util::path::is_stdin;

/// Sample block shown by `sets`.
const SAMPLE: [&str; 5] = ["> .", ">> src", ">>> main.rs", ">>> lib.rs", ">> Cargo.toml"];

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            return Ok(());
        }
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let dir = project_dir(cli)?;
    let settings = Settings::load(Some(dir.as_path()), cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings)?;

    execute_with(&container, command, &dir)
}

/// Run a command against an already wired container.
pub fn execute_with(container: &ServiceContainer, command: &Commands, dir: &Path) -> CliResult<()> {
    match command {
        Commands::Render(args) => {
            let rendered = render(container, args)?;
            output::info(&rendered);
            Ok(())
        }
        Commands::Sets => sets(container),
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(container),
            ConfigCommands::Init { global, force } => config_init(container, dir, *global, *force),
            ConfigCommands::Path => config_path(dir),
        },
        Commands::Completion { .. } => Err(CliError::Usage(
            "completion is handled before settings are loaded".to_string(),
        )),
    }
}

fn project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().map_err(|e| InfraError::io("current directory", e).into()),
    }
}

/// Render the block selected by `args` and return the text to print.
#[instrument(level = "debug", skip(container))]
pub fn render(container: &ServiceContainer, args: &RenderArgs) -> CliResult<String> {
    let content = read_input(container, args.file.as_deref())?;
    let lines: Vec<&str> = content.lines().collect();
    debug!("render: {} input lines", lines.len());

    let service = configure_service(&container.tree, args)?;
    let options = render_options(&container.settings.symbols, args)?;
    let block = service.render_block(&lines, &options)?;

    Ok(if args.listing {
        block.to_listing()
    } else {
        block.to_text()
    })
}

fn read_input(container: &ServiceContainer, file: Option<&Path>) -> CliResult<String> {
    match file {
        None => read_stdin(container),
        Some(path) if is_stdin(path) => read_stdin(container),
        Some(path) => {
            if !container.fs.exists(path) {
                return Err(InfraError::InputNotFound(path.to_path_buf()).into());
            }
            container
                .fs
                .read_to_string(path)
                .map_err(|e| InfraError::io(format!("read {}", path.display()), e).into())
        }
    }
}

fn read_stdin(container: &ServiceContainer) -> CliResult<String> {
    container
        .stdin
        .read_all()
        .map_err(|e| InfraError::io("read stdin", e).into())
}

/// Command-line switches only tighten what the settings allow.
fn configure_service(base: &TreeService, args: &RenderArgs) -> CliResult<TreeService> {
    let mut service = base.clone();
    if let Some(marker) = args.marker {
        service = service.with_marker(marker)?;
    }
    if args.strict {
        service = service.with_policy(DepthPolicy::Strict);
    }
    if args.skip_blank {
        service = service.with_skip_blank_lines(true);
    }
    Ok(service)
}

/// Settings, then `--attr` pairs, then explicit flags.
fn render_options(default_set: &str, args: &RenderArgs) -> CliResult<TreeOptions> {
    let attributes = parse_attributes(&args.attrs)?;
    let mut options = TreeOptions::from_attributes(&attributes, default_set);
    if let Some(symbols) = &args.symbols {
        options = options.with_symbols(symbols.as_str());
    }
    Ok(options.with_overrides(&flag_overrides(args)))
}

fn flag_overrides(args: &RenderArgs) -> SymbolOverrides {
    let flags = [
        (LaneState::Empty, &args.symbol_empty),
        (LaneState::Passthrough, &args.symbol_passthrough),
        (LaneState::Junction, &args.symbol_junction),
        (LaneState::Terminal, &args.symbol_terminal),
    ];
    flags
        .into_iter()
        .filter_map(|(state, glyph)| glyph.as_ref().map(|g| (state, g)))
        .fold(SymbolOverrides::new(), |acc, (state, glyph)| {
            acc.with(state, glyph.as_str())
        })
}

#[instrument(level = "debug", skip_all)]
fn sets(container: &ServiceContainer) -> CliResult<()> {
    let service = TreeService::new(container.tree.registry().clone());
    for name in container.tree.registry().names() {
        let marker = if name == container.settings.symbols {
            " (default)"
        } else {
            ""
        };
        output::header(&format!("{}{}", name, marker));
        let block = service.render_block(&SAMPLE, &TreeOptions::new(name))?;
        for line in &block.lines {
            output::detail(line);
        }
    }
    Ok(())
}

fn config_show(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn config_target(dir: &Path, global: bool) -> CliResult<PathBuf> {
    if global {
        global_config_path()
            .ok_or_else(|| CliError::Usage("cannot determine global config directory".to_string()))
    } else {
        Ok(local_config_path(dir))
    }
}

#[instrument(level = "debug", skip(container))]
fn config_init(container: &ServiceContainer, dir: &Path, global: bool, force: bool) -> CliResult<()> {
    let path = config_target(dir, global)?;
    if container.fs.exists(&path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    container
        .fs
        .ensure_parent(&path)
        .map_err(|e| InfraError::io(format!("create parent of {}", path.display()), e))?;
    container
        .fs
        .write(&path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}

fn config_path(dir: &Path) -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::action("global", &path.display()),
        None => output::warning("no global config directory on this platform"),
    }
    output::action("local", &local_config_path(dir).display());
    Ok(())
}
