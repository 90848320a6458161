//! Command handlers: load settings, build the tree, print it.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::TreeScanner;
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs, ScanArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Composite, Node, TreeDisplay};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render { dir, render, scan }) => cmd_render(&resolve_dir(dir), render, scan),
        Some(Commands::Tree { dir, scan }) => cmd_tree(&resolve_dir(dir), scan),
        Some(Commands::Stats { dir, scan }) => cmd_stats(&resolve_dir(dir), scan),
        Some(Commands::Demo { render }) => cmd_demo(render),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Root "Root" with a leaf and a nested sub-directory, two levels deep.
pub fn demo_tree() -> Node {
    let mut subdir2 = Composite::new("Subdir2");
    subdir2.add(Node::leaf("File3.txt"));

    let mut subdir1 = Composite::new("Subdir1");
    subdir1.add(Node::leaf("File2.txt"));
    subdir1.add(subdir2.into());

    let mut root = Composite::new("Root");
    root.add(Node::leaf("File1.txt"));
    root.add(subdir1.into());
    root.into()
}

fn resolve_dir(dir: &Option<PathBuf>) -> PathBuf {
    dir.clone().unwrap_or_else(|| PathBuf::from("."))
}

/// Settings from files and env, then command-line overrides on top.
fn load_settings(dir: Option<&Path>, render: &RenderArgs, scan: &ScanArgs) -> CliResult<Settings> {
    let mut settings = Settings::load(dir)?;
    if let Some(depth) = render.depth {
        settings.render.start_depth = depth;
    }
    if let Some(step) = render.step {
        settings.render.step = step;
    }
    if let Some(marker) = render.marker {
        settings.render.marker = marker;
    }
    if scan.hidden {
        settings.scan.include_hidden = true;
    }
    if scan.max_depth.is_some() {
        settings.scan.max_depth = scan.max_depth;
    }
    settings.validate()?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn scan_dir(dir: &Path, settings: &Settings) -> CliResult<Node> {
    Ok(TreeScanner::new(settings.scan_options()).scan(dir)?)
}

fn print_outline(root: &Node, settings: &Settings) {
    for line in root.render_with(settings.render.start_depth, &settings.render_options()) {
        output::info(&line);
    }
}

#[instrument]
fn cmd_render(dir: &Path, render: &RenderArgs, scan: &ScanArgs) -> CliResult<()> {
    let settings = load_settings(Some(dir), render, scan)?;
    let root = scan_dir(dir, &settings)?;
    print_outline(&root, &settings);
    Ok(())
}

#[instrument]
fn cmd_tree(dir: &Path, scan: &ScanArgs) -> CliResult<()> {
    let settings = load_settings(Some(dir), &RenderArgs::default(), scan)?;
    let root = scan_dir(dir, &settings)?;
    output::info(&root.to_tree_string());
    Ok(())
}

#[instrument]
fn cmd_stats(dir: &Path, scan: &ScanArgs) -> CliResult<()> {
    let settings = load_settings(Some(dir), &RenderArgs::default(), scan)?;
    let root = scan_dir(dir, &settings)?;
    output::header(&dir.display());
    output::field("nodes", &root.node_count());
    output::field("leaves", &root.leaf_names().len());
    output::field("depth", &root.depth());
    Ok(())
}

#[instrument]
fn cmd_demo(render: &RenderArgs) -> CliResult<()> {
    let settings = load_settings(None, render, &ScanArgs::default())?;
    print_outline(&demo_tree(), &settings);
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { dir } => {
            let settings = Settings::load(dir.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}
