//! Command dispatch: wires CLI arguments to application use cases.

use std::fmt::Display;
use std::io;
use std::str::FromStr;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{draw, outline, ApplicationError};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{BinaryTree, Style};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Draw {
            trees,
            color,
            plain,
            text,
        }) => {
            let style = if *plain { Style::Plain } else { settings.style() };
            let color = (*color).or(settings.color);
            if *text {
                cmd_draw(parse_trees::<String>(trees)?, color, style)
            } else {
                cmd_draw(parse_trees::<i64>(trees)?, color, style)
            }
        }
        Some(Commands::Outline { trees, text }) => {
            if *text {
                cmd_outline(&parse_trees::<String>(trees)?)
            } else {
                cmd_outline(&parse_trees::<i64>(trees)?)
            }
        }
        Some(Commands::Config { command }) => cmd_config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| CliError::Usage(e.to_string())),
    }
}

/// Parses one search tree per comma-separated value list.
///
/// An empty list yields an empty tree, which drawing skips.
pub fn parse_trees<T>(lists: &[String]) -> CliResult<Vec<BinaryTree<T>>>
where
    T: FromStr + Ord,
    T::Err: Display,
{
    lists
        .iter()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| {
                    value.parse::<T>().map_err(|e| {
                        CliError::InvalidArgs(format!("cannot parse {:?}: {}", value, e))
                    })
                })
                .collect::<CliResult<BinaryTree<T>>>()
        })
        .collect()
}

#[instrument(skip(trees))]
fn cmd_draw<T: Display>(
    mut trees: Vec<BinaryTree<T>>,
    color: Option<i64>,
    style: Style,
) -> CliResult<()> {
    if let Some(code) = color {
        for tree in trees.iter_mut() {
            paint_uncolored(tree, code)?;
        }
    }
    if trees.iter().all(BinaryTree::is_empty) {
        output::warning("nothing to draw");
        return Ok(());
    }
    draw(trees.iter().map(BinaryTree::root_ref), style)?;
    Ok(())
}

fn paint_uncolored<T>(tree: &mut BinaryTree<T>, code: i64) -> CliResult<()> {
    let uncolored: Vec<_> = tree
        .iter()
        .filter(|(_, node)| node.color.is_none())
        .map(|(idx, _)| idx)
        .collect();
    for idx in uncolored {
        tree.set_color(idx, Some(code))
            .map_err(ApplicationError::from)?;
    }
    Ok(())
}

#[instrument(skip(trees))]
fn cmd_outline<T: Display>(trees: &[BinaryTree<T>]) -> CliResult<()> {
    let outlines = trees
        .iter()
        .filter_map(BinaryTree::root_ref)
        .map(|root| outline(&root))
        .join("\n");
    output::info(&outlines);
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
    }
    Ok(())
}
