//! helix CLI - host harness for the helix tool command
//!
//! Registers the command the way a host plugin loader would, feeds it
//! Maya-style flag tokens, and walks it through its undoable lifecycle.

use anyhow::Result;
use clap::{Parser, Subcommand};
use helix_scene::Scene;
use helix_tool::{HelixTool, ToolRegistry, COMMAND_NAME};

#[derive(Parser)]
#[command(name = "helix")]
#[command(about = "Construct helical NURBS curves with undo/redo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a helix curve from raw command flags
    Create {
        /// Print the created curve data as JSON
        #[arg(long)]
        json: bool,
        /// Maya-style flag tokens, e.g. -r 2.0 -p 0.25 -ncv 20 -ud false
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Walk the command through execute, undo, and redo
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut registry = ToolRegistry::new();
    registry.register(COMMAND_NAME, HelixTool::creator);

    match cli.command {
        Commands::Create { json, args } => {
            create_helix(&registry, &args, json)?;
        }
        Commands::Demo => {
            run_demo(&registry)?;
        }
    }

    Ok(())
}

fn create_helix(registry: &ToolRegistry, args: &[String], json: bool) -> Result<()> {
    let mut tool = registry
        .create(COMMAND_NAME)
        .ok_or_else(|| anyhow::anyhow!("{COMMAND_NAME} is not registered"))?;
    tool.parse_args(args)?;

    let mut scene = Scene::new();
    tool.execute(&mut scene)?;

    let path = tool
        .path()
        .ok_or_else(|| anyhow::anyhow!("executed command has no path"))?;
    let node = scene
        .get(path)
        .ok_or_else(|| anyhow::anyhow!("created node {path} did not resolve"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&node.curve)?);
    } else {
        println!("created {path}");
        println!(
            "  {} CVs, {} knots, degree {}",
            node.curve.control_points.len(),
            node.curve.knots.len(),
            node.curve.degree
        );
        println!("journal: {}", tool.finalize()?);
    }

    Ok(())
}

fn run_demo(registry: &ToolRegistry) -> Result<()> {
    let mut scene = Scene::new();
    let mut tool = registry
        .create(COMMAND_NAME)
        .ok_or_else(|| anyhow::anyhow!("{COMMAND_NAME} is not registered"))?;

    tool.execute(&mut scene)?;
    let path = tool
        .path()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("executed command has no path"))?;
    println!(
        "execute: state {:?}, {} node(s), path {path}",
        tool.state(),
        scene.len(),
    );

    tool.undo(&mut scene)?;
    println!("undo:    state {:?}, {} node(s)", tool.state(), scene.len());

    tool.redo(&mut scene)?;
    let path = tool
        .path()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("redone command has no path"))?;
    println!(
        "redo:    state {:?}, {} node(s), path {path}",
        tool.state(),
        scene.len(),
    );

    println!("journal: {}", tool.finalize()?);
    Ok(())
}
