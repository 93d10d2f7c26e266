use std::io::Read;

use crate::cli::commands::*;
use crate::cli::output::{Snapshot, format_snapshot};
use crate::cli::script::run_script;
use crate::io::config_io;
use crate::model::AppConfig;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&cli)?;
    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Script(args)) => cmd_script(args, &config),
    }
}

/// Load config and apply command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    if let Some(route) = &cli.route {
        config.initial_route = Some(route.clone());
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

fn cmd_script(args: ScriptArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let script = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut session = Session::from_config(config);
    let snapshots = run_script(&mut session, &script)?;
    print!("{}", render_snapshots(&snapshots, args.json)?);
    Ok(())
}

/// Text snapshots are separated by blank lines; JSON is one array
pub fn render_snapshots(snapshots: &[Snapshot], json: bool) -> Result<String, serde_json::Error> {
    if json {
        let mut out = serde_json::to_string_pretty(snapshots)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(snapshots
        .iter()
        .map(format_snapshot)
        .collect::<Vec<_>>()
        .join("\n"))
}
