//! nodesh interactive entry point.
//!
//! Reads one line at a time from stdin and feeds it to the session. A line
//! ending in `?` lists the commands and nodes visible at the current node
//! that start with the text before it. `exit` at the root ends the session.

mod device;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};

use device::{DeviceState, SharedDevice, build_catalog};
use nodesh_terminal::{Completer, Shell, ShellOutcome, StdoutSink, prompt};
use nodesh_types::config::ShellConfig;
use nodesh_types::running_config::load_running_config;

/// Settings file used when no path is given on the command line.
const DEFAULT_CONFIG_PATH: &str = "nodesh.toml";

/// Environment variable naming the settings file.
const CONFIG_ENV: &str = "NODESH_CONFIG";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve settings path from CLI arg, NODESH_CONFIG, or the default.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let mut config = ShellConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    config.apply_env();

    let hostname = config.resolved_hostname();
    log::info!("Starting nodesh as '{hostname}' (debug: {})", config.debug);

    let device: SharedDevice = Rc::new(RefCell::new(DeviceState::new(&hostname)));
    let mut shell = Shell::new(build_catalog(&device)).with_debug(config.debug);
    let mut sink = StdoutSink;

    if let Some(path) = &config.startup_config {
        let blocks = load_running_config(path)
            .with_context(|| format!("loading startup config {}", path.display()))?;
        if shell.load_configuration(&blocks, &mut sink)? == ShellOutcome::Terminate {
            return Ok(());
        }
    }

    if config.banner {
        print_banner();
    }

    let mut completer = Completer::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        shell.refresh_completions(&mut completer)?;
        print!("{}", prompt(&device.borrow().hostname, shell.navigation()));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF
            println!();
            break;
        };
        let line = line?;

        if let Some(partial) = line.strip_suffix('?') {
            for word in completer.complete(partial.trim_start()) {
                println!("  {word}");
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        if shell.submit(&line, &mut sink)? == ShellOutcome::Terminate {
            break;
        }
    }

    log::info!("Session closed");
    Ok(())
}

fn print_banner() {
    println!("nodesh {} -- node-based command shell", env!("CARGO_PKG_VERSION"));
    println!("Type 'configure terminal' to configure, '?' to list commands.");
    println!();
}
