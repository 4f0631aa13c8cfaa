//! devcon terminal host.
//!
//! Reads command lines from stdin and redraws the console after each one.
//! Lines starting with `:` act as console keys: `:toggle`, `:preview`,
//! `:screen`, `:up`/`:down` for history, `:` to submit the input line,
//! `:preset N`, `:group NAME`, `:complete PREFIX`, `:flash TEXT`, `:q`.
//!
//! Usage: `devcon [config.toml]` (or set `DEVCON_CONFIG`).

mod commands;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use devcon_console::{Console, ConsoleConfig, ConsoleLogger};
use input::InputResult;
use render::Renderer;

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok())
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };

    let mut console = Console::new(config);

    // Host records go to stderr and into the console log.
    let env_log =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();
    let env_level = env_log.filter();
    ConsoleLogger::new(console.sink())
        .with_inner(Box::new(env_log), env_level)
        .install()?;

    match &config_path {
        Some(path) => log::info!("Starting devcon with config {}", path.display()),
        None => log::info!("Starting devcon with default config"),
    }

    commands::register_demo_commands(&mut console)?;
    commands::register_demo_presets(&mut console)?;
    console.toggle_console();
    console.log("Type /echo, /parse, /sum, /warn, /fail or /clear. :q quits.");

    let renderer = Renderer::new(io::stdout().is_terminal());
    let mut stdout = io::stdout();
    let mut last_frame = Instant::now();
    console.tick(0.0);
    renderer.draw(&console, &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if input::handle_line(&line, &mut console) == InputResult::Quit {
            break;
        }

        let now = Instant::now();
        let signals = console.tick(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;
        log::trace!("frame signals: {signals:?}");
        renderer.draw(&console, &mut stdout)?;
    }

    println!();
    log::info!("devcon exiting");
    Ok(())
}
