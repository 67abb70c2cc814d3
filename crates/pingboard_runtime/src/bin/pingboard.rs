//! Pingboard CLI entry point.

use pingboard_foundation::SimulationConfig;
use pingboard_runtime::{Encoding, load_board, save_to_file};
use pingboard_scene::Scene;
use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    frame_rate: Option<NonZeroU32>,
    encoding: Encoding,
    save: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--frame-rate" => {
                i += 1;
                let value = args.get(i).ok_or("--frame-rate requires a value")?;
                config.frame_rate = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --frame-rate value: {value}"))?,
                );
            }
            "--encoding" => {
                i += 1;
                let value = args.get(i).ok_or("--encoding requires a value")?;
                config.encoding = value.parse::<Encoding>()?;
            }
            "--save" => {
                i += 1;
                let value = args.get(i).ok_or("--save requires a path")?;
                config.save = Some(PathBuf::from(value));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("pingboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.files.is_empty() {
        return Err("no board files given (try --help)".into());
    }
    if config.save.is_some() && config.files.len() != 1 {
        return Err("--save needs exactly one board file".into());
    }

    let mut sim = SimulationConfig::default();
    if let Some(rate) = config.frame_rate {
        sim = sim.with_frame_rate(rate);
    }

    for file in &config.files {
        let scene = load_board(file, config.encoding, sim).map_err(|e| {
            match &e.context {
                Some(ctx) => format!("{ctx}: {e}"),
                None => e.to_string(),
            }
        })?;
        print_scene(&scene);
        if let Some(path) = &config.save {
            save_to_file(&scene, path)?;
            println!("Saved to {}", path.display());
        }
    }

    Ok(())
}

fn print_scene(scene: &Scene) {
    println!("\x1b[1;36m=== {} ===\x1b[0m", scene.name());
    println!("Gravity: {}", scene.gravity());
    println!("Friction: mu1={} mu2={}", scene.mu1(), scene.mu2());
    println!("Time step: {}s", scene.time_step());
    println!("Gadgets: {}", scene.registry().len());
    for entity in scene.entities() {
        println!("  - {entity}");
    }
    println!("Triggers: {}", scene.graph().edge_count());
    for (trigger, action) in scene.graph().edges() {
        println!("  - {trigger} -> {action}");
    }
    println!("Balls: {}", scene.balls().len());
    for ball in scene.balls() {
        println!("  - {ball}");
    }
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mPingboard\x1b[0m - Board file checker

\x1b[1mUSAGE:\x1b[0m
    pingboard [OPTIONS] <FILES...>

\x1b[1mARGUMENTS:\x1b[0m
    <FILES...>    Board files to parse and summarize

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    --frame-rate N       Frames per second used for the time step (default 20)
    --encoding LABEL     Board file encoding, any WHATWG label such as utf-8,
                         windows-1252 or shift_jis (default utf-8)
    --save PATH          Write the built scene as MessagePack (one file only)

\x1b[1mEXAMPLES:\x1b[0m
    pingboard default.pb                 Check one board
    pingboard a.pb b.pb                  Check several boards
    pingboard --save out.msgpack a.pb    Check a board and save its scene

Set RUST_LOG=debug to trace every declaration."
    );
}
