//! Headless host binary.
//!
//! Settles offline progress for the recorded absence (if any), starts
//! a battle, and keeps the simulation running at 30 Hz while reading
//! commands from stdin. One summary line is printed per second.
//!
//! Usage: vanguard-app [--stage N] [--seed N] [--afk SECS] [--tier N]
//!
//! Stdin commands: pause | resume | clear | cast ID | battle N |
//! tap X Y | quit

use std::error::Error;
use std::io::BufRead;
use std::sync::{Arc, Mutex};

use vanguard_app::state::GameLoopCommand;
use vanguard_app::{assets, game_loop, offline};
use vanguard_core::commands::{PlayerCommand, ScreenPoint};
use vanguard_core::skill::SkillId;
use vanguard_sim::engine::SimConfig;

struct Options {
    stage: i32,
    seed: u64,
    afk_secs: Option<f64>,
    power_tier: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stage: 1,
            seed: 42,
            afk_secs: None,
            power_tier: 0,
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--stage" => {
                options.stage = value("--stage")?.parse().map_err(|e| format!("{e}"))?;
            }
            "--seed" => {
                options.seed = value("--seed")?.parse().map_err(|e| format!("{e}"))?;
            }
            "--afk" => {
                options.afk_secs =
                    Some(value("--afk")?.parse().map_err(|e| format!("{e}"))?);
            }
            "--tier" => {
                options.power_tier = value("--tier")?.parse().map_err(|e| format!("{e}"))?;
            }
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(options)
}

fn parse_stdin_command(line: &str) -> Option<GameLoopCommand> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "pause" => GameLoopCommand::PlayerCommand(PlayerCommand::Pause),
        "resume" => GameLoopCommand::PlayerCommand(PlayerCommand::Resume),
        "clear" => GameLoopCommand::PlayerCommand(PlayerCommand::ClearTarget),
        "cast" => {
            let id: u32 = parts.next()?.parse().ok()?;
            GameLoopCommand::PlayerCommand(PlayerCommand::CastSkill {
                skill_id: SkillId(id),
            })
        }
        "battle" => {
            let stage: i32 = parts.next()?.parse().ok()?;
            GameLoopCommand::PlayerCommand(PlayerCommand::StartBattle { stage_index: stage })
        }
        "tap" => {
            let x: f64 = parts.next()?.parse().ok()?;
            let y: f64 = parts.next()?.parse().ok()?;
            GameLoopCommand::PlayerCommand(PlayerCommand::TapAt {
                point: ScreenPoint { x, y },
            })
        }
        "quit" => GameLoopCommand::Shutdown,
        _ => return None,
    };
    Some(command)
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_options(std::env::args().skip(1))?;

    let data = assets::load_game_data()?;

    if let Some(afk_secs) = options.afk_secs {
        let rates = assets::load_offline_rates()?;
        let result = offline::settle(&rates, afk_secs, options.stage, options.power_tier, 0.0);
        println!("{}", offline::describe(&result));
    }

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (tx, handle) = game_loop::spawn_game_loop(
        SimConfig {
            seed: options.seed,
            data,
        },
        Arc::clone(&latest_snapshot),
    );

    tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartBattle {
        stage_index: options.stage,
    }))?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_stdin_command(&line) {
            Some(GameLoopCommand::Shutdown) => break,
            Some(command) => tx.send(command)?,
            None => eprintln!("unrecognized command: {line}"),
        }
    }

    tx.send(GameLoopCommand::Shutdown)?;
    handle.join().map_err(|_| "game loop thread panicked")?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("vanguard-app: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_defaults_and_flags() {
        let defaults = parse_options(std::iter::empty()).unwrap();
        assert_eq!(defaults.stage, 1);
        assert_eq!(defaults.seed, 42);
        assert!(defaults.afk_secs.is_none());

        let parsed = parse_options(
            ["--stage", "3", "--seed", "7", "--afk", "3600", "--tier", "1"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        assert_eq!(parsed.stage, 3);
        assert_eq!(parsed.seed, 7);
        assert_eq!(parsed.afk_secs, Some(3600.0));
        assert_eq!(parsed.power_tier, 1);

        assert!(parse_options(["--bogus".to_string()].into_iter()).is_err());
    }

    #[test]
    fn test_parse_stdin_commands() {
        assert!(matches!(
            parse_stdin_command("pause"),
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
        ));
        assert!(matches!(
            parse_stdin_command("cast 2"),
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::CastSkill {
                skill_id: SkillId(2)
            }))
        ));
        assert!(matches!(
            parse_stdin_command("battle 3"),
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::StartBattle {
                stage_index: 3
            }))
        ));
        assert!(matches!(
            parse_stdin_command("quit"),
            Some(GameLoopCommand::Shutdown)
        ));
        assert!(parse_stdin_command("frobnicate").is_none());
        assert!(parse_stdin_command("cast notanumber").is_none());
    }
}
