//! Game loop thread — runs the simulation engine at 30 Hz.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot
//! is stored in shared state for synchronous polling. Step pacing goes
//! through `SimulationClock`, so a stalled host catches up by at most
//! the bounded number of steps and then discards the backlog.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use vanguard_core::constants::TICK_RATE;
use vanguard_core::enums::ActorKind;
use vanguard_core::state::BattleSnapshot;
use vanguard_sim::clock::SimulationClock;
use vanguard_sim::engine::{SimConfig, SimulationEngine};
use vanguard_sim::scheduler::{TickHandle, TickScheduler};

use crate::autopilot::Autopilot;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How often the headless host prints a summary line.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer and the join handle
/// for shutdown.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<BattleSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("vanguard-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<BattleSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut clock = SimulationClock::default();

    // The host owns one scheduler and registers its frame-rate agents;
    // the fixed-step cadence itself is the engine's.
    let mut scheduler = TickScheduler::new();
    let local_snapshot: Rc<RefCell<Option<BattleSnapshot>>> = Rc::new(RefCell::new(None));
    let outbox: Rc<RefCell<Vec<vanguard_core::commands::PlayerCommand>>> =
        Rc::new(RefCell::new(Vec::new()));
    let pilot: TickHandle = Rc::new(RefCell::new(Autopilot::new(
        Rc::clone(&local_snapshot),
        Rc::clone(&outbox),
    )));
    scheduler.register(&pilot);

    let mut last_frame = Instant::now();
    let mut last_report = Instant::now();

    loop {
        // 1. Drain all pending host commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance the fixed-step clock by the real frame time.
        let now = Instant::now();
        let frame_dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        for _ in 0..clock.advance(frame_dt) {
            engine.queue_commands(outbox.borrow_mut().drain(..));

            let snapshot = engine.tick();
            *local_snapshot.borrow_mut() = Some(snapshot.clone());
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 3. Frame-rate agents (the autopilot) see the fresh snapshot.
        scheduler.dispatch_frame(frame_dt);

        // 4. Periodic summary line.
        if last_report.elapsed() >= REPORT_INTERVAL {
            last_report = now;
            if let Some(snapshot) = local_snapshot.borrow().as_ref() {
                print_summary(snapshot);
            }
        }

        std::thread::sleep(TICK_DURATION / 2);
    }
}

fn print_summary(snapshot: &BattleSnapshot) {
    let living_monsters = snapshot
        .actors
        .iter()
        .filter(|a| a.kind == ActorKind::Monster && a.alive)
        .count();
    let player_health = snapshot
        .actors
        .iter()
        .find(|a| a.kind == ActorKind::Player)
        .map(|a| a.health)
        .unwrap_or(0);

    println!(
        "[t={:7.1}s] stage {} | player hp {} | monsters {} | gold {} exp {} | {} events",
        snapshot.time.elapsed_secs,
        snapshot.stage_index,
        player_health,
        living_monsters,
        snapshot.wallet.gold,
        snapshot.wallet.exp,
        snapshot.events.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use vanguard_core::commands::PlayerCommand;

    #[test]
    fn test_tick_duration_constant() {
        // 30 Hz = 33.333 ms per tick.
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let config = SimConfig {
            seed: 1,
            data: assets::load_game_data().unwrap(),
        };
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(config, Arc::clone(&latest));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartBattle {
            stage_index: 1,
        }))
        .unwrap();

        // Give the loop a few real ticks to produce a snapshot.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if latest.lock().unwrap().is_some() {
                break;
            }
            assert!(Instant::now() < deadline, "No snapshot within 2s");
            std::thread::sleep(Duration::from_millis(10));
        }

        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.stage_index, 1);
        assert!(!snap.actors.is_empty());

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
