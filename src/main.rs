//! Skyflap headless runner
//!
//! Plays one session with the autopilot and reports how it went.
//!
//! Usage: `skyflap [difficulty] [seed] [frames]`
//! Settings are read from the JSON file named by `SKYFLAP_SETTINGS`, if set.

use std::cell::RefCell;
use std::rc::Rc;

use skyflap::consts::SIM_DT_MS;
use skyflap::session::{CoinPurse, SessionConfig};
use skyflap::sim::GameEvent;
use skyflap::{Difficulty, HighScores, Session, Settings, autopilot};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_FRAMES: u64 = 60 * 60;

fn load_settings() -> Settings {
    let Ok(path) = std::env::var("SKYFLAP_SETTINGS") else {
        return Settings::load(None);
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => Settings::load(Some(&json)),
        Err(e) => {
            log::warn!("Could not read settings from {path}: {e}");
            Settings::load(None)
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Skyflap (headless) starting...");

    let mut settings = load_settings();
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        match Difficulty::from_str(&arg) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!("Unknown difficulty {arg:?}, using {}", settings.difficulty.as_str()),
        }
    }
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    if settings.display_name.is_empty() {
        settings.display_name = "autopilot".to_string();
    }

    let purse = Rc::new(RefCell::new(CoinPurse::default()));
    let board = Rc::new(RefCell::new(HighScores::new()));
    let mut session = Session::new(SessionConfig::from_settings(&settings, seed))
        .with_coins(Box::new(purse.clone()))
        .with_scoreboard(Box::new(board.clone()));
    session.audio_mut().apply_settings(&settings);

    log::info!(
        "Difficulty {}, seed {seed}, {frames} frames",
        settings.difficulty.as_str()
    );

    let mut now_ms = 0.0;
    let mut runs = 0u32;
    session.press(now_ms);

    for _ in 0..frames {
        if session.state().is_game_over() {
            session.press(now_ms);
        }
        if autopilot::wants_jump(session.state()) {
            session.press(now_ms);
        }

        now_ms += SIM_DT_MS;
        for event in session.advance(SIM_DT_MS, now_ms) {
            match event {
                GameEvent::GameOver { score } => {
                    runs += 1;
                    log::info!("Run {runs} over at {score} points");
                }
                GameEvent::ShieldBroken => log::debug!("Shield broke"),
                _ => {}
            }
        }
    }

    let state = session.state();
    println!("Difficulty:   {}", settings.difficulty.config().label);
    println!("Finished runs: {runs}");
    println!("Current score: {} ({})", state.score, state.biome.config().name);
    println!("Best score:   {}", state.high_score);
    println!("Coins earned: {}", purse.borrow().balance);
    for (rank, entry) in board.borrow().entries.iter().enumerate() {
        println!("  #{:<2} {:>5}  {}", rank + 1, entry.score, entry.display_name);
    }
}
