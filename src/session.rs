//! Host-side session
//!
//! Owns the current snapshot and the RNG, runs the fixed timestep loop and
//! forwards results to injected collaborators. Nothing here is global: audio,
//! the coin economy and the leaderboard are all passed in.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::settings::Settings;
use crate::sim::events::{self, GameEvent};
use crate::sim::{GamePhase, SkinId, WorldState, lifecycle, step};
use crate::tuning::Difficulty;

/// Coins earned for a final score
pub fn coins_for_score(score: u64) -> u64 {
    score.saturating_mul(COINS_PER_POINT)
}

/// Receives coins at the end of a run
pub trait CoinSink {
    fn award(&mut self, coins: u64);
}

/// A finished run offered to a leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub display_name: String,
    pub score: u64,
    pub difficulty: Difficulty,
    pub skin: SkinId,
    /// Host wall clock (ms)
    pub timestamp: f64,
}

/// Persists or displays finished runs
pub trait ScoreBoard {
    fn submit(&mut self, submission: ScoreSubmission);
}

impl ScoreBoard for HighScores {
    fn submit(&mut self, submission: ScoreSubmission) {
        let entry = HighScoreEntry {
            display_name: submission.display_name,
            score: submission.score,
            difficulty: submission.difficulty,
            skin: submission.skin.0,
            timestamp: submission.timestamp,
        };
        if let Some(rank) = self.add_score(entry) {
            log::info!("New local high score, rank {rank}");
        }
    }
}

impl<T: CoinSink> CoinSink for Rc<RefCell<T>> {
    fn award(&mut self, coins: u64) {
        self.borrow_mut().award(coins);
    }
}

impl<T: ScoreBoard> ScoreBoard for Rc<RefCell<T>> {
    fn submit(&mut self, submission: ScoreSubmission) {
        self.borrow_mut().submit(submission);
    }
}

/// Simple running coin balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinPurse {
    pub balance: u64,
}

impl CoinSink for CoinPurse {
    fn award(&mut self, coins: u64) {
        self.balance = self.balance.saturating_add(coins);
    }
}

/// What a session is created with
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub skin: SkinId,
    /// Leaderboard name; runs earn no coins and are not submitted without one
    pub display_name: String,
    pub seed: u64,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self {
            difficulty: settings.difficulty,
            skin: SkinId::new(settings.skin.clone()),
            display_name: settings.display_name.clone(),
            seed,
        }
    }
}

/// One player's game session
pub struct Session {
    state: WorldState,
    rng: Pcg32,
    accumulator_ms: f64,
    display_name: String,
    audio: AudioManager,
    coins: Option<Box<dyn CoinSink>>,
    scoreboard: Option<Box<dyn ScoreBoard>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: lifecycle::new_game(config.difficulty, config.skin),
            rng: Pcg32::seed_from_u64(config.seed),
            accumulator_ms: 0.0,
            display_name: config.display_name,
            audio: AudioManager::default(),
            coins: None,
            scoreboard: None,
        }
    }

    pub fn with_audio(mut self, audio: AudioManager) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_coins(mut self, coins: Box<dyn CoinSink>) -> Self {
        self.coins = Some(coins);
        self
    }

    pub fn with_scoreboard(mut self, scoreboard: Box<dyn ScoreBoard>) -> Self {
        self.scoreboard = Some(scoreboard);
        self
    }

    /// Current snapshot
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    /// Replace the snapshot and report what changed
    fn transition(&mut self, next: WorldState, now_ms: f64) -> Vec<GameEvent> {
        let events = events::detect(&self.state, &next, now_ms);
        self.state = next;
        self.audio.handle_events(&events);
        events
    }

    /// Tap / space: starts a run when none is active, otherwise flaps
    pub fn press(&mut self, now_ms: f64) -> Vec<GameEvent> {
        match self.state.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.accumulator_ms = 0.0;
                let next = lifecycle::start(&self.state);
                self.transition(next, now_ms)
            }
            GamePhase::Playing => {
                self.state = lifecycle::jump(&self.state);
                self.audio.play(SoundEffect::Jump);
                Vec::new()
            }
            GamePhase::Paused => Vec::new(),
        }
    }

    /// Escape: pause or resume a run in progress
    pub fn toggle_pause(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let next = lifecycle::toggle_pause(&self.state);
        self.transition(next, now_ms)
    }

    /// Window blur: auto-pause
    pub fn focus_lost(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let next = lifecycle::focus_lost(&self.state);
        self.transition(next, now_ms)
    }

    /// Throw the current run away and begin a new one
    pub fn restart(&mut self, now_ms: f64) -> Vec<GameEvent> {
        self.accumulator_ms = 0.0;
        // Through Idle so the new run reads as Started from any phase
        self.state = lifecycle::reset(&self.state);
        let next = lifecycle::start(&self.state);
        self.transition(next, now_ms)
    }

    /// Feed one rendered frame's worth of time into the fixed-step loop
    pub fn advance(&mut self, frame_ms: f64, now_ms: f64) -> Vec<GameEvent> {
        if self.state.phase != GamePhase::Playing {
            return Vec::new();
        }

        self.accumulator_ms += frame_ms.clamp(0.0, MAX_FRAME_MS);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator_ms >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            let next = step(&self.state, SIM_DT_MS as f32, now_ms, &mut self.rng);
            events.extend(events::detect(&self.state, &next, now_ms));
            self.state = next;
            self.accumulator_ms -= SIM_DT_MS;
            substeps += 1;

            if self.state.phase != GamePhase::Playing {
                self.accumulator_ms = 0.0;
                break;
            }
        }

        self.audio.handle_events(&events);

        if let Some(score) = events.iter().find_map(|e| match e {
            GameEvent::GameOver { score } => Some(*score),
            _ => None,
        }) {
            self.hand_off(score, now_ms);
        }

        events
    }

    /// Final score to the economy and the leaderboard. Both need a non-zero
    /// score and a display name; anonymous runs earn nothing.
    fn hand_off(&mut self, score: u64, now_ms: f64) {
        if score == 0 || self.display_name.is_empty() {
            return;
        }

        if let Some(coins) = self.coins.as_mut() {
            let earned = coins_for_score(score);
            log::info!("Awarding {earned} coins for {score} points");
            coins.award(earned);
        }

        if let Some(scoreboard) = self.scoreboard.as_mut() {
            scoreboard.submit(ScoreSubmission {
                display_name: self.display_name.clone(),
                score,
                difficulty: self.state.difficulty,
                skin: self.state.skin.clone(),
                timestamp: now_ms,
            });
        }
    }
}
