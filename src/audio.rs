//! Audio cues
//!
//! The game never talks to a sound device directly. The host injects an
//! `AudioBackend`; `AudioManager` decides what to play and how loud.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player flapped
    Jump,
    /// Obstacle passed
    Point,
    /// Power-up collected
    Buff,
    /// Shield soaked up a hit
    ShieldBreak,
    /// Run ended
    Death,
}

/// Background music commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    Play,
    Pause,
    Resume,
    Stop,
}

/// Whatever actually makes noise (Web Audio, rodio, a test recorder...)
pub trait AudioBackend {
    /// Play a one-shot effect at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Control the music track at `volume` (0.0 - 1.0)
    fn music(&mut self, command: MusicCommand, volume: f32);
}

/// Backend that drops everything (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
    fn music(&mut self, _command: MusicCommand, _volume: f32) {}
}

/// Effect for a simulation event, if it has one
pub fn effect_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Scored { .. } => Some(SoundEffect::Point),
        GameEvent::BuffGained => Some(SoundEffect::Buff),
        GameEvent::ShieldBroken => Some(SoundEffect::ShieldBreak),
        GameEvent::GameOver { .. } => Some(SoundEffect::Death),
        GameEvent::Started | GameEvent::Paused | GameEvent::Resumed => None,
    }
}

/// Music command for a simulation event, if it has one
pub fn music_for(event: &GameEvent) -> Option<MusicCommand> {
    match event {
        GameEvent::Started => Some(MusicCommand::Play),
        GameEvent::Paused => Some(MusicCommand::Pause),
        GameEvent::Resumed => Some(MusicCommand::Resume),
        GameEvent::GameOver { .. } => Some(MusicCommand::Stop),
        _ => None,
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullAudio))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    /// Take volumes and mute from the player's settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_music_volume(settings.music_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio. Muting also stops the music.
    pub fn set_muted(&mut self, muted: bool) {
        if muted && !self.muted {
            self.backend.music(MusicCommand::Stop, 0.0);
        }
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Play a sound effect (silently skipped at zero volume)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Forward a music command (skipped while muted)
    pub fn music(&mut self, command: MusicCommand) {
        if self.muted {
            return;
        }
        self.backend.music(command, self.effective_music_volume());
    }

    /// React to a batch of simulation events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = effect_for(event) {
                self.play(effect);
            }
            if let Some(command) = music_for(event) {
                self.music(command);
            }
        }
    }
}
