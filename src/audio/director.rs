//! Headless sound mixing.
//!
//! Models playback bookkeeping without touching an audio device: named
//! clips, pooled voices, mute flags, and scheduler-driven reclaim. The
//! presentation layer mirrors live voices into real sources; tests drive
//! the director directly.
//!
//! Voices are pooled for the same reason card slots are - short sounds
//! start and stop constantly, and recycling beats re-allocating. A played
//! voice schedules its own `ReclaimVoice` continuation for when the clip
//! ends; loops and music stay live until replaced.

use rustc_hash::FxHashMap;

use crate::core::{Continuation, HostId, InstanceId, PrototypeId};
use crate::pool::{Pool, PoolItem};
use crate::scheduler::Scheduler;

/// One pooled playback slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Voice {
    clip: Option<String>,
    looping: bool,
    muted: bool,
    live: bool,
}

impl Voice {
    /// Name of the clip this voice is playing, while live.
    #[must_use]
    pub fn clip(&self) -> Option<&str> {
        self.clip.as_deref()
    }

    /// Does this voice repeat until reclaimed?
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Is this voice muted?
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Is this voice currently playing?
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live
    }
}

impl PoolItem for Voice {
    fn activate(&mut self, _host: HostId) {
        self.live = true;
    }

    fn deactivate(&mut self) {
        self.live = false;
        self.clip = None;
        self.looping = false;
        self.muted = false;
    }
}

#[derive(Clone, Debug)]
struct ClipState {
    duration: f32,
    /// Seconds until this clip may play again; decays every tick.
    throttle: f32,
}

/// Sound playback bookkeeping with explicit mute state.
///
/// Mute flags are plain fields on the director - one per concern, nothing
/// ambient - and apply both to live voices and to voices started later.
pub struct AudioDirector {
    clips: FxHashMap<String, ClipState>,
    voices: Pool<Voice>,
    sounds: Vec<InstanceId>,
    music: Option<InstanceId>,
    sound_muted: bool,
    music_muted: bool,
}

impl AudioDirector {
    /// Mixer host id voices are re-homed to. The pool layer requires a
    /// host; audio has exactly one.
    const MIXER: HostId = HostId(0);

    /// Create a director with no clips registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clips: FxHashMap::default(),
            voices: Pool::new(PrototypeId::new(0), Voice::default),
            sounds: Vec::new(),
            music: None,
            sound_muted: false,
            music_muted: false,
        }
    }

    /// Register a clip. Names are case-insensitive.
    pub fn register_clip(&mut self, name: &str, duration_seconds: f32) {
        self.clips.insert(
            name.to_lowercase(),
            ClipState {
                duration: duration_seconds.max(0.0),
                throttle: 0.0,
            },
        );
    }

    /// Play a one-shot sound.
    ///
    /// Returns the voice id, or `None` if the clip is unknown (logged) or
    /// still inside its repeat window. The voice reclaims itself through
    /// `scheduler` once the clip duration elapses.
    pub fn play_sound(
        &mut self,
        name: &str,
        repeat_delay: f32,
        scheduler: &mut Scheduler<Continuation>,
    ) -> Option<InstanceId> {
        let key = name.to_lowercase();
        let Some(clip) = self.clips.get_mut(&key) else {
            log::warn!("unknown clip {name:?}");
            return None;
        };
        if clip.throttle > 0.0 {
            return None;
        }
        clip.throttle = repeat_delay;
        let duration = clip.duration;

        let voice = self.voices.spawn(Self::MIXER);
        if let Some(state) = self.voices.get_mut(voice) {
            state.clip = Some(key);
            state.looping = false;
            state.muted = self.sound_muted;
        }
        self.sounds.push(voice);
        scheduler.after(duration, Continuation::ReclaimVoice { voice });
        Some(voice)
    }

    /// Start (or replace) the looping music voice.
    ///
    /// Returns the voice id, or `None` for an unknown clip.
    pub fn play_music(&mut self, name: &str) -> Option<InstanceId> {
        let key = name.to_lowercase();
        if !self.clips.contains_key(&key) {
            log::warn!("unknown clip {name:?}");
            return None;
        }

        if let Some(previous) = self.music.take() {
            self.voices.despawn(previous);
        }

        let voice = self.voices.spawn(Self::MIXER);
        if let Some(state) = self.voices.get_mut(voice) {
            state.clip = Some(key);
            state.looping = true;
            state.muted = self.music_muted;
        }
        self.music = Some(voice);
        Some(voice)
    }

    /// Return a finished voice to the pool.
    pub fn reclaim(&mut self, voice: InstanceId) {
        self.sounds.retain(|&v| v != voice);
        if self.music == Some(voice) {
            self.music = None;
        }
        self.voices.despawn(voice);
    }

    /// Mute or unmute sound effects, live ones included.
    pub fn mute_sound(&mut self, mute: bool) {
        self.sound_muted = mute;
        for &voice in &self.sounds {
            if let Some(state) = self.voices.get_mut(voice) {
                state.muted = mute;
            }
        }
    }

    /// Mute or unmute the music voice.
    pub fn mute_music(&mut self, mute: bool) {
        self.music_muted = mute;
        if let Some(voice) = self.music {
            if let Some(state) = self.voices.get_mut(voice) {
                state.muted = mute;
            }
        }
    }

    /// Decay repeat-delay throttles.
    pub fn tick(&mut self, delta_seconds: f32) {
        for clip in self.clips.values_mut() {
            clip.throttle -= delta_seconds;
        }
    }

    /// Inspect a voice.
    #[must_use]
    pub fn voice(&self, id: InstanceId) -> Option<&Voice> {
        self.voices.get(id)
    }

    /// Number of live one-shot voices.
    #[must_use]
    pub fn live_sounds(&self) -> usize {
        self.sounds.len()
    }

    /// The current music voice, if any.
    #[must_use]
    pub const fn music(&self) -> Option<InstanceId> {
        self.music
    }

    /// Are sound effects muted?
    #[must_use]
    pub const fn is_sound_muted(&self) -> bool {
        self.sound_muted
    }

    /// Is music muted?
    #[must_use]
    pub const fn is_music_muted(&self) -> bool {
        self.music_muted
    }
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director() -> (AudioDirector, Scheduler<Continuation>) {
        let mut audio = AudioDirector::new();
        audio.register_clip("Match", 0.5);
        audio.register_clip("click", 0.1);
        audio.register_clip("theme", 30.0);
        (audio, Scheduler::new())
    }

    #[test]
    fn test_play_spawns_voice_and_schedules_reclaim() {
        let (mut audio, mut sched) = director();

        let voice = audio.play_sound("match", 0.0, &mut sched).unwrap();

        assert_eq!(audio.live_sounds(), 1);
        assert!(audio.voice(voice).unwrap().is_live());
        assert_eq!(audio.voice(voice).unwrap().clip(), Some("match"));
        assert_eq!(sched.len(), 1);

        // The clip ends; the session routes the continuation back.
        let fired = sched.tick(0.5);
        assert_eq!(fired, vec![Continuation::ReclaimVoice { voice }]);
        audio.reclaim(voice);

        assert_eq!(audio.live_sounds(), 0);
        assert!(!audio.voice(voice).unwrap().is_live());
    }

    #[test]
    fn test_clip_names_are_case_insensitive() {
        let (mut audio, mut sched) = director();
        assert!(audio.play_sound("MATCH", 0.0, &mut sched).is_some());
    }

    #[test]
    fn test_unknown_clip_degrades_to_none() {
        let (mut audio, mut sched) = director();
        assert!(audio.play_sound("nope", 0.0, &mut sched).is_none());
        assert_eq!(audio.live_sounds(), 0);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_repeat_window_throttles_replay() {
        let (mut audio, mut sched) = director();

        assert!(audio.play_sound("click", 0.5, &mut sched).is_some());
        assert!(audio.play_sound("click", 0.5, &mut sched).is_none());

        audio.tick(0.6);
        assert!(audio.play_sound("click", 0.5, &mut sched).is_some());
    }

    #[test]
    fn test_voices_are_recycled() {
        let (mut audio, mut sched) = director();

        let first = audio.play_sound("click", 0.0, &mut sched).unwrap();
        audio.reclaim(first);
        let second = audio.play_sound("click", 0.0, &mut sched).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_mute_sound_applies_to_live_voices() {
        let (mut audio, mut sched) = director();
        let voice = audio.play_sound("match", 0.0, &mut sched).unwrap();

        audio.mute_sound(true);
        assert!(audio.voice(voice).unwrap().is_muted());

        // And to voices started afterwards.
        audio.tick(1.0);
        let later = audio.play_sound("click", 0.0, &mut sched).unwrap();
        assert!(audio.voice(later).unwrap().is_muted());

        audio.mute_sound(false);
        assert!(!audio.voice(voice).unwrap().is_muted());
    }

    #[test]
    fn test_music_replaces_previous_voice() {
        let (mut audio, _sched) = director();

        let first = audio.play_music("theme").unwrap();
        let second = audio.play_music("theme").unwrap();

        assert_eq!(audio.music(), Some(second));
        assert!(!audio.voice(first).unwrap().is_live() || first == second);
        assert!(audio.voice(second).unwrap().is_looping());
    }

    #[test]
    fn test_mute_music_is_independent_of_sound() {
        let (mut audio, mut sched) = director();
        let music = audio.play_music("theme").unwrap();
        let sound = audio.play_sound("click", 0.0, &mut sched).unwrap();

        audio.mute_music(true);

        assert!(audio.voice(music).unwrap().is_muted());
        assert!(!audio.voice(sound).unwrap().is_muted());
    }
}
