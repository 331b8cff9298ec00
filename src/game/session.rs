//! Session composition root.
//!
//! Wires the context, the match engine, and the audio director into one
//! playable game and owns the frame loop's entry points. This is the only
//! place that knows about every subsystem; components below it receive
//! references and never reach for anything ambient.

use std::cell::RefCell;
use std::rc::Rc;

use crate::audio::AudioDirector;
use crate::board::{CardSlot, GameContext, MatchEngine};
use crate::core::{Continuation, EngineConfig, GameRng, HostId, InstanceId};
use crate::deck::FaceId;
use crate::events::{EventBus, GameEvent};
use crate::grid::GridSize;

/// Sound to play for a presentation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SoundCue {
    Click,
    Match,
    Mismatch,
    Win,
}

impl SoundCue {
    const fn clip(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Win => "win",
        }
    }
}

/// How many slots to create up front; a 10×10 board can still grow the
/// pool past this lazily.
const SLOT_PREWARM: usize = 20;

/// A complete game wired together: context, engine, audio.
///
/// ## Usage
///
/// ```
/// use pairup::core::GameRng;
/// use pairup::game::GameSession;
///
/// let mut session = GameSession::new(GameRng::new(42));
/// session.set_grid_size(2, 2);
/// session.start();
///
/// // Frame loop: the deal happens after the configured start delay.
/// session.tick(0.5);
/// assert_eq!(session.engine().slots().len(), 4);
/// ```
pub struct GameSession {
    ctx: GameContext,
    engine: MatchEngine,
    audio: AudioDirector,
    cues: Rc<RefCell<Vec<SoundCue>>>,
}

impl GameSession {
    /// Grid container slots are re-homed to while dealt.
    const GRID: HostId = HostId(1);

    /// Create a session with default timing.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_config(rng, EngineConfig::default())
    }

    /// Create a session with explicit timing.
    #[must_use]
    pub fn with_config(rng: GameRng, config: EngineConfig) -> Self {
        let mut ctx = GameContext::new(rng);
        let prototype = ctx.slots.register(CardSlot::new);
        ctx.slots.prewarm(prototype, SLOT_PREWARM);

        let cues: Rc<RefCell<Vec<SoundCue>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = cues.clone();
        ctx.events.subscribe(move |event| {
            let cue = match event {
                GameEvent::Match { .. } => Some(SoundCue::Match),
                GameEvent::Mismatch { .. } => Some(SoundCue::Mismatch),
                GameEvent::Win { .. } => Some(SoundCue::Win),
                _ => None,
            };
            if let Some(cue) = cue {
                sink.borrow_mut().push(cue);
            }
        });

        Self {
            engine: MatchEngine::new(prototype, Self::GRID, config),
            audio: AudioDirector::new(),
            ctx,
            cues,
        }
    }

    /// Request a new game: raises `GameStart`, then deals after the
    /// configured start delay.
    pub fn start(&mut self) {
        self.ctx.events.publish(&GameEvent::GameStart);
        let delay = self.engine.config().deal_delay;
        self.ctx.scheduler.after(delay, Continuation::Deal);
    }

    /// Return to the menu state and rebuild the board.
    pub fn reset(&mut self) {
        self.ctx.events.publish(&GameEvent::GameReset);
        self.engine.restart(&mut self.ctx);
    }

    /// Forward a pick from the input layer.
    ///
    /// Gated through the slot's own pick guard, so matched or revealed
    /// slots never reach the engine. A press always clicks.
    pub fn pick(&mut self, slot: InstanceId) {
        let pickable = self
            .ctx
            .slots
            .get(slot)
            .map_or(false, |state| state.try_pick());
        if !pickable {
            return;
        }

        self.audio
            .play_sound(SoundCue::Click.clip(), 0.0, &mut self.ctx.scheduler);
        self.engine.on_pick(slot, &mut self.ctx);
    }

    /// One frame: timer, scheduler dispatch, audio upkeep, queued cues.
    pub fn tick(&mut self, delta_seconds: f32) {
        self.engine.advance_timer(delta_seconds, &mut self.ctx);

        for continuation in self.ctx.scheduler.tick(delta_seconds) {
            match continuation {
                Continuation::ReclaimVoice { voice } => self.audio.reclaim(voice),
                other => self.engine.apply(other, &mut self.ctx),
            }
        }

        self.audio.tick(delta_seconds);

        let queued: Vec<SoundCue> = self.cues.borrow_mut().drain(..).collect();
        for cue in queued {
            self.audio
                .play_sound(cue.clip(), 0.0, &mut self.ctx.scheduler);
        }
    }

    /// Resize the grid used by future deals.
    pub fn set_grid_size(&mut self, cols: u32, rows: u32) -> GridSize {
        self.engine.set_grid_size(cols, rows)
    }

    /// Replace the face pool used by future deals.
    pub fn set_faces(&mut self, faces: Vec<FaceId>) {
        self.engine.set_faces(faces);
    }

    /// The match engine, for state inspection.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Inspect one slot's card state.
    #[must_use]
    pub fn slot(&self, id: InstanceId) -> Option<&CardSlot> {
        self.ctx.slots.get(id)
    }

    /// The event bus, for UI listeners.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.ctx.events
    }

    /// The audio director.
    #[must_use]
    pub fn audio(&self) -> &AudioDirector {
        &self.audio
    }

    /// Mutable audio director, for clip registration and mute toggles.
    pub fn audio_mut(&mut self) -> &mut AudioDirector {
        &mut self.audio
    }
}
