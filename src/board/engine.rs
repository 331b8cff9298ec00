//! The card-matching state machine.
//!
//! One `MatchEngine` orchestrates a round: it deals pooled slots from a
//! `DeckBuilder` assignment, consumes pick notifications, and resolves
//! completed selections into matches or mismatches. Every transition that
//! covers an animation - reveal grace, flip-back, the win fanfare - is a
//! scheduled continuation, never a blocking wait, so control returns to
//! the frame loop immediately.
//!
//! ## Phases
//!
//! ```text
//! Idle -> Dealing -> AwaitingFirstPick -> AwaitingSecondPick -> Resolving
//!             ^            ^                                        |
//!             |            +----- (resolution dispatched) ---------+
//!         (restart)        |                                       |
//!             +---------- Won <------ (all matched, win delay) ----+
//! ```
//!
//! `Dealing` is transient inside one synchronous `build_board` call.
//! Input is locked for the whole of `Resolving`; picks arriving then are
//! dropped, not queued.
//!
//! ## Round generations
//!
//! The scheduler has no cancellation, so a rebuild can leave stale
//! continuations in flight (a flip-back aimed at a round that no longer
//! exists). Every board continuation carries the generation of the round
//! that scheduled it and is dropped on arrival if the board has been
//! rebuilt since.

use smallvec::SmallVec;

use crate::core::{Continuation, EngineConfig, HostId, InstanceId, PrototypeId, RoundTimer};
use crate::deck::{build_deck, FaceId};
use crate::events::GameEvent;
use crate::grid::GridSize;

use super::context::GameContext;

/// Where the engine is in the pick/resolve cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    /// No round dealt.
    Idle,
    /// Inside a synchronous deal.
    Dealing,
    /// Waiting for the first pick of a selection.
    AwaitingFirstPick,
    /// One slot selected, waiting for its partner.
    AwaitingSecondPick,
    /// Two slots selected; comparison scheduled, input locked.
    Resolving,
    /// Every pair matched. Terminal until restart.
    Won,
}

/// Round orchestrator: slot collection, selection buffer, timer.
pub struct MatchEngine {
    phase: EnginePhase,
    grid: GridSize,
    faces: Vec<FaceId>,
    slots: Vec<InstanceId>,
    selection: SmallVec<[InstanceId; 2]>,
    input_locked: bool,
    timer: RoundTimer,
    round: u64,
    prototype: PrototypeId,
    host: HostId,
    config: EngineConfig,
}

impl MatchEngine {
    /// Create an idle engine dealing `prototype` slots onto `host`.
    #[must_use]
    pub fn new(prototype: PrototypeId, host: HostId, config: EngineConfig) -> Self {
        Self {
            phase: EnginePhase::Idle,
            grid: GridSize::default(),
            faces: Vec::new(),
            slots: Vec::new(),
            selection: SmallVec::new(),
            input_locked: false,
            timer: RoundTimer::new(),
            round: 0,
            prototype,
            host,
            config,
        }
    }

    /// Replace the face pool used for future deals.
    ///
    /// An empty pool means placeholder faces.
    pub fn set_faces(&mut self, faces: Vec<FaceId>) {
        self.faces = faces;
    }

    /// Resize the grid for future deals. Dimensions are clamped to the
    /// grid's legal range; the current round is not rebuilt.
    pub fn set_grid_size(&mut self, cols: u32, rows: u32) -> GridSize {
        self.grid = GridSize::new(cols, rows);
        self.grid
    }

    /// Tear down the current round (if any) and deal a fresh one.
    ///
    /// Valid from any phase except `Resolving` - rebuilding under a live
    /// comparison is refused and logged. Always ends in
    /// `AwaitingFirstPick` with the selection empty, input unlocked, and
    /// the timer zeroed.
    pub fn build_board(&mut self, ctx: &mut GameContext) {
        if self.phase == EnginePhase::Resolving {
            log::warn!("build_board refused: a resolution is in flight");
            return;
        }

        self.phase = EnginePhase::Dealing;
        self.round += 1;

        // The board always deals an even count; widen by one column if the
        // requested grid comes out odd.
        if self.grid.cell_count() % 2 == 1 {
            self.grid.set_cols(self.grid.cols() + 1);
        }
        let total = self.grid.cell_count();

        for id in self.slots.drain(..) {
            if let Some(slot) = ctx.slots.get_mut(id) {
                slot.on_despawn();
            }
            ctx.slots.despawn(id);
        }

        let deck = build_deck(&mut ctx.rng, total, &self.faces);
        for entry in deck {
            let Some(id) = ctx.slots.spawn(self.prototype, self.host) else {
                log::error!("deal aborted: slot prototype is not registered");
                self.abandon_deal(ctx);
                return;
            };
            if let Some(slot) = ctx.slots.get_mut(id) {
                slot.reset_for_reuse();
                slot.setup(entry.face, entry.pair);
            }
            self.slots.push(id);
        }

        self.selection.clear();
        self.input_locked = false;
        self.timer.reset();
        self.phase = EnginePhase::AwaitingFirstPick;
        log::debug!("round {} dealt: {} slots", self.round, total);
    }

    /// Equivalent to [`build_board`](Self::build_board); callable from
    /// `Won` or mid-round.
    pub fn restart(&mut self, ctx: &mut GameContext) {
        self.build_board(ctx);
    }

    /// Handle a pick notification for `slot`.
    ///
    /// Ignored while input is locked, outside an active round, or for a
    /// slot that is absent, not part of the round, matched, or already the
    /// sole selection. A valid pick always reveals the slot immediately,
    /// whatever the eventual outcome.
    pub fn on_pick(&mut self, slot: InstanceId, ctx: &mut GameContext) {
        if self.input_locked {
            return;
        }
        match self.phase {
            EnginePhase::AwaitingFirstPick | EnginePhase::AwaitingSecondPick => {}
            _ => return,
        }
        if !self.slots.contains(&slot) {
            return;
        }
        let Some(state) = ctx.slots.get_mut(slot) else {
            return;
        };
        // The pick source guards matched slots; tolerate one anyway.
        if state.is_matched() {
            return;
        }
        if self.selection.contains(&slot) {
            return;
        }

        if !self.timer.is_running() {
            self.timer.start();
        }
        state.reveal();

        self.selection.push(slot);
        if self.selection.len() == 1 {
            self.phase = EnginePhase::AwaitingSecondPick;
            return;
        }

        self.input_locked = true;
        self.phase = EnginePhase::Resolving;
        ctx.scheduler.after(
            self.config.resolve_delay,
            Continuation::Resolve { round: self.round },
        );
    }

    /// Advance the round timer and publish the per-tick readout.
    pub fn advance_timer(&mut self, delta_seconds: f32, ctx: &mut GameContext) {
        self.timer.tick(delta_seconds);
        ctx.events.publish(&GameEvent::TimerTick {
            elapsed: self.timer.elapsed(),
        });
    }

    /// One frame: advance the timer, then fire and apply everything due.
    ///
    /// Embedders that route other continuations through the same scheduler
    /// (voice reclaim, for instance) should drive
    /// [`advance_timer`](Self::advance_timer) and
    /// [`apply`](Self::apply) themselves instead.
    pub fn tick(&mut self, delta_seconds: f32, ctx: &mut GameContext) {
        self.advance_timer(delta_seconds, ctx);
        for continuation in ctx.scheduler.tick(delta_seconds) {
            self.apply(continuation, ctx);
        }
    }

    /// Execute one fired continuation.
    ///
    /// Continuations bound to an earlier round are dropped: the slots they
    /// captured have been recycled into a new deal.
    pub fn apply(&mut self, continuation: Continuation, ctx: &mut GameContext) {
        if let Some(round) = continuation.round() {
            if round != self.round {
                log::debug!("dropping stale {continuation:?} from round {round}");
                return;
            }
        }

        match continuation {
            Continuation::Deal => self.build_board(ctx),
            Continuation::Resolve { .. } => self.resolve(ctx),
            Continuation::FlipBack { first, second, .. } => {
                if let Some(slot) = ctx.slots.get_mut(first) {
                    slot.conceal();
                }
                if let Some(slot) = ctx.slots.get_mut(second) {
                    slot.conceal();
                }
            }
            Continuation::AnnounceWin { elapsed, .. } => {
                self.phase = EnginePhase::Won;
                ctx.events.publish(&GameEvent::Win { elapsed });
            }
            // Voice reclaim belongs to the audio director; a session that
            // routes it here has nothing for the board to do.
            Continuation::ReclaimVoice { .. } => {}
        }
    }

    /// Compare the completed selection.
    fn resolve(&mut self, ctx: &mut GameContext) {
        if self.selection.len() != 2 {
            log::debug!(
                "resolve with {} selected slots ignored",
                self.selection.len()
            );
            self.selection.clear();
            self.input_locked = false;
            return;
        }
        let first = self.selection[0];
        let second = self.selection[1];

        let pair_of = |ctx: &GameContext, id| ctx.slots.get(id).map(|slot| slot.pair());
        let matched = match (pair_of(ctx, first), pair_of(ctx, second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        if matched {
            if let Some(slot) = ctx.slots.get_mut(first) {
                slot.set_matched(true);
            }
            if let Some(slot) = ctx.slots.get_mut(second) {
                slot.set_matched(true);
            }
            ctx.events.publish(&GameEvent::Match { first, second });

            if self.all_matched(ctx) {
                self.timer.stop();
                ctx.scheduler.after(
                    self.config.win_delay,
                    Continuation::AnnounceWin {
                        round: self.round,
                        elapsed: self.timer.elapsed(),
                    },
                );
            }
        } else {
            ctx.events.publish(&GameEvent::Mismatch { first, second });
            ctx.scheduler.after(
                self.config.flip_back_delay,
                Continuation::FlipBack {
                    round: self.round,
                    first,
                    second,
                },
            );
        }

        // Unconditionally: the player can pick again while the mismatch
        // pair is still visibly flipping back.
        self.selection.clear();
        self.input_locked = false;
        if self.phase == EnginePhase::Resolving {
            self.phase = EnginePhase::AwaitingFirstPick;
        }
    }

    fn all_matched(&self, ctx: &GameContext) -> bool {
        self.slots
            .iter()
            .all(|&id| ctx.slots.get(id).map_or(true, |slot| slot.is_matched()))
    }

    fn abandon_deal(&mut self, ctx: &mut GameContext) {
        for id in self.slots.drain(..) {
            ctx.slots.despawn(id);
        }
        self.selection.clear();
        self.input_locked = false;
        self.timer.reset();
        self.phase = EnginePhase::Idle;
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Grid dimensions future deals will use.
    #[must_use]
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Slots of the current round, in deal order.
    #[must_use]
    pub fn slots(&self) -> &[InstanceId] {
        &self.slots
    }

    /// Number of currently selected slots.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Is pick input currently locked?
    #[must_use]
    pub const fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Elapsed seconds on the round timer.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.timer.elapsed()
    }

    /// Is the round timer counting?
    #[must_use]
    pub const fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Generation of the current round.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Timing configuration.
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }
}
