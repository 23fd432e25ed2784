//! Narrative script and sequencer state.
//!
//! [`NarrativeScript`] is the poem: lines bound to a horizontal trigger, read
//! from the level's `poem` object layer. [`NarrativeState`] is what the
//! sequencer shows right now and where its cross-fade stands.
//!
//! The fade is a small explicit machine:
//!
//! ```text
//! Idle --activate--> FadingOut --timer(ShowLine i)--> FadingIn --timer(FadeInDone)--> Idle
//!                        ^                                |
//!                        +------------activate------------+
//! ```
//!
//! Every transition that schedules a timer takes a fresh token. A timer event
//! whose token is not the latest one belongs to a superseded fade and is
//! dropped, so a pre-empted fade can never apply stale text.

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Debug, Clone, PartialEq)]
pub struct PoemLine {
    /// World x the player must reach to show this line.
    pub trigger_x: f32,
    pub text: String,
    /// Ambient spawn chance once this line activates.
    pub spawn_chance: f32,
    pub processed: bool,
}

impl PoemLine {
    pub fn new(trigger_x: f32, text: impl Into<String>, spawn_chance: f32) -> Self {
        Self {
            trigger_x,
            text: text.into(),
            spawn_chance,
            processed: false,
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct NarrativeScript {
    lines: Vec<PoemLine>,
}

impl NarrativeScript {
    /// Build a script ordered by trigger position. Lines sharing a trigger
    /// keep their level order.
    pub fn new(mut lines: Vec<PoemLine>) -> Self {
        lines.sort_by(|a, b| a.trigger_x.total_cmp(&b.trigger_x));
        Self { lines }
    }

    pub fn lines(&self) -> &[PoemLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&PoemLine> {
        self.lines.get(index)
    }

    /// First unprocessed line whose trigger is at or behind `x`.
    pub fn next_due(&self, x: f32) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| !l.processed && x >= l.trigger_x)
    }

    /// Mark a line processed. Returns false if it already was.
    pub fn mark_processed(&mut self, index: usize) -> bool {
        match self.lines.get_mut(index) {
            Some(line) if !line.processed => {
                line.processed = true;
                true
            }
            _ => false,
        }
    }

    pub fn unprocessed_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.processed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Idle,
    FadingOut,
    FadingIn,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct NarrativeState {
    /// Text currently on screen (or fading out).
    pub displayed_text: String,
    pub phase: FadePhase,
    /// Set once, when every line has been processed.
    pub script_complete: bool,
    /// Line waiting for the fade-out to finish.
    pub pending_line: Option<usize>,
    /// Entity carrying the poem text.
    pub text_entity: Option<Entity>,
    fade_token: u64,
}

impl NarrativeState {
    pub fn with_text_entity(entity: Entity) -> Self {
        Self {
            text_entity: Some(entity),
            ..Self::default()
        }
    }

    pub fn fade_token(&self) -> u64 {
        self.fade_token
    }

    /// Start fading out towards `line`, superseding any fade in flight.
    /// Returns the token the fade-out timer must carry.
    pub fn begin_fade_out(&mut self, line: usize) -> u64 {
        self.fade_token += 1;
        self.phase = FadePhase::FadingOut;
        self.pending_line = Some(line);
        self.fade_token
    }

    /// Whether a timer scheduled with `token` still belongs to the live fade.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.fade_token
    }

    /// Swap in the pending line's text and start fading in. Returns the
    /// token for the fade-in timer.
    pub fn begin_fade_in(&mut self, text: impl Into<String>) -> u64 {
        self.fade_token += 1;
        self.displayed_text = text.into();
        self.pending_line = None;
        self.phase = FadePhase::FadingIn;
        self.fade_token
    }

    pub fn finish_fade_in(&mut self) {
        self.phase = FadePhase::Idle;
    }

    /// Flip `script_complete`. Returns true only on the false→true edge.
    pub fn mark_complete(&mut self) -> bool {
        if self.script_complete {
            return false;
        }
        self.script_complete = true;
        true
    }
}
