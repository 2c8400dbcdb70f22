//! Session module - everything one game of the dungeon needs
//!
//! Ties together the map, the player and the gold purse. Every state-changing
//! action marks the view dirty so the outer loop knows a redraw is due; rejected
//! actions leave both the state and the dirty flag untouched.
//!
//! Moves also raise [`SessionEvent`]s ("the door opens", "there be treasure
//! here"). They are queued for the outer loop, which drains them with
//! [`Session::take_events`], and kept in a short history for the status panel.

use arrayvec::ArrayVec;

use crate::player::{PlayerState, Step};
use crate::rng::SimpleRng;
use crate::tile_map::TileMap;
use crate::types::{
    Facing, PlayerAction, Tile, DEFAULT_FACING, DEFAULT_START, EVENT_LOG_LEN, TREASURE_MAX,
};

/// Notable things that happened during an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player stepped onto a chest.
    TreasureSpotted,
    /// The player stepped into a doorway.
    DoorOpened,
    /// The player stepped out of a doorway.
    DoorClosedBehind,
    /// A chest was emptied into the purse.
    GoldFound(u32),
}

impl SessionEvent {
    /// Text shown to the player
    pub fn message(&self) -> String {
        match self {
            SessionEvent::TreasureSpotted => "Arr, there be treasure here!".to_string(),
            SessionEvent::DoorOpened => "The door opens".to_string(),
            SessionEvent::DoorClosedBehind => "A door creaks closed behind you".to_string(),
            SessionEvent::GoldFound(amount) => format!("You found {} gold!", amount),
        }
    }
}

/// Pending events raised by one action (at most three per move).
const PENDING_EVENTS: usize = 4;

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    map: TileMap,
    player: PlayerState,
    gold: u32,
    dirty: bool,
    rng: SimpleRng,
    pending: ArrayVec<SessionEvent, PENDING_EVENTS>,
    history: ArrayVec<SessionEvent, EVENT_LOG_LEN>,
}

impl Session {
    /// Start a session on `map` with the player at the default start
    pub fn new(map: TileMap, seed: u32) -> Self {
        let (x, y) = DEFAULT_START;
        Self {
            map,
            player: PlayerState::new(x, y, DEFAULT_FACING),
            gold: 0,
            dirty: false,
            rng: SimpleRng::new(seed),
            pending: ArrayVec::new(),
            history: ArrayVec::new(),
        }
    }

    /// Place the player somewhere else before the first action
    pub fn with_start(mut self, x: i32, y: i32, facing: Facing) -> Self {
        self.player = PlayerState::new(x, y, facing);
        self
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Tile under the player's feet
    pub fn current_tile(&self) -> Tile {
        let (x, y) = self.player.position();
        self.map.tile(x, y)
    }

    /// Apply a player action
    /// Returns true if the session changed
    pub fn apply_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::MoveForward => self.move_forward(),
            PlayerAction::MoveBackward => self.move_backward(),
            PlayerAction::TurnLeft => self.turn_left(),
            PlayerAction::TurnRight => self.turn_right(),
            PlayerAction::PickUp => self.pick_up(),
        }
    }

    pub fn move_forward(&mut self) -> bool {
        let step = self.player.step_forward(&self.map);
        self.after_step(step)
    }

    pub fn move_backward(&mut self) -> bool {
        let step = self.player.step_backward(&self.map);
        self.after_step(step)
    }

    pub fn turn_left(&mut self) -> bool {
        self.player.turn_left();
        self.mark_dirty();
        true
    }

    pub fn turn_right(&mut self) -> bool {
        self.player.turn_right();
        self.mark_dirty();
        true
    }

    /// Empty a chest on the current cell into the purse
    /// Returns false if there is nothing to pick up
    pub fn pick_up(&mut self) -> bool {
        if self.current_tile() != Tile::Chest {
            return false;
        }
        let amount = self.rng.roll(TREASURE_MAX);
        self.gold += amount;
        let (x, y) = self.player.position();
        self.map.set_tile(x, y, Tile::Floor);
        self.push_event(SessionEvent::GoldFound(amount));
        self.mark_dirty();
        true
    }

    /// Drain events raised since the last call
    pub fn take_events(&mut self) -> ArrayVec<SessionEvent, PENDING_EVENTS> {
        std::mem::take(&mut self.pending)
    }

    /// Most recent events, oldest first
    pub fn history(&self) -> &[SessionEvent] {
        &self.history
    }

    fn after_step(&mut self, step: Option<Step>) -> bool {
        let Some(step) = step else {
            log::debug!(
                "move from {:?} facing {} blocked",
                self.player.position(),
                self.player.facing().as_str()
            );
            return false;
        };
        self.on_moved(step);
        self.mark_dirty();
        true
    }

    fn on_moved(&mut self, step: Step) {
        let old = self.map.tile(step.from.0, step.from.1);
        let new = self.map.tile(step.to.0, step.to.1);
        if new == Tile::Chest {
            self.push_event(SessionEvent::TreasureSpotted);
        }
        if old.is_door() {
            self.push_event(SessionEvent::DoorClosedBehind);
        }
        if new.is_door() {
            self.push_event(SessionEvent::DoorOpened);
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        push_bounded(&mut self.pending, event);
        push_bounded(&mut self.history, event);
    }
}

/// Push onto a bounded buffer, dropping the oldest entry when full
fn push_bounded<const N: usize>(buf: &mut ArrayVec<SessionEvent, N>, event: SessionEvent) {
    if buf.is_full() {
        buf.remove(0);
    }
    buf.push(event);
}
