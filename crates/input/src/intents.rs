//! Per-tick intent buffer.
//!
//! Key events arrive between ticks; the frontend pushes the mapped actions
//! here and hands the whole batch to `GameState::tick`, in arrival order.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Most intents kept for a single tick. Extra key presses are dropped.
pub const MAX_INTENTS_PER_TICK: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct IntentBuffer {
    pending: ArrayVec<GameAction, MAX_INTENTS_PER_TICK>,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action. Returns false if the buffer is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        self.pending.try_push(action).is_ok()
    }

    pub fn as_slice(&self) -> &[GameAction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_arrival_order() {
        let mut buf = IntentBuffer::new();
        buf.push(GameAction::MoveLeft);
        buf.push(GameAction::Rotate);
        buf.push(GameAction::HardDrop);
        assert_eq!(
            buf.as_slice(),
            &[GameAction::MoveLeft, GameAction::Rotate, GameAction::HardDrop]
        );
    }

    #[test]
    fn drops_overflow() {
        let mut buf = IntentBuffer::new();
        for _ in 0..MAX_INTENTS_PER_TICK {
            assert!(buf.push(GameAction::SoftDrop));
        }
        assert!(!buf.push(GameAction::HardDrop));
        assert_eq!(buf.len(), MAX_INTENTS_PER_TICK);
    }

    #[test]
    fn clear_empties() {
        let mut buf = IntentBuffer::new();
        buf.push(GameAction::MoveRight);
        buf.clear();
        assert!(buf.is_empty());
    }
}
