//! Per-tick event draining.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Upper bound on actions kept from one drain
pub const MAX_ACTIONS_PER_TICK: usize = 32;

/// Actions collected during one tick, in arrival order
pub type ActionBatch = ArrayVec<GameAction, MAX_ACTIONS_PER_TICK>;

/// Fold one terminal event into `batch`.
///
/// Only key presses count; repeats and releases are ignored. Once the batch is
/// full, newer moves overwrite the last slot, and a recorded `Quit` is never
/// overwritten. Returns `true` for resize events.
pub fn collect_event(event: &Event, batch: &mut ActionBatch) -> bool {
    let key = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => *key,
        Event::Resize(..) => return true,
        _ => return false,
    };

    let action = if should_quit(key) {
        GameAction::Quit
    } else {
        match handle_key_event(key) {
            Some(action) => action,
            None => return false,
        }
    };

    if let Err(err) = batch.try_push(action) {
        if batch.contains(&GameAction::Quit) {
            return false;
        }
        if let Some(last) = batch.last_mut() {
            *last = err.element();
        }
    }
    false
}

/// Drain every pending terminal event without blocking.
///
/// Returns `true` if any event was a terminal resize.
pub fn drain_pending(batch: &mut ActionBatch) -> io::Result<bool> {
    let mut resized = false;
    while event::poll(Duration::ZERO)? {
        let ev = event::read()?;
        resized |= collect_event(&ev, batch);
    }
    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn keeps_presses_in_order() {
        let mut batch = ActionBatch::new();
        collect_event(&press(KeyCode::Left), &mut batch);
        collect_event(&press(KeyCode::Up), &mut batch);
        collect_event(&press(KeyCode::Char('x')), &mut batch);
        assert_eq!(batch.as_slice(), &[GameAction::MoveLeft, GameAction::MoveUp]);
    }

    #[test]
    fn ignores_release_and_repeat() {
        let mut batch = ActionBatch::new();
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let ev = Event::Key(KeyEvent {
                code: KeyCode::Left,
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            });
            collect_event(&ev, &mut batch);
        }
        assert!(batch.is_empty());
    }

    #[test]
    fn quit_is_recorded() {
        let mut batch = ActionBatch::new();
        collect_event(&press(KeyCode::Char('q')), &mut batch);
        assert_eq!(batch.as_slice(), &[GameAction::Quit]);
    }

    #[test]
    fn resize_is_reported() {
        let mut batch = ActionBatch::new();
        assert!(collect_event(&Event::Resize(80, 24), &mut batch));
        assert!(batch.is_empty());
    }

    #[test]
    fn full_batch_keeps_latest_move() {
        let mut batch = ActionBatch::new();
        for _ in 0..MAX_ACTIONS_PER_TICK {
            collect_event(&press(KeyCode::Left), &mut batch);
        }
        collect_event(&press(KeyCode::Down), &mut batch);
        assert_eq!(batch.len(), MAX_ACTIONS_PER_TICK);
        assert_eq!(batch.last(), Some(&GameAction::MoveDown));
    }

    #[test]
    fn full_batch_never_drops_quit() {
        let mut batch = ActionBatch::new();
        collect_event(&press(KeyCode::Esc), &mut batch);
        for _ in 0..MAX_ACTIONS_PER_TICK {
            collect_event(&press(KeyCode::Right), &mut batch);
        }
        assert!(batch.contains(&GameAction::Quit));
    }
}
