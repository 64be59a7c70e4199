//! Keystroke dispatch
//!
//! Hosts translate their raw events (terminal keys, on-screen buttons,
//! typed lines) into [`Key`] values and feed them through
//! [`GuessEngine::handle_key`] one at a time.

use super::game::{Direction, GuessEngine, Snapshot};
use rand::Rng;

/// A key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any character; only `0-9a-f` has an effect
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
}

impl<R: Rng> GuessEngine<R> {
    /// Apply one key to the engine
    pub fn handle_key(&mut self, key: Key) -> Snapshot {
        match key {
            Key::Char(symbol) => self.insert_digit(symbol),
            Key::Backspace => self.delete_digit(),
            Key::Enter => self.submit_row(),
            Key::Left => self.move_cursor(Direction::Left),
            Key::Right => self.move_cursor(Direction::Right),
        }
    }

    /// Apply keys in order, returning the final state
    pub fn handle_keys<I>(&mut self, keys: I) -> Snapshot
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.handle_key(key);
        }
        self.snapshot()
    }
}

/// Keys that type `guess` and submit it
pub fn guess_keys(guess: &str) -> impl Iterator<Item = Key> + '_ {
    guess.chars().map(Key::Char).chain(std::iter::once(Key::Enter))
}
