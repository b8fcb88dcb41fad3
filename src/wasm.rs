//! WebAssembly boundary for the browser front end.
//!
//! The UI owns a [`Session`], calls `submit_move`/`reset` from click
//! handlers, and redraws from the serialized snapshots. Invalid input is a
//! silent no-op here; the presentation layer re-renders either way.

use wasm_bindgen::prelude::*;

use crate::game::Game;

#[wasm_bindgen]
pub struct Session {
    inner: Game,
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        Session { inner: Game::new() }
    }

    /// Plays the current player at `(row, col)`. Returns whether the move
    /// was accepted; rejected moves (illegal cell, game already over) leave
    /// the session unchanged.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, row: u8, col: u8) -> bool {
        self.inner.submit_move(row as usize, col as usize).is_ok()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Full session snapshot (board, turn, counts, pass/over flags, flips).
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).map_err(JsValue::from)
    }

    /// Legal moves for the side to move, `{row, col}` objects in row-major
    /// order, for highlighting playable cells.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.legal_moves()).map_err(JsValue::from)
    }

    /// Final result, or `null` while the game is still in progress.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        if !self.inner.is_game_over {
            return Ok(JsValue::NULL);
        }
        serde_wasm_bindgen::to_value(&self.inner.to_game_result()).map_err(JsValue::from)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
