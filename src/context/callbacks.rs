/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the search is non-mutable.
*/

use crate::structures::formula::Weight;

use super::GenericContext;

/// Terminates a walk before the next move, if true.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Receives the move count and the best cost at each progress interval.
pub type CallbackProgress = dyn FnMut(usize, Weight);

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.callback_progress = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub(crate) fn make_callback_progress(&mut self, moves: usize, best: Weight) {
        if let Some(callback) = &mut self.callback_progress {
            callback(moves, best)
        }
    }
}
