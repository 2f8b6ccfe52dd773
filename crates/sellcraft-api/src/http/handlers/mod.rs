//! HTTP handlers, one module per tool.

pub mod creator;
pub mod promoter;
pub mod surveyor;

use crate::http::error::AppError;
use crate::state::AppState;

/// Guard marking one tool's generation round as in flight.
///
/// Dropped when the handler finishes, releasing the slot. A second
/// submission for the same tool while the guard lives gets 409.
pub struct InFlightGuard {
    state: AppState,
    tool: &'static str,
}

impl InFlightGuard {
    pub fn acquire(state: &AppState, tool: &'static str) -> Result<Self, AppError> {
        // DashMap entry insertion is atomic; losing the race means a
        // round is already running.
        if state.in_flight.insert(tool, ()).is_some() {
            return Err(AppError::Busy(tool));
        }
        Ok(Self {
            state: state.clone(),
            tool,
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.state.in_flight.remove(self.tool);
    }
}
