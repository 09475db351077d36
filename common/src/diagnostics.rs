//! # Diagnostics
//!
//! Discovery components never log through whatever subscriber happens to be
//! global when they run. They are handed a [`Diagnostics`] at construction and
//! emit their `tracing` events inside [`Diagnostics::scope`]. Without one they
//! stay silent.

use std::fmt;

use tracing::Dispatch;
use tracing::dispatcher;

#[derive(Clone)]
pub struct Diagnostics {
    dispatch: Dispatch,
}

impl Diagnostics {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Drops every event.
    pub fn silent() -> Self {
        Self::new(Dispatch::none())
    }

    /// Runs `f` with this capability installed as the thread's default dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::silent()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
