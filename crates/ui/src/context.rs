use std::sync::Arc;
use std::time::Duration;

use services::GameLoopService;

/// Pause between revealing an answer and moving to the next turn.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(1500);

pub trait UiApp: Send + Sync {
    fn game_loop(&self) -> Arc<GameLoopService>;

    fn auto_advance_delay(&self) -> Duration {
        DEFAULT_AUTO_ADVANCE
    }
}

#[derive(Clone)]
pub struct AppContext {
    game_loop: Arc<GameLoopService>,
    auto_advance_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            game_loop: app.game_loop(),
            auto_advance_delay: app.auto_advance_delay(),
        }
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    #[must_use]
    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
