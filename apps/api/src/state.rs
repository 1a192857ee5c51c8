use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::MatchScorer;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that need runtime configuration.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable compatibility scorer. Default: HeuristicScorer, swapped at startup.
    pub scorer: Arc<dyn MatchScorer>,
}
