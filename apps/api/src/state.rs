use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::matching::normalizer::Normalizer;
use crate::matching::scorer::{KeywordOverlapScorer, MatchScorer};
use crate::session::auth::{AdminVerifier, StaticPasswordVerifier};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub normalizer: Arc<Normalizer>,
    /// Pluggable scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Gate for the admin requirements save.
    pub verifier: Arc<dyn AdminVerifier>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            sessions: SessionStore::new(config.max_sessions),
            normalizer: Arc::new(Normalizer::new()?),
            scorer: Arc::new(KeywordOverlapScorer),
            verifier: Arc::new(StaticPasswordVerifier::new(config.admin_password.clone())),
            config,
        })
    }
}
