//! In-memory session store. Each session owns one job-requirements slot.
//!
//! The admin save is the only writer; scoring requests read a snapshot of the text.

pub mod auth;
pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Session limit of {0} reached")]
    LimitReached(usize),
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Empty until an admin saves requirements.
    pub job_requirements: String,
    pub created_at: DateTime<Utc>,
    pub requirements_updated_at: Option<DateTime<Utc>>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            job_requirements: String::new(),
            created_at: Utc::now(),
            requirements_updated_at: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.job_requirements.is_empty()
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    pub async fn create(&self) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(SessionError::LimitReached(self.max_sessions));
        }
        let session = Session::new();
        sessions.insert(session.id, session.clone());
        info!(session_id = %session.id, live = sessions.len(), "Session created");
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Replaces the session's requirements wholesale. Never appends.
    pub async fn set_requirements(&self, id: Uuid, text: String) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.job_requirements = text;
        session.requirements_updated_at = Some(Utc::now());
        info!(
            session_id = %id,
            chars = session.job_requirements.chars().count(),
            "Job requirements saved"
        );
        Ok(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
