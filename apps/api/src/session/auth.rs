/// Checks the admin secret presented on a requirements save.
///
/// Carried in `AppState` as `Arc<dyn AdminVerifier>` so a hashed or external verifier can
/// replace the shared static password without touching the handlers.
pub trait AdminVerifier: Send + Sync {
    fn verify(&self, candidate: &str) -> bool;
}

/// Exact string comparison against a single shared password.
pub struct StaticPasswordVerifier {
    password: String,
}

impl StaticPasswordVerifier {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl AdminVerifier for StaticPasswordVerifier {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.password
    }
}
