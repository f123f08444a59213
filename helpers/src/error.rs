use thiserror::Error;

/// The one failure shape every external operation funnels into: the name of
/// the operation that failed plus whatever the client reported.
#[derive(Debug, Error)]
#[error("{op} failed: {reason}")]
pub struct OpFailure {
    pub op: &'static str,
    pub reason: String,
}

impl OpFailure {
    pub fn new(op: &'static str, reason: impl std::fmt::Display) -> Self {
        Self {
            op,
            reason: reason.to_string(),
        }
    }
}
