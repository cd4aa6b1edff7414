use crate::models::upload::UploadFile;

/// Result of comparing two files for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NotMatched,
    /// One side has a server id and the other does not.
    Incomparable,
}

impl MatchOutcome {
    pub fn is_match(self) -> bool {
        self == MatchOutcome::Matched
    }
}

/// Compares by id when both files have one, by name when neither does.
pub fn match_identity(left: &UploadFile, right: &UploadFile) -> MatchOutcome {
    match (left.server_id(), right.server_id()) {
        (Some(a), Some(b)) if a == b => MatchOutcome::Matched,
        (Some(_), Some(_)) => MatchOutcome::NotMatched,
        (None, None) if left.name == right.name => MatchOutcome::Matched,
        (None, None) => MatchOutcome::NotMatched,
        _ => MatchOutcome::Incomparable,
    }
}
