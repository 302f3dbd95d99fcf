use crate::error::SyncError;
use serde::Deserialize;

/// Raw record as received from the remote source. Only `name` and `email`
/// matter; every other field in the payload is ignored. Both are optional
/// at the wire level so a missing field surfaces as a contract violation
/// during normalization instead of failing the whole body parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Canonical entity persisted to the users table. `name` is the natural
/// reconciliation key; `email` is overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Normalization: extract the two persisted fields and trim whitespace.
/// A record missing either field aborts the run; the source broke its
/// contract and skipping would hide that.
impl TryFrom<RemoteUser> for User {
    type Error = SyncError;

    fn try_from(raw: RemoteUser) -> Result<Self, Self::Error> {
        let name = raw.name.ok_or(SyncError::Malformed { field: "name" })?;
        let email = raw.email.ok_or(SyncError::Malformed { field: "email" })?;
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        })
    }
}
