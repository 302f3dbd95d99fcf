use crate::error::Result;
use crate::record::User;
use crate::save::schema::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Sink defines the write interface between normalized users and the store.
/// The only write is the idempotent per-record upsert; each call commits
/// independently, so rows written before a failure stay written.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn upsert(&self, user: &User) -> Result<()>;
}

#[async_trait::async_trait]
impl Sink for Client {
    async fn upsert(&self, user: &User) -> Result<()> {
        self.execute(UserTable::upserts(), &[&user.name, &user.email])
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Sink for Arc<Client> {
    async fn upsert(&self, user: &User) -> Result<()> {
        self.as_ref().upsert(user).await
    }
}
