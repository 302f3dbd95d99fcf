use crate::error::Result;
use crate::save::schema::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Get a database connection, ensure the schema exists, and return the
/// client. The client is owned by the caller and dropped when the run
/// ends, which terminates the spawned connection task on every exit path.
pub async fn db(url: &str) -> Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(connection);
    client.batch_execute(UserTable::creates()).await?;
    Ok(Arc::new(client))
}
