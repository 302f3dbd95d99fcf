use crate::error::Result;
use crate::fetch::Fetcher;
use crate::reconcile::Reconciler;
use crate::save::Sink;

/// One reconciliation run: fetch the remote snapshot, then apply it.
///
/// FETCHING -> RECONCILING -> DONE, or FAILED out of either stage. Rows
/// upserted before a mid-loop failure stay committed. The function is pure
/// in its collaborators; whether it was invoked by a timer trigger or by
/// hand is decided by a thin adapter outside.
pub async fn run(fetcher: &Fetcher, sink: &impl Sink) -> Result<usize> {
    let records = fetcher.fetch().await?;
    log::info!("fetched {} records", records.len());
    Reconciler::new(sink).reconcile(records).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::record::User;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingSink(AtomicUsize);

    #[async_trait::async_trait]
    impl Sink for CountingSink {
        async fn upsert(&self, _: &User) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn fetch_failure_never_reaches_the_store() {
        // bind then drop to get a port that refuses connections
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let sink = CountingSink::default();
        let fetcher = Fetcher::new(url)
            .with_retries(2)
            .with_delay(Duration::ZERO);
        let err = run(&fetcher, &sink).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(sink.0.load(Ordering::SeqCst), 0);
    }
}
