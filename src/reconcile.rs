use crate::error::Result;
use crate::record::{RemoteUser, User};
use crate::save::Sink;

/// Reconciler brings the users table into agreement with a fetched
/// snapshot: normalize each raw record, then upsert it, strictly in the
/// order the source returned them.
///
/// Each upsert commits independently, so a failure mid-loop leaves the
/// earlier rows in place and the later records untouched; the next run
/// converges on the same final state regardless. A malformed record
/// aborts the run rather than being skipped - the remote side broke its
/// contract and silently dropping rows would mask that.
pub struct Reconciler<'a, S> {
    sink: &'a S,
}

impl<'a, S: Sink> Reconciler<'a, S> {
    pub fn new(sink: &'a S) -> Self {
        Self { sink }
    }

    /// Apply the snapshot. Returns the number of records reconciled.
    pub async fn reconcile(&self, records: Vec<RemoteUser>) -> Result<usize> {
        let total = records.len();
        for (position, raw) in records.into_iter().enumerate() {
            let user = User::try_from(raw).inspect_err(|e| {
                log::error!("record {} of {} rejected: {}", position + 1, total, e);
            })?;
            self.sink.upsert(&user).await.inspect_err(|e| {
                log::error!("error during upsert ({} of {}): {}", position + 1, total, e);
            })?;
        }
        log::info!("upsert completed successfully ({total} records)");
        Ok(total)
    }
}
