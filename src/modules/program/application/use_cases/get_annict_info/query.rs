use tokio_util::sync::CancellationToken;

/// Query for one aggregation run
#[derive(Debug, Clone, Default)]
pub struct GetAnnictInfoQuery {
    /// Cancelled when the triggering event is abandoned or its deadline passes
    pub cancel: CancellationToken,
}

impl GetAnnictInfoQuery {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }
}
