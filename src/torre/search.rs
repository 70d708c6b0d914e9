use async_trait::async_trait;

use crate::models::ProfileRecord;

/// Free-text people search, as consumed by the distribution pipeline.
///
/// Implementations never fail: transport or status errors are logged and come
/// back as an empty result set.
#[async_trait]
pub trait SearchPeople: Send + Sync {
    async fn search(&self, term: &str, limit: u32, offset: u32) -> Vec<ProfileRecord>;
}
