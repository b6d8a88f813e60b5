use async_trait::async_trait;

use shared_models::PlayerWithStats;

use crate::models::ProviderError;

/// Where player records come from. The provider service only talks to this
/// trait, so the built-in dataset and a remote upstream are interchangeable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerDataSource: Send + Sync {
    /// Records whose name contains `query`, compared case-insensitively.
    async fn search(&self, query: &str) -> Result<Vec<PlayerWithStats>, ProviderError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<PlayerWithStats>, ProviderError>;

    /// The source's own ordering of notable players, at most `limit` long.
    async fn get_top(&self, limit: usize) -> Result<Vec<PlayerWithStats>, ProviderError>;
}
