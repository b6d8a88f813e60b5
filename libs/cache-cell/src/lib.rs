// =====================================================================================
// CACHE CELL - IN-MEMORY TTL CACHE
// =====================================================================================

pub mod models;
pub mod handlers;
pub mod router;
pub mod services;

pub use models::*;
pub use router::create_cache_router;
pub use services::CacheService;
