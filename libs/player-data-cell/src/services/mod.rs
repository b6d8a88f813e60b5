pub mod mock;
pub mod provider;
pub mod remote;
pub mod source;

pub use mock::{mock_players, MockDataSource};
pub use provider::{calculate_match_score, PlayerDataService};
pub use remote::RemoteDataSource;
pub use source::PlayerDataSource;
