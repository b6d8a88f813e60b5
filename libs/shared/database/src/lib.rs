pub mod football_data;

pub use football_data::{FootballDataClient, UpstreamError};
