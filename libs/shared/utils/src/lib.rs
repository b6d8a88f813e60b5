pub mod extractor;
pub mod fallback;
pub mod test_utils;

pub use extractor::{ApiJson, ApiQuery};
pub use fallback::{handle_panic, not_found};
