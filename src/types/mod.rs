pub mod api;

pub use api::{display_value, CacheStatus, CreatedPaste, FetchedPaste, HealthResponse, NewPaste};
