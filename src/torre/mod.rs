pub mod client;
pub mod rate_limiter;
pub mod search;

pub use client::TorreClient;
pub use rate_limiter::RateLimiter;
pub use search::SearchPeople;
