mod status;
pub use status::Status;
mod rate_response;
pub use rate_response::RateResponse;
mod fetch_error;
pub use fetch_error::FetchError;
