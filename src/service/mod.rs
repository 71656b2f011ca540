pub mod rate_status;
pub use rate_status::{RateStatus, Ticket};
pub mod refresh;
pub use refresh::{Command, Refresh};
