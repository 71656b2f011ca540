mod provider;
pub use provider::RateProvider;
mod open_er_api;
pub use open_er_api::{OpenErApi, OpenErApiConf};
