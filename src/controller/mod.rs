mod controller;
pub use controller::{Controller, MenuItem};
mod status_bar;
pub use status_bar::{title, StatusBar};
mod info_window;
pub use info_window::InfoWindow;
