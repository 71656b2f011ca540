use crate::model::Status;

/// A display surface. It renders whatever status it is handed and never owns it.
pub trait Controller: Send {
    fn render(&mut self, status: &Status);

    /// Brings the surface to the front. Surfaces that are always visible ignore it.
    fn open(&mut self, _status: &Status) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub title: String,
    pub enabled: bool,
}

impl MenuItem {
    pub fn new(title: &str) -> MenuItem {
        MenuItem {
            title: title.into(),
            enabled: true,
        }
    }

    pub fn refetch(status: &Status) -> MenuItem {
        if status.is_loading() {
            MenuItem {
                title: "Refetching...".into(),
                enabled: false,
            }
        } else {
            MenuItem::new("Refetch")
        }
    }
}
