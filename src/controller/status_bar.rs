use crate::{
    controller::{Controller, MenuItem},
    model::Status,
};
use std::io::Write;
use tracing::warn;

pub struct StatusBar {
    title: String,
    menu: Vec<MenuItem>,
    out: Box<dyn Write + Send>,
}

const REFETCH: usize = 1;

impl StatusBar {
    pub fn new(out: Box<dyn Write + Send>) -> StatusBar {
        StatusBar {
            title: title(&Status::Idle),
            menu: vec![
                MenuItem::new("Open"),
                MenuItem::new("Refetch"),
                MenuItem::new("Quit"),
            ],
            out,
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }
}

impl Controller for StatusBar {
    fn render(&mut self, status: &Status) {
        self.title = title(status);
        self.menu[REFETCH] = MenuItem::refetch(status);

        if let Err(e) = writeln!(self.out, "{}", self.title).and_then(|_| self.out.flush()) {
            warn!(%e, "Failed to draw status bar");
        }
    }
}

pub fn title(status: &Status) -> String {
    match status {
        Status::Idle => "USD ...".into(),
        Status::Loading => "⏳ Updating rate...".into(),
        Status::Success { rate } => format!("USD $ {:.2}", rate),
        Status::Error => "USD ⚠️".into(),
    }
}
