use crate::{
    controller::{Controller, MenuItem},
    model::Status,
};
use chrono::Local;
use reqwest::Url;
use std::{io::Write, time::Duration};
use tracing::warn;

/// Detail panel. Drawn only after the user opens it, then on every status change.
pub struct InfoWindow {
    visible: bool,
    label: String,
    refetch: MenuItem,
    updated_at: Option<String>,
    interval: Duration,
    source: String,
    out: Box<dyn Write + Send>,
}

impl InfoWindow {
    pub fn new(interval: Duration, source_url: &str, out: Box<dyn Write + Send>) -> InfoWindow {
        let source = Url::parse(source_url)
            .ok()
            .and_then(|url| url.host_str().map(String::from))
            .unwrap_or_else(|| source_url.to_string());

        InfoWindow {
            visible: false,
            label: label(&Status::Idle),
            refetch: MenuItem::new("Refetch"),
            updated_at: None,
            interval,
            source,
            out,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub fn refetch(&self) -> &MenuItem {
        &self.refetch
    }

    fn draw(&mut self) {
        let mut lines = vec![
            "┌ 💵 USD/BRL Exchange Rate".to_string(),
            format!("│ {}", self.label),
            format!("│ Updates every {} seconds", self.interval.as_secs()),
        ];

        if let Some(updated_at) = &self.updated_at {
            lines.push(format!("│ Last update at {}", updated_at));
        }

        let refetch = if self.refetch.enabled {
            format!("[{}]", self.refetch.title)
        } else {
            format!("({})", self.refetch.title)
        };
        lines.push(format!("│ {} [Quit]", refetch));
        lines.push(format!("└ Data from {}", self.source));

        if let Err(e) = writeln!(self.out, "{}", lines.join("\n")).and_then(|_| self.out.flush()) {
            warn!(%e, "Failed to draw info window");
        }
    }
}

impl Controller for InfoWindow {
    fn render(&mut self, status: &Status) {
        self.label = label(status);
        self.refetch = MenuItem::refetch(status);

        if let Status::Success { .. } = status {
            self.updated_at = Some(Local::now().format("%H:%M:%S").to_string());
        }

        if self.visible {
            self.draw();
        }
    }

    fn open(&mut self, status: &Status) {
        self.visible = true;
        self.render(status);
    }
}

fn label(status: &Status) -> String {
    match status {
        Status::Idle => "Initializing...".into(),
        Status::Loading => "⏳ Updating rate...".into(),
        Status::Success { rate } => format!("1 USD = R$ {}", rate),
        Status::Error => "⚠️ Error fetching data".into(),
    }
}
