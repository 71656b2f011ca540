/// Current state of the rate fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Idle,
    Loading,
    Success { rate: f64 },
    Error,
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }
}

impl Default for Status {
    fn default() -> Status {
        Status::Idle
    }
}
