use crate::{
    controller::Controller,
    model::{FetchError, Status},
};
use tracing::{debug, info, warn};

/// Sequence number of an issued fetch. Only the latest one may change the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Owns the current status and pushes every transition to the registered controllers.
pub struct RateStatus {
    status: Status,
    issued: u64,
    controllers: Vec<Box<dyn Controller>>,
}

impl RateStatus {
    pub fn new(controllers: Vec<Box<dyn Controller>>) -> RateStatus {
        let mut rate_status = RateStatus {
            status: Status::Idle,
            issued: 0,
            controllers,
        };
        rate_status.notify();
        rate_status
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.transition(Status::Loading);
        Ticket(self.issued)
    }

    /// Applies a fetch result. Returns false if a newer fetch has been issued since.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<f64, FetchError>) -> bool {
        if ticket.0 != self.issued || !self.status.is_loading() {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Dropping superseded fetch result"
            );
            return false;
        }

        let status = match result {
            Ok(rate) => {
                info!(ticket = ticket.0, rate, "Got exchange rate");
                Status::Success { rate }
            }
            Err(e) => {
                warn!(ticket = ticket.0, %e, "Failed to fetch exchange rate");
                Status::Error
            }
        };

        self.transition(status);
        true
    }

    pub fn open(&mut self) {
        let status = self.status;

        for controller in self.controllers.iter_mut() {
            controller.open(&status);
        }
    }

    fn transition(&mut self, status: Status) {
        self.status = status;
        self.notify();
    }

    fn notify(&mut self) {
        let status = self.status;

        for controller in self.controllers.iter_mut() {
            controller.render(&status);
        }
    }
}
