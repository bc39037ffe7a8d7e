//! `/api/pcp-data` payload contract and load bookkeeping.

use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::error::{PcpError, PcpResult};

pub const SUCCESS_STATUS: &str = "success";

/// Envelope returned by the data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Record>,
}

impl ApiResponse {
    /// Unwraps the records, turning a non-success status into a load error.
    pub fn into_records(self) -> PcpResult<Vec<Record>> {
        if self.status != SUCCESS_STATUS {
            return Err(PcpError::Load(
                self.message
                    .unwrap_or_else(|| "Failed to load data".to_owned()),
            ));
        }
        Ok(self.data)
    }
}

/// Parses a raw response body into records.
pub fn parse_pcp_payload(input: &str) -> PcpResult<Vec<Record>> {
    let response: ApiResponse = serde_json::from_str(input)
        .map_err(|e| PcpError::Load(format!("invalid pcp payload: {e}")))?;
    response.into_records()
}

/// Identifies one issued load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Issues load tickets; only the newest ticket is allowed to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadTracker {
    issued: u64,
    in_flight: bool,
}

impl LoadTracker {
    /// Issues a ticket that supersedes every earlier one.
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        self.in_flight = true;
        LoadTicket(self.issued)
    }

    #[must_use]
    pub fn is_current(self, ticket: LoadTicket) -> bool {
        self.in_flight && ticket.0 == self.issued
    }

    #[must_use]
    pub fn in_flight(self) -> bool {
        self.in_flight
    }

    /// Settles `ticket`. Returns `false` when it was superseded or already settled.
    pub fn settle(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadTracker, parse_pcp_payload};
    use crate::error::PcpError;

    #[test]
    fn non_success_status_surfaces_message() {
        let err = parse_pcp_payload(r#"{"status": "error", "message": "db offline"}"#)
            .expect_err("must fail");
        assert!(matches!(err, PcpError::Load(message) if message == "db offline"));
    }

    #[test]
    fn malformed_body_is_a_load_error() {
        let err = parse_pcp_payload("<html>").expect_err("must fail");
        assert!(matches!(err, PcpError::Load(_)));
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.settle(first));
        assert!(tracker.settle(second));
        assert!(!tracker.settle(second));
        assert!(!tracker.in_flight());
    }
}
