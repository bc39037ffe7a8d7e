use tracing::{debug, warn};

use crate::core::Record;
use crate::data::{LoadTicket, parse_pcp_payload};
use crate::error::{PcpError, PcpResult};
use crate::render::Renderer;

use super::{PcpEngine, PcpEvent, plot_model::PlotStatus};

impl<R: Renderer> PcpEngine<R> {
    /// Starts a load that supersedes any earlier one still in flight.
    ///
    /// Until the returned ticket settles the frame shows only the loading
    /// message.
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.core.runtime.loads.begin();
        self.core.model.status = PlotStatus::Loading;
        self.core.interaction.reset();
        self.invalidate_full();
        debug!(generation = ticket.generation(), "pcp load started");
        self.emit_plugin_event(PcpEvent::LoadStarted {
            generation: ticket.generation(),
        });
        ticket
    }

    /// Lands a raw `/api/pcp-data` response body for `ticket`.
    ///
    /// Returns `Ok(false)` when the ticket was superseded. A body that does
    /// not parse, or carries a non-success status, fails the load and the
    /// error is returned.
    pub fn complete_load(&mut self, ticket: LoadTicket, body: &str) -> PcpResult<bool> {
        if !self.core.runtime.loads.is_current(ticket) {
            self.discard_load(ticket);
            return Ok(false);
        }
        match parse_pcp_payload(body) {
            Ok(records) => self.complete_load_records(ticket, records),
            Err(err) => {
                let message = match &err {
                    PcpError::Load(message) => message.clone(),
                    other => other.to_string(),
                };
                self.fail_load(ticket, message);
                Err(err)
            }
        }
    }

    /// Lands already decoded records for `ticket`.
    pub fn complete_load_records(
        &mut self,
        ticket: LoadTicket,
        records: Vec<Record>,
    ) -> PcpResult<bool> {
        if !self.core.runtime.loads.settle(ticket) {
            self.discard_load(ticket);
            return Ok(false);
        }
        self.install_records(records)?;
        Ok(true)
    }

    /// Marks the load for `ticket` as failed. Returns `false` when the
    /// ticket was superseded.
    pub fn fail_load(&mut self, ticket: LoadTicket, message: impl Into<String>) -> bool {
        if !self.core.runtime.loads.settle(ticket) {
            self.discard_load(ticket);
            return false;
        }
        let message = message.into();
        warn!(generation = ticket.generation(), %message, "pcp load failed");
        self.core.model.records.clear();
        if let Err(err) = self.core.model.rebuild_axes(&self.core.config) {
            warn!(error = %err, "failed to reset axes after load failure");
        }
        self.core.model.status = PlotStatus::Failed { message };
        self.core.interaction.reset();
        self.invalidate_full();
        self.emit_plugin_event(PcpEvent::LoadFailed);
        true
    }

    /// Replaces the record set directly, superseding any in-flight load.
    pub fn set_records(&mut self, records: Vec<Record>) -> PcpResult<()> {
        let ticket = self.core.runtime.loads.begin();
        self.core.runtime.loads.settle(ticket);
        self.install_records(records)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.core.model.records
    }

    #[must_use]
    pub fn status(&self) -> &PlotStatus {
        &self.core.model.status
    }

    #[must_use]
    pub fn load_in_flight(&self) -> bool {
        self.core.runtime.loads.in_flight()
    }

    fn install_records(&mut self, records: Vec<Record>) -> PcpResult<()> {
        self.core.model.records = records;
        self.core.interaction.reset();
        self.invalidate_full();
        if let Err(err) = self.core.model.rebuild_axes(&self.core.config) {
            self.core.model.status = PlotStatus::Failed {
                message: err.to_string(),
            };
            self.emit_plugin_event(PcpEvent::LoadFailed);
            return Err(err);
        }
        self.core.model.status = PlotStatus::Ready;
        let records_len = self.core.model.records.len();
        debug!(records = records_len, "pcp records installed");
        self.emit_plugin_event(PcpEvent::DataLoaded { records_len });
        Ok(())
    }

    fn discard_load(&mut self, ticket: LoadTicket) {
        debug!(
            generation = ticket.generation(),
            "discarding superseded pcp load"
        );
        self.emit_plugin_event(PcpEvent::LoadDiscarded {
            generation: ticket.generation(),
        });
    }
}
