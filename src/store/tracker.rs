//! Pending / fulfilled / rejected lifecycle of the five lead operations.

use std::fmt::{Display, Formatter};

use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FetchLeads,
    FetchLeadById,
    CreateLead,
    UpdateLead,
    DeleteLead,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::FetchLeads,
        OperationKind::FetchLeadById,
        OperationKind::CreateLead,
        OperationKind::UpdateLead,
        OperationKind::DeleteLead,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::FetchLeads => "fetch_leads",
            OperationKind::FetchLeadById => "fetch_lead_by_id",
            OperationKind::CreateLead => "create_lead",
            OperationKind::UpdateLead => "update_lead",
            OperationKind::DeleteLead => "delete_lead",
        }
    }

    /// Message shown when the server gives no reason for a failure.
    pub const fn default_error(self) -> &'static str {
        match self {
            OperationKind::FetchLeads => "Failed to fetch leads",
            OperationKind::FetchLeadById => "Failed to fetch lead",
            OperationKind::CreateLead => "Failed to create lead",
            OperationKind::UpdateLead => "Failed to update lead",
            OperationKind::DeleteLead => "Failed to delete lead",
        }
    }

    /// Reads drive the global loading flag and error; mutations don't.
    pub const fn is_read(self) -> bool {
        matches!(self, OperationKind::FetchLeads | OperationKind::FetchLeadById)
    }

    const fn index(self) -> usize {
        match self {
            OperationKind::FetchLeads => 0,
            OperationKind::FetchLeadById => 1,
            OperationKind::CreateLead => 2,
            OperationKind::UpdateLead => 3,
            OperationKind::DeleteLead => 4,
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a single invocation of an operation in logs and status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    /// Carries the message that was reported for the failure.
    Rejected(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationState {
    pub status: OperationStatus,
    /// Invocation that last changed `status`.
    pub last_operation: Option<OperationId>,
    /// Invocations started but not yet settled.
    pub in_flight: usize,
}

/// Status per operation kind. Settlements are applied in completion order, so
/// with several invocations in flight the last one to settle wins.
#[derive(Clone, Debug, Default)]
pub struct OperationTracker {
    states: [OperationState; 5],
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `kind` to `Pending` and returns the id of the new invocation.
    pub fn start(&mut self, kind: OperationKind) -> OperationId {
        let id = OperationId::new();
        let state = &mut self.states[kind.index()];
        state.status = OperationStatus::Pending;
        state.last_operation = Some(id);
        state.in_flight += 1;
        id
    }

    pub fn fulfill(&mut self, kind: OperationKind, id: OperationId) {
        self.settle(kind, id, OperationStatus::Fulfilled);
    }

    pub fn reject(&mut self, kind: OperationKind, id: OperationId, message: impl Into<String>) {
        self.settle(kind, id, OperationStatus::Rejected(message.into()));
    }

    fn settle(&mut self, kind: OperationKind, id: OperationId, status: OperationStatus) {
        let state = &mut self.states[kind.index()];
        state.status = status;
        state.last_operation = Some(id);
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    pub fn state(&self, kind: OperationKind) -> &OperationState {
        &self.states[kind.index()]
    }

    pub fn status(&self, kind: OperationKind) -> &OperationStatus {
        &self.state(kind).status
    }

    pub fn is_pending(&self, kind: OperationKind) -> bool {
        self.state(kind).in_flight > 0
    }
}
