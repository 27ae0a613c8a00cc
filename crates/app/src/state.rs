use serde::Serialize;

use crate::aggregate::aggregate;
use crate::pricing::PriceTable;
use dashboard_core::{CostReport, Credentials, DateRange, UsageRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    Loading,
}

/// Transition emitted by the fetch boundary. Every event carries the
/// generation token handed out by [`SessionState::begin_load`]; events from
/// superseded loads are discarded on apply.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    Started { generation: u64 },
    Succeeded { generation: u64, records: Vec<UsageRecord> },
    Failed { generation: u64, message: String },
}

/// All session-scoped dashboard state, held explicitly and driven through
/// [`SessionState::apply`] rather than mutated from callbacks.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub credentials: Credentials,
    pub range: DateRange,
    pub phase: LoadPhase,
    pub generation: u64,
    pub report: Option<CostReport>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new(credentials: Credentials, range: DateRange) -> Self {
        Self {
            credentials,
            range,
            phase: LoadPhase::Idle,
            generation: 0,
            report: None,
            error: None,
        }
    }

    /// Record new inputs. A changed credential or range restarts the load
    /// sequence from the caller via [`SessionState::begin_load`]; an
    /// in-flight request is not cancelled, its completion just becomes
    /// stale.
    pub fn set_inputs(&mut self, credentials: Credentials, range: DateRange) {
        self.credentials = credentials;
        self.range = range;
    }

    /// Bump the generation and enter `Loading`. Returns the token the
    /// eventual completion event must carry to be applied.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.report = None;
        self.error = None;
        self.generation
    }

    pub fn apply(&mut self, event: LoadEvent, table: &PriceTable) {
        match event {
            LoadEvent::Started { generation } => {
                if generation != self.generation {
                    return;
                }
                self.phase = LoadPhase::Loading;
                self.report = None;
                self.error = None;
            }
            LoadEvent::Succeeded { generation, records } => {
                if generation != self.generation {
                    return;
                }
                self.phase = LoadPhase::Idle;
                self.report = Some(aggregate(&records, table));
                self.error = None;
            }
            LoadEvent::Failed { generation, message } => {
                if generation != self.generation {
                    return;
                }
                self.phase = LoadPhase::Idle;
                self.report = None;
                self.error = Some(message);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}
