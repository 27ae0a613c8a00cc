use std::sync::{Arc, Mutex};

use activity::ActivityClient;
use dashboard_app::{PriceTable, SessionState};

/// Shared server state: one dashboard session behind a mutex, the price
/// table, and the outbound client. The lock is never held across an await.
#[derive(Clone)]
pub struct HttpState {
    pub session: Arc<Mutex<SessionState>>,
    pub table: Arc<PriceTable>,
    pub client: ActivityClient,
    pub page_url: String,
}

impl HttpState {
    pub fn new(
        session: SessionState,
        table: PriceTable,
        client: ActivityClient,
        page_url: String,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            table: Arc::new(table),
            client,
            page_url,
        }
    }
}
