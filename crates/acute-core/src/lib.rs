//! acute-core
//!
//! Pure domain types for the Acute emergency assessment engine: the session
//! aggregate, findings, threats, interventions, fluid bookkeeping, safety
//! alerts, and the clinical event log. No rule logic lives here; this is
//! the shared vocabulary of the Acute system.

pub mod error;
pub mod models;
