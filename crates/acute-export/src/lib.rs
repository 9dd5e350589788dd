//! acute-export
//!
//! Textual clinical-record export: a fixed human-readable layout of the
//! whole session for printing or download. Not intended for machine
//! parsing; callers wanting structured data should serialize the session
//! itself.

pub mod record;

pub use record::render_clinical_record;
