//! acute-engine
//!
//! The clinical reasoning engine: phase transitions over an immutable
//! session value, the threat rule registry, global safety checks, dose
//! computation, fluid bookkeeping, and diagnosis suggestion.
//!
//! Every operation is a pure, synchronous transformation: the caller
//! passes the session in by value and replaces its copy with the returned
//! value. The engine holds no state of its own and never blocks.

pub mod diagnosis;
pub mod dose;
pub mod error;
pub mod fluids;
pub mod safety;
pub mod threats;
pub mod transitions;

use acute_core::models::{Phase, Session};
use acute_protocol::questions::Question;

pub use transitions::Answer;

/// The questions still unanswered for the current survey letter.
///
/// Empty outside the primary survey / intervention phases.
pub fn current_questions(session: &Session) -> Vec<&'static Question> {
    match session.phase {
        Phase::PrimarySurvey | Phase::Intervention => {
            acute_protocol::questions_for(session.current_letter)
                .iter()
                .filter(|q| !session.has_answered(q.id))
                .collect()
        }
        _ => Vec::new(),
    }
}
