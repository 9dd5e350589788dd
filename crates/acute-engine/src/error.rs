use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown intervention id: {0}")]
    InterventionNotFound(Uuid),

    #[error("unknown safety alert id: {0}")]
    AlertNotFound(Uuid),
}
