pub mod alert;
pub mod event;
pub mod finding;
pub mod fluids;
pub mod intervention;
pub mod letter;
pub mod patient;
pub mod sample;
pub mod session;
pub mod severity;
pub mod threat;
pub mod vitals;

pub use alert::SafetyAlert;
pub use event::{ClinicalEvent, ClinicalEventKind};
pub use finding::Finding;
pub use fluids::{FluidTracker, FluidType, FLUID_REFRACTORY_ML_PER_KG};
pub use intervention::{Dose, Intervention, InterventionStatus, ReassessmentCheck};
pub use letter::Letter;
pub use patient::AgeBand;
pub use sample::{SampleField, SampleHistory};
pub use session::{Phase, QuickAssessment, Session};
pub use severity::Severity;
pub use threat::Threat;
pub use vitals::{Perfusion, VitalsSnapshot};
