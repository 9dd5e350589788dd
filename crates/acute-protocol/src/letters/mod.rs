pub mod airway;
pub mod breathing;
pub mod circulation;
pub mod disability;
pub mod exposure;
pub mod exsanguination;
