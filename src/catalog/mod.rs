//! Item records and the rules deciding how they are classified and when they are eligible

/// Hidden / hidden-until eligibility checks
pub mod availability;
/// Free-text category normalization
pub mod category;
/// Item record and list tags
pub mod item;

pub use category::Category;
pub use item::Item;
