//! Company classification and interview round mapping.

pub mod company;
pub mod rounds;

use crate::types::{Classification, CompanyIntel};

pub use company::{classify, resolve, KNOWN_ENTERPRISES};
pub use rounds::{checklist, map_rounds, RESUME_VERIFICATION};

/// Classification driving the round map. Absent intel maps like an unknown
/// company, i.e. startup.
pub fn classification_of(intel: Option<&CompanyIntel>) -> Classification {
    intel
        .map(|i| i.classification)
        .unwrap_or(Classification::Startup)
}
