pub mod personal;

pub use personal::{compute_prs, personal_records, PersonalRecord};
