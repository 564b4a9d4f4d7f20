pub mod query;
pub mod review;
pub mod wizard;

pub use query::{query_reviews, ReviewQuery, ReviewSort};
pub use review::ReviewRecord;
pub use wizard::{reduce, ReviewDraft, WizardAction, WizardStep};
