//! Form domain layer
//!
//! Field identifiers, the validation schema, the ordered wizard steps and the
//! controller that ties them to a store.

mod field;
mod schema;
mod step;
mod submission;
mod wizard;

pub use field::{Field, FormValues, InputType};
#[allow(unused_imports)]
pub use schema::{FieldErrors, FieldRule, Report, Rule, Schema, Verdict};
pub use step::{review_sections, Step};
pub use submission::Submission;
#[allow(unused_imports)]
pub use wizard::{SubmitError, Wizard, WizardEvent, WizardState};
