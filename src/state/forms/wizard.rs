//! Step wizard controller
//!
//! Owns the form values, the active step and the surfaced field errors for one
//! session. Every value change is validated live and mirrored to the store.
//! Moving forward is gated on the current step's fields only; moving back is
//! never blocked. Observers learn about changes by draining [`WizardEvent`]s.

use super::field::{Field, FormValues};
use super::schema::{FieldErrors, Schema};
use super::step::Step;
use super::submission::Submission;
use crate::store::FormStore;
use thiserror::Error;
use uuid::Uuid;

/// Notifications emitted by the wizard, drained with [`Wizard::poll_events`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Saved values replaced the empty defaults
    Hydrated,
    ValueChanged(Field),
    StepChanged { from: Step, to: Step },
    /// Advancing was refused because fields of this step are invalid
    AdvanceBlocked(Step),
    Submitted(Uuid),
    SubmitRejected,
    /// Values cleared without submitting
    Reset,
}

/// Why a submit did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submit is only available on the review step")]
    NotOnReviewStep,

    #[error("a submission is already in progress")]
    InProgress,

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Position of the wizard and the duplicate-submit guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardState {
    active_step: Step,
    loading: bool,
}

impl WizardState {
    pub fn step(&self) -> Step {
        self.active_step
    }

    pub fn active_step(&self) -> usize {
        self.active_step.index()
    }

    pub fn is_first_step(&self) -> bool {
        self.active_step.is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.active_step.is_last()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

pub struct Wizard<S: FormStore> {
    schema: Schema,
    store: S,
    storage_key: String,
    values: FormValues,
    errors: FieldErrors,
    state: WizardState,
    events: Vec<WizardEvent>,
}

impl<S: FormStore> Wizard<S> {
    /// Empty wizard on the first step; nothing is read from the store
    pub fn new(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            schema: Schema::user_details(),
            store,
            storage_key: storage_key.into(),
            values: FormValues::default(),
            errors: FieldErrors::default(),
            state: WizardState::default(),
            events: Vec::new(),
        }
    }

    /// New wizard with any saved values restored
    pub fn start(store: S, storage_key: impl Into<String>) -> Self {
        let mut wizard = Self::new(store, storage_key);
        wizard.hydrate();
        wizard
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn step(&self) -> Step {
        self.state.active_step
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take every event emitted since the last call
    pub fn poll_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the values with the saved ones, if any can be read.
    ///
    /// Returns true when saved values were applied. The active step is left
    /// untouched so a restored session always starts on the first step.
    pub fn hydrate(&mut self) -> bool {
        match self.store.load(&self.storage_key) {
            Ok(Some(values)) => {
                tracing::info!(key = %self.storage_key, "Restored saved form values");
                self.values = values;
                self.errors.clear();
                self.events.push(WizardEvent::Hydrated);
                true
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(key = %self.storage_key, "Ignoring saved form values: {err}");
                false
            }
        }
    }

    /// Write the complete current values to the store
    pub fn mirror(&mut self) {
        if let Err(err) = self.store.save(&self.storage_key, &self.values) {
            tracing::warn!(key = %self.storage_key, "Failed to save form values: {err}");
        }
    }

    /// Change one field, re-validate it and mirror the whole value set
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        let verdict = self.schema.validate_field(field, self.values.get(field));
        self.errors.apply(field, verdict);
        self.mirror();
        self.events.push(WizardEvent::ValueChanged(field));
    }

    /// Validate the current step's fields and move forward if they pass
    pub fn advance(&mut self) -> Result<Step, FieldErrors> {
        let current = self.state.active_step;
        let report = self.schema.validate(&self.values, Some(current.fields()));
        for (field, verdict) in report.iter() {
            self.errors.apply(field, verdict);
        }

        if !report.is_valid() {
            tracing::debug!(step = current.title(), "Advance blocked by invalid fields");
            self.events.push(WizardEvent::AdvanceBlocked(current));
            return Err(report.errors());
        }

        self.go_to(current.next());
        Ok(self.state.active_step)
    }

    /// Move back one step; never validates
    pub fn retreat(&mut self) -> Step {
        self.go_to(self.state.active_step.prev());
        self.state.active_step
    }

    /// Validate everything and, when valid, clear the form and start over
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if !self.state.is_last_step() {
            return Err(SubmitError::NotOnReviewStep);
        }
        if self.state.loading {
            return Err(SubmitError::InProgress);
        }

        self.state.loading = true;
        let report = self.schema.validate(&self.values, None);
        for (field, verdict) in report.iter() {
            self.errors.apply(field, verdict);
        }

        if !report.is_valid() {
            self.state.loading = false;
            self.events.push(WizardEvent::SubmitRejected);
            return Err(SubmitError::Invalid(report.errors()));
        }

        let submission = Submission::new(std::mem::take(&mut self.values));
        self.clear_store();
        self.errors.clear();
        self.go_to(Step::default());
        self.state.loading = false;

        tracing::info!(id = %submission.id, "Form submitted");
        self.events.push(WizardEvent::Submitted(submission.id));
        Ok(submission)
    }

    /// Drop all values and saved state and return to the first step
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.clear_store();
        self.go_to(Step::default());
        self.events.push(WizardEvent::Reset);
    }

    fn clear_store(&mut self) {
        if let Err(err) = self.store.clear(&self.storage_key) {
            tracing::warn!(key = %self.storage_key, "Failed to clear saved form values: {err}");
        }
    }

    fn go_to(&mut self, to: Step) {
        let from = self.state.active_step;
        if from != to {
            tracing::debug!(from = from.title(), to = to.title(), "Step changed");
            self.state.active_step = to;
            self.events.push(WizardEvent::StepChanged { from, to });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Verdict;
    use crate::store::{MemoryStore, MockFormStore, StoreError};
    use pretty_assertions::assert_eq;

    const KEY: &str = "userDetailsForm";

    fn wizard() -> Wizard<MemoryStore> {
        Wizard::new(MemoryStore::new(), KEY)
    }

    fn fill_personal(w: &mut Wizard<MemoryStore>) {
        w.set_value(Field::Name, "Asha Rao");
        w.set_value(Field::Email, "asha@example.com");
        w.set_value(Field::Phone, "9876543210");
    }

    fn fill_address(w: &mut Wizard<MemoryStore>) {
        w.set_value(Field::AddressLine1, "12 MG Road");
        w.set_value(Field::City, "Bengaluru");
        w.set_value(Field::State, "Karnataka");
        w.set_value(Field::ZipCode, "560001");
    }

    fn at_review() -> Wizard<MemoryStore> {
        let mut w = wizard();
        fill_personal(&mut w);
        w.advance().unwrap();
        fill_address(&mut w);
        w.advance().unwrap();
        assert_eq!(w.step(), Step::Review);
        w
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_first_step() {
            let w = wizard();
            assert_eq!(w.state().active_step(), 0);
            assert!(w.state().is_first_step());
            assert!(!w.state().is_last_step());
            assert!(!w.state().is_loading());
            assert!(w.values().is_empty());
            assert!(w.errors().is_empty());
        }
    }

    mod live_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_value_validates_that_field_only() {
            let mut w = wizard();
            w.set_value(Field::Phone, "12ab");
            assert_eq!(
                w.error(Field::Phone),
                Some("Phone no. must contain only numbers")
            );
            assert!(w.error(Field::Name).is_none());
        }

        #[test]
        fn test_fixing_value_clears_error() {
            let mut w = wizard();
            w.set_value(Field::ZipCode, "12345");
            assert_eq!(
                w.error(Field::ZipCode),
                Some("ZIP Code must be exactly 6 digits")
            );
            w.set_value(Field::ZipCode, "123456");
            assert!(w.error(Field::ZipCode).is_none());
        }

        #[test]
        fn test_clearing_required_field_reports_required() {
            let mut w = wizard();
            w.set_value(Field::Name, "A");
            w.set_value(Field::Name, "");
            assert_eq!(w.error(Field::Name), Some("Name is required"));
        }

        #[test]
        fn test_set_value_emits_event() {
            let mut w = wizard();
            w.set_value(Field::City, "Pune");
            assert_eq!(w.poll_events(), vec![WizardEvent::ValueChanged(Field::City)]);
            assert!(w.poll_events().is_empty());
        }
    }

    mod mirroring {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_change_is_saved() {
            let mut w = wizard();
            w.set_value(Field::Name, "Asha");
            w.set_value(Field::Phone, "12");
            let saved = w.store().load(KEY).unwrap().unwrap();
            assert_eq!(saved.name, "Asha");
            assert_eq!(saved.phone, "12");
        }

        #[test]
        fn test_invalid_values_for_unreached_steps_are_saved() {
            let mut w = wizard();
            w.set_value(Field::ZipCode, "abc");
            assert_eq!(w.step(), Step::PersonalInformation);
            assert_eq!(w.store().load(KEY).unwrap().unwrap().zip_code, "abc");
        }

        #[test]
        fn test_save_failure_is_silent() {
            let mut store = MockFormStore::new();
            store
                .expect_save()
                .times(1)
                .returning(|_, _| Err(StoreError::Unavailable("disk full".to_string())));
            let mut w = Wizard::new(store, KEY);

            w.set_value(Field::Name, "Asha");
            assert_eq!(w.values().name, "Asha");
            assert!(w.error(Field::Name).is_none());
        }

        #[test]
        fn test_saves_under_configured_key() {
            let mut store = MockFormStore::new();
            store
                .expect_save()
                .withf(|key, values| key == "custom" && values.city == "Pune")
                .times(1)
                .returning(|_, _| Ok(()));
            let mut w = Wizard::new(store, "custom");
            w.set_value(Field::City, "Pune");
        }
    }

    mod hydration {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_restores_saved_values_on_first_step() {
            let mut store = MemoryStore::new();
            let mut saved = FormValues::default();
            saved.set(Field::Name, "Asha");
            saved.set(Field::City, "Pune");
            store.save(KEY, &saved).unwrap();

            let mut w = Wizard::start(store, KEY);
            assert_eq!(w.values(), &saved);
            assert_eq!(w.step(), Step::PersonalInformation);
            assert!(w.errors().is_empty());
            assert_eq!(w.poll_events(), vec![WizardEvent::Hydrated]);
        }

        #[test]
        fn test_missing_entry_keeps_empty_values() {
            let mut w = Wizard::new(MemoryStore::new(), KEY);
            assert!(!w.hydrate());
            assert!(w.values().is_empty());
            assert!(w.poll_events().is_empty());
        }

        #[test]
        fn test_corrupt_entry_falls_back_to_empty() {
            let mut store = MemoryStore::new();
            store.insert_raw(KEY, "[1, 2, 3]");
            let w = Wizard::start(store, KEY);
            assert!(w.values().is_empty());
        }

        #[test]
        fn test_unavailable_store_falls_back_to_empty() {
            let mut store = MockFormStore::new();
            store
                .expect_load()
                .times(1)
                .returning(|_| Err(StoreError::Unavailable("locked".to_string())));
            let w = Wizard::start(store, KEY);
            assert!(w.values().is_empty());
            assert_eq!(w.step(), Step::PersonalInformation);
        }

        #[test]
        fn test_partial_payload_fills_missing_with_empty() {
            let mut store = MemoryStore::new();
            store.insert_raw(KEY, r#"{"email": "a@b.com"}"#);
            let w = Wizard::start(store, KEY);
            assert_eq!(w.values().email, "a@b.com");
            assert_eq!(w.values().name, "");
        }
    }

    mod advance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_on_missing_name() {
            let mut w = wizard();
            w.set_value(Field::Email, "a@b.com");
            w.set_value(Field::Phone, "1234567890");

            let errors = w.advance().unwrap_err();
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                vec![(Field::Name, "Name is required")]
            );
            assert_eq!(w.step(), Step::PersonalInformation);
            assert_eq!(w.error(Field::Name), Some("Name is required"));
        }

        #[test]
        fn test_empty_first_step_reports_all_three() {
            let mut w = wizard();
            let errors = w.advance().unwrap_err();
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![Field::Name, Field::Email, Field::Phone]
            );
        }

        #[test]
        fn test_first_step_ignores_address_fields() {
            let mut w = wizard();
            w.set_value(Field::ZipCode, "bad");
            fill_personal(&mut w);
            assert_eq!(w.advance(), Ok(Step::AddressInformation));
            assert_eq!(w.state().active_step(), 1);
        }

        #[test]
        fn test_second_step_gated_on_address_fields() {
            let mut w = wizard();
            fill_personal(&mut w);
            w.advance().unwrap();

            w.set_value(Field::AddressLine1, "12 MG Road");
            w.set_value(Field::City, "Bengaluru");
            w.set_value(Field::State, "Karnataka");
            w.set_value(Field::ZipCode, "12345a");

            let errors = w.advance().unwrap_err();
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                vec![(Field::ZipCode, "ZIP Code must contain only numbers")]
            );
            assert_eq!(w.step(), Step::AddressInformation);

            w.set_value(Field::ZipCode, "560001");
            assert_eq!(w.advance(), Ok(Step::Review));
        }

        #[test]
        fn test_address_line2_may_be_empty() {
            let mut w = wizard();
            fill_personal(&mut w);
            w.advance().unwrap();
            fill_address(&mut w);
            assert_eq!(w.values().address_line2, "");
            assert!(w.advance().is_ok());
        }

        #[test]
        fn test_advance_clears_stale_errors_of_passing_fields() {
            let mut w = wizard();
            w.set_value(Field::Name, "");
            assert!(w.error(Field::Name).is_some());
            w.values.set(Field::Name, "Asha");
            let _ = w.advance();
            assert!(w.error(Field::Name).is_none());
        }

        #[test]
        fn test_advance_on_review_stays_on_review() {
            let mut w = at_review();
            w.poll_events();
            assert_eq!(w.advance(), Ok(Step::Review));
            assert!(w.poll_events().is_empty());
        }

        #[test]
        fn test_emits_step_changed_and_blocked() {
            let mut w = wizard();
            let _ = w.advance();
            assert_eq!(
                w.poll_events(),
                vec![WizardEvent::AdvanceBlocked(Step::PersonalInformation)]
            );
            fill_personal(&mut w);
            w.poll_events();
            w.advance().unwrap();
            assert_eq!(
                w.poll_events(),
                vec![WizardEvent::StepChanged {
                    from: Step::PersonalInformation,
                    to: Step::AddressInformation,
                }]
            );
        }
    }

    mod retreat {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_noop_on_first_step() {
            let mut w = wizard();
            assert_eq!(w.retreat(), Step::PersonalInformation);
            assert_eq!(w.retreat(), Step::PersonalInformation);
            assert!(w.poll_events().is_empty());
        }

        #[test]
        fn test_decrements_without_validation() {
            let mut w = at_review();
            w.set_value(Field::Name, "");
            w.set_value(Field::ZipCode, "1");
            let errors_before = w.errors().clone();

            assert_eq!(w.retreat(), Step::AddressInformation);
            assert_eq!(w.retreat(), Step::PersonalInformation);
            assert_eq!(w.errors(), &errors_before);
        }

        #[test]
        fn test_leaves_unfilled_step_without_errors() {
            let mut w = wizard();
            fill_personal(&mut w);
            w.advance().unwrap();
            assert_eq!(w.step(), Step::AddressInformation);
            assert!(w.errors().is_empty());

            assert_eq!(w.retreat(), Step::PersonalInformation);
            assert!(w.errors().is_empty());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_resets_everything() {
            let mut w = at_review();
            let expected = w.values().clone();

            let submission = w.submit().unwrap();
            assert_eq!(submission.values, expected);
            assert!(w.values().is_empty());
            assert_eq!(w.step(), Step::PersonalInformation);
            assert!(!w.state().is_loading());
            assert!(w.errors().is_empty());
            assert!(w.store().load(KEY).unwrap().is_none());
            assert!(w.store().raw(KEY).is_none());
        }

        #[test]
        fn test_invalid_submission_keeps_values_and_step() {
            let mut w = at_review();
            w.set_value(Field::Email, "broken");
            let before = w.values().clone();

            let err = w.submit().unwrap_err();
            assert_eq!(
                err,
                SubmitError::Invalid({
                    let mut e = FieldErrors::default();
                    e.apply(Field::Email, Verdict::Invalid("Invalid input"));
                    e
                })
            );
            assert_eq!(w.values(), &before);
            assert_eq!(w.step(), Step::Review);
            assert!(!w.state().is_loading());
            assert_eq!(w.error(Field::Email), Some("Invalid input"));
            assert!(w.store().load(KEY).unwrap().is_some());
        }

        #[test]
        fn test_rejected_outside_review_step() {
            let mut w = wizard();
            fill_personal(&mut w);
            assert_eq!(w.submit(), Err(SubmitError::NotOnReviewStep));
            assert_eq!(w.values().name, "Asha Rao");
        }

        #[test]
        fn test_duplicate_submit_while_loading_is_noop() {
            let mut w = at_review();
            w.state.loading = true;
            assert_eq!(w.submit(), Err(SubmitError::InProgress));
            assert_eq!(w.step(), Step::Review);
            assert!(!w.values().is_empty());
        }

        #[test]
        fn test_clear_failure_still_resets() {
            let mut store = MockFormStore::new();
            store.expect_save().returning(|_, _| Ok(()));
            store
                .expect_clear()
                .times(1)
                .returning(|_| Err(StoreError::Unavailable("read-only".to_string())));
            let mut w = Wizard::new(store, KEY);
            w.set_value(Field::Name, "Asha Rao");
            w.set_value(Field::Email, "asha@example.com");
            w.set_value(Field::Phone, "9876543210");
            w.advance().unwrap();
            w.set_value(Field::AddressLine1, "12 MG Road");
            w.set_value(Field::City, "Bengaluru");
            w.set_value(Field::State, "Karnataka");
            w.set_value(Field::ZipCode, "560001");
            w.advance().unwrap();

            assert!(w.submit().is_ok());
            assert!(w.values().is_empty());
            assert_eq!(w.step(), Step::PersonalInformation);
        }

        #[test]
        fn test_submitted_event_carries_id() {
            let mut w = at_review();
            w.poll_events();
            let submission = w.submit().unwrap();
            let events = w.poll_events();
            assert_eq!(
                events.last(),
                Some(&WizardEvent::Submitted(submission.id))
            );
        }

        #[test]
        fn test_submit_error_display() {
            let mut errors = FieldErrors::default();
            errors.apply(Field::Name, Verdict::Invalid("Name is required"));
            assert_eq!(
                SubmitError::Invalid(errors).to_string(),
                "1 field(s) failed validation"
            );
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_clears_values_store_and_step() {
            let mut w = at_review();
            w.reset();
            assert!(w.values().is_empty());
            assert_eq!(w.step(), Step::PersonalInformation);
            assert!(w.store().load(KEY).unwrap().is_none());
            assert_eq!(w.poll_events().last(), Some(&WizardEvent::Reset));
        }
    }
}
