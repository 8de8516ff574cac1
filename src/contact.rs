//! Contact form submission, simulated locally.
//!
//! The contact page's form never talks to a server. Submitting moves the
//! form through a small state machine on a logical clock:
//!
//! ```text
//!          submit (valid)         latency elapsed          display window elapsed
//!   Idle ─────────────────▶ Pending ───────────────▶ Success ─────────────────────▶ Idle
//!    │                                          (fields cleared)
//!    └── submit (invalid): stays Idle, offending fields marked
//! ```
//!
//! The delivery step goes through the [`Relay`] trait. [`SimulatedRelay`]
//! keeps everything in-process; a relay that POSTs to an email or CRM
//! service can replace it without changing the state machine.
//!
//! Leaving the page calls [`ContactForm::unmount`], which cancels any
//! scheduled transition so a pending submission can never complete against
//! a discarded form.

use crate::timeline::{Millis, TimerId, Timeline};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Default simulated round-trip of a submission.
pub const DEFAULT_LATENCY_MS: Millis = 1000;
/// Default time the success message stays up before the form resets.
pub const DEFAULT_SUCCESS_DISPLAY_MS: Millis = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Organization,
    Phone,
    Message,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Organization,
        Field::Phone,
        Field::Message,
    ];

    /// HTML `name`/`id` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Organization => "organization",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Organization => "Organization",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }

    /// Input type; `None` renders a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Field::Name | Field::Organization => Some("text"),
            Field::Email => Some("email"),
            Field::Phone => Some("tel"),
            Field::Message => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your full name",
            Field::Email => "your.email@example.com",
            Field::Organization => "Your organization",
            Field::Phone => "Your phone number",
            Field::Message => "Tell us about your waste management needs...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    Missing,
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing => f.write_str("required"),
            FieldError::InvalidEmail => f.write_str("not a valid email address"),
        }
    }
}

/// Per-field validation failures, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k} {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("form is invalid: {0}")]
    Validation(FieldErrors),
    #[error("a submission is already in progress")]
    Busy,
    #[error("contact form is no longer mounted")]
    Unmounted,
    #[error("the contact page is not interactive until it settles")]
    NotInteractive,
}

/// The values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    /// Optional; empty when not given.
    pub organization: String,
    /// Optional; empty when not given.
    pub phone: String,
    pub message: String,
}

impl FormSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Organization => &mut self.organization,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields must be non-blank; the email must look like an address.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            let value = self.get(field).trim();
            if field.is_required() && value.is_empty() {
                errors.insert(field, FieldError::Missing);
            } else if field == Field::Email && !looks_like_email(value) {
                errors.insert(field, FieldError::InvalidEmail);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain`, both parts non-empty, no whitespace.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    Idle,
    Pending,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    pub latency_ms: Millis,
    pub success_display_ms: Millis,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
        }
    }
}

/// Where a completed submission is handed off.
pub trait Relay {
    fn deliver(&mut self, submission: &FormSubmission);
}

/// Relay that keeps submissions in-process and only counts them.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRelay {
    delivered: usize,
}

impl SimulatedRelay {
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl Relay for SimulatedRelay {
    fn deliver(&mut self, _submission: &FormSubmission) {
        self.delivered += 1;
        tracing::debug!(delivered = self.delivered, "simulated delivery");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FormEventKind {
    Submitted,
    Rejected(Vec<Field>),
    Delivered,
    Reset,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormEvent {
    pub at: Millis,
    pub kind: FormEventKind,
}

#[derive(Debug, Clone, Copy)]
enum FormTimer {
    Complete,
    Reset,
}

/// The contact page's form and its submission state machine.
#[derive(Debug)]
pub struct ContactForm<R: Relay = SimulatedRelay> {
    fields: FormSubmission,
    errors: FieldErrors,
    status: FormStatus,
    timing: ContactTiming,
    relay: R,
    timeline: Timeline<FormTimer>,
    timer: Option<TimerId>,
    in_flight: Option<FormSubmission>,
    mounted: bool,
    history: Vec<FormEvent>,
}

impl ContactForm<SimulatedRelay> {
    /// A freshly mounted, empty form.
    pub fn new(timing: ContactTiming, now: Millis) -> Self {
        Self::with_relay(timing, SimulatedRelay::default(), now)
    }
}

impl<R: Relay> ContactForm<R> {
    pub fn with_relay(timing: ContactTiming, relay: R, now: Millis) -> Self {
        Self {
            fields: FormSubmission::default(),
            errors: FieldErrors::default(),
            status: FormStatus::Idle,
            timing,
            relay,
            timeline: Timeline::starting_at(now),
            timer: None,
            in_flight: None,
            mounted: true,
            history: Vec::new(),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &FormSubmission {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn history(&self) -> &[FormEvent] {
        &self.history
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Instant of the next scheduled transition, if any.
    pub fn next_transition(&self) -> Option<Millis> {
        self.timeline.next_due()
    }

    /// Update one field. Editing a field clears its error marker.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), SubmitError> {
        if !self.mounted {
            return Err(SubmitError::Unmounted);
        }
        self.fields.set(field, value);
        self.errors.remove(field);
        Ok(())
    }

    /// Submit at instant `now`.
    ///
    /// Invalid input leaves the status unchanged and marks the offending
    /// fields. Submitting again while the success message shows starts a
    /// new submission and drops the pending reset.
    pub fn submit(&mut self, now: Millis) -> Result<(), SubmitError> {
        if !self.mounted {
            return Err(SubmitError::Unmounted);
        }
        self.advance_to(now);
        if self.status == FormStatus::Pending {
            return Err(SubmitError::Busy);
        }
        if let Err(errors) = self.fields.validate() {
            tracing::debug!(at = now, invalid = %errors, "submission rejected");
            self.record(now, FormEventKind::Rejected(errors.fields()));
            self.errors = errors.clone();
            return Err(SubmitError::Validation(errors));
        }
        if let Some(timer) = self.timer.take() {
            self.timeline.cancel(timer);
        }
        self.errors = FieldErrors::default();
        self.in_flight = Some(self.fields.clone());
        self.status = FormStatus::Pending;
        self.timer = Some(
            self.timeline
                .schedule_in(self.timing.latency_ms, FormTimer::Complete),
        );
        tracing::debug!(at = now, "submission pending");
        self.record(now, FormEventKind::Submitted);
        Ok(())
    }

    /// Apply every transition due at or before `now`. No-op once unmounted.
    pub fn advance_to(&mut self, now: Millis) {
        if !self.mounted {
            return;
        }
        while let Some((at, timer)) = self.timeline.pop_due(now) {
            match timer {
                FormTimer::Complete => {
                    if let Some(submission) = self.in_flight.take() {
                        self.relay.deliver(&submission);
                    }
                    self.fields.clear();
                    self.status = FormStatus::Success;
                    self.timer = Some(self.timeline.schedule_at(
                        at.saturating_add(self.timing.success_display_ms),
                        FormTimer::Reset,
                    ));
                    tracing::debug!(at, "submission succeeded");
                    self.record(at, FormEventKind::Delivered);
                }
                FormTimer::Reset => {
                    self.status = FormStatus::Idle;
                    self.timer = None;
                    tracing::debug!(at, "form reset");
                    self.record(at, FormEventKind::Reset);
                }
            }
        }
        self.timeline.settle(now);
    }

    /// The page was left. Transitions due by `now` still apply; everything
    /// later is cancelled, the form is cleared and its status drops to
    /// `Idle`.
    pub fn unmount(&mut self, now: Millis) {
        if !self.mounted {
            return;
        }
        self.advance_to(now);
        let cancelled = self.timeline.cancel_all();
        self.timer = None;
        self.in_flight = None;
        self.fields.clear();
        self.errors = FieldErrors::default();
        self.status = FormStatus::Idle;
        self.mounted = false;
        tracing::debug!(at = now, cancelled, "contact form unmounted");
        self.record(now, FormEventKind::Unmounted);
    }

    fn record(&mut self, at: Millis, kind: FormEventKind) {
        self.history.push(FormEvent { at, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new(ContactTiming::default(), 0);
        form.set_field(Field::Name, name).unwrap();
        form.set_field(Field::Email, email).unwrap();
        form.set_field(Field::Message, message).unwrap();
        form
    }

    #[test]
    fn missing_name_stays_idle_and_marks_field() {
        let mut form = filled("", "a@b.com", "hi");
        let err = form.submit(0).unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.field_error(Field::Name), Some(FieldError::Missing));
        assert_eq!(form.field_error(Field::Email), None);
        assert_eq!(form.field_error(Field::Message), None);
        assert_eq!(form.next_transition(), None);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled("  ", "a@b.com", "\n");
        let err = form.submit(0).unwrap_err();
        let SubmitError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.fields(), vec![Field::Name, Field::Message]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled("Jane", "jane.example.com", "Hello");
        assert!(form.submit(0).is_err());
        assert_eq!(form.field_error(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        assert!(form.submit(0).is_ok());
        assert_eq!(form.fields().organization, "");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = filled("", "a@b.com", "hi");
        let _ = form.submit(0);
        form.set_field(Field::Name, "Jane").unwrap();
        assert_eq!(form.field_error(Field::Name), None);
    }

    #[test]
    fn valid_submission_runs_full_cycle() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        assert_eq!(form.status(), FormStatus::Pending);

        form.advance_to(999);
        assert_eq!(form.status(), FormStatus::Pending);
        assert_eq!(form.field(Field::Name), "Jane");

        form.advance_to(1000);
        assert_eq!(form.status(), FormStatus::Success);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }

        form.advance_to(3999);
        assert_eq!(form.status(), FormStatus::Success);
        form.advance_to(4000);
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.fields().is_empty());
        assert_eq!(form.relay().delivered(), 1);
    }

    #[test]
    fn one_large_step_applies_both_transitions() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        form.advance_to(10_000);
        let kinds: Vec<_> = form.history().iter().map(|e| (e.at, e.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (0, FormEventKind::Submitted),
                (1000, FormEventKind::Delivered),
                (4000, FormEventKind::Reset),
            ]
        );
    }

    #[test]
    fn submitting_while_pending_is_busy() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        form.set_field(Field::Name, "Jane again").unwrap();
        assert_eq!(form.submit(200), Err(SubmitError::Busy));
    }

    #[test]
    fn resubmitting_during_success_drops_pending_reset() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        form.advance_to(1500);
        form.set_field(Field::Name, "Joe").unwrap();
        form.set_field(Field::Email, "joe@x.com").unwrap();
        form.set_field(Field::Message, "Again").unwrap();
        form.submit(2000).unwrap();
        assert_eq!(form.status(), FormStatus::Pending);

        form.advance_to(3000);
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.relay().delivered(), 2);

        // The first submission's reset (due at 4000) no longer applies.
        form.advance_to(4000);
        assert_eq!(form.status(), FormStatus::Success);
        form.advance_to(6000);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn unmount_while_pending_cancels_completion() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        form.unmount(500);
        form.advance_to(1000);
        form.advance_to(10_000);
        assert_eq!(form.relay().delivered(), 0);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.history().last().map(|e| e.at), Some(500));
        assert_eq!(form.history().last().map(|e| &e.kind), Some(&FormEventKind::Unmounted));
        assert_eq!(form.next_transition(), None);
    }

    #[test]
    fn unmount_during_success_window_reports_idle() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.submit(0).unwrap();
        form.unmount(1500);
        assert_eq!(form.relay().delivered(), 1);
        assert_eq!(form.status(), FormStatus::Idle);
        form.advance_to(10_000);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(
            form.history().iter().map(|e| &e.kind).collect::<Vec<_>>(),
            vec![&FormEventKind::Submitted, &FormEventKind::Delivered, &FormEventKind::Unmounted]
        );
    }

    #[test]
    fn unmounted_form_rejects_input() {
        let mut form = filled("Jane", "jane@x.com", "Hello");
        form.unmount(10);
        assert!(form.fields().is_empty());
        assert_eq!(form.submit(20), Err(SubmitError::Unmounted));
        assert_eq!(form.set_field(Field::Name, "x"), Err(SubmitError::Unmounted));
    }

    #[test]
    fn relay_receives_snapshot_taken_at_submit() {
        #[derive(Default)]
        struct Capture(Vec<FormSubmission>);
        impl Relay for Capture {
            fn deliver(&mut self, submission: &FormSubmission) {
                self.0.push(submission.clone());
            }
        }

        let mut form = ContactForm::with_relay(ContactTiming::default(), Capture::default(), 0);
        form.set_field(Field::Name, "Jane").unwrap();
        form.set_field(Field::Email, "jane@x.com").unwrap();
        form.set_field(Field::Message, "Hello").unwrap();
        form.set_field(Field::Organization, "Acme").unwrap();
        form.submit(0).unwrap();
        form.set_field(Field::Message, "edited while pending").unwrap();
        form.advance_to(1000);
        assert_eq!(form.relay().0.len(), 1);
        assert_eq!(form.relay().0[0].message, "Hello");
        assert_eq!(form.relay().0[0].organization, "Acme");
    }

    #[test]
    fn field_errors_display_in_form_order() {
        let errors = FormSubmission::default().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "name required, email required, message required"
        );
    }
}
