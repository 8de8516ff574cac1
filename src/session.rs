//! A visitor's session: page navigation plus the contact form's lifetime.
//!
//! The contact form belongs to the contact page instance. It mounts when
//! that instance starts entering (which in [`TransitionMode::Wait`] is only
//! after the previous page finished exiting) and unmounts when the instance
//! is left, which cancels a pending submission before it can complete.
//!
//! Input goes through the session, not the form: [`Session::set_contact_field`]
//! and [`Session::submit_contact`] are rejected with
//! [`SubmitError::NotInteractive`] until the contact page is `Settled`.
//!
//! [`TransitionMode::Wait`]: crate::transition::TransitionMode::Wait

use crate::contact::{ContactForm, ContactTiming, Field, SubmitError};
use crate::timeline::Millis;
use crate::transition::{Navigation, Navigator, PageId, TransitionTiming};
use crate::types::Route;

/// A contact form and the page instance that owns it.
#[derive(Debug)]
struct MountedForm {
    page: PageId,
    form: ContactForm,
}

#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    contact_timing: ContactTiming,
    contact: Option<MountedForm>,
    departed: Option<ContactForm>,
}

impl Session {
    pub fn new(transition: TransitionTiming, contact_timing: ContactTiming) -> Self {
        Self {
            navigator: Navigator::new(transition),
            contact_timing,
            contact: None,
            departed: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The form of the contact page that is entering or settled.
    pub fn contact(&self) -> Option<&ContactForm> {
        self.contact.as_ref().map(|m| &m.form)
    }

    /// The form of the contact page most recently left, already unmounted.
    pub fn departed_contact(&self) -> Option<&ContactForm> {
        self.departed.as_ref()
    }

    /// Whether the contact page is settled and its form accepts input.
    pub fn contact_is_interactive(&self) -> bool {
        let settled_contact = self
            .navigator
            .active()
            .is_some_and(|p| p.route() == Route::Contact && p.is_interactive());
        settled_contact && self.contact.is_some()
    }

    /// Edit a contact form field at instant `now`.
    pub fn set_contact_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
        now: Millis,
    ) -> Result<(), SubmitError> {
        self.interactive_form(now)?.set_field(field, value)
    }

    /// Submit the contact form at instant `now`.
    pub fn submit_contact(&mut self, now: Millis) -> Result<(), SubmitError> {
        self.interactive_form(now)?.submit(now)
    }

    /// Navigate, mounting or unmounting the contact form as needed.
    pub fn navigate(&mut self, route: Route, now: Millis) -> Navigation {
        self.advance_to(now);
        let outcome = self.navigator.navigate(route, now);
        self.sync_contact(now);
        outcome
    }

    /// Drive both the page transitions and the form to `now`.
    pub fn advance_to(&mut self, now: Millis) {
        self.navigator.advance_to(now);
        self.sync_contact(now);
        if let Some(mounted) = self.contact.as_mut() {
            mounted.form.advance_to(now);
        }
    }

    fn interactive_form(&mut self, now: Millis) -> Result<&mut ContactForm, SubmitError> {
        self.advance_to(now);
        if !self.contact_is_interactive() {
            return match self.navigator.current_route() {
                Some(Route::Contact) => Err(SubmitError::NotInteractive),
                _ => Err(SubmitError::Unmounted),
            };
        }
        self.contact
            .as_mut()
            .map(|m| &mut m.form)
            .ok_or(SubmitError::Unmounted)
    }

    /// Keep the mounted form bound to the active contact page instance.
    ///
    /// A new form starts at the instant its page entered, so a page that
    /// entered between two calls still gets a form on the right clock.
    fn sync_contact(&mut self, now: Millis) {
        let page = self
            .navigator
            .active()
            .filter(|p| p.route() == Route::Contact)
            .map(|p| (p.id(), p.entered_at()));
        if self.contact.as_ref().map(|m| m.page) == page.map(|(id, _)| id) {
            return;
        }
        if let Some(mut mounted) = self.contact.take() {
            mounted.form.unmount(now);
            self.departed = Some(mounted.form);
        }
        if let Some((id, entered_at)) = page {
            tracing::debug!(at = entered_at, "contact form mounted");
            self.contact = Some(MountedForm {
                page: id,
                form: ContactForm::new(self.contact_timing, entered_at),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormEventKind, FormStatus};
    use crate::transition::TransitionMode;

    fn session(mode: TransitionMode) -> Session {
        Session::new(
            TransitionTiming::new(400, 300, 20.0, mode).unwrap(),
            ContactTiming::default(),
        )
    }

    fn fill(s: &mut Session, now: Millis) {
        s.set_contact_field(Field::Name, "Jane", now).unwrap();
        s.set_contact_field(Field::Email, "jane@x.com", now).unwrap();
        s.set_contact_field(Field::Message, "Hello", now).unwrap();
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    #[test]
    fn contact_page_mounts_a_form() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Home, 0);
        assert!(s.contact().is_none());
        s.navigate(Route::Contact, 100);
        assert!(s.contact().is_some_and(|f| f.is_mounted()));
    }

    #[test]
    fn leaving_contact_drops_the_form() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        s.navigate(Route::About, 500);
        assert!(s.contact().is_none());
        assert!(s.departed_contact().is_some_and(|f| !f.is_mounted()));
    }

    #[test]
    fn revisiting_contact_starts_empty() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        s.set_contact_field(Field::Name, "Jane", 400).unwrap();
        s.navigate(Route::Home, 500);
        s.navigate(Route::Contact, 600);
        assert_eq!(s.contact().unwrap().field(Field::Name), "");
    }

    #[test]
    fn staying_on_contact_keeps_the_form() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        s.set_contact_field(Field::Name, "Jane", 400).unwrap();
        assert_eq!(s.navigate(Route::Contact, 450), Navigation::Unchanged);
        assert_eq!(s.contact().unwrap().field(Field::Name), "Jane");
    }

    #[test]
    fn bouncing_back_to_contact_mounts_a_new_form() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        s.navigate(Route::Home, 100);
        s.navigate(Route::Contact, 200);
        assert!(s.contact().is_some_and(|f| f.is_mounted() && f.history().is_empty()));
        assert!(s.departed_contact().is_some_and(|f| !f.is_mounted()));
    }

    // =========================================================================
    // Interactivity
    // =========================================================================

    #[test]
    fn sync_mode_form_rejects_input_while_entering() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        assert!(s.contact().is_some());
        assert!(!s.contact_is_interactive());
        assert_eq!(
            s.set_contact_field(Field::Name, "Jane", 10),
            Err(SubmitError::NotInteractive)
        );
        assert_eq!(s.submit_contact(10), Err(SubmitError::NotInteractive));
        assert_eq!(s.contact().unwrap().status(), FormStatus::Idle);
        assert_eq!(s.contact().unwrap().field(Field::Name), "");

        fill(&mut s, 400);
        assert!(s.contact_is_interactive());
        s.submit_contact(400).unwrap();
        assert_eq!(s.contact().unwrap().status(), FormStatus::Pending);
    }

    #[test]
    fn wait_mode_has_no_form_until_contact_enters() {
        let mut s = session(TransitionMode::Wait);
        s.navigate(Route::Home, 0);
        s.navigate(Route::Contact, 1000);

        // Home is still exiting; the contact page does not exist yet.
        assert!(s.contact().is_none());
        assert_eq!(s.submit_contact(1010), Err(SubmitError::NotInteractive));

        s.advance_to(1300);
        let form = s.contact().unwrap();
        assert!(form.is_mounted());
        assert_eq!(s.submit_contact(1310), Err(SubmitError::NotInteractive));

        fill(&mut s, 1700);
        s.submit_contact(1700).unwrap();
        s.advance_to(2700);
        assert_eq!(s.contact().unwrap().status(), FormStatus::Success);
    }

    #[test]
    fn input_off_the_contact_page_is_unmounted() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Home, 0);
        assert_eq!(s.submit_contact(500), Err(SubmitError::Unmounted));
    }

    // =========================================================================
    // Clock
    // =========================================================================

    #[test]
    fn form_advances_with_session_clock() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        fill(&mut s, 400);
        s.submit_contact(400).unwrap();
        s.advance_to(1400);
        assert_eq!(s.contact().unwrap().status(), FormStatus::Success);
    }

    #[test]
    fn leaving_mid_submission_never_delivers() {
        let mut s = session(TransitionMode::Sync);
        s.navigate(Route::Contact, 0);
        fill(&mut s, 400);
        s.submit_contact(400).unwrap();
        s.navigate(Route::About, 900);
        s.advance_to(10_000);

        let departed = s.departed_contact().unwrap();
        assert_eq!(departed.relay().delivered(), 0);
        assert_eq!(departed.status(), FormStatus::Idle);
        assert!(departed.history().iter().all(|e| e.at <= 900));
        assert_eq!(
            departed.history().last().map(|e| &e.kind),
            Some(&FormEventKind::Unmounted)
        );
    }
}
