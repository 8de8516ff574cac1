//! Page enter/exit transitions.
//!
//! Every page root is wrapped so that navigating produces the same short
//! animation: the incoming page fades up into place, the outgoing page
//! fades out upwards. Each mounted page is a [`PageInstance`] moving through
//!
//! ```text
//! Entering ──(enter animation done)──▶ Settled ──(navigate away)──▶ Exiting ──▶ discarded
//! ```
//!
//! Only a `Settled` page is interactive, so a page cannot be clicked before
//! its enter animation reaches its terminal frame.
//!
//! ## Sole active page
//!
//! The [`Navigator`] owns the page instances and guarantees that at most one
//! is `Entering` or `Settled` at any instant. Navigating schedules the
//! current page's exit first; the next page's `Entering` phase begins either
//! at that same instant ([`TransitionMode::Sync`]) or once the exit finished
//! ([`TransitionMode::Wait`]).

use crate::reveal::{InterpolatedStyle, RevealConfig, RevealError, Trigger, VisualState};
use crate::timeline::{Millis, TimerId, Timeline};
use crate::types::Route;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PagePhase {
    Entering,
    Settled,
    Exiting,
}

/// How the incoming page is sequenced against the outgoing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionMode {
    /// Enter as soon as the outgoing page's exit is scheduled.
    #[default]
    Sync,
    /// Enter only after the outgoing page finished exiting.
    Wait,
}

impl TransitionMode {
    /// Name used in `config.toml` and the `data-transition-mode` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionMode::Sync => "sync",
            TransitionMode::Wait => "wait",
        }
    }
}

/// Enter and exit animations shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTiming {
    pub enter: RevealConfig,
    pub exit: RevealConfig,
    pub mode: TransitionMode,
}

impl TransitionTiming {
    /// Enter rises `offset` pixels into place; exit drifts `offset` pixels up.
    pub fn new(
        enter_ms: Millis,
        exit_ms: Millis,
        offset: f64,
        mode: TransitionMode,
    ) -> Result<Self, RevealError> {
        let enter = RevealConfig::fade_up(offset, enter_ms, Trigger::OnMount)?;
        let exit = RevealConfig::new(
            VisualState::VISIBLE,
            VisualState::transparent().offset(0.0, -offset),
            exit_ms,
            0,
            Trigger::OnMount,
        )?;
        Ok(Self { enter, exit, mode })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PageId(u64);

/// One mounted page.
#[derive(Debug, Clone)]
pub struct PageInstance {
    id: PageId,
    route: Route,
    phase: PagePhase,
    phase_started: Millis,
    entered_at: Millis,
    timer: Option<TimerId>,
}

impl PageInstance {
    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// Instant this page started entering.
    pub fn entered_at(&self) -> Millis {
        self.entered_at
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == PagePhase::Settled
    }
}

/// A sampled page at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub id: PageId,
    pub route: Route,
    pub phase: PagePhase,
    pub interactive: bool,
    pub style: InterpolatedStyle,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Already on (or already heading to) that route.
    Unchanged,
    /// The new page started entering.
    Entered { from: Option<Route>, page: PageId },
    /// The new page will enter once the outgoing page finished exiting.
    Queued { from: Option<Route> },
}

impl Navigation {
    /// Route that stopped being the active page, if any.
    pub fn left(&self) -> Option<Route> {
        match self {
            Navigation::Unchanged => None,
            Navigation::Entered { from, .. } | Navigation::Queued { from } => *from,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TransitionEvent {
    Settle(PageId),
    ExitDone(PageId),
}

/// Owns the mounted pages and sequences their transitions.
#[derive(Debug, Clone)]
pub struct Navigator {
    timing: TransitionTiming,
    timeline: Timeline<TransitionEvent>,
    active: Option<PageInstance>,
    exiting: Option<PageInstance>,
    queued: Option<Route>,
    next_id: u64,
}

impl Navigator {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            timeline: Timeline::new(),
            active: None,
            exiting: None,
            queued: None,
            next_id: 0,
        }
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn now(&self) -> Millis {
        self.timeline.now()
    }

    /// The page that is entering or settled.
    pub fn active(&self) -> Option<&PageInstance> {
        self.active.as_ref()
    }

    /// The page currently playing its exit animation.
    pub fn exiting(&self) -> Option<&PageInstance> {
        self.exiting.as_ref()
    }

    /// Route the user will end up on: the active page, or the queued one.
    pub fn current_route(&self) -> Option<Route> {
        self.queued.or(self.active.as_ref().map(|p| p.route))
    }

    /// Request navigation to `route` at instant `now`.
    pub fn navigate(&mut self, route: Route, now: Millis) -> Navigation {
        self.advance_to(now);
        if self.current_route() == Some(route) {
            return Navigation::Unchanged;
        }

        let from = self.active.as_ref().map(|p| p.route);
        if let Some(outgoing) = self.active.take() {
            self.begin_exit(outgoing, now);
        }

        let outcome = match self.timing.mode {
            TransitionMode::Wait if self.exiting.is_some() => {
                tracing::debug!(to = %route, "navigation queued behind exit");
                self.queued = Some(route);
                Navigation::Queued { from }
            }
            _ => {
                self.queued = None;
                let page = self.begin_enter(route, now);
                Navigation::Entered { from, page }
            }
        };
        // Zero-length animations settle at the same instant.
        self.advance_to(now);
        outcome
    }

    /// Process every transition due at or before `now`.
    pub fn advance_to(&mut self, now: Millis) {
        while let Some((at, event)) = self.timeline.pop_due(now) {
            match event {
                TransitionEvent::Settle(id) => {
                    if let Some(page) = self.active.as_mut().filter(|p| p.id == id) {
                        tracing::debug!(route = %page.route, at, "page settled");
                        page.phase = PagePhase::Settled;
                        page.phase_started = at;
                        page.timer = None;
                    }
                }
                TransitionEvent::ExitDone(id) => {
                    if self.exiting.as_ref().is_some_and(|p| p.id == id) {
                        if let Some(page) = self.exiting.take() {
                            tracing::debug!(route = %page.route, at, "page discarded");
                        }
                        if let Some(route) = self.queued.take() {
                            self.begin_enter(route, at);
                        }
                    }
                }
            }
        }
        self.timeline.settle(now);
    }

    /// Advance to `now` and sample every mounted page.
    pub fn snapshot(&mut self, now: Millis) -> Vec<PageView> {
        self.advance_to(now);
        self.exiting
            .iter()
            .chain(self.active.iter())
            .map(|page| PageView {
                id: page.id,
                route: page.route,
                phase: page.phase,
                interactive: page.is_interactive(),
                style: self.style_of(page, now),
            })
            .collect()
    }

    fn style_of(&self, page: &PageInstance, now: Millis) -> InterpolatedStyle {
        let elapsed = now.saturating_sub(page.phase_started);
        match page.phase {
            PagePhase::Entering => self.timing.enter.advance(elapsed),
            PagePhase::Settled => self.timing.enter.advance(self.timing.enter.total_ms()),
            PagePhase::Exiting => self.timing.exit.advance(elapsed),
        }
    }

    fn begin_enter(&mut self, route: Route, now: Millis) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        let settle_at = now.saturating_add(self.timing.enter.total_ms());
        let timer = self
            .timeline
            .schedule_at(settle_at, TransitionEvent::Settle(id));
        tracing::debug!(route = %route, at = now, settle_at, "page entering");
        self.active = Some(PageInstance {
            id,
            route,
            phase: PagePhase::Entering,
            phase_started: now,
            entered_at: now,
            timer: Some(timer),
        });
        id
    }

    fn begin_exit(&mut self, mut page: PageInstance, now: Millis) {
        if let Some(timer) = page.timer.take() {
            self.timeline.cancel(timer);
        }
        if let Some(mut stale) = self.exiting.take() {
            if let Some(timer) = stale.timer.take() {
                self.timeline.cancel(timer);
            }
            tracing::debug!(route = %stale.route, "discarding superseded exit");
        }
        let done_at = now.saturating_add(self.timing.exit.total_ms());
        page.timer = Some(
            self.timeline
                .schedule_at(done_at, TransitionEvent::ExitDone(page.id)),
        );
        page.phase = PagePhase::Exiting;
        page.phase_started = now;
        tracing::debug!(route = %page.route, at = now, done_at, "page exiting");
        self.exiting = Some(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(mode: TransitionMode) -> Navigator {
        Navigator::new(TransitionTiming::new(500, 300, 20.0, mode).unwrap())
    }

    fn phases(nav: &mut Navigator, now: Millis) -> Vec<(Route, PagePhase)> {
        nav.snapshot(now)
            .into_iter()
            .map(|v| (v.route, v.phase))
            .collect()
    }

    #[test]
    fn mode_names_match_config_spelling() {
        for mode in [TransitionMode::Sync, TransitionMode::Wait] {
            let parsed: TransitionMode =
                toml::Value::String(mode.as_str().to_string()).try_into().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn first_page_enters_then_settles() {
        let mut nav = navigator(TransitionMode::Sync);
        let outcome = nav.navigate(Route::Home, 0);
        assert!(matches!(outcome, Navigation::Entered { from: None, .. }));
        assert_eq!(phases(&mut nav, 499), vec![(Route::Home, PagePhase::Entering)]);
        assert_eq!(phases(&mut nav, 500), vec![(Route::Home, PagePhase::Settled)]);
    }

    #[test]
    fn page_is_not_interactive_until_settled() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::About, 0);
        let view = &nav.snapshot(250)[0];
        assert!(!view.interactive);
        assert!(!view.style.is_complete());
        let view = &nav.snapshot(500)[0];
        assert!(view.interactive);
        assert!(view.style.is_complete());
    }

    #[test]
    fn sync_mode_enters_while_previous_exits() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        let outcome = nav.navigate(Route::Contact, 1000);
        assert_eq!(outcome.left(), Some(Route::Home));
        assert_eq!(
            phases(&mut nav, 1100),
            vec![
                (Route::Home, PagePhase::Exiting),
                (Route::Contact, PagePhase::Entering)
            ]
        );
        assert_eq!(phases(&mut nav, 1300), vec![(Route::Contact, PagePhase::Entering)]);
        assert_eq!(phases(&mut nav, 1500), vec![(Route::Contact, PagePhase::Settled)]);
    }

    #[test]
    fn wait_mode_enters_after_exit_completes() {
        let mut nav = navigator(TransitionMode::Wait);
        nav.navigate(Route::Home, 0);
        let outcome = nav.navigate(Route::Products, 1000);
        assert_eq!(outcome, Navigation::Queued { from: Some(Route::Home) });
        assert_eq!(phases(&mut nav, 1299), vec![(Route::Home, PagePhase::Exiting)]);
        assert_eq!(phases(&mut nav, 1300), vec![(Route::Products, PagePhase::Entering)]);
        assert_eq!(phases(&mut nav, 1800), vec![(Route::Products, PagePhase::Settled)]);
    }

    #[test]
    fn queued_page_records_when_it_entered() {
        let mut nav = navigator(TransitionMode::Wait);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::Contact, 1000);
        nav.advance_to(2000);
        let page = nav.active().unwrap();
        assert_eq!(page.route(), Route::Contact);
        assert_eq!(page.phase(), PagePhase::Settled);
        assert_eq!(page.entered_at(), 1300);
    }

    #[test]
    fn never_two_settled_pages() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 600);
        for t in (600..=1200).step_by(25) {
            let views = nav.snapshot(t);
            let settled = views.iter().filter(|v| v.phase == PagePhase::Settled).count();
            let live = views
                .iter()
                .filter(|v| v.phase != PagePhase::Exiting)
                .count();
            assert!(settled <= 1, "two settled pages at {t}");
            assert!(live <= 1, "two active pages at {t}");
        }
    }

    #[test]
    fn navigating_to_current_route_is_noop() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Services, 0);
        assert_eq!(nav.navigate(Route::Services, 700), Navigation::Unchanged);
        assert_eq!(phases(&mut nav, 700), vec![(Route::Services, PagePhase::Settled)]);
    }

    #[test]
    fn leaving_an_entering_page_cancels_its_settle() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 100);
        let views = nav.snapshot(500);
        assert!(
            views
                .iter()
                .all(|v| !(v.route == Route::Home && v.phase == PagePhase::Settled))
        );
    }

    #[test]
    fn rapid_navigation_discards_older_exit() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 600);
        nav.navigate(Route::Contact, 650);
        let routes: Vec<_> = phases(&mut nav, 700);
        assert_eq!(
            routes,
            vec![
                (Route::About, PagePhase::Exiting),
                (Route::Contact, PagePhase::Entering)
            ]
        );
    }

    #[test]
    fn wait_mode_latest_request_wins() {
        let mut nav = navigator(TransitionMode::Wait);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 600);
        nav.navigate(Route::Contact, 700);
        assert_eq!(nav.current_route(), Some(Route::Contact));
        assert_eq!(phases(&mut nav, 900), vec![(Route::Contact, PagePhase::Entering)]);
    }

    #[test]
    fn exit_style_fades_out_upwards() {
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 1000);
        let views = nav.snapshot(1300);
        assert!(views.iter().all(|v| v.route != Route::Home));
        let mut nav = navigator(TransitionMode::Sync);
        nav.navigate(Route::Home, 0);
        nav.navigate(Route::About, 1000);
        let exiting = nav
            .snapshot(1150)
            .into_iter()
            .find(|v| v.phase == PagePhase::Exiting)
            .unwrap();
        assert!(exiting.style.visual.opacity < 1.0);
        assert!(exiting.style.visual.y < 0.0);
    }

    #[test]
    fn zero_length_enter_settles_immediately() {
        let mut nav = Navigator::new(TransitionTiming::new(0, 0, 0.0, TransitionMode::Sync).unwrap());
        nav.navigate(Route::Home, 10);
        assert_eq!(nav.active().map(|p| p.phase()), Some(PagePhase::Settled));
    }
}
