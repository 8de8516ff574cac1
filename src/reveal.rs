//! Reveal animations: how an element moves from hidden to visible.
//!
//! Every section, card and heading on the site fades, slides or zooms into
//! place. This module describes those reveals as validated configuration
//! ([`RevealConfig`]) and evaluates them as pure functions of elapsed time,
//! so the same description drives both the unit tests and the generated
//! HTML (through [`RevealConfig::css_vars`] and the `data-reveal` attributes
//! read by `static/site.js`).
//!
//! ## Lifecycle
//!
//! ```text
//!            trigger fires                     fire_once = false
//!  Hidden ─────────────────────▶ Visible ─────────────────────────▶ Hidden
//!            (mount or first              leave viewport
//!             viewport entry)
//! ```
//!
//! A [`Reveal`] is the controller for one node. Under
//! [`Trigger::OnViewportEntry`] with `fire_once = true` the transition is
//! permanent; with `fire_once = false` leaving the viewport resets it and the
//! next entry replays it from the start.
//!
//! ## Stagger
//!
//! A [`StaggerGroup`] shares one parent controller across an ordered list of
//! children. Child `k` starts `k * interval` after the parent fires and runs
//! its own [`RevealConfig::advance`] on that local clock.

use crate::timeline::Millis;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and 1, got {value}")]
    OpacityOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    NegativeScale { field: &'static str, value: f64 },
}

/// Visual parameters of an element at one instant.
///
/// Offsets are in CSS pixels relative to the element's resting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully opaque, in place, unscaled.
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, in place.
    pub fn transparent() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    fn lerp(from: VisualState, to: VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale: mix(from.scale, to.scale),
        }
    }

    fn validate(&self, which: Endpoint) -> Result<(), RevealError> {
        for (field, value) in [
            (which.field("opacity"), self.opacity),
            (which.field("x"), self.x),
            (which.field("y"), self.y),
            (which.field("scale"), self.scale),
        ] {
            if !value.is_finite() {
                return Err(RevealError::NonFinite { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(RevealError::OpacityOutOfRange {
                field: which.field("opacity"),
                value: self.opacity,
            });
        }
        if self.scale < 0.0 {
            return Err(RevealError::NegativeScale {
                field: which.field("scale"),
                value: self.scale,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Endpoint {
    Initial,
    Visible,
}

impl Endpoint {
    fn field(self, name: &str) -> &'static str {
        match (self, name) {
            (Endpoint::Initial, "opacity") => "initial.opacity",
            (Endpoint::Initial, "x") => "initial.x",
            (Endpoint::Initial, "y") => "initial.y",
            (Endpoint::Initial, _) => "initial.scale",
            (Endpoint::Visible, "opacity") => "visible.opacity",
            (Endpoint::Visible, "x") => "visible.x",
            (Endpoint::Visible, "y") => "visible.y",
            (Endpoint::Visible, _) => "visible.scale",
        }
    }
}

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Equivalent CSS timing function.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

/// What starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "on", rename_all = "kebab-case")]
pub enum Trigger {
    /// Fires as soon as the element mounts.
    OnMount,
    /// Fires when the element first intersects the viewport.
    OnViewportEntry { fire_once: bool },
}

impl Trigger {
    /// The trigger used by every scroll-revealed section of the site.
    pub const IN_VIEW_ONCE: Trigger = Trigger::OnViewportEntry { fire_once: true };

    /// Value of the `data-reveal` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Trigger::OnMount => "mount",
            Trigger::OnViewportEntry { .. } => "view",
        }
    }

    pub fn fires_once(self) -> bool {
        match self {
            Trigger::OnMount => true,
            Trigger::OnViewportEntry { fire_once } => fire_once,
        }
    }
}

/// Validated description of one reveal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealConfig {
    initial: VisualState,
    visible: VisualState,
    duration_ms: Millis,
    delay_ms: Millis,
    trigger: Trigger,
    easing: Easing,
}

/// Style produced by [`RevealConfig::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterpolatedStyle {
    #[serde(flatten)]
    pub visual: VisualState,
    /// Linear progress through the animation, `0.0..=1.0`.
    pub progress: f64,
}

impl InterpolatedStyle {
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Inline CSS for this frame.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.visual.opacity, self.visual.x, self.visual.y, self.visual.scale
        )
    }
}

impl RevealConfig {
    pub fn new(
        initial: VisualState,
        visible: VisualState,
        duration_ms: Millis,
        delay_ms: Millis,
        trigger: Trigger,
    ) -> Result<Self, RevealError> {
        initial.validate(Endpoint::Initial)?;
        visible.validate(Endpoint::Visible)?;
        Ok(Self {
            initial,
            visible,
            duration_ms,
            delay_ms,
            trigger,
            easing: Easing::default(),
        })
    }

    /// Opacity 0 → 1.
    pub fn fade_in(duration_ms: Millis, trigger: Trigger) -> Result<Self, RevealError> {
        Self::new(
            VisualState::transparent(),
            VisualState::VISIBLE,
            duration_ms,
            0,
            trigger,
        )
    }

    /// Fade in while rising `distance` pixels into place.
    pub fn fade_up(
        distance: f64,
        duration_ms: Millis,
        trigger: Trigger,
    ) -> Result<Self, RevealError> {
        Self::new(
            VisualState::transparent().offset(0.0, distance),
            VisualState::VISIBLE,
            duration_ms,
            0,
            trigger,
        )
    }

    /// Fade in while sliding horizontally; negative `dx` enters from the left.
    pub fn slide_in(dx: f64, duration_ms: Millis, trigger: Trigger) -> Result<Self, RevealError> {
        Self::new(
            VisualState::transparent().offset(dx, 0.0),
            VisualState::VISIBLE,
            duration_ms,
            0,
            trigger,
        )
    }

    /// Fade in while growing from `from_scale`.
    pub fn zoom_in(
        from_scale: f64,
        duration_ms: Millis,
        trigger: Trigger,
    ) -> Result<Self, RevealError> {
        Self::new(
            VisualState::transparent().scaled(from_scale),
            VisualState::VISIBLE,
            duration_ms,
            0,
            trigger,
        )
    }

    pub fn with_delay(mut self, delay_ms: Millis) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn initial(&self) -> VisualState {
        self.initial
    }

    pub fn visible(&self) -> VisualState {
        self.visible
    }

    pub fn duration_ms(&self) -> Millis {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> Millis {
        self.delay_ms
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Instant (relative to the trigger) at which the visible frame is reached.
    pub fn total_ms(&self) -> Millis {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Style `elapsed_ms` after the trigger fired.
    ///
    /// Pure: the same `elapsed_ms` always yields the same style. The initial
    /// frame holds through the delay and the visible frame holds after
    /// `delay + duration`.
    pub fn advance(&self, elapsed_ms: Millis) -> InterpolatedStyle {
        let progress = if elapsed_ms < self.delay_ms {
            0.0
        } else if self.duration_ms == 0 {
            1.0
        } else {
            let into = elapsed_ms - self.delay_ms;
            (into as f64 / self.duration_ms as f64).min(1.0)
        };
        let visual = if progress >= 1.0 {
            self.visible
        } else {
            VisualState::lerp(self.initial, self.visible, self.easing.apply(progress))
        };
        InterpolatedStyle { visual, progress }
    }

    /// The style before the trigger fires.
    pub fn initial_style(&self) -> InterpolatedStyle {
        InterpolatedStyle {
            visual: self.initial,
            progress: 0.0,
        }
    }

    /// CSS custom properties consumed by the reveal rules in `style.css`.
    pub fn css_vars(&self) -> String {
        let from = self.initial;
        let to = self.visible;
        format!(
            "--reveal-opacity: {}; --reveal-x: {}px; --reveal-y: {}px; --reveal-scale: {}; \
             --reveal-to-opacity: {}; --reveal-to-x: {}px; --reveal-to-y: {}px; --reveal-to-scale: {}; \
             --reveal-duration: {}ms; --reveal-delay: {}ms; --reveal-ease: {};",
            from.opacity,
            from.x,
            from.y,
            from.scale,
            to.opacity,
            to.x,
            to.y,
            to.scale,
            self.duration_ms,
            self.delay_ms,
            self.easing.css(),
        )
    }
}

/// Whether a node has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Reveal controller for a single node.
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    state: RevealState,
    fired_at: Option<Millis>,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
            fired_at: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn fired_at(&self) -> Option<Millis> {
        self.fired_at
    }

    /// Time since the trigger fired, if it has.
    pub fn elapsed(&self, now: Millis) -> Option<Millis> {
        self.fired_at.map(|at| now.saturating_sub(at))
    }

    /// The node mounted. Fires [`Trigger::OnMount`] reveals.
    pub fn mount(&mut self, now: Millis) -> bool {
        match self.config.trigger {
            Trigger::OnMount if self.state == RevealState::Hidden => {
                self.fire(now);
                true
            }
            _ => false,
        }
    }

    /// The node intersected the viewport. Returns whether the reveal fired.
    pub fn enter_viewport(&mut self, now: Millis) -> bool {
        match self.config.trigger {
            Trigger::OnViewportEntry { .. } if self.state == RevealState::Hidden => {
                self.fire(now);
                true
            }
            _ => false,
        }
    }

    /// The node left the viewport. Only repeatable reveals reset.
    pub fn leave_viewport(&mut self) {
        if let Trigger::OnViewportEntry { fire_once: false } = self.config.trigger
            && self.state == RevealState::Visible
        {
            tracing::trace!("reveal reset on viewport exit");
            self.state = RevealState::Hidden;
            self.fired_at = None;
        }
    }

    pub fn style_at(&self, now: Millis) -> InterpolatedStyle {
        match self.elapsed(now) {
            Some(elapsed) => self.config.advance(elapsed),
            None => self.config.initial_style(),
        }
    }

    fn fire(&mut self, now: Millis) {
        tracing::trace!(at = now, trigger = self.config.trigger.attr(), "reveal fired");
        self.state = RevealState::Visible;
        self.fired_at = Some(now);
    }
}

/// An ordered list of children revealed one after another.
#[derive(Debug, Clone)]
pub struct StaggerGroup {
    parent: Reveal,
    item: RevealConfig,
    interval_ms: Millis,
    len: usize,
}

impl StaggerGroup {
    pub fn new(parent: RevealConfig, item: RevealConfig, interval_ms: Millis, len: usize) -> Self {
        Self {
            parent: Reveal::new(parent),
            item,
            interval_ms,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval_ms(&self) -> Millis {
        self.interval_ms
    }

    pub fn parent(&self) -> &Reveal {
        &self.parent
    }

    pub fn mount(&mut self, now: Millis) -> bool {
        self.parent.mount(now)
    }

    pub fn enter_viewport(&mut self, now: Millis) -> bool {
        self.parent.enter_viewport(now)
    }

    pub fn leave_viewport(&mut self) {
        self.parent.leave_viewport();
    }

    /// Offset of child `index` from the parent's trigger.
    pub fn start_time(&self, index: usize) -> Millis {
        self.interval_ms.saturating_mul(index as Millis)
    }

    /// Total delay of child `index`, including the item's own delay.
    pub fn child_delay(&self, index: usize) -> Millis {
        self.start_time(index).saturating_add(self.item.delay_ms)
    }

    /// The item config with the stagger offset folded into its delay, as
    /// rendered into the page.
    pub fn child_config(&self, index: usize) -> RevealConfig {
        self.item.clone().with_delay(self.child_delay(index))
    }

    /// A child is visible once the parent fired and its start time passed.
    pub fn child_state(&self, index: usize, now: Millis) -> RevealState {
        match self.parent.elapsed(now) {
            Some(global) if global >= self.start_time(index) => RevealState::Visible,
            _ => RevealState::Hidden,
        }
    }

    /// Style of child `index`. Children that have not started hold their
    /// initial frame; started children advance on
    /// `max(0, global - index * interval)`.
    pub fn child_style(&self, index: usize, now: Millis) -> InterpolatedStyle {
        match self.parent.elapsed(now) {
            Some(global) if global >= self.start_time(index) => {
                self.item.advance(global.saturating_sub(self.start_time(index)))
            }
            _ => self.item.initial_style(),
        }
    }

    pub fn styles_at(&self, now: Millis) -> Vec<InterpolatedStyle> {
        (0..self.len).map(|k| self.child_style(k, now)).collect()
    }

    /// Instant (relative to the parent trigger) at which the last child settles.
    pub fn total_ms(&self) -> Millis {
        match self.len {
            0 => 0,
            n => self.start_time(n - 1).saturating_add(self.item.total_ms()),
        }
    }
}
