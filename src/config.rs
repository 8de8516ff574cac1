//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the source directory next to `assets/` and is optional: stock defaults are
//! used for anything it does not set.
//!
//! ```text
//! site/
//! ├── config.toml   # Optional, overrides stock defaults
//! └── assets/       # Optional, copied verbatim into the output
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title_suffix = "Sackhe Technologies"  # Appended to every <title>
//! copyright_year = 2024                 # Footer copyright line
//! lang = "en"                           # <html lang>
//!
//! [animation]
//! hero_distance = 30.0      # px the page hero rises while fading in
//! home_hero_distance = 50.0 # px for the home page hero
//! hero_duration_ms = 800
//! item_distance = 20.0      # px cards rise while fading in
//! item_duration_ms = 600
//! section_duration_ms = 800 # Plain fade for section wrappers
//! slide_distance = 50.0     # px for side-by-side blocks sliding in
//! zoom_from = 0.95          # Starting scale of zoomed cards
//! stagger_ms = 100          # Delay between cards in dense grids
//! wide_stagger_ms = 200     # Delay between cards in wide grids
//! footer_delay_ms = 500     # Delay before the footer tagline fades in
//! once = true               # Reveal on first viewport entry only
//!
//! [transition]
//! enter_ms = 500
//! exit_ms = 300
//! offset = 20.0
//! mode = "sync"             # "sync" or "wait"
//!
//! [contact]
//! latency_ms = 1000         # Simulated submission latency
//! success_display_ms = 3000 # How long the success message stays up
//!
//! [colors]
//! primary = "#059669"
//! # ...
//!
//! [processing]
//! max_processes = 4         # Max parallel render workers (omit for auto)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! [contact]
//! latency_ms = 250
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::contact::ContactTiming;
use crate::reveal::{RevealConfig, RevealError, Trigger};
use crate::timeline::Millis;
use crate::transition::{TransitionMode, TransitionTiming};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid animation: {0}")]
    Animation(#[from] RevealError),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the published site. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings.
    pub site: SiteSettings,
    /// Reveal animation tuning.
    pub animation: AnimationConfig,
    /// Page enter/exit animation.
    pub transition: TransitionConfig,
    /// Contact form simulation timing.
    pub contact: ContactConfig,
    /// Brand palette.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title_suffix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title_suffix must not be empty".into(),
            ));
        }
        if self.site.copyright_year < 1970 {
            return Err(ConfigError::Validation(
                "site.copyright_year must be 1970 or later".into(),
            ));
        }
        if self.contact.success_display_ms == 0 {
            return Err(ConfigError::Validation(
                "contact.success_display_ms must be non-zero".into(),
            ));
        }
        if self.transition.enter_ms == 0 || self.transition.exit_ms == 0 {
            return Err(ConfigError::Validation(
                "transition.enter_ms and transition.exit_ms must be non-zero".into(),
            ));
        }
        if let Some((key, _)) = self.colors.entries().into_iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "colors.{key} must not be empty"
            )));
        }
        // Building the animations runs the reveal validation (finite offsets,
        // non-negative scale).
        self.animation.presets()?;
        self.transition.timing()?;
        Ok(())
    }
}

/// Document-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Appended to every page title: `About | Sackhe Technologies`.
    pub title_suffix: String,
    /// Year shown in the footer copyright line.
    pub copyright_year: u16,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title_suffix: "Sackhe Technologies".to_string(),
            copyright_year: 2024,
            lang: "en".to_string(),
        }
    }
}

/// Reveal animation tuning shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub hero_distance: f64,
    pub home_hero_distance: f64,
    pub hero_duration_ms: Millis,
    pub item_distance: f64,
    pub item_duration_ms: Millis,
    pub section_duration_ms: Millis,
    pub slide_distance: f64,
    pub zoom_from: f64,
    pub stagger_ms: Millis,
    pub wide_stagger_ms: Millis,
    pub footer_delay_ms: Millis,
    /// When false, sections replay their reveal each time they scroll back
    /// into view.
    pub once: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            hero_distance: 30.0,
            home_hero_distance: 50.0,
            hero_duration_ms: 800,
            item_distance: 20.0,
            item_duration_ms: 600,
            section_duration_ms: 800,
            slide_distance: 50.0,
            zoom_from: 0.95,
            stagger_ms: 100,
            wide_stagger_ms: 200,
            footer_delay_ms: 500,
            once: true,
        }
    }
}

/// The reveal configurations the page templates draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPresets {
    /// Page hero, plays on mount.
    pub hero: RevealConfig,
    /// Home page hero, taller rise.
    pub home_hero: RevealConfig,
    /// Section heading rising into view.
    pub heading: RevealConfig,
    /// Section wrapper fading in on viewport entry.
    pub section: RevealConfig,
    /// Card inside a staggered grid.
    pub item: RevealConfig,
    /// Block sliding in from the left.
    pub slide_left: RevealConfig,
    /// Block sliding in from the right.
    pub slide_right: RevealConfig,
    /// Card growing into place.
    pub zoom: RevealConfig,
    /// Footer tagline.
    pub footer: RevealConfig,
    pub stagger_ms: Millis,
    pub wide_stagger_ms: Millis,
}

impl AnimationConfig {
    pub fn viewport_trigger(&self) -> Trigger {
        Trigger::OnViewportEntry {
            fire_once: self.once,
        }
    }

    pub fn presets(&self) -> Result<AnimationPresets, RevealError> {
        let view = self.viewport_trigger();
        Ok(AnimationPresets {
            hero: RevealConfig::fade_up(self.hero_distance, self.hero_duration_ms, Trigger::OnMount)?,
            home_hero: RevealConfig::fade_up(
                self.home_hero_distance,
                self.hero_duration_ms,
                Trigger::OnMount,
            )?,
            heading: RevealConfig::fade_up(self.hero_distance, self.item_duration_ms, view)?,
            section: RevealConfig::fade_in(self.section_duration_ms, view)?,
            item: RevealConfig::fade_up(self.item_distance, self.item_duration_ms, view)?,
            slide_left: RevealConfig::slide_in(-self.slide_distance, self.hero_duration_ms, view)?,
            slide_right: RevealConfig::slide_in(self.slide_distance, self.hero_duration_ms, view)?,
            zoom: RevealConfig::zoom_in(self.zoom_from, self.item_duration_ms, view)?,
            footer: RevealConfig::fade_in(self.item_duration_ms, view)?
                .with_delay(self.footer_delay_ms),
            stagger_ms: self.stagger_ms,
            wide_stagger_ms: self.wide_stagger_ms,
        })
    }
}

/// Page enter/exit animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub enter_ms: Millis,
    pub exit_ms: Millis,
    /// Pixels the page rises on enter and drifts on exit.
    pub offset: f64,
    pub mode: TransitionMode,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter_ms: 500,
            exit_ms: 300,
            offset: 20.0,
            mode: TransitionMode::Sync,
        }
    }
}

impl TransitionConfig {
    pub fn timing(&self) -> Result<TransitionTiming, RevealError> {
        TransitionTiming::new(self.enter_ms, self.exit_ms, self.offset, self.mode)
    }
}

/// Contact form simulation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub latency_ms: Millis,
    pub success_display_ms: Millis,
}

impl Default for ContactConfig {
    fn default() -> Self {
        let timing = ContactTiming::default();
        Self {
            latency_ms: timing.latency_ms,
            success_display_ms: timing.success_display_ms,
        }
    }
}

impl ContactConfig {
    pub fn timing(&self) -> ContactTiming {
        ContactTiming {
            latency_ms: self.latency_ms,
            success_display_ms: self.success_display_ms,
        }
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Buttons, links, icons.
    pub primary: String,
    /// Hover state of primary elements.
    pub primary_dark: String,
    /// Secondary buttons and gradients.
    pub accent: String,
    pub accent_dark: String,
    pub background: String,
    /// Alternate section background.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    /// Footer background.
    pub footer: String,
    /// Footer text.
    pub footer_text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#059669".to_string(),
            primary_dark: "#047857".to_string(),
            accent: "#2563eb".to_string(),
            accent_dark: "#1d4ed8".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#d1fae5".to_string(),
            footer: "#111827".to_string(),
            footer_text: "#d1d5db".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("primary", &self.primary),
            ("primary_dark", &self.primary_dark),
            ("accent", &self.accent),
            ("accent_dark", &self.accent_dark),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("footer", &self.footer),
            ("footer_text", &self.footer_text),
        ]
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least one
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the source directory.
///
/// A missing source directory is the same as an empty one: stock defaults.
pub fn load_config(source: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(source)?;
    if overlay.is_some() {
        tracing::info!(path = %source.join("config.toml").display(), "loaded config");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sackhe Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <source>/config.toml (default: site/config.toml).
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Appended to every page title, e.g. "About | Sackhe Technologies".
title_suffix = "Sackhe Technologies"

# Year in the footer copyright line.
copyright_year = 2024

# Value of <html lang>.
lang = "en"

# ---------------------------------------------------------------------------
# Reveal animations
# ---------------------------------------------------------------------------
[animation]
# Page hero: fades in while rising this many pixels, on page load.
hero_distance = 30.0
home_hero_distance = 50.0
hero_duration_ms = 800

# Cards in grids: fade in while rising, when scrolled into view.
item_distance = 20.0
item_duration_ms = 600

# Section wrappers: plain fade when scrolled into view.
section_duration_ms = 800

# Side-by-side blocks slide in horizontally by this many pixels.
slide_distance = 50.0

# Zoomed cards grow from this scale.
zoom_from = 0.95

# Delay between consecutive cards in a grid.
stagger_ms = 100       # Dense grids (services, process, initiatives)
wide_stagger_ms = 200  # Wide grids (products, values, customers)

# Delay before the footer tagline fades in.
footer_delay_ms = 500

# true: reveal on first viewport entry only.
# false: replay every time a section scrolls back into view.
once = true

# ---------------------------------------------------------------------------
# Page transitions
# ---------------------------------------------------------------------------
[transition]
enter_ms = 500
exit_ms = 300

# Pixels the page rises on enter and drifts up on exit.
offset = 20.0

# "sync": the new page starts loading as soon as the exit has painted, so
#         the exit plays while it loads and a fast load cuts it short.
# "wait": the old page stays for the full exit_ms, then the new page loads.
mode = "sync"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Simulated submission latency. Nothing is sent anywhere.
latency_ms = 1000

# How long the success message stays up before the form resets.
success_display_ms = 3000

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#059669"       # Buttons, links, icons
primary_dark = "#047857"  # Hover
accent = "#2563eb"        # Secondary buttons, gradients
accent_dark = "#1d4ed8"
background = "#ffffff"
surface = "#f9fafb"       # Alternate section background
text = "#111827"
text_muted = "#4b5563"
border = "#d1fae5"
footer = "#111827"
footer_text = "#d1d5db"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let mut css = String::from(":root {\n");
    for (key, value) in colors.entries() {
        css.push_str(&format!("    --color-{}: {};\n", key.replace('_', "-"), value));
    }
    css.push('}');
    css
}
