//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (page,
//! product, initiative) leads with its positional index and title; files and
//! URLs follow as secondary context after an arrow or on indented lines.
//!
//! # Output Format
//!
//! ## Content
//!
//! ```text
//! Pages
//! 001 Home → /
//!     Transforming Waste, Protecting Futures
//! 002 About → /about
//!
//! Products
//! 001 Menstrual Incinerator (5 features)
//!     Ideal for: Schools, Colleges, Offices, Public Buildings, Healthcare Facilities
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html (14.2 KB)
//! 002 About → about/index.html (11.8 KB)
//!
//! Assets
//!     style.1a2b3c4d.css
//!     site.5e6f7a8b.js
//!
//! Generated 6 pages, 0 assets into dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::content::Registry;
use crate::generate::BuildReport;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Menstrual Incinerator (5 features)
/// 003 Cycle of Change (featured)
/// 001 Technical Support
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Human-readable byte size.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

// ============================================================================
// content
// ============================================================================

/// Format the content registry as an inventory.
pub fn format_content_output(registry: &Registry) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for (i, entry) in registry.navigation.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} {}",
            entity_header(i + 1, entry.label, None),
            entry.route.path()
        ));
        if let Some(hero) = registry.hero(entry.route) {
            lines.push(format!("{}{}", indent(1), hero.title));
        }
    }

    lines.push(String::new());
    lines.push("Products".to_string());
    for (i, product) in registry.products.iter().enumerate() {
        let features = plural(product.features.len(), "feature", "features");
        lines.push(entity_header(i + 1, product.name, Some(features.as_str())));
        lines.push(format!(
            "{}Ideal for: {}",
            indent(1),
            product.ideal_for.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("Services".to_string());
    for (i, service) in registry.services.iter().enumerate() {
        lines.push(entity_header(i + 1, service.name, None));
        lines.push(format!("{}{}", indent(1), truncate_desc(service.description, 60)));
    }

    lines.push(String::new());
    lines.push("Initiatives".to_string());
    for (i, initiative) in registry.initiatives.iter().enumerate() {
        let detail = initiative.emphasized.then_some("featured");
        lines.push(entity_header(i + 1, initiative.name, detail));
    }

    lines.push(String::new());
    lines.push("Cards".to_string());
    for (name, count) in [
        ("SDG goals", registry.sdg_goals.len()),
        ("Supporters", registry.supporters.len()),
        ("Customers", registry.customers.len()),
        ("Values", registry.values.len()),
        ("Benefits", registry.benefits.len()),
        ("Service process", registry.service_process.len()),
        ("Impact", registry.impact.len()),
        ("Approaches", registry.approaches.len()),
        ("FAQs", registry.faqs.len()),
    ] {
        lines.push(format!("{}{}: {}", indent(1), name, count));
    }

    lines
}

pub fn print_content_output(registry: &Registry) {
    for line in format_content_output(registry) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the result of a build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        let label = crate::content::registry()
            .nav_label(page.route)
            .unwrap_or(page.route.slug());
        lines.push(format!(
            "{} \u{2192} {} ({})",
            entity_header(i + 1, label, None),
            page.file,
            format_size(page.bytes)
        ));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), report.stylesheet));
    lines.push(format!("{}{}", indent(1), report.script));
    for asset in &report.assets {
        lines.push(format!("{}{}", indent(1), asset));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} into {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.assets.len(), "asset", "assets"),
        report.output.display()
    ));

    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the summary printed by `check` after validation passed.
///
/// `config_file` is the `config.toml` that was read, if any.
pub fn format_check_output(
    registry: &Registry,
    config: &SiteConfig,
    config_file: Option<&Path>,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Content".to_string());
    lines.push(format!(
        "{}{}, {}, {}, {}",
        indent(1),
        plural(registry.navigation.len(), "page", "pages"),
        plural(registry.products.len(), "product", "products"),
        plural(registry.services.len(), "service", "services"),
        plural(registry.initiatives.len(), "initiative", "initiatives"),
    ));

    lines.push(String::new());
    lines.push("Config".to_string());
    match config_file {
        Some(path) => lines.push(format!("{}{}", indent(1), path.display())),
        None => lines.push(format!("{}(stock defaults)", indent(1))),
    }
    let transition = &config.transition;
    lines.push(format!(
        "{}Transition: {}ms enter, {}ms exit, {}",
        indent(1),
        transition.enter_ms,
        transition.exit_ms,
        transition.mode.as_str()
    ));
    lines.push(format!(
        "{}Contact: {}ms latency, {}ms success",
        indent(1),
        config.contact.latency_ms,
        config.contact.success_display_ms
    ));
    lines.push(format!(
        "{}Reveal: {}ms/{}ms stagger, {}",
        indent(1),
        config.animation.stagger_ms,
        config.animation.wide_stagger_ms,
        if config.animation.once { "once" } else { "repeat" }
    ));

    lines.push(String::new());
    lines.push("OK".to_string());
    lines
}

pub fn print_check_output(registry: &Registry, config: &SiteConfig, config_file: Option<&Path>) {
    for line in format_check_output(registry, config, config_file) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
