//! HTML site generation.
//!
//! Renders the six pages of the site from the content registry and the
//! resolved config, then writes them with their assets.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, supporters, SDG goals, product teasers
//! - **About** (`/about/index.html`): story, mission and vision, customers, values
//! - **Products** (`/products/index.html`): product details and benefits
//! - **Services** (`/services/index.html`): services, details, process
//! - **Initiatives** (`/initiatives/index.html`): programs, impact, flagship
//! - **Contact** (`/contact/index.html`): form, contact details, FAQ
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about/index.html
//! ├── ...
//! ├── style.1a2b3c4d.css      # Fingerprinted stylesheet
//! ├── site.5e6f7a8b.js        # Fingerprinted runtime
//! ├── site-manifest.json      # What was written
//! └── assets/                 # Copied from <source>/assets
//! ```
//!
//! ## Animation Wiring
//!
//! Templates never hardcode animation values. Every revealed element gets a
//! `data-reveal` trigger attribute and the `--reveal-*` custom properties of
//! its [`RevealConfig`]; staggered grids fold each child's offset into its
//! `--reveal-delay` through [`StaggerGroup::child_config`]. `static/site.js`
//! only flips classes, `static/style.css` turns the properties into
//! transitions.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, AnimationPresets, ConfigError, SiteConfig};
use crate::contact::Field;
use crate::content::{self, ContentError, LabeledCard, Registry};
use crate::reveal::{RevealConfig, RevealError, StaggerGroup};
use crate::timeline::Millis;
use crate::transition::TransitionTiming;
use crate::types::Route;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset path error: {0}")]
    AssetPath(#[from] std::path::StripPrefixError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid animation: {0}")]
    Animation(#[from] RevealError),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS_STATIC: &str = include_str!("../static/site.js");

/// Name of the manifest written next to the pages.
pub const MANIFEST_FILE: &str = "site-manifest.json";

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage {
    pub route: Route,
    pub path: &'static str,
    /// Relative to the output directory.
    pub file: String,
    pub title: String,
    pub bytes: usize,
}

/// What a build wrote. Serialized as `site-manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generator: String,
    #[serde(skip)]
    pub output: PathBuf,
    pub stylesheet: String,
    pub script: String,
    pub pages: Vec<GeneratedPage>,
    /// Copied asset files, relative to the output directory.
    pub assets: Vec<String>,
}

/// Everything a page template reads.
pub struct PageContext<'a> {
    pub registry: &'a Registry,
    pub config: &'a SiteConfig,
    pub presets: AnimationPresets,
    pub transition: TransitionTiming,
    /// Stylesheet href.
    pub stylesheet: String,
    /// Runtime script href.
    pub script: String,
}

impl<'a> PageContext<'a> {
    pub fn new(
        registry: &'a Registry,
        config: &'a SiteConfig,
        stylesheet: String,
        script: String,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            registry,
            config,
            presets: config.animation.presets()?,
            transition: config.transition.timing()?,
            stylesheet,
            script,
        })
    }
}

/// Build the whole site from `source` into `output_dir`.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<BuildReport, GenerateError> {
    let registry = content::registry();
    registry.validate()?;

    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let stylesheet = fingerprinted_name("style", "css", css.as_bytes());
    let script = fingerprinted_name("site", "js", JS_STATIC.as_bytes());

    let ctx = PageContext::new(
        registry,
        config,
        format!("/{stylesheet}"),
        format!("/{script}"),
    )?;

    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join(&stylesheet), &css)?;
    fs::write(output_dir.join(&script), JS_STATIC)?;

    let threads = config::effective_threads(&config.processing);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let rendered: Vec<(Route, String)> = pool.install(|| {
        Route::ALL
            .par_iter()
            .map(|&route| (route, render_page(route, &ctx).into_string()))
            .collect()
    });
    tracing::info!(pages = rendered.len(), threads, "rendered pages");

    let mut pages = Vec::with_capacity(rendered.len());
    for (route, html) in rendered {
        let file = route.output_file();
        let path = output_dir.join(&file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &html)?;
        tracing::debug!(file = %file, bytes = html.len(), "wrote page");
        pages.push(GeneratedPage {
            route,
            path: route.path(),
            file,
            title: page_title(&ctx, route),
            bytes: html.len(),
        });
    }

    let assets = copy_assets(source, output_dir)?;

    let report = BuildReport {
        generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        output: output_dir.to_path_buf(),
        stylesheet,
        script,
        pages,
        assets,
    };
    fs::write(
        output_dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(&report)?,
    )?;
    Ok(report)
}

/// `stem.<first 8 hex chars of sha256>.ext`
pub fn fingerprinted_name(stem: &str, ext: &str, content: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(content));
    format!("{stem}.{}.{ext}", &digest[..8])
}

/// Copy `<source>/assets` into `<output>/assets`, returning the copied files.
fn copy_assets(source: &Path, output_dir: &Path) -> Result<Vec<String>, GenerateError> {
    let assets_dir = source.join("assets");
    if !assets_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut copied = Vec::new();
    for entry in WalkDir::new(&assets_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source)?;
        let dest = output_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied.push(relative.to_string_lossy().replace('\\', "/"));
    }
    tracing::info!(count = copied.len(), "copied assets");
    Ok(copied)
}

pub fn page_title(ctx: &PageContext, route: Route) -> String {
    let suffix = &ctx.config.site.title_suffix;
    match route {
        Route::Home => format!("{} | {}", suffix, ctx.registry.company.tagline),
        r => format!(
            "{} | {}",
            ctx.registry.nav_label(r).unwrap_or(r.slug()),
            suffix
        ),
    }
}

/// Render one page to a full HTML document.
pub fn render_page(route: Route, ctx: &PageContext) -> Markup {
    let content = match route {
        Route::Home => render_home(ctx),
        Route::About => render_about(ctx),
        Route::Products => render_products(ctx),
        Route::Services => render_services(ctx),
        Route::Initiatives => render_initiatives(ctx),
        Route::Contact => render_contact(ctx),
    };
    base_document(ctx, route, content)
}

// ============================================================================
// HTML Components
// ============================================================================

fn page_style(timing: &TransitionTiming) -> String {
    format!(
        "--page-enter: {}ms; --page-exit: {}ms; --page-offset: {}px; --page-ease: {};",
        timing.enter.duration_ms(),
        timing.exit.duration_ms(),
        timing.enter.initial().y,
        timing.enter.easing().css(),
    )
}

/// Renders the base HTML document structure
fn base_document(ctx: &PageContext, route: Route, content: Markup) -> Markup {
    let timing = &ctx.transition;
    html! {
        (DOCTYPE)
        html lang=(ctx.config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(ctx.registry.company.mission);
                title { (page_title(ctx, route)) }
                link rel="stylesheet" href=(ctx.stylesheet);
                // Hide reveal targets before first paint; the runtime shows them.
                script { (PreEscaped("document.documentElement.classList.add('js');")) }
                script src=(ctx.script) defer {}
            }
            body data-route=(route.slug())
                data-transition-mode=(timing.mode.as_str())
                data-enter-ms=(timing.enter.duration_ms())
                data-exit-ms=(timing.exit.duration_ms()) {
                (site_header(ctx, route))
                main class="page" id="page" style=(page_style(timing)) {
                    (content)
                }
                (site_footer(ctx))
            }
        }
    }
}

/// Renders the sticky site header with logo and navigation
fn site_header(ctx: &PageContext, current: Route) -> Markup {
    html! {
        header.site-header {
            div.container.header-inner {
                (logo(ctx.registry))
                nav.site-nav {
                    (render_nav(ctx.registry, current))
                }
            }
        }
    }
}

fn logo(registry: &Registry) -> Markup {
    html! {
        a.logo href="/" {
            span.logo-badge { (registry.company.initials()) }
            span.logo-name { (registry.company.name) }
        }
    }
}

/// Renders the navigation menu (collapses to a hamburger on narrow screens)
pub fn render_nav(registry: &Registry, current: Route) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        ul.nav-links {
            @for entry in registry.navigation {
                @let is_current = entry.route == current;
                li class=[is_current.then_some("current")] {
                    a href=(entry.route.href()) aria-current=[is_current.then_some("page")] {
                        (entry.label)
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let company = &registry.company;
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div.footer-brand {
                    (logo(registry))
                    p { (registry.footer_blurb) }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for entry in registry.navigation {
                            li { a href=(entry.route.href()) { (entry.label) } }
                        }
                    }
                }
                div {
                    h3 { "Contact Us" }
                    ul.contact-lines {
                        li { a href={ "tel:" (company.phone.replace(' ', "")) } { (company.phone) } }
                        li { a href={ "mailto:" (company.email) } { (company.email) } }
                        li { (company.address) }
                    }
                }
                div {
                    h3 { "Our Supporters" }
                    ul {
                        @for supporter in registry.supporters {
                            li { (supporter.name) }
                        }
                    }
                }
            }
            div.container.footer-bottom {
                p {
                    "© " (ctx.config.site.copyright_year) " " (company.name) ". All rights reserved."
                }
                (revealed(&ctx.presets.footer, "footer-tagline", html! { p { (company.tagline) } }))
            }
        }
    }
}

fn once_attr(cfg: &RevealConfig) -> &'static str {
    if cfg.trigger().fires_once() { "true" } else { "false" }
}

/// A `div` revealed with `cfg`.
fn revealed(cfg: &RevealConfig, class: &str, content: Markup) -> Markup {
    html! {
        div class=(class)
            data-reveal=(cfg.trigger().attr())
            data-reveal-once=(once_attr(cfg))
            style=(cfg.css_vars()) {
            (content)
        }
    }
}

/// A page section that fades in as a whole.
fn reveal_section(ctx: &PageContext, class: &str, content: Markup) -> Markup {
    let cfg = &ctx.presets.section;
    html! {
        section class={ "section " (class) }
            data-reveal=(cfg.trigger().attr())
            data-reveal-once=(once_attr(cfg))
            style=(cfg.css_vars()) {
            div.container { (content) }
        }
    }
}

fn section_heading(ctx: &PageContext, title: &str, lead: Option<&str>) -> Markup {
    revealed(
        &ctx.presets.heading,
        "section-heading",
        html! {
            h2 { (title) }
            @if let Some(lead) = lead {
                p { (lead) }
            }
        },
    )
}

/// Staggered grid: the container fades in with the section preset and child
/// `k` starts `k * interval_ms` later.
fn card_grid<T>(
    ctx: &PageContext,
    items: &[T],
    item: &RevealConfig,
    interval_ms: Millis,
    class: &str,
    render: impl Fn(&T) -> Markup,
) -> Markup {
    let parent = &ctx.presets.section;
    let group = StaggerGroup::new(parent.clone(), item.clone(), interval_ms, items.len());
    html! {
        div class={ "grid " (class) }
            data-reveal=(parent.trigger().attr())
            data-reveal-once=(once_attr(parent))
            data-stagger=(group.interval_ms())
            style=(parent.css_vars()) {
            @for (k, entry) in items.iter().enumerate() {
                div.card data-reveal-child style=(group.child_config(k).css_vars()) {
                    (render(entry))
                }
            }
        }
    }
}

fn labeled_card(card: &LabeledCard) -> Markup {
    html! {
        div.card-badge { (card.badge_or_initial()) }
        h3 { (card.title) }
        p { (card.description) }
    }
}

fn page_hero(ctx: &PageContext, route: Route, cfg: &RevealConfig, actions: Markup) -> Markup {
    let hero = ctx.registry.hero(route);
    html! {
        section class={ "hero hero-" (route.slug()) } {
            div.container {
                (revealed(cfg, "hero-inner", html! {
                    @if let Some(hero) = hero {
                        @if let Some((first, rest)) = hero.title.split_once(", ") {
                            h1 { (first) "," br; span.accent { (rest) } }
                        } @else {
                            h1 { (hero.title) }
                        }
                        p.lead { (hero.lead) }
                    }
                    (actions)
                }))
            }
        }
    }
}

fn call_to_action(ctx: &PageContext, route: Route) -> Markup {
    html! {
        @if let Some(cta) = ctx.registry.call_to_action(route) {
            section.cta {
                div.container {
                    (revealed(&ctx.presets.heading, "cta-inner", html! {
                        h2 { (cta.title) }
                        p { (cta.body) }
                        a.button.button-light href=(Route::Contact.href()) { (cta.button) }
                    }))
                }
            }
        }
    }
}

/// Render markdown copy to HTML.
fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_home(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let presets = &ctx.presets;
    let actions = html! {
        div.hero-actions {
            a.button href=(Route::Products.href()) { "Explore Products" }
            a.button.button-accent href=(Route::Contact.href()) { "Contact Us" }
        }
    };
    html! {
        (page_hero(ctx, Route::Home, &presets.home_hero, actions))
        (reveal_section(ctx, "supporters", html! {
            p.supporters-intro { "Trusted by leading institutions" }
            (card_grid(ctx, registry.supporters, &presets.zoom, presets.stagger_ms, "supporter-grid", |s| html! {
                div.supporter-logo title=(s.name) { (s.logo) }
            }))
        }))
        (reveal_section(ctx, "what-we-do surface", html! {
            (section_heading(ctx, "What We Do", None))
            p.prose { (registry.what_we_do) }
        }))
        (reveal_section(ctx, "sdg", html! {
            (section_heading(
                ctx,
                "Supporting UN Sustainable Development Goals",
                Some("Our solutions directly contribute to achieving global sustainability targets"),
            ))
            (card_grid(ctx, registry.sdg_goals, &presets.item, presets.stagger_ms, "sdg-grid", |goal| html! {
                div.card-badge { (goal.number) }
                h3 { (goal.title) }
            }))
        }))
        (reveal_section(ctx, "solutions surface", html! {
            (section_heading(ctx, "Our Solutions", None))
            div.solution-list {
                @for (k, product) in registry.products.iter().enumerate() {
                    @let slide = if k % 2 == 0 { &presets.slide_left } else { &presets.slide_right };
                    (revealed(&slide.clone().with_delay(presets.wide_stagger_ms * k as Millis), "solution", html! {
                        h3 { (product.name) }
                        p { (product.description) }
                        a.link-arrow href=(Route::Products.href()) { "Learn More" }
                    }))
                }
            }
        }))
        (call_to_action(ctx, Route::Home))
    }
}

fn render_about(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let presets = &ctx.presets;
    html! {
        (page_hero(ctx, Route::About, &presets.hero, html! {}))
        (reveal_section(ctx, "story", html! {
            (section_heading(ctx, "Our Story", None))
            div.prose { (markdown(registry.story)) }
        }))
        (reveal_section(ctx, "mission surface", html! {
            div.two-column {
                (revealed(&presets.slide_left, "panel", html! {
                    h3 { "Our Mission" }
                    p { (registry.company.mission) }
                }))
                (revealed(&presets.slide_right, "panel", html! {
                    h3 { "Our Vision" }
                    p { (registry.company.vision) }
                }))
            }
        }))
        (reveal_section(ctx, "customers", html! {
            (section_heading(
                ctx,
                "Who We Serve",
                Some("Our solutions reach every layer of the community"),
            ))
            (card_grid(ctx, registry.customers, &presets.item, presets.wide_stagger_ms, "customer-grid", labeled_card))
        }))
        (reveal_section(ctx, "values dark", html! {
            (section_heading(ctx, "Our Values", None))
            (card_grid(ctx, registry.values, &presets.item, presets.wide_stagger_ms, "value-grid", labeled_card))
        }))
    }
}

fn render_products(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let presets = &ctx.presets;
    let products = StaggerGroup::new(
        presets.section.clone(),
        presets.item.clone(),
        presets.wide_stagger_ms,
        registry.products.len(),
    );
    html! {
        (page_hero(ctx, Route::Products, &presets.hero, html! {}))
        (reveal_section(ctx, "product-list", html! {
            @for (k, product) in registry.products.iter().enumerate() {
                (revealed(&products.child_config(k), "product", html! {
                    article.product-layout.reverse[k % 2 == 1] id={ "product-" (product.id) } {
                        div.product-media {
                            img src=(product.image) alt=(product.name) loading="lazy";
                        }
                        div.product-body {
                            h2 { (product.name) }
                            p.lead { (product.description) }
                            h3 { "Key Features:" }
                            ul.feature-list {
                                @for feature in product.features {
                                    li { (feature) }
                                }
                            }
                            h3 { "Ideal For:" }
                            (card_grid(ctx, product.ideal_for, &presets.zoom, presets.stagger_ms, "chips", |target| html! {
                                span.chip { (target) }
                            }))
                        }
                    }
                }))
            }
        }))
        (reveal_section(ctx, "benefits surface", html! {
            (section_heading(
                ctx,
                "Why Choose Our Products?",
                Some("Built for impact, designed for the long run"),
            ))
            (card_grid(ctx, registry.benefits, &presets.item, presets.wide_stagger_ms, "benefit-grid", labeled_card))
        }))
        (call_to_action(ctx, Route::Products))
    }
}

fn render_services(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let presets = &ctx.presets;
    let details = StaggerGroup::new(
        presets.section.clone(),
        presets.item.clone(),
        presets.wide_stagger_ms,
        registry.service_details.len(),
    );
    html! {
        (page_hero(ctx, Route::Services, &presets.hero, html! {}))
        (reveal_section(ctx, "service-overview", html! {
            (card_grid(ctx, registry.services, &presets.item, presets.stagger_ms, "service-grid", |service| html! {
                div.card-badge { (service.icon) }
                h3 { (service.name) }
                p { (service.description) }
            }))
        }))
        (reveal_section(ctx, "service-details surface", html! {
            (section_heading(
                ctx,
                "Service Excellence",
                Some("Expert care at every stage of your system's life"),
            ))
            @for (k, detail) in registry.service_details.iter().enumerate() {
                (revealed(&details.child_config(k), "service-detail", html! {
                    div.detail-layout.reverse[k % 2 == 1] {
                        div.detail-icon { (detail.icon) }
                        div.detail-body {
                            h3 { (detail.title) }
                            (markdown(detail.body))
                            ul.feature-list {
                                @for point in detail.points {
                                    li { (point) }
                                }
                            }
                        }
                    }
                }))
            }
        }))
        (reveal_section(ctx, "process", html! {
            (section_heading(
                ctx,
                "Our Service Process",
                Some("A proven approach from first assessment to ongoing care"),
            ))
            (card_grid(ctx, registry.service_process, &presets.item, presets.stagger_ms, "process-grid", labeled_card))
        }))
        (call_to_action(ctx, Route::Services))
    }
}

fn render_initiatives(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let presets = &ctx.presets;
    html! {
        (page_hero(ctx, Route::Initiatives, &presets.hero, html! {}))
        (reveal_section(ctx, "initiative-list", html! {
            (card_grid(ctx, registry.initiatives, &presets.item, presets.stagger_ms, "initiative-grid", |initiative| html! {
                article.initiative.featured[initiative.emphasized] {
                    h3 { (initiative.name) }
                    p { (initiative.description) }
                    @if initiative.emphasized {
                        p.featured-note { (registry.featured_note) }
                    }
                }
            }))
        }))
        (reveal_section(ctx, "impact surface", html! {
            (section_heading(
                ctx,
                "Our Impact",
                Some("Measurable change in the communities we serve"),
            ))
            (card_grid(ctx, registry.impact, &presets.zoom, presets.stagger_ms, "impact-grid", |stat| html! {
                div.stat-icon { (stat.badge_or_initial()) }
                div.stat-value { (stat.description) }
                div.stat-label { (stat.title) }
            }))
        }))
        (reveal_section(ctx, "flagship", html! {
            div.two-column {
                (revealed(&presets.slide_left, "flagship-story", html! {
                    div.card-badge { "C" }
                    h2 { "Cycle of Change" }
                    div.prose { (markdown(registry.flagship_story)) }
                }))
                (revealed(&presets.slide_right.clone().with_delay(presets.wide_stagger_ms), "panel highlights", html! {
                    h3 { "Program Highlights" }
                    @for highlight in registry.program_highlights {
                        div.highlight {
                            h4 { (highlight.title) }
                            p { (highlight.description) }
                        }
                    }
                }))
            }
        }))
        (reveal_section(ctx, "approaches surface", html! {
            (section_heading(
                ctx,
                "How We Make a Difference",
                Some("Our multi-faceted approach addresses the root causes of menstrual health challenges"),
            ))
            (card_grid(ctx, registry.approaches, &presets.item, presets.stagger_ms, "approach-grid", labeled_card))
        }))
        (call_to_action(ctx, Route::Initiatives))
    }
}

fn render_contact(ctx: &PageContext) -> Markup {
    let registry = ctx.registry;
    let company = &registry.company;
    let presets = &ctx.presets;
    html! {
        (page_hero(ctx, Route::Contact, &presets.hero, html! {}))
        (reveal_section(ctx, "contact-main", html! {
            div.two-column {
                (revealed(&presets.slide_left, "panel form-panel", html! {
                    h2 { "Send us a Message" }
                    (render_contact_form(ctx))
                }))
                (revealed(&presets.slide_right, "contact-info", html! {
                    h2 { "Get in Touch" }
                    div.info-item {
                        h3 { "Phone" }
                        a href={ "tel:" (company.phone.replace(' ', "")) } { (company.phone) }
                    }
                    div.info-item {
                        h3 { "Email" }
                        a href={ "mailto:" (company.email) } { (company.email) }
                    }
                    div.info-item {
                        h3 { "Location" }
                        p { (company.address) }
                    }
                    div.business-hours {
                        h3 { "Business Hours" }
                        dl {
                            @for slot in registry.business_hours {
                                dt { (slot.days) }
                                dd { (slot.hours) }
                            }
                        }
                    }
                }))
            }
        }))
        (reveal_section(ctx, "map surface", html! {
            (section_heading(ctx, "Find Us", Some("Visit our office in Hyderabad")))
            (revealed(&presets.zoom, "map-placeholder", html! {
                h3 { "Interactive Map" }
                p { "📍 " (company.address) }
            }))
        }))
        (reveal_section(ctx, "faq", html! {
            (section_heading(
                ctx,
                "Frequently Asked Questions",
                Some("Quick answers to common questions about our products and services"),
            ))
            (card_grid(ctx, registry.faqs, &presets.item, presets.stagger_ms, "faq-grid", |faq| html! {
                h3 { (faq.question) }
                p { (faq.answer) }
            }))
        }))
    }
}

/// The contact form. Submission is simulated by `static/site.js` using the
/// timing in the `data-*` attributes.
fn render_contact_form(ctx: &PageContext) -> Markup {
    let timing = ctx.config.contact.timing();
    html! {
        form.contact-form id="contact-form" novalidate
            data-latency-ms=(timing.latency_ms)
            data-success-ms=(timing.success_display_ms) {
            div.form-row {
                @for field in Field::ALL {
                    div class={ "field field-" (field.key()) } data-field=(field.key()) {
                        label for=(field.key()) {
                            (field.label())
                            @if field.is_required() { " *" }
                        }
                        @match field.input_type() {
                            Some(input_type) => {
                                input type=(input_type) id=(field.key()) name=(field.key())
                                    placeholder=(field.placeholder())
                                    required[field.is_required()];
                            }
                            None => {
                                textarea id=(field.key()) name=(field.key()) rows="6"
                                    placeholder=(field.placeholder())
                                    required[field.is_required()] {}
                            }
                        }
                        p.field-error hidden {}
                    }
                }
            }
            button.button.submit type="submit" {
                span.submit-label { "Send Message" }
            }
            p.form-success role="status" hidden {
                "Thank you for your message! We'll get back to you soon."
            }
        }
    }
}
