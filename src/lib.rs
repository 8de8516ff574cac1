//! # Sackhe Site
//!
//! Static generator for the Sackhe Technologies brochure site: six pages
//! (Home, About, Products, Services, Initiatives, Contact) rendered from a
//! compiled-in content registry, plus the deterministic state machines that
//! drive the site's motion and its simulated contact form.
//!
//! # Architecture: Registry, Machines, Generator
//!
//! ```text
//! content::registry()  ─┐
//!                       ├─► generate  ─►  dist/ (HTML, CSS, JS, assets)
//! config.toml ─► config ┘       │
//!                               └── reveal / transition / contact timings
//!                                   rendered as data-* and --reveal-* values
//! ```
//!
//! The state machines ([`reveal`], [`transition`], [`contact`]) are pure:
//! they take the current time as a parameter and own no clocks or threads.
//! Pending timers live in a [`timeline::Timeline`] that the caller advances.
//! [`session::Session`] ties them together into one simulated visit, which is
//! how the test suite drives navigation, reveals and form submissions without
//! a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Immutable site copy: company profile, navigation, products, services, initiatives, cards |
//! | [`reveal`] | Scroll/mount reveal animator: hidden → revealing → visible, with stagger groups |
//! | [`transition`] | Page transition wrapper: enter/exit phases keyed by route, sync or wait mode |
//! | [`contact`] | Contact form submission simulator: validation, idle → pending → success → idle |
//! | [`timeline`] | Cancellable one-shot timers over caller-supplied time |
//! | [`session`] | One visit: navigator plus the contact form of the contact page instance |
//! | [`generate`] | Renders the pages with Maud and writes the site |
//! | [`config`] | `config.toml` loading, validation, merging and CSS generation |
//! | [`types`] | [`types::Route`], shared by every module |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Time Is a Parameter
//!
//! Every operation that depends on time takes `now` in milliseconds. Nothing
//! reads a wall clock, so an animation frame or a form's success window is a
//! plain function of its inputs and every edge case is unit-testable.
//!
//! ## The Browser Only Flips Classes
//!
//! Durations, delays, distances and easings are computed in Rust from the
//! resolved config and rendered into the markup. `static/site.js` observes
//! viewport entry and toggles `is-revealed` / `is-entering` / `is-exiting`;
//! `static/style.css` turns the rendered custom properties into transitions.
//! Changing an animation means changing `config.toml`, never the script.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and all interpolation is auto-escaped.
//!
//! ## Nothing Leaves the Browser
//!
//! The contact form is a simulation. Submissions go to a [`contact::Relay`];
//! the only implementation is [`contact::SimulatedRelay`], which accepts
//! everything after a fixed latency.

pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod output;
pub mod reveal;
pub mod session;
pub mod timeline;
pub mod transition;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
