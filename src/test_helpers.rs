//! Shared test utilities for the generator tests.
//!
//! Provides a throwaway site source, a one-call build into a temp directory
//! and lookups into the written pages.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = build_site(&SiteConfig::default());
//! let home = read_page(&site, Route::Home);
//! assert_eq!(count(&home, "data-reveal=\"mount\""), 1);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::generate::{generate, BuildReport};
use crate::types::Route;

// =========================================================================
// Fixture setup
// =========================================================================

/// A source directory with a nested `assets/` tree and no `config.toml`.
pub fn setup_source() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("assets/img")).unwrap();
    fs::write(tmp.path().join("assets/logo.svg"), "<svg/>").unwrap();
    fs::write(tmp.path().join("assets/img/hero.jpg"), "jpg").unwrap();
    tmp
}

/// A finished build. Both temp directories live as long as this value.
pub struct BuiltSite {
    pub source: TempDir,
    pub output: TempDir,
    pub report: BuildReport,
}

impl BuiltSite {
    pub fn out(&self) -> &Path {
        self.output.path()
    }
}

/// Build the site from an empty source directory.
pub fn build_empty(config: &SiteConfig) -> BuiltSite {
    build_from(TempDir::new().unwrap(), config)
}

/// Build the site from [`setup_source`].
pub fn build_site(config: &SiteConfig) -> BuiltSite {
    build_from(setup_source(), config)
}

fn build_from(source: TempDir, config: &SiteConfig) -> BuiltSite {
    let output = TempDir::new().unwrap();
    let report = generate(source.path(), output.path(), config).unwrap();
    BuiltSite {
        source,
        output,
        report,
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Read the written HTML for a route.
pub fn read_page(site: &BuiltSite, route: Route) -> String {
    let path = site.out().join(route.output_file());
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

/// Read any written file, relative to the output directory.
pub fn read_output(site: &BuiltSite, relative: &str) -> String {
    fs::read_to_string(site.out().join(relative)).unwrap()
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert that `needles` appear in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("{needle:?} missing or out of order"),
        }
    }
}
