//! Shared types used by the content registry, the state machines and the
//! generator.

use serde::Serialize;
use std::fmt;

/// One of the six pages of the site.
///
/// Each route maps to exactly one page and one output file. There is no
/// catch-all: [`Route::from_path`] returns `None` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    About,
    Products,
    Services,
    Initiatives,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Products,
        Route::Services,
        Route::Initiatives,
        Route::Contact,
    ];

    /// URL path, e.g. `/about`.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Products => "/products",
            Route::Services => "/services",
            Route::Initiatives => "/initiatives",
            Route::Contact => "/contact",
        }
    }

    /// Parse a URL path. A single trailing slash is accepted (`/about/`).
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Short identifier used in CSS classes and the manifest.
    pub fn slug(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Products => "products",
            Route::Services => "services",
            Route::Initiatives => "initiatives",
            Route::Contact => "contact",
        }
    }

    /// Output file relative to the site root. Routes other than home get a
    /// directory with an `index.html` so `/about` resolves on any static host.
    pub fn output_file(self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            r => format!("{}/index.html", r.slug()),
        }
    }

    /// Link target as written into the generated HTML.
    pub fn href(self) -> String {
        match self {
            Route::Home => "/".to_string(),
            r => format!("{}/", r.path()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
