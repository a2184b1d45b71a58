//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! The remote origins icons are requested from.

use serde_derive::Deserialize;

/// Content delivery location hosting the curated tech-stack icons.
pub const PRIMARY_BASE: &str = "https://techstackicons.com/images/tech-stack-icons";

/// Simple Icons CDN; serves a monochrome svg for a slug.
pub const FALLBACK_BASE: &str = "https://cdn.simpleicons.org";

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Sources {
    primary: String,
    fallback: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            primary: String::from(PRIMARY_BASE),
            fallback: String::from(FALLBACK_BASE),
        }
    }
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base url for the primary source.
    pub fn primary(mut self, base: &str) -> Self {
        self.primary = base.to_string();
        self
    }

    /// Sets the base url for the fallback source.
    pub fn fallback(mut self, base: &str) -> Self {
        self.fallback = base.to_string();
        self
    }

    /// Composes the url to request `filename` from the primary source.
    pub fn primary_url(&self, filename: &str) -> String {
        Self::join(&self.primary, filename)
    }

    /// Composes the url to request the icon `slug` from the fallback source.
    ///
    /// The slug is requested as-is; the registry responds with svg content
    /// without needing a file extension.
    pub fn fallback_url(&self, slug: &str) -> String {
        Self::join(&self.fallback, slug)
    }

    fn join(base: &str, name: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_urls() {
        let s = Sources::new();
        assert_eq!(
            s.primary_url("rust.svg"),
            "https://techstackicons.com/images/tech-stack-icons/rust.svg"
        );
        assert_eq!(s.fallback_url("rust"), "https://cdn.simpleicons.org/rust");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let s = Sources::new()
            .primary("http://localhost:8080/icons/")
            .fallback("http://localhost:8081");
        assert_eq!(s.primary_url("go.svg"), "http://localhost:8080/icons/go.svg");
        assert_eq!(s.fallback_url("go"), "http://localhost:8081/go");
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let s: Sources = toml::from_str("fallback = \"https://icons.example.org\"").unwrap();
        assert_eq!(s, Sources::new().fallback("https://icons.example.org"));
    }
}
