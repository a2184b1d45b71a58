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

//! The catalog is the ordered list of icons a run is responsible for.

use crate::core::source::Sources;
use crate::core::target::Variant;
use crate::error::{Error, Hint, LastError};
use serde_derive::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

/// (key, has theme, simple icons slug)
const BUILTIN: &[(&str, bool, Option<&str>)] = &[
    ("typescript", false, Some("typescript")),
    ("javascript", false, Some("javascript")),
    ("react", false, Some("react")),
    ("nextjs", true, Some("nextdotjs")),
    ("nodejs", false, Some("nodedotjs")),
    ("rust", false, Some("rust")),
    ("python", false, Some("python")),
    ("go", false, Some("go")),
    ("tailwindcss", false, Some("tailwindcss")),
    ("graphql", false, Some("graphql")),
    ("postgresql", false, Some("postgresql")),
    ("redis", false, Some("redis")),
    ("prisma", true, Some("prisma")),
    ("docker", false, Some("docker")),
    ("kubernetes", false, Some("kubernetes")),
    ("aws", true, None),
    ("vercel", true, Some("vercel")),
    ("github", true, Some("github")),
    ("git", false, Some("git")),
    ("linux", false, Some("linux")),
    ("figma", false, Some("figma")),
    ("vscode", false, None),
];

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    key: String,
    #[serde(rename = "theme", default)]
    has_theme: bool,
    #[serde(rename = "simple-icons")]
    simple_icons_slug: Option<String>,
}

impl CatalogEntry {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            has_theme: false,
            simple_icons_slug: None,
        }
    }

    /// Requires separate light and dark files for the icon.
    pub fn themed(mut self) -> Self {
        self.has_theme = true;
        self
    }

    /// Sets the identifier to request from the fallback registry.
    pub fn slug(mut self, s: &str) -> Self {
        self.simple_icons_slug = Some(s.to_string());
        self
    }

    /// Checks the key can name a file directly inside the output directory.
    pub fn has_valid_key(&self) -> bool {
        self.key.is_empty() == false && self.key.contains(|c: char| c == '/' || c == '\\') == false
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn has_theme(&self) -> bool {
        self.has_theme
    }

    pub fn get_slug(&self) -> Option<&str> {
        self.simple_icons_slug.as_deref()
    }

    /// Lists the variants to produce, in the order they are fetched.
    pub fn variants(&self) -> &'static [Variant] {
        match self.has_theme {
            true => &[Variant::Light, Variant::Dark],
            false => &[Variant::Plain],
        }
    }

    /// Lists the file names this entry resolves to.
    pub fn filenames(&self) -> Vec<String> {
        self.variants()
            .iter()
            .map(|v| v.filename(&self.key))
            .collect()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Catalog(Vec<CatalogEntry>);

impl Catalog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The icons required by the portfolio site.
    pub fn builtin() -> Self {
        Self(
            BUILTIN
                .iter()
                .map(|(key, theme, slug)| {
                    let entry = CatalogEntry::new(key);
                    let entry = match theme {
                        true => entry.themed(),
                        false => entry,
                    };
                    match slug {
                        Some(s) => entry.slug(s),
                        None => entry,
                    }
                })
                .collect(),
        )
    }

    pub fn add(mut self, entry: CatalogEntry) -> Self {
        self.0.push(entry);
        self
    }

    pub fn inner(&self) -> &Vec<CatalogEntry> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the keys that appear more than once, in order of their
    /// second appearance.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for e in &self.0 {
            if seen.insert(e.key.as_str()) == false && dupes.contains(&e.key.as_str()) == false {
                dupes.push(e.key.as_str());
            }
        }
        dupes
    }
}

/// A user-provided catalog, optionally overriding the remote sources.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    source: Option<Sources>,
    #[serde(default)]
    icon: Vec<CatalogEntry>,
}

impl FromStr for CatalogFile {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl CatalogFile {
    /// Reads and parses the catalog file at `path`.
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::CatalogUnreadable(path.clone(), LastError(e.to_string())))?;
        let file = Self::from_str(&contents).map_err(|e| {
            Error::CatalogInvalid(path.clone(), LastError(e.to_string()), Hint::CatalogFormat)
        })?;
        // keys become file names under the output directory
        match file.icon.iter().find(|e| e.has_valid_key() == false) {
            Some(e) => Err(Error::InvalidIconKey(path.clone(), e.key.clone())),
            None => Ok(file),
        }
    }

    /// Splits the file into its catalog and the sources to use, falling back
    /// to `default` when the file does not define a `[source]` table.
    pub fn into_parts(self, default: Sources) -> (Catalog, Sources) {
        (Catalog(self.icon), self.source.unwrap_or(default))
    }
}
