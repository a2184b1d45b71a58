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

//! Resolves every catalog entry to files on disk, one request at a time.

use crate::core::catalog::{Catalog, CatalogEntry};
use crate::core::source::Sources;
use crate::core::target::{Target, Variant};
use crate::core::transport::{self, Transport};
use crate::error::Error;
use crate::util::filesystem;
use colored::{ColoredString, Colorize};
use log::debug;
use std::fmt::Display;
use std::path::PathBuf;

/// How a single target file was obtained.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Outcome {
    /// The file was already on disk; no request was made.
    Exists,
    Primary,
    Fallback,
    NotFound,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self != &Self::NotFound
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Primary => "cdn",
            Self::Fallback => "simpleicons",
            Self::NotFound => "not found",
        }
    }

    fn symbol(&self) -> ColoredString {
        match self.is_success() {
            true => "✓".green(),
            false => "✗".red(),
        }
    }
}

/// The progress line for one target file.
#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    filename: String,
    outcome: Outcome,
}

impl Report {
    pub fn get_filename(&self) -> &str {
        &self.filename
    }

    pub fn get_outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.outcome.symbol(),
            self.filename,
            self.outcome.label()
        )
    }
}

/// Number of catalog entries (not files) that were or were not obtained.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Summary {
    succeeded: usize,
    failed: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    fn tally(&mut self, success: bool) {
        match success {
            true => self.succeeded += 1,
            false => self.failed += 1,
        }
    }

    pub fn get_succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn get_failed(&self) -> usize {
        self.failed
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} succeeded, {} failed", self.succeeded, self.failed)
    }
}

pub struct Fetcher<T: Transport> {
    sources: Sources,
    out_dir: PathBuf,
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(sources: Sources, out_dir: PathBuf, transport: T) -> Self {
        Self {
            sources,
            out_dir,
            transport,
        }
    }

    pub fn get_transport(&self) -> &T {
        &self.transport
    }

    /// Downloads every missing file required by `catalog`.
    ///
    /// Entries are processed in order and `notify` is called once per target
    /// file as soon as it is resolved. A themed entry only counts as a success
    /// when both of its variants are obtained.
    ///
    /// Errors only when the output directory cannot be created; failures of
    /// individual files are reported through `notify` and the summary.
    pub fn run<F>(&mut self, catalog: &Catalog, mut notify: F) -> Result<Summary, Error>
    where
        F: FnMut(&Report),
    {
        filesystem::ensure_dir(&self.out_dir)?;

        let mut summary = Summary::new();
        for entry in catalog.inner() {
            let mut complete = true;
            for variant in entry.variants() {
                let report = self.resolve(entry, *variant);
                complete = complete && report.is_success();
                notify(&report);
            }
            summary.tally(complete);
        }
        Ok(summary)
    }

    /// Makes sure the file for `entry` in the given `variant` is on disk.
    pub fn resolve(&mut self, entry: &CatalogEntry, variant: Variant) -> Report {
        let target = Target::new(&self.out_dir, entry.get_key(), variant);
        let outcome = self.obtain(entry, variant, &target);
        Report {
            filename: target.get_filename().to_string(),
            outcome,
        }
    }

    fn obtain(&mut self, entry: &CatalogEntry, variant: Variant, target: &Target) -> Outcome {
        if target.exists() == true {
            return Outcome::Exists;
        }

        let url = self.sources.primary_url(target.get_filename());
        match self.download(&url, target) {
            Ok(()) => return Outcome::Primary,
            Err(e) => debug!("primary source failed for {}: {}", target.get_filename(), e),
        }

        // themed variants have no counterpart in the fallback registry
        let slug = match (variant.is_themed(), entry.get_slug()) {
            (false, Some(slug)) => slug,
            _ => return Outcome::NotFound,
        };
        let url = self.sources.fallback_url(slug);
        match self.download(&url, target) {
            Ok(()) => Outcome::Fallback,
            Err(e) => {
                debug!("fallback source failed for {}: {}", target.get_filename(), e);
                Outcome::NotFound
            }
        }
    }

    fn download(&mut self, url: &str, target: &Target) -> Result<(), Error> {
        let bytes = transport::fetch(&mut self.transport, url)?;
        filesystem::write_new_file(target.get_path(), &bytes)?;
        debug!("wrote {} bytes to {:?}", bytes.len(), target.get_path());
        Ok(())
    }
}
