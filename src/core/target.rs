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

//! A target is a single file on disk that a catalog entry resolves to.

use std::path::{Path, PathBuf};

pub const FILE_EXT: &str = "svg";

/// The rendition of an icon stored in a target file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Variant {
    Plain,
    Light,
    Dark,
}

impl Variant {
    /// The text inserted between the icon's key and its file extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Light => "-light",
            Self::Dark => "-dark",
        }
    }

    /// Checks if the variant belongs to a themed icon.
    pub fn is_themed(&self) -> bool {
        self != &Self::Plain
    }

    /// Composes the file name for the icon `key` in this variant.
    pub fn filename(&self, key: &str) -> String {
        format!("{}{}.{}", key, self.suffix(), FILE_EXT)
    }
}

/// A file to be produced under the output directory.
#[derive(Debug, PartialEq, Clone)]
pub struct Target {
    filename: String,
    path: PathBuf,
}

impl Target {
    pub fn new(out_dir: &Path, key: &str, variant: Variant) -> Self {
        let filename = variant.filename(key);
        Self {
            path: out_dir.join(&filename),
            filename,
        }
    }

    pub fn get_filename(&self) -> &str {
        &self.filename
    }

    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    /// Checks if the target was already downloaded.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
