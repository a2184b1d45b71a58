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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    // transfer errors
    #[error("request to {0:?} finished with status {1}")]
    BadStatus(String, u32),
    #[error("request to {0:?} failed: {1}")]
    Transport(String, LastError),
    #[error("request to {0:?} exceeded the limit of {1} redirects")]
    TooManyRedirects(String, usize),
    #[error("request to {0:?} redirected to an invalid location: {1}")]
    BadRedirect(String, LastError),
    // file system errors
    #[error("failed to create output directory {0:?}: {1}")]
    CreateDir(PathBuf, LastError),
    #[error("failed to write file {0:?}: {1}")]
    WriteFile(PathBuf, LastError),
    // catalog errors
    #[error("failed to read catalog file {0:?}: {1}")]
    CatalogUnreadable(PathBuf, LastError),
    #[error("catalog file {0:?} is invalid: {1}{2}")]
    CatalogInvalid(PathBuf, LastError, Hint),
    #[error("catalog file {0:?} has an invalid icon key {1:?}: keys must be non-empty and cannot contain path separators")]
    InvalidIconKey(PathBuf, String),
}

impl Error {
    /// Checks if the error occurred while requesting data from a remote source.
    pub fn is_transfer(&self) -> bool {
        match self {
            Self::BadStatus(..)
            | Self::Transport(..)
            | Self::TooManyRedirects(..)
            | Self::BadRedirect(..) => true,
            _ => false,
        }
    }

    /// Checks if the error occurred while touching the local file system.
    pub fn is_file_system(&self) -> bool {
        match self {
            Self::CreateDir(..) | Self::WriteFile(..) | Self::CatalogUnreadable(..) => true,
            _ => false,
        }
    }

    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

/// The message of an underlying error, formatted to continue a sentence.
#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    CatalogFormat,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::CatalogFormat => {
                "each icon is an [[icon]] table with a \"key\" and optional \"theme\" and \"simple-icons\" fields"
            }
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("Could not resolve host")),
            String::from("could not resolve host")
        );
        // acronyms keep their casing
        assert_eq!(
            Error::lowerize(String::from("SSL connect error")),
            String::from("SSL connect error")
        );
        assert_eq!(Error::lowerize(String::new()), String::new());
    }

    #[test]
    fn taxonomy() {
        assert_eq!(
            Error::BadStatus(String::from("https://a.io/x.svg"), 404).is_transfer(),
            true
        );
        assert_eq!(
            Error::TooManyRedirects(String::from("https://a.io/x.svg"), 5).is_transfer(),
            true
        );
        let e = Error::WriteFile(PathBuf::from("x.svg"), LastError(String::from("Denied")));
        assert_eq!(e.is_transfer(), false);
        assert_eq!(e.is_file_system(), true);
    }

    #[test]
    fn display_status() {
        let e = Error::BadStatus(String::from("https://a.io/x.svg"), 404);
        assert_eq!(
            e.to_string(),
            "request to \"https://a.io/x.svg\" finished with status 404"
        );
    }
}
