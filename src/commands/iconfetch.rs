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

use crate::commands::helps::iconfetch;
use crate::core::catalog::{Catalog, CatalogFile};
use crate::core::fetcher::{Fetcher, Summary};
use crate::core::source::Sources;
use crate::core::transport::CurlTransport;
use crate::util::anyerror::AnyError;
use crate::util::filesystem;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help};

/// Default location of the icons, relative to the working directory.
pub const OUTPUT_DIR: &str = "public/images/tech-stack-icons";

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub struct IconFetch {
    version: bool,
    list: bool,
    verbose: bool,
    color: Option<ColorMode>,
    out: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl Command for IconFetch {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(iconfetch::HELP))?;
        let command = Ok(IconFetch {
            // flags
            version: cli.check(Arg::flag("version"))?,
            list: cli.check(Arg::flag("list"))?,
            verbose: cli.check(Arg::flag("verbose"))?,
            // options
            color: cli.get(Arg::option("color").value("when"))?,
            out: cli.get(Arg::option("out").value("dir"))?,
            catalog: cli.get(Arg::option("catalog").value("file"))?,
        });
        command
    }

    fn execute(self) -> proc::Result {
        // need to set this coloring mode ASAP
        match self.color.unwrap_or(ColorMode::Auto) {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => (),
        }

        if self.version == true {
            println!("iconfetch {}", VERSION);
            return Ok(());
        }

        if self.verbose == true {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("debug"),
            )
            .try_init();
        }

        let cwd = std::env::current_dir()?;

        let (catalog, sources) = match &self.catalog {
            Some(path) => {
                CatalogFile::load(&filesystem::resolve_rel_path(&cwd, path))?
                    .into_parts(Sources::new())
            }
            None => (Catalog::builtin(), Sources::new()),
        };

        for key in catalog.duplicates() {
            println!(
                "{} icon {:?} is listed more than once in the catalog",
                "warning:".yellow(),
                key
            );
        }

        // only display the files the catalog resolves to
        if self.list == true {
            write_listing(&mut std::io::stdout(), &catalog)?;
            return Ok(());
        }

        let out_dir = filesystem::resolve_rel_path(
            &cwd,
            self.out
                .as_ref()
                .unwrap_or(&PathBuf::from(OUTPUT_DIR)),
        );
        self.run(catalog, sources, out_dir)
    }
}

impl IconFetch {
    fn run(&self, catalog: Catalog, sources: Sources, out_dir: PathBuf) -> proc::Result {
        println!(
            "info: fetching {} icons into {}",
            catalog.len(),
            out_dir.display()
        );

        let mut fetcher = Fetcher::new(sources, out_dir, CurlTransport::new()?);
        let summary = fetcher.run(&catalog, |report| println!("{}", report))?;

        write_summary(&mut std::io::stdout(), &catalog, &summary)?;
        Ok(())
    }
}

/// Writes every file name the catalog resolves to, one per line.
fn write_listing<W: Write>(w: &mut W, catalog: &Catalog) -> std::io::Result<()> {
    for filename in catalog.inner().iter().flat_map(|e| e.filenames()) {
        writeln!(w, "{}", filename)?;
    }
    Ok(())
}

/// Writes the closing summary line followed by the manual follow-up steps.
///
/// The follow-up steps are written regardless of how many icons failed.
fn write_summary<W: Write>(w: &mut W, catalog: &Catalog, summary: &Summary) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "info: finished {} icons: {}", catalog.len(), summary)?;
    writeln!(w, "{}", NEXT_STEPS)
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(AnyError(format!(
                "unknown coloring mode '{}'; expected auto, always, or never",
                s
            ))),
        }
    }
}

const NEXT_STEPS: &str = "\
Next steps:
    1. Review the icons in the output directory before committing them.
    2. Download any icon reported as not found by hand (the vendor's brand
       page or https://simpleicons.org) and save it under the same file name.
    3. Themed icons need both a <key>-light.svg and a <key>-dark.svg file.
    4. Re-run iconfetch; icons already on disk are never downloaded again.
";
