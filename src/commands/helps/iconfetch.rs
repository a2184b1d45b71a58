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

pub const HELP: &str = r#"Fetch and cache the tech-stack svg icons for the portfolio site.

Usage:
    iconfetch [options]

Options:
    --out <dir>         directory to store icons (default: public/images/tech-stack-icons)
    --catalog <file>    read the icons to fetch from a toml file
    --list              print the files the catalog resolves to and exit
    --verbose           log every request and redirect
    --color <when>      coloring: auto, always, never
    --version           print version information and exit
    --help, -h          print help information

Icons already present in the output directory are never downloaded again.
"#;
