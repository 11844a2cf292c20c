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

use std::path::PathBuf;

use super::authoring;
use crate::commands::helps::read;
use crate::core::component::LoadedComponent;
use crate::core::context::Context;
use crate::core::lang::vhdl::interface::{self, Port};
use crate::util::anyerror::Fault;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Read {
    json: bool,
    file: Option<PathBuf>,
}

impl Subcommand<Context> for Read {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(read::HELP))?;
        Ok(Read {
            // flags
            json: cli.check(Arg::flag("json"))?,
            // positionals
            file: cli.get(Arg::positional("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let component = LoadedComponent::load(&c.component_path(self.file.as_ref())?)?;
        self.run(&component)
    }
}

impl Read {
    fn run(&self, component: &LoadedComponent) -> Result<(), Fault> {
        match self.json {
            true => println!("{}", serde_json::to_string_pretty(component)?),
            false => {
                authoring::report(component);
                print!("{}", Self::summarize(component));
            }
        }
        Ok(())
    }

    /// Lists the entity, its ports, and the components it depends on.
    fn summarize(component: &LoadedComponent) -> String {
        let ports: Vec<&Port> = component
            .clock()
            .into_iter()
            .chain(component.inputs().iter())
            .chain(component.outputs().iter())
            .collect();
        let offset = interface::longest_identifier(ports.iter().map(|p| *p));

        let mut result = String::new();
        result.push_str(&format!("entity: {}\n", component.entity().name()));
        result.push_str(&format!("testbench: {}\n", component.entity().testbench()));
        if let Some(clk) = component.clock() {
            result.push_str(&format!("clock: {}\n", clk.name()));
        }
        let mut section = |title: &str, items: Vec<String>| {
            result.push_str(&format!("{}:\n", title));
            items
                .iter()
                .for_each(|i| result.push_str(&format!("    {}\n", i)));
        };
        section(
            "ports",
            ports.iter().map(|p| p.into_interface_string(offset)).collect(),
        );
        section(
            "dependencies",
            component
                .dependencies()
                .iter()
                .map(|d| d.to_string())
                .collect(),
        );
        result
    }
}
