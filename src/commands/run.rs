use std::path::PathBuf;

use super::authoring::Authoring;
use crate::commands::helps::run;
use crate::core::context::Context;
use crate::core::toolchain::{Ghdl, GtkWave, Simulator, Viewer};
use crate::core::workflow;
use crate::error::{Error, Hint};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Run {
    no_view: bool,
    verbose: bool,
    ghdl: Option<PathBuf>,
    gtkwave: Option<PathBuf>,
    authoring: Authoring,
    file: Option<PathBuf>,
}

impl Subcommand<Context> for Run {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(run::HELP))?;
        Ok(Run {
            // Flags
            no_view: cli.check(Arg::flag("no-view"))?,
            verbose: cli.check(Arg::flag("verbose"))?,
            // Options
            ghdl: cli.get(Arg::option("ghdl").value("path"))?,
            gtkwave: cli.get(Arg::option("gtkwave").value("path"))?,
            authoring: Authoring::interpret(cli)?,
            // Positionals
            file: cli.get(Arg::positional("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        // the simulator must be known before anything is written
        let ghdl = match c.ghdl(self.ghdl.as_ref()) {
            Some(exe) => Ghdl::new(exe, self.verbose),
            None => return Err(Error::ToolchainMissing(Hint::InstallGhdl))?,
        };
        let viewer = match self.no_view {
            true => None,
            false => match c.gtkwave(self.gtkwave.as_ref()) {
                Some(exe) => Some(GtkWave::new(exe, self.verbose)),
                None => {
                    println!("note: no waveform viewer found; skipping the viewer");
                    None
                }
            },
        };
        let session = self.authoring.session(c, self.file.as_ref())?;

        let outcome = workflow::run(
            Some(&ghdl as &dyn Simulator),
            viewer.as_ref().map(|v| v as &dyn Viewer),
            Some(&session),
        )?;
        println!("info: wrote testbench {:?}", outcome.testbench);
        println!("info: wrote waveform {:?}", outcome.wave);
        if let Some(note) = outcome.viewer_note {
            println!("note: {}", note);
        }
        Ok(())
    }
}
