use std::path::PathBuf;

use super::authoring::Authoring;
use crate::commands::helps::gen;
use crate::core::context::Context;
use crate::core::testbench;
use crate::core::workflow;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Gen {
    stdout: bool,
    authoring: Authoring,
    file: Option<PathBuf>,
}

impl Subcommand<Context> for Gen {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(gen::HELP))?;
        Ok(Gen {
            // flags
            stdout: cli.check(Arg::flag("stdout"))?,
            // options
            authoring: Authoring::interpret(cli)?,
            // positionals
            file: cli.get(Arg::positional("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let session = self.authoring.session(c, self.file.as_ref())?;
        match self.stdout {
            true => print!(
                "{}",
                testbench::render(session.component(), session.timeline())
            ),
            false => {
                let path = workflow::generate(Some(&session))?;
                println!("info: wrote testbench {:?}", path);
            }
        }
        Ok(())
    }
}
