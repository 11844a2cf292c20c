use std::path::PathBuf;

use super::authoring::Authoring;
use crate::commands::helps::show;
use crate::core::context::Context;
use crate::core::timeline::{Timeline, TimelineError};
#[cfg(test)]
use crate::core::timeline::{Drive, Flip};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Show {
    segments: bool,
    authoring: Authoring,
    file: Option<PathBuf>,
}

impl Subcommand<Context> for Show {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(show::HELP))?;
        Ok(Show {
            segments: cli.check(Arg::flag("segments"))?,
            authoring: Authoring::interpret(cli)?,
            file: cli.get(Arg::positional("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let session = self.authoring.session(c, self.file.as_ref())?;
        match self.segments {
            true => print!("{}", list_segments(session.timeline())?),
            false => print!("{}", session.timeline().draw()),
        }
        Ok(())
    }
}

/// Lists the active segments of every input, with the value stored for each
/// segment of a vector.
fn list_segments(timeline: &Timeline) -> Result<String, TimelineError> {
    let mut result = String::new();
    for track in timeline.tracks() {
        let values = timeline.segment_values(track.port())?;
        let active: Vec<String> = timeline
            .active_segments(track.port())?
            .iter()
            .map(|seg| match values.get(seg) {
                Some(v) => format!("{}={}", seg, v),
                None => seg.to_string(),
            })
            .collect();
        result.push_str(&format!("{}: {}\n", track.port(), active.join(" ")));
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::component::LoadedComponent;
    use crate::core::timing::TimingConfig;
    use std::str::FromStr;

    #[test]
    fn lists_active_segments() {
        let c = LoadedComponent::from_source(
            PathBuf::from("/work/dut.vhd"),
            "entity dut is port (EN : in bit; D : in std_logic_vector(1 downto 0)); end;",
        )
        .unwrap();
        let mut t = Timeline::new(&c, &TimingConfig::new(10, 10, 80, 20).unwrap());
        t.apply_flip(&Flip::from_str("EN@3").unwrap()).unwrap();
        t.apply_flip(&Flip::from_str("EN@0ns").unwrap()).unwrap();
        t.apply_drive(&Drive::from_str("D@2=10").unwrap()).unwrap();
        assert_eq!(list_segments(&t).unwrap(), "EN: 0 3\nD: 2=10\n");
    }
}
