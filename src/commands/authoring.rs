//! Options shared by every command that authors a timeline for a component.

use crate::core::component::LoadedComponent;
use crate::core::context::Context;
use crate::core::timeline::{Drive, Flip, TimelineFile, Toggle};
use crate::core::timing::PartialTiming;
use crate::core::workflow::Session;
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;

use cliproc::{cli, stage::Memory, Arg, Cli};
use colored::Colorize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, PartialEq)]
pub struct Authoring {
    timing: PartialTiming,
    timeline: Option<PathBuf>,
    drives: Vec<Drive>,
    toggles: Vec<Flip>,
}

impl Authoring {
    /// Collects the timing and stimulus options from the command line.
    pub fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        Ok(Authoring {
            timing: PartialTiming {
                high_time: cli.get(Arg::option("high-time").value("ns"))?,
                low_time: cli.get(Arg::option("low-time").value("ns"))?,
                test_length: cli.get(Arg::option("test-length").value("ns"))?,
                segment_duration: cli.get(Arg::option("segment-duration").value("ns"))?,
            },
            timeline: cli.get(Arg::option("timeline").value("file"))?,
            drives: cli
                .get_all(Arg::option("drive").value("port@seg[=value]"))?
                .unwrap_or(Vec::new()),
            toggles: cli
                .get_all(Arg::option("toggle").value("port@seg"))?
                .unwrap_or(Vec::new()),
        })
    }

    /// Loads the component at `file` (or the workspace default) and authors its
    /// timeline from the timeline file, then each drive, then each toggle.
    pub fn session(&self, c: &Context, file: Option<&PathBuf>) -> Result<Session, Fault> {
        let component = LoadedComponent::load(&c.component_path(file)?)?;
        report(&component);

        let timing = c.timing(&self.timing)?;
        let mut session = Session::new(component, &timing);
        if let Some(path) = &self.timeline {
            let invalid = |e: String| Error::TimelineFileInvalid(path.clone(), LastError(e));
            let text = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
            let tf = TimelineFile::from_str(&text).map_err(|e| invalid(e.to_string()))?;
            session.timeline_mut().apply_file(&tf)?;
        }
        for drive in &self.drives {
            session.timeline_mut().apply_drive(drive)?;
        }
        for flip in &self.toggles {
            if session.timeline_mut().apply_flip(flip)? == Toggle::ValueRequired {
                println!(
                    "note: vector port \"{}\" needs a value; use --drive to set the segment",
                    flip.port()
                );
            }
        }
        Ok(session)
    }
}

/// Prints a warning for every port fragment skipped while reading `component`.
pub fn report(component: &LoadedComponent) {
    for d in component.diagnostics() {
        println!("{} {}", "warning:".yellow(), d);
    }
}
