//! Sequences testbench generation and simulation, stopping at the first failure.

use crate::core::component::LoadedComponent;
use crate::core::testbench;
use crate::core::timeline::Timeline;
use crate::core::timing::TimingConfig;
use crate::core::toolchain::{Simulator, Viewer};
use crate::error::{Error, Hint, LastError};
use crate::util::anyerror::Fault;
use std::path::{Path, PathBuf};

/// A loaded component together with the timeline authored for it.
#[derive(Debug, PartialEq, Clone)]
pub struct Session {
    component: LoadedComponent,
    timeline: Timeline,
}

impl Session {
    /// Starts a session with an empty timeline for the `component`.
    pub fn new(component: LoadedComponent, timing: &TimingConfig) -> Self {
        let timeline = Timeline::new(&component, timing);
        Self {
            component: component,
            timeline: timeline,
        }
    }

    pub fn component(&self) -> &LoadedComponent {
        &self.component
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }
}

/// Files produced by a successful run.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub testbench: PathBuf,
    pub wave: PathBuf,
    /// Set when the waveform could not be opened in a viewer.
    pub viewer_note: Option<String>,
}

/// Renders the testbench for the `session` and writes it next to the component.
///
/// Returns the path of the written testbench.
pub fn generate(session: Option<&Session>) -> Result<PathBuf, Fault> {
    let session = session.ok_or(Error::NoComponentLoaded)?;
    let component = session.component();
    if component.source().is_file() == false {
        return Err(Error::FileMissing(component.source().clone()))?;
    }
    let tb_path = component
        .testbench_path()
        .ok_or_else(|| Error::NoTestbenchPath(component.source().clone()))?;
    let text = testbench::render(component, session.timeline());
    std::fs::write(&tb_path, text)
        .map_err(|e| Error::TestbenchNotWritten(tb_path.clone(), LastError(e.to_string())))?;
    Ok(tb_path)
}

/// Writes the testbench, then analyzes, elaborates, and simulates it before
/// opening the waveform in the `viewer`.
///
/// Every external program runs from the component's directory. Component
/// dependencies are analyzed first, in the order they were declared.
pub fn run(
    simulator: Option<&dyn Simulator>,
    viewer: Option<&dyn Viewer>,
    session: Option<&Session>,
) -> Result<Outcome, Fault> {
    let simulator = simulator.ok_or(Error::ToolchainMissing(Hint::InstallGhdl))?;
    let tb_path = generate(session)?;
    let session = session.ok_or(Error::NoComponentLoaded)?;
    let component = session.component();

    let cwd = component
        .directory()
        .ok_or_else(|| Error::NoTestbenchPath(component.source().clone()))?;
    let wave = component
        .wave_path()
        .ok_or_else(|| Error::NoTestbenchPath(component.source().clone()))?;
    let dependencies = component.dependency_paths().unwrap_or_default();

    for dep in &dependencies {
        step("analyze", dep, simulator.analyze(dep, cwd))?;
    }
    step(
        "analyze",
        component.source(),
        simulator.analyze(component.source(), cwd),
    )?;
    step("analyze", &tb_path, simulator.analyze(&tb_path, cwd))?;
    let unit = component.entity().testbench();
    step("elaborate", &tb_path, simulator.elaborate(unit, cwd))?;
    step("simulate", &tb_path, simulator.simulate(unit, &wave, cwd))?;

    let viewer_note = match viewer {
        Some(v) => match v.launch(&wave, cwd) {
            Ok(()) => None,
            Err(e) => Some(format!(
                "could not launch the waveform viewer ({}); open {:?} manually",
                LastError(e.to_string()),
                wave
            )),
        },
        None => None,
    };
    Ok(Outcome {
        testbench: tb_path,
        wave: wave,
        viewer_note: viewer_note,
    })
}

/// Attaches the failing step and its file to an external program's error.
fn step(action: &str, path: &Path, result: Result<(), Fault>) -> Result<(), Fault> {
    result.map_err(|e| {
        Error::ExternalProcess(action.to_string(), path.to_path_buf(), LastError(e.to_string()))
            .into()
    })
}
