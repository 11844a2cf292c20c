//! Stimulus authored over discrete, fixed-width time segments.

use crate::core::component::LoadedComponent;
use crate::core::lang::vhdl::interface::Port;
use crate::core::lang::vhdl::token::Identifier;
use crate::core::timing::TimingConfig;
use serde_derive::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use thiserror::Error;

/// The segments authored for a single input port.
#[derive(Debug, PartialEq, Clone)]
pub struct Track {
    port: Identifier,
    single_bit: bool,
    active: BTreeSet<usize>,
    values: BTreeMap<usize, String>,
}

impl Track {
    fn new(port: &Port) -> Self {
        Self {
            port: port.name().clone(),
            single_bit: port.is_single_bit(),
            active: BTreeSet::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn port(&self) -> &Identifier {
        &self.port
    }

    pub fn is_single_bit(&self) -> bool {
        self.single_bit
    }

    pub fn is_active(&self, segment: usize) -> bool {
        self.active.contains(&segment)
    }

    /// References the literal stored for `segment`, if any.
    pub fn value(&self, segment: usize) -> Option<&String> {
        self.values.get(&segment)
    }
}

/// The result of toggling a segment.
#[derive(Debug, PartialEq)]
pub enum Toggle {
    Activated,
    Deactivated,
    /// The segment belongs to a vector port and stays inactive until a value is
    /// committed for it.
    ValueRequired,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Timeline {
    timing: TimingConfig,
    tracks: Vec<Track>,
}

impl Timeline {
    /// Creates an empty timeline with one track per input port of the `component`.
    pub fn new(component: &LoadedComponent, timing: &TimingConfig) -> Self {
        Self {
            timing: timing.clone(),
            tracks: component.inputs().iter().map(|p| Track::new(p)).collect(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.timing.segment_count()
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn tracks(&self) -> &Vec<Track> {
        &self.tracks
    }

    /// Maps a time offset (in nanoseconds) to the segment containing it.
    ///
    /// Returns `None` when the offset lies past the last whole segment.
    pub fn segment_at(&self, offset: u64) -> Option<usize> {
        let index = (offset / self.timing.segment_duration()) as usize;
        match index < self.segment_count() {
            true => Some(index),
            false => None,
        }
    }

    /// Flips the state of `segment` for `port`.
    ///
    /// Deactivating a segment drops its stored value. An inactive segment of a
    /// vector port is left untouched since it needs a value to become active.
    pub fn toggle(&mut self, port: &Identifier, segment: usize) -> Result<Toggle, TimelineError> {
        let track = self.track_mut(port, segment)?;
        if track.active.remove(&segment) == true {
            track.values.remove(&segment);
            Ok(Toggle::Deactivated)
        } else if track.single_bit == true {
            track.active.insert(segment);
            Ok(Toggle::Activated)
        } else {
            Ok(Toggle::ValueRequired)
        }
    }

    /// Activates `segment` of a vector `port` while storing its `value`.
    pub fn commit(
        &mut self,
        port: &Identifier,
        segment: usize,
        value: &str,
    ) -> Result<(), TimelineError> {
        let track = self.track_mut(port, segment)?;
        if track.single_bit == true {
            return Err(TimelineError::ValueOnSingleBit(port.to_string()));
        }
        if value.is_empty() || value.contains('"') {
            return Err(TimelineError::InvalidValue(value.to_string()));
        }
        track.active.insert(segment);
        track.values.insert(segment, value.to_string());
        Ok(())
    }

    /// Activates `segment` of a single-bit `port`, regardless of its current state.
    pub fn activate(&mut self, port: &Identifier, segment: usize) -> Result<(), TimelineError> {
        let track = self.track_mut(port, segment)?;
        if track.single_bit == false {
            return Err(TimelineError::MissingValue(port.to_string(), segment));
        }
        track.active.insert(segment);
        Ok(())
    }

    pub fn active_segments(&self, port: &Identifier) -> Result<&BTreeSet<usize>, TimelineError> {
        Ok(&self.track(port)?.active)
    }

    pub fn segment_values(
        &self,
        port: &Identifier,
    ) -> Result<&BTreeMap<usize, String>, TimelineError> {
        Ok(&self.track(port)?.values)
    }

    /// Applies every segment listed in a timeline file.
    pub fn apply_file(&mut self, file: &TimelineFile) -> Result<(), TimelineError> {
        for entry in &file.port {
            let port = parse_port(&entry.name)?;
            for seg in &entry.segments {
                self.apply(&port, seg.index, seg.value.as_deref())?;
            }
        }
        Ok(())
    }

    /// Applies a command-line drive.
    pub fn apply_drive(&mut self, drive: &Drive) -> Result<(), TimelineError> {
        let segment = self.resolve(&drive.slot)?;
        self.apply(&drive.port, segment, drive.value.as_deref())
    }

    /// Toggles the segment named by a command-line flip.
    pub fn apply_flip(&mut self, flip: &Flip) -> Result<Toggle, TimelineError> {
        let segment = self.resolve(&flip.slot)?;
        self.toggle(&flip.port, segment)
    }

    /// Finds the segment index addressed by `slot`.
    fn resolve(&self, slot: &Slot) -> Result<usize, TimelineError> {
        match slot {
            Slot::Index(i) => Ok(*i),
            Slot::Offset(ns) => self
                .segment_at(*ns)
                .ok_or(TimelineError::OffsetOutOfRange(*ns, self.segment_count())),
        }
    }

    fn apply(
        &mut self,
        port: &Identifier,
        segment: usize,
        value: Option<&str>,
    ) -> Result<(), TimelineError> {
        match value {
            Some(v) => self.commit(port, segment, v),
            None => self.activate(port, segment),
        }
    }

    fn track(&self, port: &Identifier) -> Result<&Track, TimelineError> {
        self.tracks
            .iter()
            .find(|t| &t.port == port)
            .ok_or(TimelineError::UnknownPort(port.to_string()))
    }

    fn track_mut(&mut self, port: &Identifier, segment: usize) -> Result<&mut Track, TimelineError> {
        let count = self.segment_count();
        if segment >= count {
            return Err(TimelineError::SegmentOutOfRange(segment, count));
        }
        self.tracks
            .iter_mut()
            .find(|t| &t.port == port)
            .ok_or(TimelineError::UnknownPort(port.to_string()))
    }

    /// Draws the clock and every input track as rows of plain text.
    pub fn draw(&self) -> String {
        let clock = Identifier::Basic(String::from("clk"));
        let label_width = self
            .tracks
            .iter()
            .map(|t| t.port.len())
            .chain(std::iter::once(clock.len()))
            .max()
            .unwrap_or(0);
        let cell = self
            .tracks
            .iter()
            .flat_map(|t| t.values.values().map(|v| v.chars().count()))
            .chain(std::iter::once(
                self.segment_count().saturating_sub(1).to_string().len(),
            ))
            .max()
            .unwrap_or(0)
            .max(MIN_CELL_WIDTH);

        let mut result = String::new();
        // header with segment indices
        result.push_str(&format!("{:<width$} ", "", width = label_width));
        for seg in 0..self.segment_count() {
            result.push_str(&format!("{:<width$} ", seg, width = cell));
        }
        result = result.trim_end().to_string();
        result.push('\n');
        // clock row
        result.push_str(&format!("{:<width$} ", clock.to_string(), width = label_width));
        for seg in 0..self.segment_count() {
            result.push_str(&self.draw_clock(seg, cell));
            result.push(' ');
        }
        result = result.trim_end().to_string();
        result.push('\n');
        // input rows
        for track in &self.tracks {
            result.push_str(&format!("{:<width$} ", track.port.to_string(), width = label_width));
            for seg in 0..self.segment_count() {
                let text = match (track.single_bit, track.is_active(seg)) {
                    (true, true) => HIGH.repeat(cell),
                    (true, false) => LOW.repeat(cell),
                    (false, _) => format!(
                        "{:<width$}",
                        track.value(seg).map(|v| v.as_str()).unwrap_or("0"),
                        width = cell
                    ),
                };
                result.push_str(&text);
                result.push(' ');
            }
            result = result.trim_end().to_string();
            result.push('\n');
        }
        result
    }

    /// Samples the clock `width` times across the `segment`.
    fn draw_clock(&self, segment: usize, width: usize) -> String {
        let period = self.timing.high_time() + self.timing.low_time();
        let duration = self.timing.segment_duration();
        let start = segment as u64 * duration;
        (0..width as u64)
            .map(|i| {
                let t = start + (i * duration) / width as u64;
                match t % period < self.timing.high_time() {
                    true => HIGH,
                    false => LOW,
                }
            })
            .collect()
    }
}

const MIN_CELL_WIDTH: usize = 4;
const HIGH: &str = "‾";
const LOW: &str = "_";

fn parse_port(s: &str) -> Result<Identifier, TimelineError> {
    Identifier::from_str(s).map_err(|_| TimelineError::UnknownPort(s.to_string()))
}

/// A timeline authored as a TOML file.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineFile {
    #[serde(default)]
    port: Vec<PortEntry>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct PortEntry {
    name: String,
    #[serde(default)]
    segments: Vec<SegmentEntry>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct SegmentEntry {
    index: usize,
    value: Option<String>,
}

impl FromStr for TimelineFile {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Where a command-line edit lands: a segment index (`3`) or a time offset
/// in nanoseconds (`45ns`) that falls within a segment.
#[derive(Debug, PartialEq, Clone)]
pub enum Slot {
    Index(usize),
    Offset(u64),
}

impl FromStr for Slot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_suffix("ns") {
            Some(ns) => ns.trim().parse::<u64>().map(Self::Offset).map_err(|_| ()),
            None => s.parse::<usize>().map(Self::Index).map_err(|_| ()),
        }
    }
}

/// Splits `PORT@SLOT` into its parts.
fn parse_target(s: &str) -> Option<(Identifier, Slot)> {
    let (port, slot) = s.split_once('@')?;
    Some((
        Identifier::from_str(port.trim()).ok()?,
        Slot::from_str(slot).ok()?,
    ))
}

/// A single segment assignment given on the command line as `PORT@SLOT[=VALUE]`.
#[derive(Debug, PartialEq, Clone)]
pub struct Drive {
    port: Identifier,
    slot: Slot,
    value: Option<String>,
}

impl FromStr for Drive {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, value) = match s.split_once('=') {
            Some((t, v)) => (t, Some(v.to_string())),
            None => (s, None),
        };
        let (port, slot) = parse_target(target).ok_or(TimelineError::BadDrive(s.to_string()))?;
        Ok(Self {
            port: port,
            slot: slot,
            value: value,
        })
    }
}

/// A segment to toggle, given on the command line as `PORT@SLOT`.
#[derive(Debug, PartialEq, Clone)]
pub struct Flip {
    port: Identifier,
    slot: Slot,
}

impl Flip {
    pub fn port(&self) -> &Identifier {
        &self.port
    }
}

impl FromStr for Flip {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (port, slot) = parse_target(s).ok_or(TimelineError::BadToggle(s.to_string()))?;
        Ok(Self {
            port: port,
            slot: slot,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("no input port named \"{0}\"")]
    UnknownPort(String),
    #[error("segment {0} is out of range for a timeline of {1} segments")]
    SegmentOutOfRange(usize, usize),
    #[error("port \"{0}\" is a vector and needs a value for segment {1}")]
    MissingValue(String, usize),
    #[error("port \"{0}\" is single-bit and does not take a value")]
    ValueOnSingleBit(String),
    #[error("invalid segment value \"{0}\"")]
    InvalidValue(String),
    #[error("time offset of {0} ns is past the last of {1} segments")]
    OffsetOutOfRange(u64, usize),
    #[error("invalid drive \"{0}\": expecting PORT@SEGMENT or PORT@SEGMENT=VALUE")]
    BadDrive(String),
    #[error("invalid toggle \"{0}\": expecting PORT@SEGMENT")]
    BadToggle(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    const DUT: &str = r#"
entity dut is
    port (
        clk  : in  std_logic;
        EN   : in  std_logic;
        data : in  std_logic_vector(3 downto 0);
        q    : out std_logic
    );
end entity;
"#;

    fn id(s: &str) -> Identifier {
        Identifier::Basic(s.to_string())
    }

    fn timeline(length: u64, segment: u64) -> Timeline {
        let c = LoadedComponent::from_source(PathBuf::from("/work/dut.vhd"), DUT).unwrap();
        Timeline::new(&c, &TimingConfig::new(10, 10, length, segment).unwrap())
    }

    #[test]
    fn tracks_follow_inputs() {
        let t = timeline(400, 20);
        let names: Vec<String> = t.tracks().iter().map(|t| t.port().to_string()).collect();
        assert_eq!(names, vec!["EN", "data"]);
        assert_eq!(t.segment_count(), 20);
    }

    #[test]
    fn toggle_single_bit() {
        let mut t = timeline(400, 20);
        assert_eq!(t.toggle(&id("en"), 3), Ok(Toggle::Activated));
        assert_eq!(t.toggle(&id("EN"), 5), Ok(Toggle::Activated));
        let before = t.active_segments(&id("EN")).unwrap().clone();
        assert_eq!(t.toggle(&id("EN"), 7), Ok(Toggle::Activated));
        assert_eq!(t.toggle(&id("EN"), 7), Ok(Toggle::Deactivated));
        assert_eq!(t.active_segments(&id("EN")).unwrap(), &before);
        assert_eq!(
            t.active_segments(&id("EN")).unwrap().iter().collect::<Vec<_>>(),
            vec![&3, &5]
        );
    }

    #[test]
    fn toggle_vector_needs_value() {
        let mut t = timeline(400, 20);
        assert_eq!(t.toggle(&id("data"), 2), Ok(Toggle::ValueRequired));
        assert_eq!(t.active_segments(&id("data")).unwrap().is_empty(), true);

        t.commit(&id("data"), 2, "0101").unwrap();
        assert_eq!(t.active_segments(&id("data")).unwrap().contains(&2), true);
        assert_eq!(
            t.segment_values(&id("data")).unwrap().get(&2),
            Some(&String::from("0101"))
        );
        // deactivating drops the value
        assert_eq!(t.toggle(&id("data"), 2), Ok(Toggle::Deactivated));
        assert_eq!(t.segment_values(&id("data")).unwrap().is_empty(), true);
    }

    #[test]
    fn rejects_bad_requests() {
        let mut t = timeline(40, 20);
        assert_eq!(
            t.toggle(&id("EN"), 2),
            Err(TimelineError::SegmentOutOfRange(2, 2))
        );
        assert_eq!(
            t.toggle(&id("clk"), 0),
            Err(TimelineError::UnknownPort(String::from("clk")))
        );
        assert_eq!(
            t.commit(&id("EN"), 0, "1"),
            Err(TimelineError::ValueOnSingleBit(String::from("EN")))
        );
        assert_eq!(
            t.commit(&id("data"), 0, "\"x"),
            Err(TimelineError::InvalidValue(String::from("\"x")))
        );
        assert_eq!(
            t.activate(&id("data"), 0),
            Err(TimelineError::MissingValue(String::from("data"), 0))
        );
    }

    #[test]
    fn maps_time_to_segment() {
        let t = timeline(45, 20);
        assert_eq!(t.segment_at(0), Some(0));
        assert_eq!(t.segment_at(19), Some(0));
        assert_eq!(t.segment_at(20), Some(1));
        assert_eq!(t.segment_at(39), Some(1));
        // the truncated remainder is not a segment
        assert_eq!(t.segment_at(40), None);
    }

    #[test]
    fn parse_drives() {
        assert_eq!(
            Drive::from_str("EN@1"),
            Ok(Drive {
                port: id("EN"),
                slot: Slot::Index(1),
                value: None
            })
        );
        assert_eq!(
            Drive::from_str("data@0=0101"),
            Ok(Drive {
                port: id("data"),
                slot: Slot::Index(0),
                value: Some(String::from("0101"))
            })
        );
        assert_eq!(
            Drive::from_str("EN@45ns"),
            Ok(Drive {
                port: id("EN"),
                slot: Slot::Offset(45),
                value: None
            })
        );
        assert_eq!(
            Drive::from_str("EN"),
            Err(TimelineError::BadDrive(String::from("EN")))
        );
        assert_eq!(
            Drive::from_str("EN@x"),
            Err(TimelineError::BadDrive(String::from("EN@x")))
        );
    }

    #[test]
    fn flips_toggle_segments() {
        let mut t = timeline(40, 20);
        let flip = Flip::from_str("EN@25ns").unwrap();
        assert_eq!(flip.port(), &id("EN"));
        assert_eq!(t.apply_flip(&flip), Ok(Toggle::Activated));
        assert_eq!(t.active_segments(&id("EN")).unwrap().contains(&1), true);
        assert_eq!(
            t.apply_flip(&Flip::from_str("EN@1").unwrap()),
            Ok(Toggle::Deactivated)
        );
        assert_eq!(t.active_segments(&id("EN")).unwrap().is_empty(), true);
        assert_eq!(
            t.apply_flip(&Flip::from_str("data@0").unwrap()),
            Ok(Toggle::ValueRequired)
        );
        assert_eq!(
            t.apply_flip(&Flip::from_str("EN@40ns").unwrap()),
            Err(TimelineError::OffsetOutOfRange(40, 2))
        );
        assert_eq!(
            Flip::from_str("EN@1=1"),
            Err(TimelineError::BadToggle(String::from("EN@1=1")))
        );
    }

    #[test]
    fn drive_at_time_offset() {
        let mut t = timeline(40, 20);
        t.apply_drive(&Drive::from_str("data@39ns=1100").unwrap())
            .unwrap();
        assert_eq!(
            t.segment_values(&id("data")).unwrap().get(&1),
            Some(&String::from("1100"))
        );
    }

    #[test]
    fn apply_timeline_file() {
        let file = TimelineFile::from_str(
            r#"
[[port]]
name = "en"
segments = [{ index = 1 }]

[[port]]
name = "data"
segments = [{ index = 0, value = "0101" }]
"#,
        )
        .unwrap();
        let mut t = timeline(40, 20);
        t.apply_file(&file).unwrap();
        t.apply_drive(&Drive::from_str("data@1=1111").unwrap()).unwrap();
        assert_eq!(t.tracks()[0].is_active(1), true);
        assert_eq!(t.tracks()[1].value(0), Some(&String::from("0101")));
        assert_eq!(t.tracks()[1].value(1), Some(&String::from("1111")));

        let missing = TimelineFile::from_str("[[port]]\nname = \"data\"\nsegments = [{ index = 0 }]\n")
            .unwrap();
        assert_eq!(
            t.apply_file(&missing),
            Err(TimelineError::MissingValue(String::from("data"), 0))
        );
        assert_eq!(TimelineFile::from_str("[[port]]\nlabel = \"x\"\n").is_err(), true);
    }

    #[test]
    fn draw_waveform() {
        let mut t = timeline(40, 20);
        t.toggle(&id("EN"), 1).unwrap();
        t.commit(&id("data"), 0, "0101").unwrap();
        assert_eq!(
            t.draw(),
            "     0    1\nclk  ‾‾__ ‾‾__\nEN   ____ ‾‾‾‾\ndata 0101 0\n"
        );
    }
}
