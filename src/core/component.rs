use crate::core::lang::vhdl::error::ParseError;
use crate::core::lang::vhdl::extract::{self, Diagnostic, EntityDescriptor};
use crate::core::lang::vhdl::interface::Port;
use crate::core::lang::vhdl::token::Identifier;
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use serde_derive::Serialize;
use std::path::{Path, PathBuf};

pub const VHDL_EXT: &str = "vhd";
pub const WAVE_EXT: &str = "ghw";

/// A VHDL component whose interface has been read from its source file.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct LoadedComponent {
    source: PathBuf,
    entity: EntityDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    clock: Option<Port>,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    dependencies: Vec<Identifier>,
    diagnostics: Vec<Diagnostic>,
}

impl LoadedComponent {
    /// Reads the VHDL file at `path` and extracts its interface.
    ///
    /// Errors if the file does not exist, cannot be read, or has no entity with
    /// a port clause.
    pub fn load(path: &Path) -> Result<Self, Fault> {
        if path.is_file() == false {
            return Err(Error::FileMissing(path.to_path_buf()))?;
        }
        let source = filesystem::absolute(path)?;
        let text = std::fs::read_to_string(&source).map_err(|e| {
            Error::ComponentNotLoaded(source.clone(), LastError(e.to_string()))
        })?;
        match Self::from_source(source.clone(), &text) {
            Ok(c) => Ok(c),
            Err(ParseError::NoPortBlock) => Err(ParseError::NoPortBlockInFile(source))?,
            Err(e) => Err(e)?,
        }
    }

    /// Extracts the interface from VHDL source code `text` located at `source`.
    pub fn from_source(source: PathBuf, text: &str) -> Result<Self, ParseError> {
        let extraction = extract::extract(text)?;
        Ok(Self {
            source: source,
            entity: extraction.entity,
            clock: extraction.clock,
            inputs: extraction.inputs,
            outputs: extraction.outputs,
            dependencies: extract::component_names(text),
            diagnostics: extraction.diagnostics,
        })
    }

    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    pub fn entity(&self) -> &EntityDescriptor {
        &self.entity
    }

    /// References the declared clock port, if the entity has one.
    pub fn clock(&self) -> Option<&Port> {
        self.clock.as_ref()
    }

    pub fn inputs(&self) -> &Vec<Port> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Vec<Port> {
        &self.outputs
    }

    pub fn dependencies(&self) -> &Vec<Identifier> {
        &self.dependencies
    }

    pub fn diagnostics(&self) -> &Vec<Diagnostic> {
        &self.diagnostics
    }

    /// The directory holding the component's source file.
    pub fn directory(&self) -> Option<&Path> {
        self.source.parent()
    }

    /// Path of the testbench written next to the component: `<dir>/<entity>_tb.vhd`.
    pub fn testbench_path(&self) -> Option<PathBuf> {
        Some(
            self.directory()?
                .join(self.entity.testbench().to_string())
                .with_extension(VHDL_EXT),
        )
    }

    /// Path of the waveform written by simulation: `<dir>/<entity>_wave.ghw`.
    pub fn wave_path(&self) -> Option<PathBuf> {
        Some(
            self.directory()?
                .join(self.entity.name().into_extension("_wave").to_string())
                .with_extension(WAVE_EXT),
        )
    }

    /// Paths of the source files expected for each declared component, in scan order.
    pub fn dependency_paths(&self) -> Option<Vec<PathBuf>> {
        let dir = self.directory()?;
        Some(
            self.dependencies
                .iter()
                .map(|d| dir.join(d.to_string()).with_extension(VHDL_EXT))
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TOP: &str = r#"
entity top is
    port (
        clk : in std_logic;
        go  : in std_logic;
        sum : out std_logic_vector(3 downto 0)
    );
end entity;

architecture rtl of top is
    component adder port (a : in bit); end component;
    component counter port (a : in bit); end component;
begin
end architecture;
"#;

    #[test]
    fn derived_paths() {
        let c = LoadedComponent::from_source(PathBuf::from("/work/top.vhd"), TOP).unwrap();
        assert_eq!(c.testbench_path(), Some(PathBuf::from("/work/top_tb.vhd")));
        assert_eq!(c.wave_path(), Some(PathBuf::from("/work/top_wave.ghw")));
        assert_eq!(
            c.dependency_paths(),
            Some(vec![
                PathBuf::from("/work/adder.vhd"),
                PathBuf::from("/work/counter.vhd")
            ])
        );
        assert_eq!(c.inputs().len(), 1);
        assert_eq!(c.clock().is_some(), true);
        assert_eq!(c.outputs().len(), 1);
        assert_eq!(c.inputs()[0].name(), &Identifier::Basic(String::from("GO")));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.vhd");
        std::fs::write(&path, TOP).unwrap();
        let c = LoadedComponent::load(&path).unwrap();
        assert_eq!(c.entity().name().to_string(), "top");
        assert_eq!(c.source(), &path);

        let missing = dir.path().join("missing.vhd");
        assert_eq!(
            LoadedComponent::load(&missing).unwrap_err().to_string(),
            Error::FileMissing(missing).to_string()
        );
    }

    #[test]
    fn load_without_ports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.vhd");
        std::fs::write(&path, "entity empty is end entity;").unwrap();
        assert_eq!(
            LoadedComponent::load(&path).unwrap_err().to_string(),
            ParseError::NoPortBlockInFile(path).to_string()
        );
    }

    #[test]
    fn serializes_to_json() {
        let c = LoadedComponent::from_source(PathBuf::from("/work/top.vhd"), TOP).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["entity"]["testbench"], "top_tb");
        assert_eq!(json["inputs"][0]["name"], "go");
        assert_eq!(json["inputs"][0]["direction"], "in");
        assert_eq!(json["outputs"][0]["type"], "std_logic_vector(3 downto 0)");
        assert_eq!(json["dependencies"][1], "counter");
    }
}
