use crate::core::timing::PartialTiming;
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    workspace: Option<PathBuf>,
}

impl General {
    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.workspace.is_none() {
                self.workspace = rhs.workspace
            }
        }
    }
}

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Toolchain {
    ghdl: Option<PathBuf>,
    gtkwave: Option<PathBuf>,
}

impl Toolchain {
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.ghdl.is_none() {
                self.ghdl = rhs.ghdl
            }
            if self.gtkwave.is_none() {
                self.gtkwave = rhs.gtkwave
            }
        }
    }
}

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    general: Option<General>,
    timing: Option<PartialTiming>,
    toolchain: Option<Toolchain>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration file from `path`.
    ///
    /// Relative paths written in the file are resolved against the file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigInvalid(path.to_path_buf(), LastError(e.to_string())))?;
        let mut cfg = Self::from_str(&contents)
            .map_err(|e| Error::ConfigInvalid(path.to_path_buf(), LastError(e.to_string())))?;
        if let Some(root) = path.parent() {
            cfg.set_root(root);
        }
        Ok(cfg)
    }

    fn set_root(&mut self, root: &Path) {
        let resolve = |p: &mut Option<PathBuf>| {
            if let Some(inner) = p {
                if inner.is_relative() {
                    *inner = root.join(&inner);
                }
            }
        };
        if let Some(g) = &mut self.general {
            resolve(&mut g.workspace);
        }
        if let Some(t) = &mut self.toolchain {
            resolve(&mut t.ghdl);
            resolve(&mut t.gtkwave);
        }
    }

    /// Adds the new information to the existing configuration to combine data.
    ///
    /// Note that the struct calling this function has precedence over any
    /// incoming data from `rhs`.
    pub fn append(&mut self, rhs: Self) {
        // combine '[general]' table
        match &mut self.general {
            Some(v) => v.merge(rhs.general),
            None => self.general = rhs.general,
        }
        // combine '[timing]' table
        match &mut self.timing {
            Some(v) => v.merge(rhs.timing),
            None => self.timing = rhs.timing,
        }
        // combine '[toolchain]' table
        match &mut self.toolchain {
            Some(v) => v.merge(rhs.toolchain),
            None => self.toolchain = rhs.toolchain,
        }
    }

    pub fn get_workspace(&self) -> Option<&PathBuf> {
        self.general.as_ref()?.workspace.as_ref()
    }

    pub fn get_timing(&self) -> Option<&PartialTiming> {
        self.timing.as_ref()
    }

    pub fn get_ghdl(&self) -> Option<&PathBuf> {
        self.toolchain.as_ref()?.ghdl.as_ref()
    }

    pub fn get_gtkwave(&self) -> Option<&PathBuf> {
        self.toolchain.as_ref()?.gtkwave.as_ref()
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const C_0: &str = r#"
# This is a blank configuration file.
"#;

    const C_1: &str = r#"
# wavebench configuration file

[general]
workspace = "projects"

[timing]
high-time = 5
low-time = 5
segment-duration = 10

[toolchain]
ghdl = "/opt/ghdl/bin/ghdl"
"#;

    #[test]
    fn parse_empty_config() {
        assert_eq!(Config::from_str(C_0).unwrap(), Config::new());
    }

    #[test]
    fn parse_basic_config() {
        let cfg = Config::from_str(C_1).unwrap();
        assert_eq!(cfg.get_workspace(), Some(&PathBuf::from("projects")));
        assert_eq!(cfg.get_timing().unwrap().high_time, Some(5));
        assert_eq!(cfg.get_timing().unwrap().test_length, None);
        assert_eq!(cfg.get_ghdl(), Some(&PathBuf::from("/opt/ghdl/bin/ghdl")));
        assert_eq!(cfg.get_gtkwave(), None);
    }

    #[test]
    fn reject_unknown_keys() {
        assert_eq!(Config::from_str("[timing]\nperiod = 4\n").is_err(), true);
        assert_eq!(Config::from_str("[plugin]\n").is_err(), true);
    }

    #[test]
    fn append_keeps_precedence() {
        let mut base = Config::from_str("[toolchain]\ngtkwave = \"a\"\n").unwrap();
        base.append(Config::from_str(C_1).unwrap());
        assert_eq!(base.get_gtkwave(), Some(&PathBuf::from("a")));
        assert_eq!(base.get_ghdl(), Some(&PathBuf::from("/opt/ghdl/bin/ghdl")));
        assert_eq!(base.get_timing().unwrap().low_time, Some(5));
    }

    #[test]
    fn relative_paths_follow_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, C_1).unwrap();
        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(cfg.get_workspace(), Some(&dir.path().join("projects")));
        assert_eq!(cfg.get_ghdl(), Some(&PathBuf::from("/opt/ghdl/bin/ghdl")));

        std::fs::write(&path, "[general\n").unwrap();
        assert_eq!(Config::from_file(&path).is_err(), true);
    }
}
