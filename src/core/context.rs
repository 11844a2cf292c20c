//! Runtime state resolved before any command runs: the home directory, the
//! global configuration, and where to find the external toolchain.

use crate::core::config::Config;
use crate::core::timing::{PartialTiming, TimingConfig};
use crate::core::toolchain;
use crate::error::{Error, Hint, LastError};
use crate::util::anyerror::Fault;
use crate::util::environment::{self, WAVEBENCH_GHDL, WAVEBENCH_GTKWAVE, WAVEBENCH_WORKSPACE};
use crate::util::filesystem;
use std::path::PathBuf;

/// Directory under the current working directory used when no workspace is set.
pub const DEFAULT_WORKSPACE: &str = "workspace";
/// File loaded when no component is given on the command line.
pub const DEFAULT_COMPONENT: &str = "my_register.vhd";

#[derive(Debug, PartialEq)]
pub struct Context {
    home_path: PathBuf,
    exe_dir: Option<PathBuf>,
    config: Config,
}

impl Context {
    pub fn new() -> Context {
        Context {
            home_path: PathBuf::new(),
            exe_dir: filesystem::get_exe_dir(),
            config: Config::new(),
        }
    }

    /// Sets the home directory. By default this is `$HOME/.wavebench`. If set
    /// by `key`, it must be an existing directory.
    pub fn home(mut self, key: &str) -> Result<Context, Fault> {
        self.home_path = match environment::read(key) {
            Some(s) => PathBuf::from(s),
            None => {
                let hp = match home::home_dir() {
                    Some(p) => p.join(".wavebench"),
                    None => {
                        return Err(ContextError(format!(
                            "failed to detect user's home directory; please set the {} environment variable",
                            key
                        )))?
                    }
                };
                // create the directory if does not exist
                if hp.exists() == false {
                    std::fs::create_dir(&hp)?;
                }
                hp
            }
        };
        // do not allow a non-existent directory to be set for the home
        if self.home_path.exists() == false {
            return Err(ContextError(format!(
                "directory {:?} does not exist for {}",
                self.home_path, key
            )))?;
        }
        Ok(self)
    }

    /// Reads the configuration file `s` directly under the home directory.
    ///
    /// A missing file leaves the default configuration in place.
    pub fn settings(mut self, s: &str) -> Result<Context, Fault> {
        let cfg_path = self.home_path.join(s);
        if cfg_path.is_file() == true {
            self.config.append(Config::from_file(&cfg_path)?);
        }
        Ok(self)
    }

    /// Resolves the timing values, preferring `cli` over the configuration file
    /// over the defaults.
    pub fn timing(&self, cli: &PartialTiming) -> Result<TimingConfig, Fault> {
        let mut partial = cli.clone();
        partial.merge(self.config.get_timing().cloned());
        TimingConfig::default()
            .apply(&partial)
            .map_err(|e| Error::InvalidTiming(LastError(e.to_string()), Hint::TimingValues).into())
    }

    /// Locates the simulator executable.
    ///
    /// Checks `cli`, then `WAVEBENCH_GHDL`, then the configuration file, then
    /// the `PATH` and the copy bundled next to this program.
    pub fn ghdl(&self, cli: Option<&PathBuf>) -> Option<PathBuf> {
        Self::pick(cli, WAVEBENCH_GHDL, self.config.get_ghdl())
            .or_else(|| toolchain::find_ghdl(self.exe_dir.as_deref()))
    }

    /// Locates the waveform viewer executable in the same order as [Self::ghdl].
    pub fn gtkwave(&self, cli: Option<&PathBuf>) -> Option<PathBuf> {
        Self::pick(cli, WAVEBENCH_GTKWAVE, self.config.get_gtkwave())
            .or_else(|| toolchain::find_gtkwave(self.exe_dir.as_deref()))
    }

    fn pick(cli: Option<&PathBuf>, key: &str, cfg: Option<&PathBuf>) -> Option<PathBuf> {
        cli.cloned()
            .or_else(|| environment::read(key).map(PathBuf::from))
            .or_else(|| cfg.cloned())
    }

    /// Directory searched for the default component.
    pub fn workspace(&self) -> Result<PathBuf, Fault> {
        if let Some(ws) = environment::read(WAVEBENCH_WORKSPACE) {
            return Ok(PathBuf::from(ws));
        }
        if let Some(ws) = self.config.get_workspace() {
            return Ok(ws.clone());
        }
        Ok(std::env::current_dir()?.join(DEFAULT_WORKSPACE))
    }

    /// Picks the component file to load: the `cli` path when given, otherwise
    /// `my_register.vhd` inside the workspace.
    pub fn component_path(&self, cli: Option<&PathBuf>) -> Result<PathBuf, Fault> {
        match cli {
            Some(p) => Ok(p.clone()),
            None => Ok(self.workspace()?.join(DEFAULT_COMPONENT)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ContextError(String);

impl std::error::Error for ContextError {}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
