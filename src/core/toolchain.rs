//! External programs that simulate a testbench and display its waveform.

use crate::core::lang::vhdl::token::Identifier;
use crate::error::Error;
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const GHDL: &str = "ghdl";
pub const GTKWAVE: &str = "gtkwave";

/// A VHDL simulator that shares one work library across calls made from the
/// same working directory.
pub trait Simulator {
    /// Compiles the design units in `file` into the work library.
    fn analyze(&self, file: &Path, cwd: &Path) -> Result<(), Fault>;

    /// Builds an executable model of the top-level `unit`.
    fn elaborate(&self, unit: &Identifier, cwd: &Path) -> Result<(), Fault>;

    /// Runs the elaborated `unit`, dumping its signals to `wave`.
    fn simulate(&self, unit: &Identifier, wave: &Path, cwd: &Path) -> Result<(), Fault>;
}

/// A program that displays a waveform file.
pub trait Viewer {
    fn launch(&self, wave: &Path, cwd: &Path) -> Result<(), Fault>;
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ghdl {
    exe: PathBuf,
    verbose: bool,
}

impl Ghdl {
    pub fn new(exe: PathBuf, verbose: bool) -> Self {
        Self {
            exe: exe,
            verbose: verbose,
        }
    }
}

impl Simulator for Ghdl {
    fn analyze(&self, file: &Path, cwd: &Path) -> Result<(), Fault> {
        let args = vec![String::from("-a"), relative_to(file, cwd)];
        execute(&self.exe, &args, cwd, self.verbose)
    }

    fn elaborate(&self, unit: &Identifier, cwd: &Path) -> Result<(), Fault> {
        let args = vec![String::from("-e"), unit.to_string()];
        execute(&self.exe, &args, cwd, self.verbose)
    }

    fn simulate(&self, unit: &Identifier, wave: &Path, cwd: &Path) -> Result<(), Fault> {
        let args = vec![
            String::from("-r"),
            unit.to_string(),
            format!("--wave={}", relative_to(wave, cwd)),
        ];
        execute(&self.exe, &args, cwd, self.verbose)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GtkWave {
    exe: PathBuf,
    verbose: bool,
}

impl GtkWave {
    pub fn new(exe: PathBuf, verbose: bool) -> Self {
        Self {
            exe: exe,
            verbose: verbose,
        }
    }
}

impl Viewer for GtkWave {
    fn launch(&self, wave: &Path, cwd: &Path) -> Result<(), Fault> {
        let args = vec![relative_to(wave, cwd)];
        execute(&self.exe, &args, cwd, self.verbose)
    }
}

/// Runs the `command` with its `args` from the working directory `cwd` and
/// waits for it to exit.
///
/// Errors if the process cannot start, exits with a non-zero code, or is
/// terminated by a signal.
fn execute(command: &Path, args: &[String], cwd: &Path, verbose: bool) -> Result<(), Fault> {
    // display the literal command being ran
    if verbose == true {
        let s = args
            .iter()
            .fold(String::new(), |x, y| x + "\"" + &y + "\" ");
        println!("info: running: {} {}", command.display(), s.trim_end());
    }
    let mut proc = Command::new(command).args(args).current_dir(cwd).spawn()?;
    let exit_code = proc.wait()?;
    match exit_code.code() {
        Some(num) => {
            if num != 0 {
                Err(Error::ChildProcErrorCode(num))?
            } else {
                Ok(())
            }
        }
        None => Err(Error::ChildProcTerminated)?,
    }
}

/// Writes `path` relative to `cwd` when it lies inside of it.
fn relative_to(path: &Path, cwd: &Path) -> String {
    match path.strip_prefix(cwd) {
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Locates ghdl on the `PATH`, falling back to the copy bundled in `base`
/// at `ghdl/bin`.
pub fn find_ghdl(base: Option<&Path>) -> Option<PathBuf> {
    filesystem::find_on_path(GHDL).or_else(|| bundled(base, &["ghdl", "bin"], GHDL))
}

/// Locates gtkwave on the `PATH`, falling back to the copy bundled in `base`
/// at `gtkwave/gtkwave64/bin`.
pub fn find_gtkwave(base: Option<&Path>) -> Option<PathBuf> {
    filesystem::find_on_path(GTKWAVE)
        .or_else(|| bundled(base, &["gtkwave", "gtkwave64", "bin"], GTKWAVE))
}

fn bundled(base: Option<&Path>, dirs: &[&str], name: &str) -> Option<PathBuf> {
    let dir = dirs.iter().fold(base?.to_path_buf(), |acc, d| acc.join(d));
    filesystem::search_dirs(vec![dir], name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_paths() {
        let cwd = Path::new("/work");
        assert_eq!(relative_to(Path::new("/work/top_tb.vhd"), cwd), "top_tb.vhd");
        assert_eq!(
            relative_to(Path::new("/elsewhere/adder.vhd"), cwd),
            Path::new("/elsewhere/adder.vhd").display().to_string()
        );
    }

    #[test]
    fn bundled_lookup() {
        let base = tempfile::tempdir().unwrap();
        let bin = base.path().join("gtkwave").join("gtkwave64").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(filesystem::exe_name(GTKWAVE)), "").unwrap();
        assert_eq!(
            bundled(
                Some(base.path()),
                &["gtkwave", "gtkwave64", "bin"],
                GTKWAVE
            ),
            Some(bin.join(filesystem::exe_name(GTKWAVE)))
        );
        assert_eq!(bundled(Some(base.path()), &["ghdl", "bin"], GHDL), None);
        assert_eq!(bundled(None, &["ghdl", "bin"], GHDL), None);
    }

    #[test]
    fn missing_program_fails_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let ghdl = Ghdl::new(dir.path().join("no-such-ghdl"), false);
        assert_eq!(
            ghdl.analyze(&dir.path().join("a.vhd"), dir.path()).is_err(),
            true
        );
    }
}
