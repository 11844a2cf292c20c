use std::env;
use std::path::{Path, PathBuf};

/// Attempts to return the executable's path.
pub fn get_exe_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    match env::current_exe() {
        Ok(exe_path) => Ok(std::fs::canonicalize(exe_path)?),
        Err(e) => Err(Box::new(e)),
    }
}

/// Returns the directory containing the running executable, if it can be determined.
pub fn get_exe_dir() -> Option<PathBuf> {
    get_exe_path()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Appends the platform's executable suffix to the program `name`.
pub fn exe_name(name: &str) -> String {
    format!("{}{}", name, env::consts::EXE_SUFFIX)
}

/// Searches the directories listed in the `PATH` environment variable for the
/// program `name`.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    search_dirs(env::split_paths(&paths), name)
}

/// Returns the first `dir/name` that is an existing file.
pub fn search_dirs<I>(dirs: I, name: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let file = exe_name(name);
    dirs.into_iter()
        .map(|d| d.join(&file))
        .find(|p| p.is_file() == true)
}

/// Resolves `path` against the current working directory when it is relative.
pub fn absolute(path: &Path) -> Result<PathBuf, std::io::Error> {
    match path.is_absolute() {
        true => Ok(path.to_path_buf()),
        false => Ok(env::current_dir()?.join(path)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn search_directories() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        std::fs::write(bin.join(exe_name("ghdl")), "").unwrap();

        let dirs = vec![dir.path().to_path_buf(), bin.clone()];
        assert_eq!(
            search_dirs(dirs.clone(), "ghdl"),
            Some(bin.join(exe_name("ghdl")))
        );
        assert_eq!(search_dirs(dirs, "gtkwave"), None);
    }

    #[test]
    fn absolute_paths() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(
            absolute(Path::new("workspace/my_register.vhd")).unwrap(),
            cwd.join("workspace/my_register.vhd")
        );
        assert_eq!(absolute(&cwd).unwrap(), cwd);
    }
}
