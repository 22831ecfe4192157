use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

const VENV_DIR: &str = "venv";
const PATH_VAR: &str = "PATH";
const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";
const PYTHONHOME_VAR: &str = "PYTHONHOME";

/// A Python virtual environment expected next to the launcher.
///
/// Discovery is a pure existence check on the `venv` directory; its contents
/// are never inspected. Activation shapes a child command's environment only,
/// the launcher's own environment stays untouched.
#[derive(Debug)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Locates `venv` under `base`, failing when the directory is absent.
    pub fn discover(base: &Path) -> Result<Self> {
        let root = base.join(VENV_DIR);
        if !root.is_dir() {
            return Err(Error::VenvMissing(base.to_path_buf()));
        }
        debug!(venv = %root.display(), "virtual environment found");
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// Activates the environment for `cmd`: the venv's binaries take
    /// precedence on PATH, VIRTUAL_ENV points at the environment, and any
    /// inherited PYTHONHOME is dropped.
    pub fn activate(&self, cmd: &mut Command) -> Result<()> {
        cmd.env(VIRTUAL_ENV_VAR, &self.root);
        cmd.env(PATH_VAR, self.search_path()?);
        cmd.env_remove(PYTHONHOME_VAR);
        Ok(())
    }

    /// PATH value with the venv's binary directory ahead of the inherited
    /// entries.
    fn search_path(&self) -> Result<OsString> {
        let mut entries = vec![self.bin_dir()];
        if let Some(path) = env::var_os(PATH_VAR) {
            entries.extend(env::split_paths(&path));
        }
        env::join_paths(entries).map_err(|e| Error::UnusablePath(self.bin_dir(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::fs;
    use tempfile::TempDir;

    fn env_value<'a>(cmd: &'a Command, key: &str) -> Option<&'a OsStr> {
        cmd.get_envs()
            .find(|(k, _)| *k == OsStr::new(key))
            .and_then(|(_, v)| v)
    }

    #[test]
    fn test_discover_finds_existing_venv() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();

        let venv = VirtualEnv::discover(dir.path()).unwrap();
        assert_eq!(venv.path(), dir.path().join("venv"));
    }

    #[test]
    fn test_discover_fails_when_venv_absent() {
        let dir = TempDir::new().unwrap();
        let err = VirtualEnv::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::VenvMissing(_)));
    }

    #[test]
    fn test_discover_rejects_venv_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("venv"), "not a directory").unwrap();

        let err = VirtualEnv::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::VenvMissing(_)));
    }

    #[test]
    fn test_empty_venv_is_accepted() {
        // Only existence matters, the contents are never validated.
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();
        assert!(VirtualEnv::discover(dir.path()).is_ok());
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_bin_dir_is_venv_bin() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();

        let venv = VirtualEnv::discover(dir.path()).unwrap();
        assert_eq!(venv.bin_dir(), dir.path().join("venv").join("bin"));
    }

    #[test]
    fn test_activate_sets_virtual_env() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();
        let venv = VirtualEnv::discover(dir.path()).unwrap();

        let mut cmd = Command::new("true");
        venv.activate(&mut cmd).unwrap();

        let value = env_value(&cmd, VIRTUAL_ENV_VAR).unwrap();
        assert_eq!(value, venv.path().as_os_str());
    }

    #[test]
    fn test_activate_puts_venv_first_on_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();
        let venv = VirtualEnv::discover(dir.path()).unwrap();

        let mut cmd = Command::new("true");
        venv.activate(&mut cmd).unwrap();

        let path = env_value(&cmd, PATH_VAR).unwrap().to_os_string();
        let first = env::split_paths(&path).next().unwrap();
        assert_eq!(first, venv.bin_dir());
    }

    #[test]
    fn test_activate_drops_pythonhome() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();
        let venv = VirtualEnv::discover(dir.path()).unwrap();

        let mut cmd = Command::new("true");
        venv.activate(&mut cmd).unwrap();

        // An explicit None marks the variable as removed for the child.
        let removed = cmd
            .get_envs()
            .any(|(k, v)| k == OsStr::new(PYTHONHOME_VAR) && v.is_none());
        assert!(removed);
    }
}
