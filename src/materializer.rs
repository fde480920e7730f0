//! Copies the blank template tree into the target project directory.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Changes the process working directory and restores it on drop.
///
/// The original directory is restored on every exit path, including
/// early returns through `?` and panics.
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(dir.as_ref())?;
        Ok(Self { original })
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            log::error!(
                "Failed to restore working directory '{}': {}",
                self.original.display(),
                e
            );
        }
    }
}

/// Creates `path` and any missing parents with mode 0755.
pub fn create_target_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|source| Error::CopyError {
        path: path.display().to_string(),
        source,
    })
}

/// Fails when `path` exists and has any entry in it.
pub fn ensure_empty_target<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(());
    }
    if fs::read_dir(path)?.next().is_some() {
        return Err(Error::OutputDirectoryNotEmpty {
            output_dir: path.display().to_string(),
        });
    }
    Ok(())
}

/// Removes whatever sits at `path` without following symlinks.
fn remove_existing(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let link_target = fs::read_link(source)?;
    remove_existing(dest)?;
    std::os::unix::fs::symlink(link_target, dest)
}

#[cfg(windows)]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let link_target = fs::read_link(source)?;
    remove_existing(dest)?;
    if fs::metadata(source).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link_target, dest)
    } else {
        std::os::windows::fs::symlink_file(link_target, dest)
    }
}

fn copy_entry(entry: &walkdir::DirEntry, dest: &Path) -> io::Result<()> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        if fs::symlink_metadata(dest).map(|m| !m.is_dir()).unwrap_or(false) {
            remove_existing(dest)?;
        }
        fs::create_dir_all(dest)
    } else if file_type.is_symlink() {
        copy_symlink(entry.path(), dest)
    } else {
        if fs::symlink_metadata(dest).map(|m| !m.is_file()).unwrap_or(false) {
            remove_existing(dest)?;
        }
        fs::copy(entry.path(), dest).map(|_| ())
    }
}

/// Copies every entry of the current directory into `target`.
///
/// Existing entries at the same relative path are overwritten. Returns
/// the number of entries copied.
fn copy_current_dir(target: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(".").min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(Path::new(".")).display().to_string();
            Error::CopyError { path, source: e.into() }
        })?;
        let relative = entry.path().strip_prefix(".").unwrap_or(entry.path());
        let dest = target.join(relative);

        debug!("Copying '{}' to '{}'", relative.display(), dest.display());
        copy_entry(&entry, &dest).map_err(|source| Error::CopyError {
            path: relative.display().to_string(),
            source,
        })?;
        copied += 1;
    }

    Ok(copied)
}

/// Copies the template tree into `target`, overwriting existing entries.
///
/// The copy runs from inside `template_dir`; the working directory is
/// restored before this returns, whether the copy succeeded or not.
/// A failed copy may leave a partial tree behind.
///
/// # Errors
/// * `Error::TemplateNotFound` if `template_dir` is not a directory
/// * `Error::CopyError` if the target or any entry cannot be written
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(template_dir: P, target: Q) -> Result<usize> {
    let template_dir = template_dir.as_ref();
    if !template_dir.is_dir() {
        return Err(Error::TemplateNotFound {
            template_dir: template_dir.display().to_string(),
        });
    }

    let target = absolute(target.as_ref())?;
    let _guard = WorkingDirGuard::enter(template_dir)?;
    copy_current_dir(&target)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
