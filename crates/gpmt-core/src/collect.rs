use crate::archive::{LogArchive, entry_name};
use crate::resolve::resolve_log_directory;
use crate::{Error, Result};
use chrono::{DateTime, Local};
use gpmt_db::ConfigStore;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment override naming the coordinator's data directory.
pub const COORDINATOR_DATA_DIR_ENV: &str = "MASTER_DATA_DIRECTORY";

/// Everything a collection run reads from its surroundings, captured once at
/// startup so the core never consults process-global state mid-run.
pub struct CollectContext<'a> {
    pub store: &'a dyn ConfigStore,

    /// `MASTER_DATA_DIRECTORY`, when set and non-empty.
    pub coordinator_dir: Option<String>,

    /// The current user's home directory, when known.
    pub home_dir: Option<PathBuf>,
}

impl<'a> CollectContext<'a> {
    pub fn from_env(store: &'a dyn ConfigStore) -> Self {
        Self {
            store,
            coordinator_dir: std::env::var(COORDINATOR_DATA_DIR_ENV)
                .ok()
                .filter(|dir| !dir.is_empty()),
            home_dir: dirs::home_dir(),
        }
    }
}

/// Default archive name derived from the collection start time.
pub fn default_archive_name(now: DateTime<Local>) -> String {
    format!("gpmt_logs_{}.tar.gz", now.format("%Y%m%d_%H%M%S"))
}

/// Collect the coordinator's log directory into a gzip-compressed tar
/// archive at `archive_path` (timestamped default when `None`). Returns the
/// path of the archive written.
///
/// Any failure after the archive is opened leaves the partial file on disk;
/// the writer stack is still closed best-effort so the bytes written so far
/// are flushed.
pub fn collect_logs(ctx: &CollectContext, archive_path: Option<&Path>) -> Result<PathBuf> {
    let archive_path = match archive_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_archive_name(Local::now())),
    };

    println!("Starting log collection...");
    println!("Logs will be archived to: {}", archive_path.display());

    let mut archive = LogArchive::create(&archive_path)?;

    let log_dir = match resolve_log_directory(ctx) {
        Ok(dir) => dir,
        Err(err) => {
            let _ = archive.finish();
            return Err(err);
        }
    };

    for entry in WalkDir::new(&log_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let _ = archive.finish();
                return Err(Error::Walk(err));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry_name(entry.path(), &log_dir, ctx.coordinator_dir.as_deref());
        if let Err(err) = archive.append_file(entry.path(), &name) {
            let _ = archive.finish();
            return Err(err);
        }
    }

    archive.finish()?;

    println!("Log collection complete.");
    Ok(archive_path)
}
