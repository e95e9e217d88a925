use anyhow::Result;
use chrono::Local;
use gpmt_core::{CollectContext, collect_logs, default_archive_name};
use gpmt_db::{ConnectionParams, PgConfigStore};
use std::path::PathBuf;

pub fn handle(
    params: &ConnectionParams,
    output: Option<String>,
    working_dir: Option<PathBuf>,
) -> Result<()> {
    let store = PgConfigStore::new(params.clone());
    let ctx = CollectContext::from_env(&store);

    // An explicit name is taken as given; the default lands in the working
    // directory (current directory unless --dir says otherwise).
    let archive_path = match (output, working_dir) {
        (Some(name), Some(dir)) => Some(dir.join(name)),
        (Some(name), None) => Some(PathBuf::from(name)),
        (None, Some(dir)) => Some(dir.join(default_archive_name(Local::now()))),
        (None, None) => None,
    };

    collect_logs(&ctx, archive_path.as_deref())?;
    Ok(())
}
