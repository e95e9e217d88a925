//! Log collection core for the Greenplum Magic Tool.
//!
//! One collection run resolves where the coordinator's log directory lives
//! (live catalog query, then the `MASTER_DATA_DIRECTORY` override, then the
//! filesystem convention under the user's home), walks it, and streams every
//! regular file into a single `tar.gz` archive. Runs are synchronous and
//! single-threaded; the only ordering discipline is the innermost-first
//! close of the archive's layered writers.

mod archive;
mod collect;
mod error;
mod resolve;

pub use archive::{LogArchive, entry_name};
pub use collect::{COORDINATOR_DATA_DIR_ENV, CollectContext, collect_logs, default_archive_name};
pub use error::{Error, Result};
pub use resolve::{COORDINATOR_LOG_DIR_QUERY, resolve_log_directory};
