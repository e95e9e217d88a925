use crate::collect::CollectContext;
use crate::{Error, Result};
use gpmt_db::{ConfigStore, Row, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::debug;

/// Log directory of the coordinator segment (content id -1).
pub const COORDINATOR_LOG_DIR_QUERY: &str =
    "select distinct datadir || '/log' from gp_segment_configuration where content = '-1'";

/// Resolve the coordinator's log directory based on priority:
/// 1. Live `gp_segment_configuration` lookup through the configuration store
/// 2. `MASTER_DATA_DIRECTORY` override, joined with `pg_log`
/// 3. `~/gpdb/gp-master/gpseg-1/pg_log` (filesystem convention)
///
/// The store lookup is treated as unreliable: errors and panics from the
/// client are absorbed here and only logged at debug level. Resolution fails
/// only when every source comes up empty.
pub fn resolve_log_directory(ctx: &CollectContext) -> Result<PathBuf> {
    match log_directory_from_store(ctx.store) {
        Ok(dir) => {
            debug!("found log directory from database: {}", dir);
            return Ok(PathBuf::from(dir));
        }
        Err(err) => debug!("failed to get log directory from database: {}", err),
    }

    let coordinator_dir = match ctx.coordinator_dir.as_deref() {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => match &ctx.home_dir {
            Some(home) => home.join("gpdb").join("gp-master").join("gpseg-1"),
            None => return Err(Error::UnresolvedLogDir),
        },
    };

    let log_dir = coordinator_dir.join("pg_log");
    debug!("using fallback log directory: {}", log_dir.display());
    Ok(log_dir)
}

// Soft-failure path: everything that goes wrong here falls through to the
// next source, so errors are plain strings for the debug log.
fn log_directory_from_store(store: &dyn ConfigStore) -> std::result::Result<String, String> {
    let query = panic::catch_unwind(AssertUnwindSafe(|| {
        store.execute_query(COORDINATOR_LOG_DIR_QUERY)
    }));

    let rows = match query {
        Ok(result) => result.map_err(|err| err.to_string())?,
        Err(payload) => return Err(panic_message(payload)),
    };

    if rows.is_empty() {
        return Err("no log directory found in gp_segment_configuration".to_string());
    }

    first_usable_value(&rows)
        .ok_or_else(|| "invalid log directory result from database".to_string())
}

/// First cell that decodes to non-empty text after trimming surrounding
/// whitespace. Byte cells are decoded as UTF-8; `Null`, empty, and
/// whitespace-only cells are skipped.
fn first_usable_value(rows: &[Row]) -> Option<String> {
    for row in rows {
        for value in row.values() {
            let trimmed = match value {
                Value::Text(text) => text.trim().to_string(),
                Value::Bytes(bytes) if !bytes.is_empty() => {
                    String::from_utf8_lossy(bytes).trim().to_string()
                }
                _ => continue,
            };

            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }

    None
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("database connection failed: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("database connection failed: {}", msg)
    } else {
        "database connection failed".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    enum MockStore {
        Rows(Vec<Row>),
        Fail,
        Panic,
    }

    impl ConfigStore for MockStore {
        fn execute_query(&self, _sql: &str) -> gpmt_db::Result<Vec<Row>> {
            match self {
                MockStore::Rows(rows) => Ok(rows.clone()),
                MockStore::Fail => Err(gpmt_db::Error::Connection(
                    "connection refused".to_string(),
                )),
                MockStore::Panic => panic!("driver bug"),
            }
        }
    }

    fn one_row(value: Value) -> Vec<Row> {
        vec![HashMap::from([("?column?".to_string(), value)])]
    }

    fn ctx<'a>(
        store: &'a dyn ConfigStore,
        coordinator_dir: Option<&str>,
        home_dir: Option<&str>,
    ) -> CollectContext<'a> {
        CollectContext {
            store,
            coordinator_dir: coordinator_dir.map(str::to_string),
            home_dir: home_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn test_query_result_wins_over_fallbacks() {
        let store = MockStore::Rows(one_row(Value::Text(
            "/data/coordinator/gpseg-1/log".to_string(),
        )));
        let dir =
            resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), Some("/home/gpadmin")))
                .unwrap();
        assert_eq!(dir, Path::new("/data/coordinator/gpseg-1/log"));
    }

    #[test]
    fn test_query_result_is_trimmed() {
        let store = MockStore::Rows(one_row(Value::Text(
            "  /data/coordinator/gpseg-1/log  \n".to_string(),
        )));
        let dir = resolve_log_directory(&ctx(&store, None, Some("/home/gpadmin"))).unwrap();
        assert_eq!(dir, Path::new("/data/coordinator/gpseg-1/log"));
    }

    #[test]
    fn test_byte_result_is_decoded() {
        let store = MockStore::Rows(one_row(Value::Bytes(
            b"/data/coordinator/gpseg-1/log".to_vec(),
        )));
        let dir = resolve_log_directory(&ctx(&store, None, None)).unwrap();
        assert_eq!(dir, Path::new("/data/coordinator/gpseg-1/log"));
    }

    #[test]
    fn test_empty_result_falls_through_to_override() {
        let store = MockStore::Rows(one_row(Value::Text(String::new())));
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_whitespace_result_falls_through_to_override() {
        let store = MockStore::Rows(one_row(Value::Text("  \n  \t  ".to_string())));
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_null_cell_falls_through() {
        let store = MockStore::Rows(one_row(Value::Null));
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_no_rows_falls_through() {
        let store = MockStore::Rows(Vec::new());
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_query_failure_uses_override() {
        let store = MockStore::Fail;
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_panicking_store_is_absorbed() {
        let store = MockStore::Panic;
        let dir = resolve_log_directory(&ctx(&store, Some("/opt/gp/master"), None)).unwrap();
        assert_eq!(dir, Path::new("/opt/gp/master/pg_log"));
    }

    #[test]
    fn test_query_failure_without_override_uses_home() {
        let store = MockStore::Fail;
        let dir = resolve_log_directory(&ctx(&store, None, Some("/home/gpadmin"))).unwrap();
        assert_eq!(dir, Path::new("/home/gpadmin/gpdb/gp-master/gpseg-1/pg_log"));
    }

    #[test]
    fn test_empty_override_is_treated_as_unset() {
        let store = MockStore::Fail;
        let dir = resolve_log_directory(&ctx(&store, Some(""), Some("/home/gpadmin"))).unwrap();
        assert_eq!(dir, Path::new("/home/gpadmin/gpdb/gp-master/gpseg-1/pg_log"));
    }

    #[test]
    fn test_all_sources_exhausted_is_fatal() {
        let store = MockStore::Fail;
        let result = resolve_log_directory(&ctx(&store, None, None));
        assert!(matches!(result, Err(Error::UnresolvedLogDir)));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let store = MockStore::Rows(one_row(Value::Text("/data/gpseg-1/log".to_string())));
        let context = ctx(&store, Some("/opt/gp/master"), Some("/home/gpadmin"));
        let first = resolve_log_directory(&context).unwrap();
        let second = resolve_log_directory(&context).unwrap();
        assert_eq!(first, second);
    }
}
