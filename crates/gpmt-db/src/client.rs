use crate::{ConfigStore, Error, Result, Row, Value};
use postgres::{Client, NoTls};
use tracing::debug;

/// Coordinator connection details, collected once from the CLI flags at
/// startup and passed by reference to whatever needs them.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 5432,
            database: "template1".to_string(),
            username: "gpadmin".to_string(),
            password: String::new(),
        }
    }
}

/// Production [`ConfigStore`] speaking the Postgres wire protocol.
///
/// The tool issues at most one query per invocation, so each call opens a
/// fresh connection rather than holding one across the process lifetime.
pub struct PgConfigStore {
    params: ConnectionParams,
}

impl PgConfigStore {
    pub fn new(params: ConnectionParams) -> Self {
        Self { params }
    }

    fn connect(&self) -> Result<Client> {
        let mut config = postgres::Config::new();
        config
            .host(&self.params.hostname)
            .port(self.params.port)
            .dbname(&self.params.database)
            .user(&self.params.username);

        if !self.params.password.is_empty() {
            config.password(&self.params.password);
        }

        config
            .connect(NoTls)
            .map_err(|err| Error::Connection(err.to_string()))
    }
}

impl ConfigStore for PgConfigStore {
    fn execute_query(&self, sql: &str) -> Result<Vec<Row>> {
        debug!(
            "executing query against {}:{}",
            self.params.hostname, self.params.port
        );

        let mut client = self.connect()?;
        let rows = client
            .query(sql, &[])
            .map_err(|err| Error::Query(err.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| {
                row.columns()
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| (column.name().to_string(), decode_cell(row, idx)))
                    .collect()
            })
            .collect())
    }
}

// The server may report a computed column as text or raw bytes depending on
// the negotiated wire format; try text first, then bytes.
fn decode_cell(row: &postgres::Row, idx: usize) -> Value {
    if let Ok(cell) = row.try_get::<_, Option<String>>(idx) {
        return match cell {
            Some(text) => Value::Text(text),
            None => Value::Null,
        };
    }

    if let Ok(cell) = row.try_get::<_, Option<Vec<u8>>>(idx) {
        return match cell {
            Some(bytes) => Value::Bytes(bytes),
            None => Value::Null,
        };
    }

    Value::Null
}
