//! Rolodex store: scoped connection management
//!
//! The store owns the database path, not a connection. Every operation opens
//! its own connection, uses it, and releases it when the scope ends. No
//! connection survives across requests and the application holds no record
//! cache; every read re-queries the store.

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use tracing::info;

use crate::database::core::{DatabaseConn, SchemaManager, SchemaStatus};
use crate::database::customer::{Customer, CustomerRepository};
use crate::validate::CustomerFields;

/// Handle to the rolodex database
///
/// `Store` is the connection manager: it validates the database once at
/// startup (creating or resetting the schema as needed) and afterwards hands
/// out one scoped connection per operation via [`Store::with_connection`].
#[derive(Debug, Clone)]
pub struct Store {
    db_path: String,
}

impl Store {
    /// Open the rolodex database at the specified path
    ///
    /// If the database doesn't exist, it is created and initialized. If the
    /// schema is outdated or corrupted, it is reset and reinitialized.
    pub fn open(path: &str) -> Result<Self> {
        let db = DatabaseConn::open_path(path)?;
        let schema = SchemaManager::new(&db.conn);

        match schema.check_status()? {
            SchemaStatus::Current => {
                info!("Rolodex database schema is current");
            }
            SchemaStatus::NotInitialized => {
                info!("Initializing rolodex database schema");
                schema.initialize()?;
            }
            SchemaStatus::NeedsMigration { from, to } => {
                info!("Rolodex database needs migration from v{} to v{}", from, to);
                schema.reset()?;
                schema.initialize()?;
            }
            SchemaStatus::Incompatible {
                database_version,
                required_version,
            } => {
                return Err(anyhow!(
                    "Database schema v{} is newer than this build supports (v{})",
                    database_version,
                    required_version
                ));
            }
            SchemaStatus::Corrupted => {
                info!("Rolodex database schema is corrupted, resetting");
                schema.reset()?;
                schema.initialize()?;
            }
        }

        Ok(Store {
            db_path: path.to_string(),
        })
    }

    /// Run `body` with a scoped connection
    ///
    /// Acquires one connection, invokes `body` with it, and releases the
    /// connection when the scope ends - on success, on a `?`-propagated
    /// error, and on unwind alike, since the handle closes on drop. A
    /// transaction opened inside `body` rolls back when its guard drops
    /// without a commit; committing is the body's responsibility. If the
    /// connection cannot be acquired the error propagates and `body` never
    /// runs.
    pub fn with_connection<T>(&self, body: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let db = DatabaseConn::open_path(&self.db_path)?;
        body(&db.conn)
    }

    /// List all customers, newest first
    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        self.with_connection(|conn| CustomerRepository::new(conn).list_all())
    }

    /// Fetch a single customer, `None` when absent
    pub fn get_customer(&self, id: i64) -> Result<Option<Customer>> {
        self.with_connection(|conn| CustomerRepository::new(conn).get_by_id(id))
    }

    /// Insert a validated customer and return the assigned id
    pub fn insert_customer(&self, fields: &CustomerFields) -> Result<i64> {
        self.with_connection(|conn| CustomerRepository::new(conn).insert(fields))
    }

    /// Overwrite a customer's fields; `false` when no row matched
    pub fn update_customer(&self, id: i64, fields: &CustomerFields) -> Result<bool> {
        self.with_connection(|conn| CustomerRepository::new(conn).update(id, fields))
    }

    /// Delete a customer; `false` when no row matched
    pub fn delete_customer(&self, id: i64) -> Result<bool> {
        self.with_connection(|conn| CustomerRepository::new(conn).delete(id))
    }

    /// Total number of customer rows
    pub fn customer_count(&self) -> Result<u64> {
        self.with_connection(|conn| CustomerRepository::new(conn).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Gender;
    use tempfile::TempDir;

    fn open_test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rolodex.db");
        let store = Store::open(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn sample_fields() -> CustomerFields {
        CustomerFields {
            first_name: "Jo".to_string(),
            last_name: "Li".to_string(),
            email: "jo@x.com".to_string(),
            location: "NY".to_string(),
            gender: Gender::Other,
        }
    }

    #[test]
    fn test_open_creates_schema() {
        let (_dir, store) = open_test_store();
        assert_eq!(store.customer_count().unwrap(), 0);
    }

    #[test]
    fn test_open_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rolodex.db");
        let path = path.to_str().unwrap();

        let store = Store::open(path).unwrap();
        let id = store.insert_customer(&sample_fields()).unwrap();

        // data survives a reopen
        let store = Store::open(path).unwrap();
        assert_eq!(store.get_customer(id).unwrap().unwrap().first_name, "Jo");
    }

    #[test]
    fn test_operations_span_separate_connections() {
        let (_dir, store) = open_test_store();

        let id = store.insert_customer(&sample_fields()).unwrap();
        assert!(store.update_customer(id, &sample_fields()).unwrap());
        assert!(store.delete_customer(id).unwrap());
        assert_eq!(store.get_customer(id).unwrap(), None);
    }

    #[test]
    fn test_with_connection_rolls_back_failed_body() {
        let (_dir, store) = open_test_store();

        let result: Result<()> = store.with_connection(|conn| {
            let tx = conn.unchecked_transaction()?;
            tx.execute(
                "INSERT INTO customer (first_name, last_name, email, location, gender)
                 VALUES ('Jo', 'Li', 'jo@x.com', 'NY', 'Other')",
                [],
            )?;
            anyhow::bail!("body failed after writing")
            // tx guard drops here without a commit
        });

        assert!(result.is_err());
        assert_eq!(store.customer_count().unwrap(), 0);
    }

    #[test]
    fn test_with_connection_propagates_acquisition_failure() {
        let store = Store {
            db_path: "/nonexistent-dir/rolodex.db".to_string(),
        };

        let result = store.with_connection(|_conn| Ok(()));
        assert!(result.is_err());
    }
}
