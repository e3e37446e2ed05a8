//! Customer repository for the rolodex database
//!
//! This module provides data access operations for customer records. The
//! repository performs no validation itself; callers hand it fields that
//! already passed the validator.

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::validate::{CustomerFields, CustomerForm, Gender};

/// A customer record as persisted in the store
///
/// `id` is assigned by the store on insert and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub location: String,
    pub gender: Gender,
}

impl Customer {
    /// Form representation of this record, for pre-filling the edit page
    pub fn to_form(&self) -> CustomerForm {
        CustomerForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            gender: self.gender.as_str().to_string(),
        }
    }
}

/// Repository for customer record operations
///
/// Borrows a connection for its lifetime; each instance is expected to live
/// inside a single connection scope. All SQL uses parameter binding - user
/// input is never interpolated into statements.
pub struct CustomerRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List all customers, newest first (descending id)
    pub fn list_all(&self) -> Result<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, first_name, last_name, email, location, gender
                 FROM customer
                 ORDER BY id DESC",
            )
            .map_err(|e| anyhow!("Failed to prepare customer listing: {}", e))?;

        let rows = stmt
            .query_map([], map_customer_row)
            .map_err(|e| anyhow!("Failed to query customers: {}", e))?;

        let mut customers = Vec::new();
        for row in rows {
            customers.push(row.map_err(|e| anyhow!("Failed to read customer row: {}", e))?);
        }
        Ok(customers)
    }

    /// Fetch a single customer by id
    ///
    /// Returns `None` when no row matches; "not found" is not an error here.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let result = self.conn.query_row(
            "SELECT id, first_name, last_name, email, location, gender
             FROM customer
             WHERE id = ?1",
            [id],
            map_customer_row,
        );

        match result {
            Ok(customer) => Ok(Some(customer)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(anyhow!("Failed to fetch customer {}: {}", id, e)),
        }
    }

    /// Insert a new customer and return the store-assigned id
    pub fn insert(&self, fields: &CustomerFields) -> Result<i64> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| anyhow!("Failed to begin transaction: {}", e))?;

        tx.execute(
            "INSERT INTO customer (first_name, last_name, email, location, gender)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.first_name,
                fields.last_name,
                fields.email,
                fields.location,
                fields.gender.as_str(),
            ],
        )
        .map_err(|e| anyhow!("Failed to insert customer: {}", e))?;

        let id = tx.last_insert_rowid();
        tx.commit()
            .map_err(|e| anyhow!("Failed to commit customer insert: {}", e))?;
        Ok(id)
    }

    /// Overwrite all five fields of the customer matching `id`
    ///
    /// Returns whether a matching row existed. The caller decides how to
    /// report "not found" versus "updated".
    pub fn update(&self, id: i64, fields: &CustomerFields) -> Result<bool> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| anyhow!("Failed to begin transaction: {}", e))?;

        let affected = tx
            .execute(
                "UPDATE customer
                 SET first_name = ?1, last_name = ?2, email = ?3, location = ?4, gender = ?5
                 WHERE id = ?6",
                params![
                    fields.first_name,
                    fields.last_name,
                    fields.email,
                    fields.location,
                    fields.gender.as_str(),
                    id,
                ],
            )
            .map_err(|e| anyhow!("Failed to update customer {}: {}", id, e))?;

        tx.commit()
            .map_err(|e| anyhow!("Failed to commit customer update: {}", e))?;
        Ok(affected > 0)
    }

    /// Delete the customer matching `id`
    ///
    /// Commits only when a row was actually removed; returns whether the
    /// deletion occurred.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| anyhow!("Failed to begin transaction: {}", e))?;

        let affected = tx
            .execute("DELETE FROM customer WHERE id = ?1", [id])
            .map_err(|e| anyhow!("Failed to delete customer {}: {}", id, e))?;

        if affected == 0 {
            // nothing removed; the guard drops without a commit
            return Ok(false);
        }

        tx.commit()
            .map_err(|e| anyhow!("Failed to commit customer delete: {}", e))?;
        Ok(true)
    }

    /// Get the total number of customer rows
    pub fn count(&self) -> Result<u64> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM customer", [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to count customers: {}", e))?;
        Ok(count)
    }
}

fn map_customer_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    let gender_text: String = row.get(5)?;
    // Stored values all passed validation; anything else means the row was
    // written outside the application.
    let gender = Gender::parse(&gender_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unrecognized gender value '{}'", gender_text).into(),
        )
    })?;

    Ok(Customer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        location: row.get(4)?,
        gender,
    })
}
