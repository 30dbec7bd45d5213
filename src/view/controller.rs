//! Record view controller: fetch, delete, refresh.
//!
//! Orchestrates one fetch-on-mount cycle against a record endpoint and
//! re-runs it after any successful mutation, so the grid is always a
//! direct reflection of the last successful list read. A failed delete
//! leaves the displayed rows untouched and surfaces a notice instead — a
//! forced refresh would mask the distinction between "deleted" and
//! "failed".

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::table::{self, Column, Grid};
use crate::{AppError, Result};

/// Client-side controller for one record collection view.
pub struct RecordView<R> {
    client: reqwest::Client,
    endpoint: String,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    notice: Option<String>,
}

impl<R: DeserializeOwned> RecordView<R> {
    /// Create a view over a record endpoint, e.g.
    /// `http://127.0.0.1:3000/api/employees`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, columns: Vec<Column<R>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            columns,
            rows: Vec::new(),
            notice: None,
        }
    }

    /// Fetch the collection and replace the displayed rows.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` when the request fails or the server
    /// responds with a non-success status; the displayed rows are left
    /// unchanged in that case.
    pub async fn refresh(&mut self) -> Result<()> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Http(format!(
                "list failed with status {}",
                response.status()
            )));
        }

        self.rows = response.json().await?;
        self.notice = None;
        Ok(())
    }

    /// Delete a record after the shell has confirmed intent, then refresh.
    ///
    /// On `404`/`500` the displayed rows stay unchanged and a user-visible
    /// notice is recorded.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the record no longer exists and
    /// `AppError::Http` for any other failure.
    pub async fn delete_confirmed(&mut self, id: &str) -> Result<()> {
        let url = format!("{}/{id}", self.endpoint);
        let response = self.client.delete(&url).send().await?;

        match response.status() {
            status if status.is_success() => self.refresh().await,
            StatusCode::NOT_FOUND => {
                self.notice = Some(format!("record {id} no longer exists"));
                Err(AppError::NotFound(format!("record {id} not found")))
            }
            status => {
                self.notice = Some("delete failed, please retry".into());
                Err(AppError::Http(format!("delete failed with status {status}")))
            }
        }
    }

    /// Render the current rows through the column model.
    #[must_use]
    pub fn grid(&self) -> Grid {
        table::render(&self.columns, &self.rows)
    }

    /// Rows from the last successful refresh.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// User-visible notice from the last failed mutation, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
