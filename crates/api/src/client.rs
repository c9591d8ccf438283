// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remote employee service.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request_response::EmployeeDto;
use async_trait::async_trait;
use emp_console_domain::{EmployeeId, EmployeeRecord, StateName};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

/// Operations offered by the remote employee service.
///
/// Every call is independent; the service is the source of truth and the
/// console reloads the whole list after each mutation.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetches every employee.
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError>;

    /// Creates an employee. The record's identifier is ignored.
    ///
    /// Returns the created record when the service echoes it.
    async fn create_employee(
        &self,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError>;

    /// Replaces the employee with identifier `id`.
    ///
    /// Returns the updated record when the service echoes it.
    async fn update_employee(
        &self,
        id: EmployeeId,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError>;

    /// Deletes the employee with identifier `id`.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError>;

    /// Fetches the selectable state names.
    async fn list_states(&self) -> Result<Vec<StateName>, ApiError>;

    /// Returns the address of the server-rendered report.
    fn report_url(&self) -> String;

    /// Downloads the server-rendered report.
    async fn fetch_report(&self) -> Result<Vec<u8>, ApiError>;
}

/// [`EmployeeApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client: Client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Maps non-success statuses to errors.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url: String = response.url().to_string();
        let body: String = response.text().await?;
        debug!(%status, %url, "Employee service rejected request");
        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(url)),
            _ => Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Reads an employee from the response body, tolerating an empty body.
    async fn read_optional_employee(response: Response) -> Result<Option<EmployeeRecord>, ApiError> {
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let dto: EmployeeDto = serde_json::from_slice(&body)?;
        Ok(Some(dto.into_record()))
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let response: Response = self.client.get(self.url("employee")).send().await?;
        let response: Response = Self::check_status(response).await?;
        let dtos: Vec<EmployeeDto> = response.json().await?;
        debug!(count = dtos.len(), "Fetched employees");
        Ok(dtos.into_iter().map(EmployeeDto::into_record).collect())
    }

    async fn create_employee(
        &self,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError> {
        let mut body: EmployeeDto = EmployeeDto::from_record(record);
        body.id = None;

        let response: Response = self
            .client
            .post(self.url("employee"))
            .json(&body)
            .send()
            .await?;
        let response: Response = Self::check_status(response).await?;
        Self::read_optional_employee(response).await
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError> {
        let mut body: EmployeeDto = EmployeeDto::from_record(record);
        body.id = Some(id.value());

        let response: Response = self
            .client
            .put(self.url(&format!("employee/{id}")))
            .json(&body)
            .send()
            .await?;
        let response: Response = Self::check_status(response).await?;
        Self::read_optional_employee(response).await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        let response: Response = self
            .client
            .delete(self.url(&format!("employee/{id}")))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn list_states(&self) -> Result<Vec<StateName>, ApiError> {
        let response: Response = self.client.get(self.url("state")).send().await?;
        let response: Response = Self::check_status(response).await?;
        let names: Vec<String> = response.json().await?;
        Ok(names.iter().map(|name| StateName::new(name)).collect())
    }

    fn report_url(&self) -> String {
        self.url("employee/report")
    }

    async fn fetch_report(&self) -> Result<Vec<u8>, ApiError> {
        let response: Response = self.client.get(self.report_url()).send().await?;
        let response: Response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ApiError::InvalidResponse(String::from("Report is empty")));
        }
        Ok(body.to_vec())
    }
}
