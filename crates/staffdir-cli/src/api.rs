//! Staffdir API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Staffdir
pub struct StaffdirClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

/// Uniform response envelope returned by every endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Callers discriminate on `success`, not on the presence of `message`
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T> {
    if !envelope.success {
        bail!(
            "API reported failure: {}",
            envelope.message.unwrap_or_default()
        );
    }
    envelope.data.context("Response carried no data")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummaryDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub full_name: String,
    pub department: Option<DepartmentSummaryDto>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub department: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl StaffdirClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all departments
    pub async fn list_departments(&self) -> Result<Vec<DepartmentDto>> {
        let url = format!("{}/api/departments", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: Envelope<Vec<DepartmentDto>> =
            resp.json().await.context("Failed to parse response")?;

        unwrap_envelope(envelope)
    }

    /// Create a department
    pub async fn create_department(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<DepartmentDto> {
        let url = format!("{}/api/departments", self.base_url);

        let request = CreateDepartmentRequest {
            name: name.to_string(),
            description: description.map(|s| s.to_string()),
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: Envelope<DepartmentDto> =
            resp.json().await.context("Failed to parse response")?;

        unwrap_envelope(envelope)
    }

    /// Delete a department
    pub async fn delete_department(&self, id: Uuid) -> Result<()> {
        let url = format!("{}/api/departments/{}", self.base_url, id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }

    /// List all employees
    pub async fn list_employees(&self) -> Result<Vec<EmployeeDto>> {
        let url = format!("{}/api/employees", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: Envelope<Vec<EmployeeDto>> =
            resp.json().await.context("Failed to parse response")?;

        unwrap_envelope(envelope)
    }

    /// Search employees by name
    pub async fn search_employees(&self, term: &str) -> Result<Vec<EmployeeDto>> {
        let url = format!(
            "{}/api/employees/search/{}",
            self.base_url,
            urlencoding::encode(term)
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: Envelope<Vec<EmployeeDto>> =
            resp.json().await.context("Failed to parse response")?;

        unwrap_envelope(envelope)
    }

    /// Create an employee
    pub async fn create_employee(
        &self,
        first_name: &str,
        last_name: &str,
        department: Uuid,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<EmployeeDto> {
        let url = format!("{}/api/employees", self.base_url);

        let request = CreateEmployeeRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department,
            email: email.map(|s| s.to_string()),
            phone: phone.map(|s| s.to_string()),
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: Envelope<EmployeeDto> =
            resp.json().await.context("Failed to parse response")?;

        unwrap_envelope(envelope)
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: Uuid) -> Result<()> {
        let url = format!("{}/api/employees/{}", self.base_url, id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Staffdir API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }
}
