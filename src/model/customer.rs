use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a create customer request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub full_name: String,
    pub email: String,
    #[serde(rename = "gitHubUsername")]
    pub github_username: String,
    pub date_of_birth: NaiveDate,
}

/// Create customer body as received, before any field is checked.
///
/// Every field is optional and the date is kept as text, so missing or malformed values
/// are reported as validation errors after the GitHub lookup rather than rejected while
/// the body is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "gitHubUsername")]
    pub github_username: Option<String>,
    pub date_of_birth: Option<String>,
}

impl From<CustomerRequest> for CustomerPayload {
    fn from(request: CustomerRequest) -> Self {
        Self {
            full_name: Some(request.full_name),
            email: Some(request.email),
            github_username: Some(request.github_username),
            date_of_birth: Some(request.date_of_birth.to_string()),
        }
    }
}

/// A stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(rename = "gitHubUsername")]
    pub github_username: String,
    pub date_of_birth: NaiveDate,
}

/// Every stored customer, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetAllCustomersResponse {
    pub customers: Vec<CustomerResponse>,
}

impl From<entity::customer::Model> for CustomerResponse {
    fn from(model: entity::customer::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            github_username: model.github_username,
            date_of_birth: model.date_of_birth,
        }
    }
}
