use super::result_set::ResultSet;
use crate::error::Result;
use serde::Serialize;

pub const SUCCESS_CODE: &str = "200";
pub const SUCCESS_DESC: &str = "success";

/// Outward-facing response for the payment options endpoint.
///
/// The status fields are where partial-failure reporting would go if it is ever
/// surfaced; today assembly always reports success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptionsResponse {
    pub return_code: String,
    pub return_desc: String,
    pub data: ResultSet,
}

impl PaymentOptionsResponse {
    /// Wraps a completed result set with the success status.
    pub fn success(data: ResultSet) -> Self {
        Self {
            return_code: SUCCESS_CODE.to_string(),
            return_desc: SUCCESS_DESC.to_string(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
