use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate vendor risk for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VendorRiskScore {
    pub company_id: i32,
    /// Arithmetic mean of the scored assessments' `risk_score` values.
    pub risk_score: f64,
}
