use crate::Error;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tprm_common::db::Database;
use tprm_entity::assessment;

#[derive(Clone, Debug)]
pub struct ScoringService {
    db: Database,
}

impl ScoringService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Mean `risk_score` over the company's scored assessments.
    ///
    /// Assessments without a score are ignored; a company with no scored
    /// assessments has no vendor risk score at all, which is distinct from a
    /// score of zero.
    pub async fn calculate_vendor_risk_score(
        &self,
        company_id: i32,
    ) -> Result<Option<f64>, Error> {
        let scores: Vec<f64> = assessment::Entity::find()
            .filter(assessment::Column::CompanyId.eq(company_id))
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|assessment| assessment.risk_score)
            .collect();

        if scores.is_empty() {
            return Ok(None);
        }

        Ok(Some(scores.iter().sum::<f64>() / scores.len() as f64))
    }
}
