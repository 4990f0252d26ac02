use crate::{
    model::{AssessmentCreate, AssessmentUpdate},
    Error,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use time::OffsetDateTime;
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_entity::{assessment, company, user};

#[derive(Clone, Debug)]
pub struct AssessmentService {
    db: Database,
}

impl AssessmentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn check_references(
        &self,
        company_id: Option<i32>,
        assessor_id: Option<i32>,
    ) -> Result<(), Error> {
        if let Some(company_id) = company_id {
            if company::Entity::find_by_id(company_id)
                .count(&self.db)
                .await?
                == 0
            {
                return Err(Error::CompanyNotFound);
            }
        }
        if let Some(assessor_id) = assessor_id {
            if user::Entity::find_by_id(assessor_id).count(&self.db).await? == 0 {
                return Err(Error::AssessorNotFound);
            }
        }
        Ok(())
    }

    pub async fn create(&self, request: AssessmentCreate) -> Result<assessment::Model, Error> {
        request.validate()?;
        self.check_references(Some(request.company_id), request.assessor_id)
            .await?;

        let now = OffsetDateTime::now_utc();
        Ok(assessment::ActiveModel {
            company_id: Set(request.company_id),
            risk_score: Set(request.risk_score),
            risk_level: Set(request.risk_level),
            assessment_type: Set(request.assessment_type),
            date_assessed: Set(request.date_assessed.unwrap_or(now)),
            next_assessment_date: Set(request.next_assessment_date),
            status: Set(request.status),
            assessor_id: Set(request.assessor_id),
            notes: Set(request.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get(&self, id: i32) -> Result<assessment::Model, Error> {
        assessment::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(
        &self,
        company_id: Option<i32>,
        paginated: Paginated,
    ) -> Result<PaginatedResults<assessment::Model>, Error> {
        let mut query = assessment::Entity::find();
        if let Some(company_id) = company_id {
            query = query.filter(assessment::Column::CompanyId.eq(company_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query
            .order_by_asc(assessment::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(
        &self,
        id: i32,
        request: AssessmentUpdate,
    ) -> Result<assessment::Model, Error> {
        request.validate()?;
        self.check_references(None, request.assessor_id).await?;

        let current = assessment::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        let mut active: assessment::ActiveModel = current.into();
        if let Some(risk_score) = request.risk_score {
            active.risk_score = Set(Some(risk_score));
        }
        if let Some(risk_level) = request.risk_level {
            active.risk_level = Set(Some(risk_level));
        }
        if let Some(assessment_type) = request.assessment_type {
            active.assessment_type = Set(assessment_type);
        }
        if let Some(date_assessed) = request.date_assessed {
            active.date_assessed = Set(date_assessed);
        }
        if let Some(next_assessment_date) = request.next_assessment_date {
            active.next_assessment_date = Set(Some(next_assessment_date));
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if let Some(assessor_id) = request.assessor_id {
            active.assessor_id = Set(Some(assessor_id));
        }
        if let Some(notes) = request.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(OffsetDateTime::now_utc());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = assessment::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
