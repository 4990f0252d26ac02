use crate::{
    model::{TaskCreate, TaskUpdate},
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
use tprm_entity::{assessment, company, task};

#[derive(Clone, Debug)]
pub struct TaskService {
    db: Database,
}

impl TaskService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn check_assessment(&self, assessment_id: Option<i32>) -> Result<(), Error> {
        if let Some(assessment_id) = assessment_id {
            if assessment::Entity::find_by_id(assessment_id)
                .count(&self.db)
                .await?
                == 0
            {
                return Err(Error::AssessmentNotFound);
            }
        }
        Ok(())
    }

    pub async fn create(&self, request: TaskCreate) -> Result<task::Model, Error> {
        request.validate()?;

        if company::Entity::find_by_id(request.company_id)
            .count(&self.db)
            .await?
            == 0
        {
            return Err(Error::CompanyNotFound);
        }
        self.check_assessment(request.assessment_id).await?;

        let now = OffsetDateTime::now_utc();
        Ok(task::ActiveModel {
            company_id: Set(request.company_id),
            assessment_id: Set(request.assessment_id),
            description: Set(request.description),
            assigned_to: Set(request.assigned_to),
            due_date: Set(request.due_date),
            status: Set(request.status),
            priority: Set(request.priority),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get(&self, id: i32) -> Result<task::Model, Error> {
        task::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(
        &self,
        company_id: Option<i32>,
        paginated: Paginated,
    ) -> Result<PaginatedResults<task::Model>, Error> {
        let mut query = task::Entity::find();
        if let Some(company_id) = company_id {
            query = query.filter(task::Column::CompanyId.eq(company_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query
            .order_by_asc(task::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(&self, id: i32, request: TaskUpdate) -> Result<task::Model, Error> {
        request.validate()?;
        self.check_assessment(request.assessment_id).await?;

        let current = task::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        let mut active: task::ActiveModel = current.into();
        if let Some(assessment_id) = request.assessment_id {
            active.assessment_id = Set(Some(assessment_id));
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }
        if let Some(assigned_to) = request.assigned_to {
            active.assigned_to = Set(Some(assigned_to));
        }
        if let Some(due_date) = request.due_date {
            active.due_date = Set(Some(due_date));
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if let Some(priority) = request.priority {
            active.priority = Set(priority);
        }
        active.updated_at = Set(OffsetDateTime::now_utc());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = task::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
