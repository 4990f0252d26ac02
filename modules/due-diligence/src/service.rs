use crate::{
    model::{DueDiligenceCreate, DueDiligenceUpdate},
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
use tprm_entity::{company, due_diligence_request, user};

#[derive(Clone, Debug)]
pub struct DueDiligenceService {
    db: Database,
}

impl DueDiligenceService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn check_user(&self, user_id: Option<i32>) -> Result<(), Error> {
        if let Some(user_id) = user_id {
            if user::Entity::find_by_id(user_id).count(&self.db).await? == 0 {
                return Err(Error::UserNotFound);
            }
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: DueDiligenceCreate,
    ) -> Result<due_diligence_request::Model, Error> {
        request.validate()?;

        if company::Entity::find_by_id(request.company_id)
            .count(&self.db)
            .await?
            == 0
        {
            return Err(Error::CompanyNotFound);
        }
        self.check_user(request.requester_id).await?;
        self.check_user(request.assignee_id).await?;

        let now = OffsetDateTime::now_utc();
        Ok(due_diligence_request::ActiveModel {
            company_id: Set(request.company_id),
            request_details: Set(request.request_details),
            request_date: Set(now),
            status: Set(request.status),
            priority: Set(request.priority),
            due_date: Set(request.due_date),
            requester_id: Set(request.requester_id),
            assignee_id: Set(request.assignee_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get(&self, id: i32) -> Result<due_diligence_request::Model, Error> {
        due_diligence_request::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(
        &self,
        company_id: Option<i32>,
        paginated: Paginated,
    ) -> Result<PaginatedResults<due_diligence_request::Model>, Error> {
        let mut query = due_diligence_request::Entity::find();
        if let Some(company_id) = company_id {
            query = query.filter(due_diligence_request::Column::CompanyId.eq(company_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query
            .order_by_asc(due_diligence_request::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(
        &self,
        id: i32,
        request: DueDiligenceUpdate,
    ) -> Result<due_diligence_request::Model, Error> {
        request.validate()?;
        self.check_user(request.requester_id).await?;
        self.check_user(request.assignee_id).await?;

        let current = due_diligence_request::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        let mut active: due_diligence_request::ActiveModel = current.into();
        if let Some(request_details) = request.request_details {
            active.request_details = Set(request_details);
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if let Some(priority) = request.priority {
            active.priority = Set(priority);
        }
        if let Some(due_date) = request.due_date {
            active.due_date = Set(Some(due_date));
        }
        if let Some(requester_id) = request.requester_id {
            active.requester_id = Set(Some(requester_id));
        }
        if let Some(assignee_id) = request.assignee_id {
            active.assignee_id = Set(Some(assignee_id));
        }
        active.updated_at = Set(OffsetDateTime::now_utc());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = due_diligence_request::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
