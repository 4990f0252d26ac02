use crate::{
    model::{EngagementCreate, EngagementUpdate},
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
use tprm_entity::{company, engagement};

#[derive(Clone, Debug)]
pub struct EngagementService {
    db: Database,
}

impl EngagementService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: EngagementCreate) -> Result<engagement::Model, Error> {
        request.validate()?;

        if company::Entity::find_by_id(request.company_id)
            .count(&self.db)
            .await?
            == 0
        {
            return Err(Error::CompanyNotFound);
        }

        let now = OffsetDateTime::now_utc();
        Ok(engagement::ActiveModel {
            company_id: Set(request.company_id),
            name: Set(request.name),
            description: Set(request.description),
            start_date: Set(request.start_date),
            end_date: Set(request.end_date),
            status: Set(request.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get(&self, id: i32) -> Result<engagement::Model, Error> {
        engagement::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(
        &self,
        company_id: Option<i32>,
        paginated: Paginated,
    ) -> Result<PaginatedResults<engagement::Model>, Error> {
        let mut query = engagement::Entity::find();
        if let Some(company_id) = company_id {
            query = query.filter(engagement::Column::CompanyId.eq(company_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query
            .order_by_asc(engagement::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(
        &self,
        id: i32,
        request: EngagementUpdate,
    ) -> Result<engagement::Model, Error> {
        request.validate()?;

        let current = engagement::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        let mut active: engagement::ActiveModel = current.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(start_date) = request.start_date {
            active.start_date = Set(Some(start_date));
        }
        if let Some(end_date) = request.end_date {
            active.end_date = Set(Some(end_date));
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        active.updated_at = Set(OffsetDateTime::now_utc());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = engagement::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
