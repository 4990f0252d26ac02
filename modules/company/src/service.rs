use crate::{
    model::{CompanyCreate, CompanyUpdate, ContactCreate, ContactUpdate},
    Error,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use time::OffsetDateTime;
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_entity::{company, company_contact};

#[derive(Clone, Debug)]
pub struct CompanyService {
    db: Database,
}

impl CompanyService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: CompanyCreate) -> Result<company::Model, Error> {
        request.validate()?;

        let tx = self.db.begin().await?;

        let taken = company::Entity::find()
            .filter(company::Column::Name.eq(&request.name))
            .count(&tx)
            .await?;
        if taken > 0 {
            return Err(Error::Conflict(format!(
                "company '{}' already exists",
                request.name
            )));
        }

        let now = OffsetDateTime::now_utc();
        let model = company::ActiveModel {
            name: Set(request.name),
            industry: Set(request.industry),
            country: Set(request.country),
            risk_tier: Set(request.risk_tier),
            status: Set(request.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> Result<company::Model, Error> {
        company::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(
        &self,
        paginated: Paginated,
    ) -> Result<PaginatedResults<company::Model>, Error> {
        let total = company::Entity::find().count(&self.db).await?;
        let items = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(&self, id: i32, request: CompanyUpdate) -> Result<company::Model, Error> {
        request.validate()?;

        let tx = self.db.begin().await?;

        let current = company::Entity::find_by_id(id)
            .one(&tx)
            .await?
            .ok_or(Error::NotFound)?;

        if let Some(name) = &request.name {
            if *name != current.name {
                let taken = company::Entity::find()
                    .filter(company::Column::Name.eq(name))
                    .count(&tx)
                    .await?;
                if taken > 0 {
                    return Err(Error::Conflict(format!("company '{name}' already exists")));
                }
            }
        }

        let mut active: company::ActiveModel = current.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(industry) = request.industry {
            active.industry = Set(Some(industry));
        }
        if let Some(country) = request.country {
            active.country = Set(Some(country));
        }
        if let Some(risk_tier) = request.risk_tier {
            active.risk_tier = Set(risk_tier);
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        active.updated_at = Set(OffsetDateTime::now_utc());

        let model = active.update(&tx).await?;
        tx.commit().await?;
        Ok(model)
    }

    /// Hard delete. The schema cascades to every dependent row.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = company::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    pub async fn create_contact(
        &self,
        company_id: i32,
        request: ContactCreate,
    ) -> Result<company_contact::Model, Error> {
        request.validate()?;

        // fail fast instead of bubbling up a foreign key violation
        self.get(company_id).await?;

        let model = company_contact::ActiveModel {
            company_id: Set(company_id),
            name: Set(request.name),
            email: Set(request.email),
            phone: Set(request.phone),
            role: Set(request.role),
            is_primary: Set(request.is_primary),
            created_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model)
    }

    pub async fn list_contacts(
        &self,
        company_id: i32,
    ) -> Result<Vec<company_contact::Model>, Error> {
        self.get(company_id).await?;

        Ok(company_contact::Entity::find()
            .filter(company_contact::Column::CompanyId.eq(company_id))
            .order_by_asc(company_contact::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn update_contact(
        &self,
        company_id: i32,
        contact_id: i32,
        request: ContactUpdate,
    ) -> Result<company_contact::Model, Error> {
        request.validate()?;

        let current = company_contact::Entity::find_by_id(contact_id)
            .filter(company_contact::Column::CompanyId.eq(company_id))
            .one(&self.db)
            .await?
            .ok_or(Error::ContactNotFound)?;

        let mut active: company_contact::ActiveModel = current.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(email) = request.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = request.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(role) = request.role {
            active.role = Set(Some(role));
        }
        if let Some(is_primary) = request.is_primary {
            active.is_primary = Set(is_primary);
        }

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_contact(&self, company_id: i32, contact_id: i32) -> Result<(), Error> {
        let result = company_contact::Entity::delete_many()
            .filter(company_contact::Column::Id.eq(contact_id))
            .filter(company_contact::Column::CompanyId.eq(company_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::ContactNotFound);
        }
        Ok(())
    }
}
