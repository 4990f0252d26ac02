use crate::{
    model::{UserCreate, UserUpdate},
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
use tprm_entity::user;
use tprm_module_auth::password;

#[derive(Clone, Debug)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: UserCreate) -> Result<user::Model, Error> {
        request.validate()?;

        let tx = self.db.begin().await?;

        if user::Entity::find()
            .filter(user::Column::Username.eq(&request.username))
            .count(&tx)
            .await?
            > 0
        {
            return Err(Error::Conflict(format!(
                "username '{}' is taken",
                request.username
            )));
        }
        if user::Entity::find()
            .filter(user::Column::Email.eq(&request.email))
            .count(&tx)
            .await?
            > 0
        {
            return Err(Error::Conflict(format!(
                "email '{}' is taken",
                request.email
            )));
        }

        let model = user::ActiveModel {
            username: Set(request.username),
            email: Set(request.email),
            password: Set(password::hash_password(&request.password)?),
            full_name: Set(request.full_name),
            role: Set(request.role),
            is_active: Set(request.is_active),
            last_login: Set(None),
            created_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> Result<user::Model, Error> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn list(&self, paginated: Paginated) -> Result<PaginatedResults<user::Model>, Error> {
        let total = user::Entity::find().count(&self.db).await?;
        let items = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    pub async fn update(&self, id: i32, request: UserUpdate) -> Result<user::Model, Error> {
        request.validate()?;

        let tx = self.db.begin().await?;

        let current = user::Entity::find_by_id(id)
            .one(&tx)
            .await?
            .ok_or(Error::NotFound)?;

        if let Some(email) = &request.email {
            if *email != current.email
                && user::Entity::find()
                    .filter(user::Column::Email.eq(email))
                    .count(&tx)
                    .await?
                    > 0
            {
                return Err(Error::Conflict(format!("email '{email}' is taken")));
            }
        }

        let mut active: user::ActiveModel = current.into();
        if let Some(email) = request.email {
            active.email = Set(email);
        }
        if let Some(full_name) = request.full_name {
            active.full_name = Set(Some(full_name));
        }
        if let Some(role) = request.role {
            active.role = Set(role);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(&tx).await?;
        tx.commit().await?;
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
