use akkor_db::table::Hotel;
use akkor_shared::user::Actor;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

/// Partial update: `None` keeps the stored value.
#[derive(Validate, Default)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(custom(function = "super::validate_picture_list"))]
    pub picture_list: Option<Vec<String>>,
}

impl UpdateInput {
    fn normalize(self) -> Self {
        Self {
            name: self.name.map(|v| v.trim().to_owned()),
            location: self.location.map(|v| v.trim().to_owned()),
            description: self.description.map(|v| v.trim().to_owned()),
            picture_list: self.picture_list.map(super::normalize_pictures),
        }
    }
}

impl super::Command {
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        input: UpdateInput,
    ) -> akkor_shared::Result<()> {
        if !actor.is_admin() {
            akkor_shared::forbidden!();
        }

        let input = input.normalize();
        input.validate()?;

        if crate::Query(self.0.clone()).find(id).await?.is_none() {
            akkor_shared::not_found!("Hotel {id}");
        }

        let mut statement = Query::update()
            .table(Hotel::Table)
            .value(Hotel::UpdatedAt, akkor_shared::now())
            .and_where(Expr::col(Hotel::Id).eq(id))
            .to_owned();

        if let Some(name) = input.name {
            statement.value(Hotel::NameSearch, name.to_lowercase());
            statement.value(Hotel::Name, name);
        }

        if let Some(location) = input.location {
            statement.value(Hotel::LocationSearch, location.to_lowercase());
            statement.value(Hotel::Location, location);
        }

        if let Some(description) = input.description {
            statement.value(Hotel::Description, description);
        }

        if let Some(picture_list) = input.picture_list {
            statement.value(Hotel::PictureList, serde_json::to_string(&picture_list)?);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(hotel_id = id, actor_id = actor.id, "hotel updated");

        Ok(())
    }
}
