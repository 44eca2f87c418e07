use akkor_db::table::Hotel;
use akkor_shared::user::Actor;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

#[derive(Validate, Default)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "super::validate_picture_list"))]
    pub picture_list: Vec<String>,
}

impl CreateInput {
    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            location: self.location.trim().to_owned(),
            description: self.description.trim().to_owned(),
            picture_list: super::normalize_pictures(self.picture_list),
        }
    }
}

impl super::Command {
    pub async fn create(&self, actor: &Actor, input: CreateInput) -> akkor_shared::Result<i64> {
        if !actor.is_admin() {
            akkor_shared::forbidden!();
        }

        let input = input.normalize();
        input.validate()?;

        let now = akkor_shared::now();
        let statement = Query::insert()
            .into_table(Hotel::Table)
            .columns([
                Hotel::Name,
                Hotel::Location,
                Hotel::Description,
                Hotel::PictureList,
                Hotel::NameSearch,
                Hotel::LocationSearch,
                Hotel::CreatedAt,
                Hotel::UpdatedAt,
            ])
            .values_panic([
                input.name.to_owned().into(),
                input.location.to_owned().into(),
                input.description.into(),
                serde_json::to_string(&input.picture_list)?.into(),
                input.name.to_lowercase().into(),
                input.location.to_lowercase().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(hotel_id = id, name = %input.name, actor_id = actor.id, "hotel created");

        Ok(id)
    }
}
