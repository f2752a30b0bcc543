use axum::async_trait;
use sqlx::{FromRow, PgPool};

use crate::auth::dto::PublicUser;

/// Profile with its owner expanded.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i32,
    pub phone: String,
    pub gender: String,
    pub address: String,
    pub user_id: i32,
    pub user: PublicUser,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub phone: String,
    pub gender: String,
    pub address: String,
    pub user_id: i32,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Profile>>;
    async fn create(&self, profile: NewProfile) -> anyhow::Result<i32>;
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i32,
    phone: String,
    gender: String,
    address: String,
    user_id: i32,
    user_name: String,
    user_email: String,
}

impl From<ProfileRow> for Profile {
    fn from(r: ProfileRow) -> Self {
        Self {
            id: r.id,
            phone: r.phone,
            gender: r.gender,
            address: r.address,
            user_id: r.user_id,
            user: PublicUser {
                id: r.user_id,
                name: r.user_name,
                email: r.user_email,
            },
        }
    }
}

#[derive(Clone)]
pub struct PgProfileRepository {
    db: PgPool,
}

impl PgProfileRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT pr.id, pr.phone, pr.gender, pr.address, pr.user_id,
                   u.name AS user_name, u.email AS user_email
            FROM profiles pr
            JOIN users u ON u.id = pr.user_id
            WHERE pr.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn create(&self, profile: NewProfile) -> anyhow::Result<i32> {
        let (id,) = sqlx::query_as::<_, (i32,)>(
            r#"
            INSERT INTO profiles (phone, gender, address, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&profile.phone)
        .bind(&profile.gender)
        .bind(&profile.address)
        .bind(profile.user_id)
        .fetch_one(&self.db)
        .await?;
        Ok(id)
    }
}
