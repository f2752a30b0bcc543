use axum::async_trait;
use sqlx::{FromRow, PgPool};

use crate::{auth::dto::PublicUser, categories::repo::Category};

/// Product with its owner and category expanded.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub desc: String,
    pub price: i32,
    pub image: String,
    pub qty: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub user: PublicUser,
    pub category: Category,
}

/// Insert payload. `user_id` always comes from the authenticated session.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub desc: String,
    pub price: i32,
    pub image: String,
    pub qty: i32,
    pub user_id: i32,
    pub category_id: i32,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Product>>;
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Product>>;
    /// Inserts and returns the new id; callers re-fetch for associations.
    async fn create(&self, product: NewProduct) -> anyhow::Result<i32>;
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: i32,
    image: String,
    qty: i32,
    user_id: i32,
    category_id: i32,
    user_name: String,
    user_email: String,
    category_name: String,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            desc: r.description,
            price: r.price,
            image: r.image,
            qty: r.qty,
            user_id: r.user_id,
            category_id: r.category_id,
            user: PublicUser {
                id: r.user_id,
                name: r.user_name,
                email: r.user_email,
            },
            category: Category {
                id: r.category_id,
                name: r.category_name,
            },
        }
    }
}

const SELECT_EXPANDED: &str = r#"
    SELECT p.id, p.name, p.description, p.price, p.image, p.qty,
           p.user_id, p.category_id,
           u.name AS user_name, u.email AS user_email,
           c.name AS category_name
    FROM products p
    JOIN users u ON u.id = p.user_id
    JOIN categories c ON c.id = p.category_id
"#;

#[derive(Clone)]
pub struct PgProductRepository {
    db: PgPool,
}

impl PgProductRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_EXPANDED} ORDER BY p.id ASC"))
            .fetch_all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_EXPANDED} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> anyhow::Result<i32> {
        let (id,) = sqlx::query_as::<_, (i32,)>(
            r#"
            INSERT INTO products (name, description, price, image, qty, user_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.desc)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.qty)
        .bind(product.user_id)
        .bind(product.category_id)
        .fetch_one(&self.db)
        .await?;
        Ok(id)
    }
}
