//! User business logic, including ordering and per-user reports.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        order::OrderRepository, purchase::PurchaseRepository, user::UserRepository,
        CrudRepository,
    },
    error::AppError,
    model::{
        order::{CreateOrderParams, Order},
        purchase::Purchase,
        user::{CreateUserParams, TagUsage, UpdateUserParams, User},
    },
    search::{page::SearchParamResponse, Searchable},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - The username is taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(username_taken(&params.username));
        }

        let user = repo.create(params).await?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Renames a user.
    ///
    /// # Returns
    /// - `Ok(User)` - Renamed user
    /// - `Err(AppError::NotFound)` - No user with this ID
    /// - `Err(AppError::Conflict)` - The username belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo.find_by_username(&params.username).await? {
            if existing.id != params.id {
                return Err(username_taken(&params.username));
            }
        }

        let id = params.id;
        repo.update(params).await?.ok_or_else(|| not_found(id))
    }

    /// Deletes a user with their orders and purchases.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    pub async fn search(
        &self,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<User>, AppError> {
        let request = entity::user::Entity::parse_request(params)?;

        UserRepository::new(self.db).search(&request).await
    }

    /// Places an order for the user.
    ///
    /// The order, its certificate links and its purchases are written in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Order)` - Placed order with its certificates
    /// - `Err(AppError::NotFound)` - The user or one of the certificates does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn make_order(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        self.ensure_exists(params.user_id).await?;

        let order = OrderRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} placed order {} for {}",
            order.user_id,
            order.id,
            order.cost
        );

        Ok(order)
    }

    /// Searches the orders of a user.
    pub async fn orders_of(
        &self,
        id: i32,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<Order>, AppError> {
        let request = entity::order::Entity::parse_request(params)?;
        self.ensure_exists(id).await?;

        OrderRepository::new(self.db)
            .search_by_user(id, &request)
            .await
    }

    /// Searches the purchases of a user.
    pub async fn purchases_of(
        &self,
        id: i32,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<Purchase>, AppError> {
        let request = entity::purchase::Entity::parse_request(params)?;
        self.ensure_exists(id).await?;

        PurchaseRepository::new(self.db)
            .search_by_user(id, &request)
            .await
    }

    /// Tag usage over every order of the user, most used first.
    ///
    /// # Returns
    /// - `Ok(Vec<TagUsage>)` - Usage sorted by count descending then name
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn popular_tags(&self, id: i32) -> Result<Vec<TagUsage>, AppError> {
        self.ensure_exists(id).await?;

        Ok(UserRepository::new(self.db).tag_usage(id).await?)
    }

    /// The tags sharing the highest usage count across the user's orders.
    pub async fn most_popular_tags(&self, id: i32) -> Result<Vec<TagUsage>, AppError> {
        let usage = self.popular_tags(id).await?;

        Ok(top_usage(usage))
    }

    async fn ensure_exists(&self, id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        Ok(())
    }
}

/// Keeps the entries whose count equals the maximum count.
fn top_usage(usage: Vec<TagUsage>) -> Vec<TagUsage> {
    let Some(max) = usage.iter().map(|entry| entry.count).max() else {
        return usage;
    };

    usage.into_iter().filter(|entry| entry.count == max).collect()
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User with id {} not found", id))
}

fn username_taken(username: &str) -> AppError {
    AppError::Conflict(format!("Username '{}' is already taken", username))
}
