//! Order repository.

use std::sync::Arc;

use crate::entities::{book, order, order_item, Order, OrderItem};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Order repository for database operations.
///
/// Order items are managed through this repository; an item row
/// never outlives its order.
#[derive(Clone)]
pub struct OrderRepository {
    db: Arc<DatabaseConnection>,
}

impl OrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an order by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<order::Model>> {
        Order::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an order by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i64) -> AppResult<order::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))
    }

    /// Create a new order.
    pub async fn create(&self, model: order::ActiveModel) -> AppResult<order::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Add a purchased book to an order.
    pub async fn add_item(&self, model: order_item::ActiveModel) -> AppResult<order_item::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user's orders, most recent first (paginated).
    pub async fn find_by_user(
        &self,
        user_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<order::Model>> {
        let mut query = Order::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(order::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the items in an order.
    pub async fn find_items(&self, order_id: i64) -> AppResult<Vec<order_item::Model>> {
        OrderItem::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the items in an order together with their books.
    pub async fn find_items_with_books(
        &self,
        order_id: i64,
    ) -> AppResult<Vec<(order_item::Model, Option<book::Model>)>> {
        OrderItem::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .find_also_related(crate::entities::Book)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count a user's orders.
    pub async fn count_by_user(&self, user_id: i64) -> AppResult<u64> {
        Order::find()
            .filter(order::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::prelude::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_order(id: i64, user_id: i64, total: Decimal) -> order::Model {
        order::Model {
            id,
            ordered_on: Utc::now().into(),
            total,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let orders = vec![
            create_test_order(2, 1, Decimal::new(4998, 2)),
            create_test_order(1, 1, Decimal::new(1999, 2)),
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([orders.clone()])
                .into_connection(),
        );

        let repo = OrderRepository::new(db);
        let result = repo.find_by_user(1, 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].total, Decimal::new(4998, 2));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_is_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<order::Model>::new()])
                .into_connection(),
        );

        let repo = OrderRepository::new(db);
        let result = repo.get_by_id(12).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_items_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<order_item::Model>::new()])
                .into_connection(),
        );

        let repo = OrderRepository::new(db);
        let result = repo.find_items(1).await.unwrap();

        assert!(result.is_empty());
    }
}
