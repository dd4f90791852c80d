//! Book entity (catalog listing).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,

    pub author: String,

    pub genre: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub posted_on: DateTimeWithTimeZone,

    /// Storage path of the uploaded cover image
    pub book_cover: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,

    /// Profile of the seller
    pub owner_id: i64,

    /// Account that created the listing
    pub posted_by_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_profile::Entity",
        from = "Column::OwnerId",
        to = "super::user_profile::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PostedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    PostedBy,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,

    #[sea_orm(has_many = "super::book_like::Entity")]
    Likes,

    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostedBy.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::book_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
