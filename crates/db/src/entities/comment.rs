//! Comment entity (discussion on a book listing).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub comment: String,

    pub commented_on: DateTimeWithTimeZone,

    pub book_id: i64,

    pub commenter_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_delete = "Cascade"
    )]
    Book,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CommenterId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Commenter,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
