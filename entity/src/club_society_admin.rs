//! Junction table linking clubs and societies to their admin users.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club_society_admin")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub club_society_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club_society::Entity",
        from = "Column::ClubSocietyId",
        to = "super::club_society::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ClubSociety,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::club_society::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubSociety.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
