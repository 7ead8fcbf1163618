use sea_orm::entity::prelude::*;

/// A lecture delivered by a lecturer for a unit on a given date.
///
/// (lecturer_id, unit_id, name, date) is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lecture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lecturer_id: i32,
    pub unit_id: i32,
    pub name: String,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub comments: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lecturer,
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Unit,
}

impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
