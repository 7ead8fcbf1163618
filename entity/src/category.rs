use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        super::document_category::Relation::Document.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::document_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
