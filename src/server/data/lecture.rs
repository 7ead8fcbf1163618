//! Lecture data repository.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::data::filter::iequals;

#[derive(Debug, Clone)]
pub struct NewLecture {
    pub lecturer_id: i32,
    pub unit_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comments: String,
}

#[derive(Debug, Clone, Default)]
pub struct LectureChanges {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub comments: Option<String>,
}

pub struct LectureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LectureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewLecture) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            lecturer_id: ActiveValue::Set(new.lecturer_id),
            unit_id: ActiveValue::Set(new.unit_id),
            name: ActiveValue::Set(new.name),
            date: ActiveValue::Set(new.date),
            start_time: ActiveValue::Set(new.start_time),
            end_time: ActiveValue::Set(new.end_time),
            comments: ActiveValue::Set(new.comments),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::lecture::Model>, DbErr> {
        entity::prelude::Lecture::find_by_id(id).one(self.db).await
    }

    /// Checks whether the lecturer already has a lecture of this name for the unit on the date.
    pub async fn exists(
        &self,
        lecturer_id: i32,
        unit_id: i32,
        name: &str,
        date: NaiveDate,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Lecture::find()
            .filter(entity::lecture::Column::LecturerId.eq(lecturer_id))
            .filter(entity::lecture::Column::UnitId.eq(unit_id))
            .filter(entity::lecture::Column::Name.eq(name))
            .filter(entity::lecture::Column::Date.eq(date));

        if let Some(id) = excluding {
            query = query.filter(entity::lecture::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Finds lectures by name, ignoring case, optionally narrowed by units and date.
    pub async fn find_by_name(
        &self,
        name: &str,
        unit_ids: Option<Vec<i32>>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<entity::lecture::Model>, DbErr> {
        let mut query = entity::prelude::Lecture::find().filter(iequals(
            entity::prelude::Lecture,
            entity::lecture::Column::Name,
            name,
        ));

        if let Some(unit_ids) = unit_ids {
            query = query.filter(entity::lecture::Column::UnitId.is_in(unit_ids));
        }
        if let Some(date) = date {
            query = query.filter(entity::lecture::Column::Date.eq(date));
        }

        query.all(self.db).await
    }

    /// Lists lectures in schedule order, optionally narrowed by units and lecturer.
    pub async fn get_all(
        &self,
        unit_ids: Option<Vec<i32>>,
        lecturer_id: Option<i32>,
    ) -> Result<Vec<entity::lecture::Model>, DbErr> {
        let mut query = entity::prelude::Lecture::find()
            .order_by_asc(entity::lecture::Column::Date)
            .order_by_asc(entity::lecture::Column::StartTime);

        if let Some(unit_ids) = unit_ids {
            query = query.filter(entity::lecture::Column::UnitId.is_in(unit_ids));
        }
        if let Some(lecturer_id) = lecturer_id {
            query = query.filter(entity::lecture::Column::LecturerId.eq(lecturer_id));
        }

        query.all(self.db).await
    }

    pub async fn update(
        &self,
        lecture: entity::lecture::Model,
        changes: LectureChanges,
    ) -> Result<entity::lecture::Model, DbErr> {
        let mut active: entity::lecture::ActiveModel = lecture.clone().into();

        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(date) = changes.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(start_time) = changes.start_time {
            active.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = changes.end_time {
            active.end_time = ActiveValue::Set(end_time);
        }
        if let Some(comments) = changes.comments {
            active.comments = ActiveValue::Set(comments);
        }

        if !active.is_changed() {
            return Ok(lecture);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lecture::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn get_document_ids(&self, lecture_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::LectureDocument::find()
            .select_only()
            .column(entity::lecture_document::Column::DocumentId)
            .filter(entity::lecture_document::Column::LectureId.eq(lecture_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Replaces the documents attached to a lecture.
    pub async fn set_documents(
        &self,
        lecture_id: i32,
        document_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let current = self.get_document_ids(lecture_id).await?;

        let removed: Vec<i32> = current.difference(document_ids).copied().collect();
        if !removed.is_empty() {
            entity::prelude::LectureDocument::delete_many()
                .filter(entity::lecture_document::Column::LectureId.eq(lecture_id))
                .filter(entity::lecture_document::Column::DocumentId.is_in(removed))
                .exec(self.db)
                .await?;
        }

        let added: Vec<entity::lecture_document::ActiveModel> = document_ids
            .difference(&current)
            .map(|document_id| entity::lecture_document::ActiveModel {
                lecture_id: ActiveValue::Set(lecture_id),
                document_id: ActiveValue::Set(*document_id),
            })
            .collect();
        if !added.is_empty() {
            entity::prelude::LectureDocument::insert_many(added)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }
}
