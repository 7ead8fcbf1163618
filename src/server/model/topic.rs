//! Domain & parameter models for topic operations.

use crate::{
    model::{
        api::Lookup,
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
    },
    server::{
        error::AppError,
        model::reference::{named_dtos, NamedRef},
    },
};

#[derive(Debug, Clone)]
pub struct Topic {
    pub id: i32,
    pub name: String,
    pub start_page: Option<i32>,
    pub end_page: Option<i32>,
    pub documents: Vec<NamedRef>,
}

impl Topic {
    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            name: self.name,
            start_page: self.start_page,
            end_page: self.end_page,
            documents: named_dtos(self.documents),
        }
    }
}

/// Rejects negative page numbers and ranges that end before they start.
pub fn validate_pages(start_page: Option<i32>, end_page: Option<i32>) -> Result<(), AppError> {
    if start_page.is_some_and(|page| page < 0) || end_page.is_some_and(|page| page < 0) {
        return Err(AppError::BadRequest(
            "Page numbers cannot be negative.".to_string(),
        ));
    }

    if let (Some(start), Some(end)) = (start_page, end_page) {
        if end < start {
            return Err(AppError::BadRequest(
                "The end page cannot come before the start page.".to_string(),
            ));
        }
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub name: String,
    pub start_page: Option<i32>,
    pub end_page: Option<i32>,
    pub documents: Vec<Lookup>,
}

impl From<CreateTopicDto> for CreateTopicParams {
    fn from(dto: CreateTopicDto) -> Self {
        Self {
            name: dto.name,
            start_page: dto.start_page,
            end_page: dto.end_page,
            documents: dto.documents,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTopicParams {
    pub name: Option<String>,
    pub start_page: Option<Option<i32>>,
    pub end_page: Option<Option<i32>>,
    pub documents: Option<Vec<Lookup>>,
}

impl From<UpdateTopicDto> for UpdateTopicParams {
    fn from(dto: UpdateTopicDto) -> Self {
        Self {
            name: dto.name,
            start_page: dto.start_page,
            end_page: dto.end_page,
            documents: dto.documents,
        }
    }
}
