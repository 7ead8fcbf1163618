use url::Url;

use crate::{
    model::api::Lookup,
    server::{
        error::{document::DocumentError, AppError},
        model::document::{UpdateDocumentParams, UploadDocumentParams},
        service::document::DocumentService,
        storage::DocumentStorage,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod download;
mod upload;

fn app_url() -> Url {
    Url::parse("http://localhost:8080/").unwrap()
}

fn upload(uploaded_by: i32, filename: &str, title: Option<&str>) -> UploadDocumentParams {
    UploadDocumentParams {
        filename: Some(filename.to_string()),
        content_type: Some("application/pdf".to_string()),
        bytes: Some(b"%PDF-1.4 test".to_vec()),
        title: title.map(str::to_string),
        ..UploadDocumentParams::new(uploaded_by)
    }
}
