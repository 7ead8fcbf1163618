use url::Url;

/// Absolute URL a document can be downloaded from.
///
/// Falls back to a relative path when `app_url` cannot be joined, such as a
/// `cannot-be-a-base` URL.
pub fn document_download_url(app_url: &Url, document_id: i32) -> String {
    let path = format!("api/documents/{}/download", document_id);

    match app_url.join(&path) {
        Ok(url) => url.to_string(),
        Err(_) => format!("/{}", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_against_app_url() {
        let base = Url::parse("https://academia.example/").unwrap();

        assert_eq!(
            document_download_url(&base, 42),
            "https://academia.example/api/documents/42/download"
        );
    }

    #[test]
    fn keeps_base_path_with_trailing_slash() {
        let base = Url::parse("https://example.org/academia/").unwrap();

        assert_eq!(
            document_download_url(&base, 1),
            "https://example.org/academia/api/documents/1/download"
        );
    }
}
