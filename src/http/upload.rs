use axum::extract::Multipart;

use crate::http::error::ApiError;

pub const FIELD_MONTH: &str = "month";
pub const FIELD_CSV_FILE: &str = "csv_file";

/// The two fields of the upload form, decoded.
#[derive(Debug, Clone)]
pub struct SalesUpload {
    pub month: String,
    pub file_name: Option<String>,
    pub csv_text: String
}

impl SalesUpload {
    /// Collects `month` and `csv_file` from a multipart submission. Unknown fields are skipped.
    ///
    /// # Errors
    /// Returns a 400 `ApiError` when either field is missing or the file is not UTF-8, and
    /// passes through the multipart status (such as 413 for oversized bodies) otherwise.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut month = None;
        let mut file_name = None;
        let mut csv_text = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);

            match name.as_deref() {
                Some(FIELD_MONTH) => {
                    month = Some(field.text().await?.trim().to_string());
                }
                Some(FIELD_CSV_FILE) => {
                    file_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await?;
                    let text = String::from_utf8(bytes.to_vec())
                        .map_err(|_| ApiError::bad_request("Uploaded file is not valid UTF-8 text"))?;
                    csv_text = Some(text);
                }
                _ => {}
            }
        }

        let month = month
            .filter(|month| !month.is_empty())
            .ok_or_else(|| ApiError::bad_request(format!("Missing form field '{FIELD_MONTH}'")))?;

        let csv_text = csv_text
            .ok_or_else(|| ApiError::bad_request(format!("Missing form field '{FIELD_CSV_FILE}'")))?;

        Ok(Self { month, file_name, csv_text })
    }
}
