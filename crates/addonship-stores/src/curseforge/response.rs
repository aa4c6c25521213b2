//! Upload response classification

use std::collections::BTreeMap;

use reqwest::StatusCode;

use crate::error::{Result, StoreError};
use crate::types::ValidationErrors;

/// How an upload response is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// The file was created
    Created,
    /// The service rejected individual fields
    Unprocessable,
    /// Anything else; reported with its raw body
    Failed(StatusCode),
}

impl From<StatusCode> for ResponseClass {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::CREATED => Self::Created,
            StatusCode::UNPROCESSABLE_ENTITY => Self::Unprocessable,
            other => Self::Failed(other),
        }
    }
}

/// Turn an upload response into success or the matching error
pub fn classify_upload_response(status: StatusCode, body: &str) -> Result<()> {
    match ResponseClass::from(status) {
        ResponseClass::Created => Ok(()),
        ResponseClass::Unprocessable => {
            let fields: BTreeMap<String, Vec<String>> = serde_json::from_str(body)?;
            Err(StoreError::Validation(ValidationErrors::from(fields)))
        }
        ResponseClass::Failed(status) => Err(StoreError::Remote {
            operation: "upload",
            status: status.as_u16(),
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created() {
        assert!(classify_upload_response(StatusCode::CREATED, "").is_ok());
    }

    #[test]
    fn test_ok_is_not_created() {
        assert_eq!(
            ResponseClass::from(StatusCode::OK),
            ResponseClass::Failed(StatusCode::OK)
        );
        assert!(classify_upload_response(StatusCode::OK, "{}").is_err());
    }

    #[test]
    fn test_unprocessable() {
        let err = classify_upload_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"name":["is too short"]}"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "name: is too short");
        match err {
            StoreError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.messages("name"), Some(&["is too short".to_string()][..]));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unprocessable_with_bad_body() {
        let err = classify_upload_response(StatusCode::UNPROCESSABLE_ENTITY, "<html>").unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn test_other_status() {
        let err = classify_upload_response(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();
        match err {
            StoreError::Remote {
                operation,
                status,
                body,
            } => {
                assert_eq!(operation, "upload");
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }
}
