use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacetError {
    #[error("Missing facet field in backend response: {0}")]
    MissingField(String),

    #[error("Invalid facet response: {0}")]
    InvalidFacetResponse(String),

    #[error("Query parse error: {0}")]
    QueryParse(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FacetError>;

impl From<std::io::Error> for FacetError {
    fn from(e: std::io::Error) -> Self {
        FacetError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FacetError {
    fn from(e: serde_json::Error) -> Self {
        FacetError::Json(e.to_string())
    }
}

impl FacetError {
    /// Status a request layer should answer with when this error escapes.
    ///
    /// Malformed aggregation output is the backend's fault (502); a query
    /// string that does not parse is the caller's (400).
    pub fn status_code(&self) -> StatusCode {
        match self {
            FacetError::MissingField(_) => StatusCode::BAD_GATEWAY,
            FacetError::InvalidFacetResponse(_) => StatusCode::BAD_GATEWAY,
            FacetError::QueryParse(_) => StatusCode::BAD_REQUEST,
            FacetError::Json(_) => StatusCode::BAD_REQUEST,
            FacetError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FacetError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── status_code mapping ─────────────────────────────────────────────

    #[test]
    fn missing_field_is_502() {
        let e = FacetError::MissingField("_index".into());
        assert_eq!(e.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn invalid_facet_response_is_502() {
        let e = FacetError::InvalidFacetResponse("expected object".into());
        assert_eq!(e.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn query_parse_is_400() {
        let e = FacetError::QueryParse("unexpected token".into());
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn json_error_is_400() {
        let e = FacetError::Json("invalid json".into());
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_error_is_500() {
        let e = FacetError::Io("disk full".into());
        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_is_500() {
        let e = FacetError::Config("duplicate facet field".into());
        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ── Display / Error trait ───────────────────────────────────────────

    #[test]
    fn error_display_includes_field() {
        let e = FacetError::MissingField("funder.name.keyword".into());
        let msg = format!("{}", e);
        assert!(msg.contains("funder.name.keyword"));
    }

    // ── From conversions ────────────────────────────────────────────────

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FacetError = io_err.into();
        assert!(matches!(err, FacetError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: FacetError = json_err.into();
        assert!(matches!(err, FacetError::Json(_)));
    }
}
