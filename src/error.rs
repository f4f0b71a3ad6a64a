//! Credential codec errors.

use thiserror::Error;

/// Errors returned when decoding or encoding credential documents.
///
/// Structural problems are fatal for the operation that hit them; anything
/// recoverable (missing optional fields, unknown nested keys) is absorbed by
/// the codec instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// A position that must hold a JSON object holds something else. The
    /// payload names the position, e.g. `credential` for the document root.
    #[error("`{0}` is not a JSON object")]
    NotAnObject(String),

    /// A field the credential schema mandates is absent from the source
    /// document. The payload is the missing key.
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    /// A scalar token could not be resolved to any supported primitive, or a
    /// value of the wrong shape occupies a fixed-shape slot, e.g. an object
    /// where a primitive or an array of strings is required.
    #[error("malformed literal `{0}`")]
    MalformedLiteral(String),

    /// A value cannot be represented in JSON, e.g. a non-finite float.
    #[error("invalid value: {0}")]
    Value(String),

    /// The underlying JSON parser or emitter failed, e.g. on input that is
    /// not valid JSON text.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
