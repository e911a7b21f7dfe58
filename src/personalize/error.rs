use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonalizeError {
    #[error("Duplicated keys ({key}) are provided.")]
    DuplicateKey { field: &'static str, key: String },
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Invalid body: {0}")]
    InvalidBody(String),
    #[error("Cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl PersonalizeError {
    pub fn error_code(&self) -> &str {
        match self {
            PersonalizeError::DuplicateKey { .. } => "InvalidArgument",
            PersonalizeError::UnknownVariant { .. } => "InvalidArgument",
            PersonalizeError::UnknownOperation(_) => "UnknownOperation",
            PersonalizeError::InvalidBody(_) => "SerializationException",
            PersonalizeError::Unreadable { .. } => "UnreadableInput",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "__type": self.error_code(),
            "message": self.message(),
        })
    }
}

impl From<serde_json::Error> for PersonalizeError {
    fn from(err: serde_json::Error) -> Self {
        PersonalizeError::InvalidBody(err.to_string())
    }
}
