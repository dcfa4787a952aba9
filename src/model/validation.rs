use thiserror::Error;

/// A form value rejected before any request is sent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Le champ « {0} » est obligatoire")]
    MissingField(&'static str),
    #[error("Le champ « {field} » est invalide : {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the rejected field, as shown on the form
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::InvalidValue { field, .. } => field,
        }
    }
}
