use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { status: 401, .. } | Self::Status { status: 403, .. } => {
                "Session expirée ou accès refusé, veuillez vous reconnecter.".to_string()
            }
            Self::Network(_) => "Impossible de joindre le serveur.".to_string(),
            _ => super::Error::GENERIC_MESSAGE.to_string(),
        }
    }
}
