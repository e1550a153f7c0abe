//! Helper functions for creating and classifying errors

use super::types::PortalError;

impl PortalError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn credentials_rejected<S: Into<String>>(message: S) -> Self {
        Self::CredentialsRejected(message.into())
    }

    pub fn invalid_credentials_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredentialsResponse(message.into())
    }

    pub fn session_expired<S: Into<String>>(message: S) -> Self {
        Self::SessionExpired(message.into())
    }

    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Errors produced while establishing a session (login)
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::CredentialsRejected(_) | Self::InvalidCredentialsResponse(_)
        )
    }

    /// Errors after which the caller must send the user back to the login entry point
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired(_) | Self::Unauthenticated(_))
    }

    /// Transport level failures (no HTTP response was received)
    pub fn is_network_error(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpClient(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Short message meant to be displayed next to the control that triggered the failure
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialsRejected(msg) if !msg.is_empty() => msg.clone(),
            Self::CredentialsRejected(_) | Self::InvalidCredentialsResponse(_) => {
                "Email ou mot de passe incorrect".to_string()
            }
            Self::SessionExpired(_) | Self::Unauthenticated(_) => {
                "Votre session a expiré, veuillez vous reconnecter".to_string()
            }
            Self::Forbidden(_) => "Accès refusé".to_string(),
            Self::Validation(msg) if !msg.is_empty() => msg.clone(),
            Self::Validation(_) => "Données invalides".to_string(),
            e if e.is_network_error() => {
                "Impossible de joindre le serveur, vérifiez votre connexion".to_string()
            }
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => "Une erreur est survenue".to_string(),
        }
    }
}
