//! Local sign-in mock. Nothing is verified: signing in just fills the profile
//! with what the chosen method would have provided.

pub mod handlers;

use crate::errors::AppError;
use crate::models::{LoginMethod, ProfileUpdate};

pub fn email_sign_in(email: &str) -> Result<ProfileUpdate, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    Ok(ProfileUpdate {
        email: Some(email.to_string()),
        login_method: Some(LoginMethod::Email),
        ..ProfileUpdate::default()
    })
}

pub fn provider_sign_in(provider: LoginMethod) -> Result<ProfileUpdate, AppError> {
    if provider == LoginMethod::Email {
        return Err(AppError::Validation(
            "Use email sign-in for the email method".to_string(),
        ));
    }
    let label = provider.label();
    Ok(ProfileUpdate {
        name: Some(format!("{label} User")),
        email: Some(format!("user@{}.example.com", label.to_lowercase())),
        login_method: Some(provider),
        ..ProfileUpdate::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_sign_in_trims() {
        let update = email_sign_in("  a@b.co ").unwrap();
        assert_eq!(update.email.as_deref(), Some("a@b.co"));
        assert_eq!(update.login_method, Some(LoginMethod::Email));
        assert_eq!(update.name, None);
    }

    #[test]
    fn test_email_sign_in_requires_email() {
        assert!(matches!(email_sign_in("   "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_provider_sign_in_fills_identity() {
        let update = provider_sign_in(LoginMethod::Google).unwrap();
        assert_eq!(update.name.as_deref(), Some("Google User"));
        assert_eq!(update.email.as_deref(), Some("user@google.example.com"));
        assert_eq!(update.login_method, Some(LoginMethod::Google));
    }

    #[test]
    fn test_provider_sign_in_rejects_email_method() {
        assert!(provider_sign_in(LoginMethod::Email).is_err());
    }
}
