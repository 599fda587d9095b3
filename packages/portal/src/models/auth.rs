use crate::error::AppError;

/// Input of the registration form.
pub struct RegisterRequest<'a> {
    pub nickname: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

pub fn validate_register_request(payload: &RegisterRequest<'_>) -> Result<(), AppError> {
    if payload.nickname.trim().is_empty() {
        return Err(AppError::Validation("Nickname must not be empty".into()));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

/// Input of the login form.
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn validate_login_request(payload: &LoginRequest<'_>) -> Result<(), AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}
