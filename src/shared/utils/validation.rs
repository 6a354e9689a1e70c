use regex::Regex;

use crate::shared::errors::AppError;

const USERNAME_MAX_CHARS: usize = 15;
const PASSWORD_MIN_CHARS: usize = 8;

/// Form-field validation, mirroring the constraints the web client enforces
/// on its inputs. Every check runs before any collaborator is contacted.
pub struct FormValidator;

impl FormValidator {
    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Username is required.".to_string(),
            ));
        }
        if username.chars().count() > USERNAME_MAX_CHARS {
            return Err(AppError::ValidationError(
                "The limit is 15 characters.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.is_empty() {
            return Err(AppError::ValidationError("Email is required.".to_string()));
        }

        // WHATWG email format, the same check a browser applies to <input type="email">
        let re = Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap();
        if !re.is_match(email) {
            return Err(AppError::ValidationError(
                "Please enter a valid email address.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::ValidationError(
                "Password is required.".to_string(),
            ));
        }

        let long_enough = password.chars().count() >= PASSWORD_MIN_CHARS;
        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !long_enough || !has_letter || !has_digit {
            return Err(AppError::ValidationError(
                "Password has to have at least 1 letter and 1 number. Min. 8 characters."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_limits() {
        assert!(FormValidator::validate_username("a").is_ok());
        assert!(FormValidator::validate_username("exactly15chars!").is_ok());
        assert!(FormValidator::validate_username("").is_err());
        assert!(FormValidator::validate_username("sixteen--chars!!").is_err());
    }

    #[test]
    fn email_format() {
        assert!(FormValidator::validate_email("user@example.com").is_ok());
        assert!(FormValidator::validate_email("u.ser+tag@sub.example.co").is_ok());
        assert!(FormValidator::validate_email("").is_err());
        assert!(FormValidator::validate_email("not-an-email").is_err());
        assert!(FormValidator::validate_email("user@").is_err());
        assert!(FormValidator::validate_email("@example.com").is_err());
    }

    #[test]
    fn password_needs_letter_digit_and_length() {
        assert!(FormValidator::validate_password("abcd1234").is_ok());
        assert!(FormValidator::validate_password("").is_err());
        assert!(FormValidator::validate_password("short1a").is_err());
        assert!(FormValidator::validate_password("onlyletters").is_err());
        assert!(FormValidator::validate_password("12345678").is_err());
    }
}
