use serde::{Deserialize, Serialize};

/// Login form fields, bound from controlled inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form fields, bound from controlled inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Trimmed email/password pair handed to the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> EmailCredentials {
        EmailCredentials {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

impl SignupForm {
    /// Password and confirmation must textually match after trimming.
    pub fn passwords_match(&self) -> bool {
        self.password.trim() == self.confirm_password.trim()
    }

    pub fn credentials(&self) -> EmailCredentials {
        EmailCredentials {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}
