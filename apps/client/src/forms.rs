//! Form state and client-side validation, checked before anything is sent.

use thiserror::Error;

/// Longest thought or reaction the server accepts.
pub const MAX_TEXT_CHARS: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("text must be at most {0} characters")]
    TooLong(usize),
    #[error("email must contain '@'")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
}

/// Draft of a thought or reaction body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDraft {
    text: String,
    char_count: usize,
}

impl TextDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `value` unless it is over the limit, in which case the previous
    /// text is kept. Returns whether the edit was taken.
    pub fn edit(&mut self, value: &str) -> bool {
        let count = value.chars().count();
        if count > MAX_TEXT_CHARS {
            return false;
        }
        self.text = value.to_string();
        self.char_count = count;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// `"12/280"`, with the counter the form shows.
    pub fn counter(&self) -> String {
        format!("{}/{MAX_TEXT_CHARS}", self.char_count)
    }

    /// Text to submit; blank drafts are not sent.
    pub fn submission(&self) -> Result<&str, FormError> {
        if self.text.trim().is_empty() {
            return Err(FormError::Required("text"));
        }
        Ok(&self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.char_count = 0;
    }
}

const MIN_PASSWORD_CHARS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() {
            return Err(FormError::Required("email"));
        }
        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() {
            return Err(FormError::Required("username"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::Required("email"));
        }
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_CHARS));
        }
        Ok(())
    }
}
