//! View model of the login page.
//!
//! Every struct derives [`Lenses`] and every enum derives [`Prisms`], so each
//! field and variant has an associated optic (`LoginPage::title_lens()`,
//! `ViewState::processing_prism()`, ...).

use std::collections::HashMap;

use focal_derive::{Lenses, Prisms};
use thiserror::Error;

/// Why a login attempt failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The username or password was rejected.
    #[error("the username or password is incorrect")]
    InvalidCredentials,

    /// The login service could not be reached.
    #[error("the login service is unreachable: {0}")]
    Unreachable(String),
}

/// The lifecycle of an asynchronous view element.
#[derive(Clone, Debug, PartialEq, Eq, Prisms)]
pub enum ViewState<T> {
    /// Nothing has happened yet.
    Empty,
    /// Work is in progress; the message is shown to the user.
    Processing(String),
    /// The work failed.
    Failed(LoginError),
    /// The work finished and produced a value.
    Completed(T),
}

/// A single-line text input.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct TextField {
    /// The entered text.
    pub text: String,
    /// Hint shown while the field is empty.
    pub placeholder: Option<String>,
    /// Whether the text is masked.
    pub secure_text: bool,
}

impl TextField {
    /// An empty, unmasked field without placeholder.
    pub const fn plain() -> Self {
        Self {
            text: String::new(),
            placeholder: None,
            secure_text: false,
        }
    }

    /// An empty, masked field without placeholder.
    pub const fn secure() -> Self {
        Self {
            text: String::new(),
            placeholder: None,
            secure_text: true,
        }
    }

    /// Returns this field with `placeholder` as its hint.
    #[must_use]
    pub fn with_placeholder(self, placeholder: &str) -> Self {
        Self {
            placeholder: Some(placeholder.to_string()),
            ..self
        }
    }
}

/// The username and password inputs.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct CredentialBox {
    pub username_field: TextField,
    pub password_field: TextField,
}

/// The submit button.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct Button {
    pub title: String,
    pub enabled: bool,
}

/// The whole login page.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct LoginPage {
    pub title: String,
    pub credentials: CredentialBox,
    pub button_state: ViewState<Button>,
}

impl LoginPage {
    /// The page as first rendered: no title, empty fields and a disabled,
    /// untitled button.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            credentials: CredentialBox {
                username_field: TextField::plain(),
                password_field: TextField::secure(),
            },
            button_state: ViewState::Completed(Button {
                title: String::new(),
                enabled: false,
            }),
        }
    }
}

/// Field values remembered between visits, keyed by field name.
pub type SavedFields = HashMap<String, TextField>;
