//! State transitions of the login page.
//!
//! The same update is written three ways (by hand, with sequential lens
//! sets, with one zipped lens) so the results can be compared; the button
//! transitions go through the `Processing` prism and are no-ops in every
//! other state.

use focal::optics::{Affine, Lens, OptionLens, Prism, map_entry, some_prism};
use focal::{chain, focus};

use crate::model::{Button, CredentialBox, LoginError, LoginPage, SavedFields, TextField, ViewState};

/// The values a returning user's page starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialState {
    pub title: String,
    pub username: String,
    pub button_state: ViewState<Button>,
}

impl InitialState {
    /// Greets `username` and offers a disabled "Login" button.
    pub fn for_returning_user(username: &str) -> Self {
        Self {
            title: "Welcome back!".to_string(),
            username: username.to_string(),
            button_state: ViewState::Completed(Button {
                title: "Login".to_string(),
                enabled: false,
            }),
        }
    }

    /// The state as the part of [`initial_state_lens`].
    pub fn into_parts(self) -> (String, String, ViewState<Button>) {
        (self.title, self.username, self.button_state)
    }
}

// =============================================================================
// Optics
// =============================================================================

/// Focuses the text of the username field.
pub fn username_text_lens() -> impl Lens<LoginPage, String> + Clone {
    focus!(
        LoginPage::credentials_lens(),
        CredentialBox::username_field_lens(),
        TextField::text_lens(),
    )
}

/// Focuses the text of the password field.
pub fn password_text_lens() -> impl Lens<LoginPage, String> + Clone {
    focus!(
        LoginPage::credentials_lens(),
        CredentialBox::password_field_lens(),
        TextField::text_lens(),
    )
}

/// Title, username text and button state as one tuple.
pub fn initial_state_lens() -> impl Lens<LoginPage, (String, String, ViewState<Button>)> + Clone {
    LoginPage::title_lens().zip3(username_text_lens(), LoginPage::button_state_lens())
}

/// The processing message, present only while the button is processing.
pub fn processing_message() -> impl Affine<LoginPage, String> + Clone {
    LoginPage::button_state_lens().compose_prism(ViewState::<Button>::processing_prism())
}

/// The password field's placeholder, present only when one is set.
pub fn password_placeholder() -> impl Affine<LoginPage, String> + Clone {
    focus!(
        LoginPage::credentials_lens(),
        CredentialBox::password_field_lens(),
        TextField::placeholder_lens(),
    )
    .compose_prism(some_prism::<String>())
}

// =============================================================================
// Initial state
// =============================================================================

/// Applies `state` with plain field assignments on a local copy.
pub fn apply_by_hand(page: LoginPage, state: &InitialState) -> LoginPage {
    let mut updated = page;
    updated.title.clone_from(&state.title);
    updated.credentials.username_field.text.clone_from(&state.username);
    updated.button_state = state.button_state.clone();
    updated
}

/// Applies `state` with three lens sets: button state, then username, then title.
pub fn apply_with_lenses(page: LoginPage, state: InitialState) -> LoginPage {
    let with_button = LoginPage::button_state_lens().set(page, state.button_state);
    let with_username = username_text_lens().set(with_button, state.username);
    LoginPage::title_lens().set(with_username, state.title)
}

/// Applies `state` in one write through [`initial_state_lens`].
pub fn apply_with_zip(page: LoginPage, state: InitialState) -> LoginPage {
    initial_state_lens().set(page, state.into_parts())
}

// =============================================================================
// Button transitions
// =============================================================================

/// The next message shown while a login is processing.
pub fn advance_processing_message(previous: String) -> String {
    match previous.as_str() {
        "" => "Please wait".to_string(),
        "Please wait" => "Almost there".to_string(),
        "Almost there" => "ALMOST THERE".to_string(),
        _ => previous + "!",
    }
}

/// Advances the processing message; leaves any other button state alone.
pub fn advance_button_message(page: LoginPage) -> LoginPage {
    let processing = ViewState::<Button>::processing_prism();
    LoginPage::button_state_lens().modify(page, |state| {
        processing.try_modify(state, advance_processing_message)
    })
}

/// Lifts a message transform to a page transform that only applies while
/// the button is processing.
pub fn on_processing<F>(function: F) -> impl Fn(LoginPage) -> LoginPage
where
    F: Fn(String) -> String,
{
    let button_state = LoginPage::button_state_lens();
    let processing = ViewState::<Button>::processing_prism();
    move |page| button_state.modify(page, |state| processing.try_modify(state, &function))
}

/// Puts the button into processing and shows the first message.
pub fn submit(page: LoginPage) -> LoginPage {
    let button_state = LoginPage::button_state_lens();
    let start = button_state.setter(ViewState::Processing(String::new()));
    chain!(start, on_processing(advance_processing_message))(page)
}

/// Ends a login attempt with `error`, clearing the password.
pub fn fail(page: LoginPage, error: LoginError) -> LoginPage {
    let cleared = password_text_lens().set(page, String::new());
    LoginPage::button_state_lens().set(cleared, ViewState::Failed(error))
}

/// The error of a failed login attempt.
pub fn failure(page: &LoginPage) -> Option<LoginError> {
    LoginPage::button_state_lens()
        .compose_prism(ViewState::<Button>::failed_prism())
        .try_get(page)
}

/// Ends a login attempt successfully with an enabled "Logout" button.
pub fn complete(page: LoginPage) -> LoginPage {
    let logout = Button {
        title: "Logout".to_string(),
        enabled: true,
    };
    LoginPage::button_state_lens().set(page, ViewState::<Button>::completed_prism().inject(logout))
}

/// Rewrites the password placeholder when there is one.
pub fn rephrase_password_hint<F>(page: LoginPage, function: F) -> LoginPage
where
    F: FnOnce(String) -> String,
{
    password_placeholder().try_modify(page, function)
}

// =============================================================================
// Saved fields
// =============================================================================

fn saved_text(key: &str) -> impl Lens<SavedFields, Option<String>> {
    map_entry::<String, TextField>(key.to_string()).compose_or(TextField::text_lens(), TextField::plain)
}

/// Stores `text` under `key`, keeping the saved field's other settings.
pub fn remember(fields: SavedFields, key: &str, text: String) -> SavedFields {
    saved_text(key).set(fields, Some(text))
}

/// The text saved under `key`.
pub fn recall(fields: &SavedFields, key: &str) -> Option<String> {
    saved_text(key).get(fields)
}

/// Drops whatever is saved under `key`.
pub fn forget(fields: SavedFields, key: &str) -> SavedFields {
    saved_text(key).set(fields, None)
}

/// Prefills the username field from `fields`, if a username was saved.
pub fn restore_username(page: LoginPage, fields: &SavedFields) -> LoginPage {
    match recall(fields, "username") {
        Some(username) => username_text_lens().set(page, username),
        None => page,
    }
}
