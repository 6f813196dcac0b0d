//! login-page-script
//!
//! Walks a login page through a returning user's session and logs the page
//! after every step.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=login_page_sample=debug cargo run --bin login-page-script
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use login_page_sample::model::{LoginError, LoginPage, SavedFields, TextField};
use login_page_sample::script::{
    InitialState, advance_button_message, apply_by_hand, apply_with_lenses, apply_with_zip,
    complete, fail, failure, on_processing, recall, remember, rephrase_password_hint,
    restore_username, submit,
};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_page_sample=info,login_page_script=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let blank = LoginPage::blank();
    let state = InitialState::for_returning_user("foobar");

    let by_hand = apply_by_hand(blank.clone(), &state);
    let with_lenses = apply_with_lenses(blank.clone(), state.clone());
    let with_zip = apply_with_zip(blank.clone(), state);
    tracing::info!(
        agree = by_hand == with_lenses && with_lenses == with_zip,
        page = ?with_zip,
        "applied initial state"
    );

    let untouched = advance_button_message(with_zip.clone());
    tracing::info!(
        unchanged = untouched == with_zip,
        "advanced message while not processing"
    );

    let processing = submit(with_zip);
    tracing::info!(button_state = ?processing.button_state, "submitted");

    let shout = on_processing(|message| message.to_uppercase());
    let advanced = shout(advance_button_message(processing));
    tracing::info!(button_state = ?advanced.button_state, "advanced message");

    let failed = fail(advanced.clone(), LoginError::InvalidCredentials);
    if let Some(error) = failure(&failed) {
        tracing::info!(%error, "login failed");
    }

    let mut hinted = complete(advanced);
    hinted.credentials.password_field = TextField::secure().with_placeholder("Password");
    let hinted = rephrase_password_hint(hinted, |hint| format!("{hint} (8+ characters)"));
    tracing::info!(
        button_state = ?hinted.button_state,
        placeholder = ?hinted.credentials.password_field.placeholder,
        "completed"
    );

    let saved = remember(SavedFields::new(), "username", "foobar".to_string());
    tracing::debug!(username = ?recall(&saved, "username"), "saved fields");
    let restored = restore_username(LoginPage::blank(), &saved);
    tracing::info!(
        username = %restored.credentials.username_field.text,
        "restored username on a fresh page"
    );
}
