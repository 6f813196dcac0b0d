//! Tests for the login page script.
//!
//! Covers the worked scenarios: setting the title, composed username
//! updates, the zipped initial state, and the processing message transitions.

use focal::optics::laws::{LensLaws, check_lenses_agree};
use focal::optics::{Affine, Lens, Prism};
use login_page_sample::model::{Button, LoginError, LoginPage, SavedFields, TextField, ViewState};
use login_page_sample::script::{
    InitialState, advance_button_message, advance_processing_message, apply_by_hand,
    apply_with_lenses, apply_with_zip, complete, fail, failure, forget, initial_state_lens,
    on_processing, password_placeholder, processing_message, recall, remember,
    rephrase_password_hint, restore_username, submit, username_text_lens,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn blank() -> LoginPage {
    LoginPage::blank()
}

fn processing(message: &str) -> LoginPage {
    LoginPage {
        button_state: ViewState::Processing(message.to_string()),
        ..LoginPage::blank()
    }
}

// =============================================================================
// Lenses over the page
// =============================================================================

#[rstest]
fn test_title_set_then_get(blank: LoginPage) {
    let title = LoginPage::title_lens();
    let updated = title.set(blank, "Welcome back!".to_string());
    assert_eq!(title.get(&updated), "Welcome back!");
}

#[rstest]
fn test_username_set_leaves_password_and_title(blank: LoginPage) {
    let updated = username_text_lens().set(blank.clone(), "foobar".to_string());

    assert_eq!(updated.credentials.username_field.text, "foobar");
    assert_eq!(updated.credentials.password_field, blank.credentials.password_field);
    assert_eq!(updated.title, blank.title);
    assert_eq!(updated.button_state, blank.button_state);
}

#[rstest]
fn test_initial_state_three_ways_agree(blank: LoginPage) {
    let state = InitialState::for_returning_user("foobar");

    let by_hand = apply_by_hand(blank.clone(), &state);
    let with_lenses = apply_with_lenses(blank.clone(), state.clone());
    let with_zip = apply_with_zip(blank, state);

    assert_eq!(by_hand, with_lenses);
    assert_eq!(with_lenses, with_zip);
    assert_eq!(with_zip.title, "Welcome back!");
    assert_eq!(with_zip.credentials.username_field.text, "foobar");
}

#[rstest]
fn test_initial_state_lens_is_lawful(blank: LoginPage) {
    let lens = initial_state_lens();
    let first = InitialState::for_returning_user("alice").into_parts();
    let second = InitialState::for_returning_user("bob").into_parts();
    assert_eq!(LensLaws::new(&lens).verify(&blank, &first, &second), Ok(()));
}

// =============================================================================
// Processing messages
// =============================================================================

#[rstest]
#[case("", "Please wait")]
#[case("Please wait", "Almost there")]
#[case("Almost there", "ALMOST THERE")]
#[case("ALMOST THERE", "ALMOST THERE!")]
fn test_advance_processing_message(#[case] previous: &str, #[case] expected: &str) {
    assert_eq!(advance_processing_message(previous.to_string()), expected);
}

#[rstest]
fn test_advance_button_message_while_processing() {
    let updated = advance_button_message(processing("Please wait"));
    assert_eq!(updated.button_state, ViewState::Processing("Almost there".to_string()));
}

#[rstest]
fn test_advance_button_message_when_completed_is_no_op(blank: LoginPage) {
    assert_eq!(advance_button_message(blank.clone()), blank);
}

#[rstest]
fn test_on_processing_matches_advance_button_message() {
    let advance = on_processing(advance_processing_message);
    let page = processing("Please wait");
    assert_eq!(advance(page.clone()), advance_button_message(page));
}

#[rstest]
fn test_submit_shows_first_message(blank: LoginPage) {
    let submitted = submit(blank);
    assert_eq!(processing_message().try_get(&submitted), Some("Please wait".to_string()));
}

// =============================================================================
// Outcomes
// =============================================================================

#[rstest]
fn test_fail_clears_password_and_records_error() {
    let mut page = processing("Please wait");
    page.credentials.password_field.text = "hunter2".to_string();

    let failed = fail(page, LoginError::Unreachable("timeout".to_string()));

    assert_eq!(failed.credentials.password_field.text, "");
    assert_eq!(failure(&failed), Some(LoginError::Unreachable("timeout".to_string())));
    assert_eq!(processing_message().try_get(&failed), None);
}

#[rstest]
fn test_complete_enables_logout_button() {
    let completed = complete(processing("Almost there"));
    assert_eq!(
        ViewState::<Button>::completed_prism().try_get(&completed.button_state),
        Some(Button {
            title: "Logout".to_string(),
            enabled: true,
        })
    );
    assert_eq!(failure(&completed), None);
}

#[rstest]
#[case(None, None)]
#[case(Some("Password"), Some("Password (required)"))]
fn test_rephrase_password_hint(#[case] placeholder: Option<&str>, #[case] expected: Option<&str>) {
    let mut page = LoginPage::blank();
    page.credentials.password_field.placeholder = placeholder.map(str::to_string);

    let updated = rephrase_password_hint(page, |hint| hint + " (required)");

    assert_eq!(updated.credentials.password_field.placeholder.as_deref(), expected);
    assert_eq!(password_placeholder().try_get(&updated).as_deref(), expected);
}

// =============================================================================
// Saved fields
// =============================================================================

#[rstest]
fn test_remember_into_empty_store_uses_plain_field() {
    let fields = remember(SavedFields::new(), "username", "foobar".to_string());
    assert_eq!(
        fields.get("username"),
        Some(&TextField {
            text: "foobar".to_string(),
            placeholder: None,
            secure_text: false,
        })
    );
}

#[rstest]
fn test_remember_keeps_existing_field_settings() {
    let fields = SavedFields::from([(
        "password".to_string(),
        TextField::secure().with_placeholder("Password"),
    )]);

    let fields = remember(fields, "password", "hunter2".to_string());
    let saved = &fields["password"];

    assert_eq!(saved.text, "hunter2");
    assert!(saved.secure_text);
    assert_eq!(saved.placeholder.as_deref(), Some("Password"));
}

#[rstest]
fn test_forget_removes_entry() {
    let fields = remember(SavedFields::new(), "username", "foobar".to_string());
    let fields = forget(fields, "username");
    assert_eq!(recall(&fields, "username"), None);
    assert!(fields.is_empty());
}

#[rstest]
fn test_restore_username(blank: LoginPage) {
    let fields = remember(SavedFields::new(), "username", "foobar".to_string());
    assert_eq!(restore_username(blank.clone(), &fields).credentials.username_field.text, "foobar");
    assert_eq!(restore_username(blank.clone(), &SavedFields::new()), blank);
}

// =============================================================================
// Properties
// =============================================================================

fn view_state_strategy() -> impl Strategy<Value = ViewState<Button>> {
    prop_oneof![
        Just(ViewState::Empty),
        any::<String>().prop_map(ViewState::Processing),
        Just(ViewState::Failed(LoginError::InvalidCredentials)),
        (any::<String>(), any::<bool>())
            .prop_map(|(title, enabled)| ViewState::Completed(Button { title, enabled })),
    ]
}

proptest! {
    /// Zipped set equals the three individual sets applied in order
    #[test]
    fn prop_zip3_set_matches_sequential_sets(
        title in any::<String>(),
        username in any::<String>(),
        button_state in view_state_strategy()
    ) {
        let state = InitialState { title, username, button_state };
        prop_assert_eq!(
            apply_with_zip(LoginPage::blank(), state.clone()),
            apply_with_lenses(LoginPage::blank(), state)
        );
    }

    /// Advancing the message changes nothing outside the processing state
    #[test]
    fn prop_advance_outside_processing_is_no_op(button_state in view_state_strategy()) {
        let page = LoginPage { button_state, ..LoginPage::blank() };
        let processing = ViewState::<Button>::processing_prism();
        prop_assume!(!processing.matches(&page.button_state));
        prop_assert_eq!(advance_button_message(page.clone()), page);
    }

    /// Derived optics composed by hand agree with the script's lens
    #[test]
    fn prop_username_lens_agrees_with_hand_composition(text in any::<String>()) {
        let by_hand = LoginPage::credentials_lens()
            .compose(login_page_sample::model::CredentialBox::username_field_lens())
            .compose(TextField::text_lens());
        prop_assert!(check_lenses_agree(&username_text_lens(), &by_hand, &LoginPage::blank(), text));
    }
}
