//! Unit tests for zipped optics.
//!
//! Tests cover:
//! - Lens zip over a pair and zip3 over a triple
//! - Write order for overlapping lenses
//! - Prism zip over Either, including left priority
//! - Zipped optics composed with other optics

use focal::either::Either;
use focal::optics::{FunctionPrism, Lens, Prism};
use focal::{lens, prism};
use rstest::rstest;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum ButtonState {
    Idle(String),
    Processing(String),
    Completed(String),
}

#[derive(Clone, PartialEq, Debug)]
struct TextField {
    text: String,
    secure: bool,
}

#[derive(Clone, PartialEq, Debug)]
struct LoginPage {
    title: String,
    username: TextField,
    button_state: ButtonState,
}

fn page() -> LoginPage {
    LoginPage {
        title: String::new(),
        username: TextField {
            text: String::new(),
            secure: false,
        },
        button_state: ButtonState::Idle("Sign in".to_string()),
    }
}

// =============================================================================
// Lens zip
// =============================================================================

#[rstest]
fn test_zip_get_returns_pair() {
    let pair = lens!(LoginPage, title).zip(lens!(LoginPage, button_state));
    assert_eq!(
        pair.get(&page()),
        (String::new(), ButtonState::Idle("Sign in".to_string()))
    );
}

#[rstest]
fn test_zip_set_then_get_returns_pair() {
    let pair = lens!(LoginPage, title).zip(lens!(LoginPage, button_state));
    let written = (
        "Welcome".to_string(),
        ButtonState::Completed("Done".to_string()),
    );
    let updated = pair.set(page(), written.clone());
    assert_eq!(pair.get(&updated), written);
    assert_eq!(updated.username, page().username);
}

#[rstest]
fn test_zip3_equals_sequential_sets_in_order() {
    let title = lens!(LoginPage, title);
    let username = lens!(LoginPage, username).compose(lens!(TextField, text));
    let button_state = lens!(LoginPage, button_state);

    let triple = title.clone().zip3(username.clone(), button_state.clone());

    let t = "Welcome back!".to_string();
    let u = "foobar".to_string();
    let b = ButtonState::Processing("Please wait".to_string());

    let zipped = triple.set(page(), (t.clone(), u.clone(), b.clone()));
    let sequential = button_state.set(username.set(title.set(page(), t), u), b);

    assert_eq!(zipped, sequential);
}

#[rstest]
fn test_zip_overlapping_lenses_second_wins_on_overlap() {
    let text = lens!(LoginPage, username).compose(lens!(TextField, text));
    let whole_field = lens!(LoginPage, username);

    let overlapping = text.zip(whole_field);
    let field = TextField {
        text: "from field".to_string(),
        secure: true,
    };
    let updated = overlapping.set(page(), ("from text".to_string(), field.clone()));

    assert_eq!(updated.username, field);
}

#[rstest]
fn test_zip_of_zips_nests_tuples() {
    let secure = lens!(LoginPage, username).compose(lens!(TextField, secure));
    let nested = lens!(LoginPage, title).zip(secure.zip(lens!(LoginPage, button_state)));

    assert_eq!(
        nested.get(&page()),
        (
            String::new(),
            (false, ButtonState::Idle("Sign in".to_string()))
        )
    );
}

#[rstest]
fn test_zip_composes_after_outer_lens() {
    #[derive(Clone, PartialEq, Debug)]
    struct App {
        login: LoginPage,
    }

    let header = lens!(App, login).compose(
        lens!(LoginPage, title).zip(lens!(LoginPage, username).compose(lens!(TextField, text))),
    );
    let app = header.set(
        App { login: page() },
        ("Hi".to_string(), "alice".to_string()),
    );
    assert_eq!(app.login.title, "Hi");
    assert_eq!(app.login.username.text, "alice");
}

// =============================================================================
// Prism zip
// =============================================================================

#[rstest]
#[case(ButtonState::Processing("Please wait".to_string()), Some(Either::Left("Please wait".to_string())))]
#[case(ButtonState::Completed("Done".to_string()), Some(Either::Right("Done".to_string())))]
#[case(ButtonState::Idle("Sign in".to_string()), None)]
fn test_prism_zip_try_get(
    #[case] state: ButtonState,
    #[case] expected: Option<Either<String, String>>,
) {
    let busy_or_done = prism!(ButtonState, Processing).zip(prism!(ButtonState, Completed));
    assert_eq!(busy_or_done.try_get(&state), expected);
}

#[rstest]
fn test_prism_zip_inject_follows_tag() {
    let busy_or_done = prism!(ButtonState, Processing).zip(prism!(ButtonState, Completed));
    assert_eq!(
        busy_or_done.inject(Either::Left("a".to_string())),
        ButtonState::Processing("a".to_string())
    );
    assert_eq!(
        busy_or_done.inject(Either::Right("b".to_string())),
        ButtonState::Completed("b".to_string())
    );
}

#[rstest]
fn test_prism_zip_left_priority_on_ambiguous_whole() {
    let any_text = FunctionPrism::new(
        |state: &ButtonState| match state {
            ButtonState::Idle(text) | ButtonState::Processing(text) | ButtonState::Completed(text) => {
                Some(text.clone())
            }
        },
        ButtonState::Idle,
    );
    let processing = prism!(ButtonState, Processing);

    let left_first = processing.clone().zip(any_text.clone());
    let right_first = any_text.zip(processing);
    let state = ButtonState::Processing("Please wait".to_string());

    assert_eq!(
        left_first.try_get(&state),
        Some(Either::Left("Please wait".to_string()))
    );
    assert_eq!(
        right_first.try_get(&state),
        Some(Either::Left("Please wait".to_string()))
    );
}

#[rstest]
fn test_prism_zip_try_modify_maps_over_either() {
    let busy_or_done = prism!(ButtonState, Processing).zip(prism!(ButtonState, Completed));
    let shout = |part: Either<String, String>| {
        part.map_left(|text| text.to_uppercase())
            .map_right(|text| text + "!")
    };

    assert_eq!(
        busy_or_done.try_modify(ButtonState::Processing("wait".to_string()), shout),
        ButtonState::Processing("WAIT".to_string())
    );
    assert_eq!(
        busy_or_done.try_modify(ButtonState::Completed("done".to_string()), shout),
        ButtonState::Completed("done!".to_string())
    );
}
