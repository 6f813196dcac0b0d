//! Property-based tests for zipped optics.
//!
//! - Zipping two (or three) lenses onto disjoint fields gives a lawful lens
//!   whose `set` agrees with setting each field in turn.
//! - Zipping two prisms gives a prism onto an `Either` that prefers the left
//!   prism whenever both match.

use focal::either::Either;
use focal::optics::laws::{LensLaws, PrismLaws, check_lenses_agree};
use focal::optics::{FunctionPrism, Lens, Prism};
use focal::{lens, prism};
use proptest::prelude::*;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct TextField {
    text: String,
    placeholder: String,
    secure: bool,
}

#[derive(Clone, PartialEq, Debug)]
enum Input {
    Key(char),
    Paste(String),
    Clear,
}

fn text_field_strategy() -> impl Strategy<Value = TextField> {
    (any::<String>(), any::<String>(), any::<bool>()).prop_map(|(text, placeholder, secure)| {
        TextField {
            text,
            placeholder,
            secure,
        }
    })
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        any::<char>().prop_map(Input::Key),
        any::<String>().prop_map(Input::Paste),
        Just(Input::Clear),
    ]
}

fn key_or_paste_strategy() -> impl Strategy<Value = Either<char, String>> {
    prop_oneof![
        any::<char>().prop_map(Either::Left),
        any::<String>().prop_map(Either::Right),
    ]
}

/// Matches pastes of exactly one character, overlapping with `Input::Key`.
fn single_char_paste_prism() -> impl Prism<Input, char> + Clone {
    FunctionPrism::new(
        |input: &Input| match input {
            Input::Paste(text) => {
                let mut characters = text.chars();
                match (characters.next(), characters.next()) {
                    (Some(character), None) => Some(character),
                    _ => None,
                }
            }
            _ => None,
        },
        |character: char| Input::Paste(character.to_string()),
    )
}

// =============================================================================
// Lens zip
// =============================================================================

proptest! {
    #[test]
    fn prop_zip_is_lawful(
        field in text_field_strategy(),
        first in (any::<String>(), any::<bool>()),
        second in (any::<String>(), any::<bool>())
    ) {
        let text_and_secure = lens!(TextField, text).zip(lens!(TextField, secure));
        prop_assert_eq!(LensLaws::new(&text_and_secure).verify(&field, &first, &second), Ok(()));
    }

    #[test]
    fn prop_zip_get_pairs_the_parts(field in text_field_strategy()) {
        let text_and_secure = lens!(TextField, text).zip(lens!(TextField, secure));
        prop_assert_eq!(text_and_secure.get(&field), (field.text.clone(), field.secure));
    }

    /// Setting the pair is setting the first part, then the second
    #[test]
    fn prop_zip_set_is_sequential_set(field in text_field_strategy(), text in any::<String>(), secure in any::<bool>()) {
        let text_lens = lens!(TextField, text);
        let secure_lens = lens!(TextField, secure);
        let sequential = secure_lens.set(text_lens.set(field.clone(), text.clone()), secure);

        let zipped = text_lens.zip(secure_lens);
        prop_assert_eq!(zipped.set(field, (text, secure)), sequential);
    }

    /// Zipping a lens with itself: the second write wins
    #[test]
    fn prop_zip_overlap_second_write_wins(field in text_field_strategy(), first in any::<String>(), second in any::<String>()) {
        let both = lens!(TextField, text).zip(lens!(TextField, text));
        let updated = both.set(field, (first, second.clone()));
        prop_assert_eq!(updated.text, second);
    }
}

// =============================================================================
// Lens zip3
// =============================================================================

proptest! {
    #[test]
    fn prop_zip3_is_lawful(
        field in text_field_strategy(),
        first in (any::<String>(), any::<String>(), any::<bool>()),
        second in (any::<String>(), any::<String>(), any::<bool>())
    ) {
        let all = lens!(TextField, text).zip3(lens!(TextField, placeholder), lens!(TextField, secure));
        prop_assert_eq!(LensLaws::new(&all).verify(&field, &first, &second), Ok(()));
    }

    /// zip3 over every field agrees with a lens that rebuilds the whole
    #[test]
    fn prop_zip3_over_all_fields_agrees_with_rebuild(
        field in text_field_strategy(),
        parts in (any::<String>(), any::<String>(), any::<bool>())
    ) {
        let all = lens!(TextField, text).zip3(lens!(TextField, placeholder), lens!(TextField, secure));
        let rebuild = focal::optics::FunctionLens::new(
            |field: &TextField| (field.text.clone(), field.placeholder.clone(), field.secure),
            |_field: TextField, (text, placeholder, secure): (String, String, bool)| TextField {
                text,
                placeholder,
                secure,
            },
        );
        prop_assert!(check_lenses_agree(&all, &rebuild, &field, parts));
    }
}

// =============================================================================
// Prism zip
// =============================================================================

proptest! {
    #[test]
    fn prop_disjoint_prism_zip_is_lawful(input in input_strategy(), part in key_or_paste_strategy()) {
        let key_or_paste = prism!(Input, Key).zip(prism!(Input, Paste));
        prop_assert_eq!(PrismLaws::new(&key_or_paste).verify(&input, &part), Ok(()));
    }

    #[test]
    fn prop_prism_zip_matches_when_either_side_does(input in input_strategy()) {
        let key_or_paste = prism!(Input, Key).zip(prism!(Input, Paste));
        let expected = prism!(Input, Key).matches(&input) || prism!(Input, Paste).matches(&input);
        prop_assert_eq!(key_or_paste.matches(&input), expected);
    }

    /// When both prisms match, the left one is reported
    #[test]
    fn prop_prism_zip_prefers_left(character in any::<char>()) {
        let paste = Input::Paste(character.to_string());
        let overlapping = single_char_paste_prism().zip(prism!(Input, Paste));

        prop_assert_eq!(overlapping.try_get(&paste), Some(Either::Left(character)));

        let flipped = prism!(Input, Paste).zip(single_char_paste_prism());
        prop_assert_eq!(flipped.try_get(&paste), Some(Either::Left(character.to_string())));
    }

    /// inject dispatches on the tag regardless of priority
    #[test]
    fn prop_prism_zip_inject_dispatches(character in any::<char>(), text in any::<String>()) {
        let key_or_paste = prism!(Input, Key).zip(prism!(Input, Paste));
        prop_assert_eq!(key_or_paste.inject(Either::Left(character)), Input::Key(character));
        prop_assert_eq!(key_or_paste.inject(Either::Right(text.clone())), Input::Paste(text));
    }
}
