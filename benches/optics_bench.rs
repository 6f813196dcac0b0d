//! Benchmark for optics: composed, zipped and affine updates.
//!
//! Each group compares an optic against the hand-written update it replaces.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use focal::optics::{Affine, Lens, OptionLens, Prism};
use focal::{focus, lens, prism};
use std::hint::black_box;

// =============================================================================
// Test data
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct TextField {
    text: String,
    secure: bool,
}

#[derive(Clone, PartialEq, Debug)]
struct CredentialBox {
    username: TextField,
    password: TextField,
}

#[derive(Clone, PartialEq, Debug)]
enum ButtonState {
    Idle(String),
    Processing(String),
}

#[derive(Clone, PartialEq, Debug)]
struct Button {
    label: String,
    state: ButtonState,
}

#[derive(Clone, PartialEq, Debug)]
struct LoginPage {
    credentials: CredentialBox,
    button: Button,
    hint: Option<TextField>,
}

fn field(text: &str) -> TextField {
    TextField {
        text: text.to_string(),
        secure: false,
    }
}

fn login_page(text_length: usize) -> LoginPage {
    let text = "x".repeat(text_length);
    LoginPage {
        credentials: CredentialBox {
            username: field(&text),
            password: field(&text),
        },
        button: Button {
            label: "Sign in".to_string(),
            state: ButtonState::Processing("Please wait".to_string()),
        },
        hint: None,
    }
}

// =============================================================================
// Composed lens
// =============================================================================

fn benchmark_composed_lens_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composed_lens_set");

    let username_text = focus!(
        lens!(LoginPage, credentials),
        lens!(CredentialBox, username),
        lens!(TextField, text),
    );

    for text_length in [8, 256] {
        let page = login_page(text_length);

        group.bench_with_input(
            BenchmarkId::new("optic", text_length),
            &page,
            |bencher, page| {
                bencher.iter(|| {
                    black_box(username_text.set(black_box(page.clone()), "foobar".to_string()))
                });
            },
        );

        // Baseline: the same update written by hand
        group.bench_with_input(
            BenchmarkId::new("hand_written", text_length),
            &page,
            |bencher, page| {
                bencher.iter(|| {
                    let page = black_box(page.clone());
                    black_box(LoginPage {
                        credentials: CredentialBox {
                            username: TextField {
                                text: "foobar".to_string(),
                                ..page.credentials.username
                            },
                            ..page.credentials
                        },
                        ..page
                    })
                });
            },
        );
    }

    group.finish();
}

fn benchmark_composed_lens_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composed_lens_get");

    let password_secure = focus!(
        lens!(LoginPage, credentials),
        lens!(CredentialBox, password),
        lens!(TextField, secure),
    );
    let page = login_page(256);

    group.bench_function("optic", |bencher| {
        bencher.iter(|| black_box(password_secure.get(black_box(&page))));
    });

    group.bench_function("field_access", |bencher| {
        bencher.iter(|| black_box(black_box(&page).credentials.password.secure));
    });

    group.finish();
}

// =============================================================================
// Zipped lenses
// =============================================================================

fn benchmark_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip_set");

    let credentials = lens!(LoginPage, credentials);
    let both_texts = credentials
        .clone()
        .compose(lens!(CredentialBox, username))
        .compose(lens!(TextField, text))
        .zip(
            credentials
                .compose(lens!(CredentialBox, password))
                .compose(lens!(TextField, text)),
        );
    let page = login_page(64);

    group.bench_function("zip", |bencher| {
        bencher.iter(|| {
            black_box(both_texts.set(
                black_box(page.clone()),
                ("alice".to_string(), "hunter2".to_string()),
            ))
        });
    });

    group.bench_function("modifier_chain", |bencher| {
        let username_text = lens!(LoginPage, credentials)
            .compose(lens!(CredentialBox, username))
            .compose(lens!(TextField, text));
        let password_text = lens!(LoginPage, credentials)
            .compose(lens!(CredentialBox, password))
            .compose(lens!(TextField, text));
        let set_username = username_text.setter("alice".to_string());
        let set_password = password_text.setter("hunter2".to_string());

        bencher.iter(|| black_box(set_password(set_username(black_box(page.clone())))));
    });

    group.finish();
}

// =============================================================================
// Affine and optional focus
// =============================================================================

fn benchmark_affine_try_modify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("affine_try_modify");

    let processing = lens!(LoginPage, button)
        .compose(lens!(Button, state))
        .compose_prism(prism!(ButtonState, Processing));

    let matching = login_page(8);
    let mut idle = login_page(8);
    idle.button.state = ButtonState::Idle("Ready".to_string());

    for (name, page) in [("match", matching), ("mismatch", idle)] {
        group.bench_with_input(BenchmarkId::new("optic", name), &page, |bencher, page| {
            bencher.iter(|| {
                black_box(processing.try_modify(black_box(page.clone()), |message| {
                    message + "."
                }))
            });
        });
    }

    group.finish();
}

fn benchmark_prism_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prism_zip_try_get");

    let either_state = prism!(ButtonState, Idle).zip(prism!(ButtonState, Processing));
    let states = [
        ("left", ButtonState::Idle("Ready".to_string())),
        ("right", ButtonState::Processing("Please wait".to_string())),
    ];

    for (name, state) in states {
        group.bench_with_input(BenchmarkId::new("optic", name), &state, |bencher, state| {
            bencher.iter(|| black_box(either_state.try_get(black_box(state))));
        });
    }

    group.finish();
}

fn benchmark_compose_or(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_or_set");

    let hint_text = lens!(LoginPage, hint).compose_or(lens!(TextField, text), || field(""));

    let empty = login_page(8);
    let mut filled = login_page(8);
    filled.hint = Some(field("Forgot your password?"));

    for (name, page) in [("fallback", empty), ("existing", filled)] {
        group.bench_with_input(BenchmarkId::new("optic", name), &page, |bencher, page| {
            bencher.iter(|| {
                black_box(hint_text.set(black_box(page.clone()), Some("Try again".to_string())))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_composed_lens_set,
    benchmark_composed_lens_get,
    benchmark_zip,
    benchmark_affine_try_modify,
    benchmark_prism_zip,
    benchmark_compose_or
);

criterion_main!(benches);
