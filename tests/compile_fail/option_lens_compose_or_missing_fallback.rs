//! `compose_or` has no form without a fallback producer.

use focal::lens;
use focal::optics::{Lens, OptionLens};

#[derive(Clone)]
struct Profile {
    nickname: String,
}

#[derive(Clone)]
struct Account {
    profile: Option<Profile>,
}

fn main() {
    let nickname = lens!(Account, profile).compose_or(lens!(Profile, nickname));
    let account = Account { profile: None };
    let _ = nickname.get(&account);
}
