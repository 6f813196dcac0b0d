//! A lens onto `Option<Profile>` does not compose with a lens into `Profile`.

use focal::lens;
use focal::optics::Lens;

#[derive(Clone)]
struct Profile {
    nickname: String,
}

#[derive(Clone)]
struct Account {
    profile: Option<Profile>,
}

fn main() {
    let nickname = lens!(Account, profile).compose(lens!(Profile, nickname));
    let account = Account { profile: None };
    let _ = nickname.get(&account);
}
