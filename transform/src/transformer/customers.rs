use crate::event::Event;

pub const EMAIL_FIELD: &str = "email";
pub const USERNAME_FIELD: &str = "username";

pub fn username_from_email(email: &str) -> Option<&str> {
    email.split_once('@').map(|(local, _)| local)
}

pub fn derive_username(event: &mut Event) {
    let username = match event.get_str(EMAIL_FIELD).and_then(username_from_email) {
        Some(username) => username.to_string(),
        None => return,
    };
    event.set(USERNAME_FIELD, username);
}
