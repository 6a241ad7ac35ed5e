use tower_cookies::cookie::time::Duration;
use tower_cookies::{Cookie, Cookies};

/// The name of the session cookie.
pub const SESSION_COOKIE: &str = "session_token";

// The token is the bare user id in decimal text, exactly as the client will
// replay it. There is no signature and no server-side session state, so a
// client that sets the cookie to another user's id is treated as that user.
// See DESIGN.md and the e2e suite, which demonstrates the forgery.

/// Parses a session token back to a user id.
///
/// Returns `None` for anything that is not a positive decimal integer.
pub fn parse_token(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Issues a session cookie for the given user.
///
/// The cookie is HTTP-only with an absolute expiry, so client-side script
/// cannot read it and the browser discards it when the duration elapses.
pub fn issue(cookies: &Cookies, user_id: i32, duration_hours: i64) {
    let mut cookie = Cookie::new(SESSION_COOKIE, user_id.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(tower_cookies::cookie::SameSite::Lax);
    cookie.set_max_age(Duration::hours(duration_hours));
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Revokes the session by instructing the client to discard the cookie.
///
/// The server holds no session state, so expiring the cookie is the whole
/// revocation.
pub fn revoke(cookies: &Cookies) {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::seconds(0));
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Resolves the request's session cookie to a user id, if present and valid.
pub fn resolve(cookies: &Cookies) -> Option<i32> {
    cookies
        .get(SESSION_COOKIE)
        .and_then(|cookie| parse_token(cookie.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_token() {
        assert_eq!(parse_token("1"), Some(1));
        assert_eq!(parse_token("42"), Some(42));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_token(""), None);
        assert_eq!(parse_token("abc"), None);
        assert_eq!(parse_token("1.5"), None);
        assert_eq!(parse_token(" 1"), None);
    }

    #[test]
    fn test_parse_rejects_non_positive_ids() {
        assert_eq!(parse_token("0"), None);
        assert_eq!(parse_token("-7"), None);
    }
}
