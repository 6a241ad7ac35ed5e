/// The identity resolved from a request's session cookie.
///
/// Inserted into request extensions by the auth middleware; handlers read
/// `user_id` from here instead of touching the cookie themselves.
#[derive(Debug, Clone)]
pub struct Session {
    /// The ID of the user this session belongs to.
    pub user_id: i32,
}
