/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - middleware verifies the bearer token and stores it in request extensions;
 *   handlers only ever receive this type
 */

/// Context attached to an authenticated request.
///
/// - `user_id` is the internal user id (`users.id`) taken from the token's `user_id` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: i64,
}

impl AuthCtx {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}
