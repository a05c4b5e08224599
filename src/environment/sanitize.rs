//! Property key to environment variable name conversion.

use std::borrow::Cow;

/// Convert a property key into the environment variable name used for it.
///
/// With `sanitize` off the key is returned unchanged. With it on, every `.`
/// and `-` becomes `_` and the result is upper-cased, so
/// `spring.application-name` becomes `SPRING_APPLICATION_NAME`.
///
/// Total and idempotent for any input.
pub fn sanitize_key(key: &str, sanitize: bool) -> Cow<'_, str> {
    if !sanitize {
        return Cow::Borrowed(key);
    }
    let replaced = key.replace(['.', '-'], "_");
    Cow::Owned(replaced.to_uppercase())
}
