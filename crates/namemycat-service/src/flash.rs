//! One-shot notifications carried across the post/redirect/get cycle.
//!
//! The cookie value is `<kind>.<tag>` where `tag` is the HMAC of `kind`.
//! Anything that fails to parse or verify is ignored.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use crate::crypto;

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "namemycat_flash";

/// Message shown after a name was stored.
pub const SUCCESS_MESSAGE: &str = "Thanks, Your cat name has been submitted!";

/// Message shown after a submission was rejected or failed.
pub const FAILURE_MESSAGE: &str = "Sorry, Something went wrong when adding your name!";

/// Outcome of the last submission, shown once on the next page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// The name was stored.
    Success,
    /// The name was empty or could not be stored.
    Failure,
}

impl Flash {
    /// Text shown to the visitor.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure => FAILURE_MESSAGE,
        }
    }

    /// CSS class for the notification.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "flash-success",
            Self::Failure => "flash-failure",
        }
    }

    fn kind(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "success" => Some(Self::Success),
            "failure" => Some(Self::Failure),
            _ => None,
        }
    }

    /// Encode as a signed cookie value.
    #[must_use]
    pub fn encode(self, secret: &str) -> String {
        let kind = self.kind();
        format!("{kind}.{}", crypto::sign(secret, kind))
    }

    /// Decode a signed cookie value, rejecting unknown kinds and bad tags.
    #[must_use]
    pub fn decode(value: &str, secret: &str) -> Option<Self> {
        let (kind, tag) = value.split_once('.')?;
        let flash = Self::from_kind(kind)?;
        crypto::verify(secret, kind, tag).then_some(flash)
    }

    /// `Set-Cookie` header value that stores this flash.
    #[must_use]
    pub fn set_cookie(self, secret: &str) -> String {
        format!(
            "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.encode(secret)
        )
    }

    /// `Set-Cookie` header value that removes the flash.
    #[must_use]
    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Read a pending flash from the request's `Cookie` headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, secret: &str) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| *name == FLASH_COOKIE)
            .find_map(|(_, value)| Self::decode(value, secret))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    const SECRET: &str = "test-secret";

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn encoded_flash_decodes_with_same_secret() {
        for flash in [Flash::Success, Flash::Failure] {
            let value = flash.encode(SECRET);
            assert_eq!(Flash::decode(&value, SECRET), Some(flash));
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let value = Flash::Success.encode(SECRET);
        assert_eq!(Flash::decode(&value, "other-secret"), None);
    }

    #[test]
    fn forged_kind_is_rejected() {
        let failure_tag = crypto::sign(SECRET, "failure");
        assert_eq!(Flash::decode(&format!("success.{failure_tag}"), SECRET), None);
        assert_eq!(Flash::decode("success", SECRET), None);
        assert_eq!(Flash::decode("", SECRET), None);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let tag = crypto::sign(SECRET, "bogus");
        assert_eq!(Flash::decode(&format!("bogus.{tag}"), SECRET), None);
    }

    #[test]
    fn reads_flash_among_other_cookies() {
        let cookie = format!(
            "theme=dark; {FLASH_COOKIE}={}; lang=en",
            Flash::Failure.encode(SECRET)
        );
        assert_eq!(
            Flash::from_headers(&headers_with(&cookie), SECRET),
            Some(Flash::Failure)
        );
    }

    #[test]
    fn missing_or_cleared_cookie_has_no_flash() {
        assert_eq!(Flash::from_headers(&HeaderMap::new(), SECRET), None);
        assert_eq!(
            Flash::from_headers(&headers_with(&format!("{FLASH_COOKIE}=")), SECRET),
            None
        );
    }

    #[test]
    fn cookie_headers_are_scoped_to_root() {
        let set = Flash::Success.set_cookie(SECRET);
        assert!(set.starts_with(&format!("{FLASH_COOKIE}=success.")));
        assert!(set.contains("Path=/"));
        assert!(Flash::clear_cookie().contains("Max-Age=0"));
    }

    #[test]
    fn messages_match_outcome() {
        assert!(Flash::Success.message().starts_with("Thanks"));
        assert!(Flash::Failure.message().starts_with("Sorry"));
    }
}
