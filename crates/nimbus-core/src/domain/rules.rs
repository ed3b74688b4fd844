//! Format rules: pure predicates and normalizers for CLI parameter values.
//!
//! # Design
//!
//! Every rule is a free function over `&str` — no state, no I/O. Validators
//! in the application layer compose these with bag mutations and remote
//! confirmations; this file's only job is to answer "does this string have
//! the right shape" and "what is its canonical form".
//!
//! The regular expressions are compiled once and shared (`LazyLock`).

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// `v<major>.<minor>.<patch>` exactly — no pre-release suffix, no build tag.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// Lower-case alphanumeric segments separated by single periods,
/// starting with a letter. Shared by project-type ids and provider ids.
static TYPE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z][a-z0-9]+(?:\.?[a-z0-9]+)+)$").unwrap());

/// `http`/`https` scheme followed by an RFC3986-ish allowed set
/// (letters, digits, `$-_@.&+!*(),`, percent-escapes, and space).
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\), ]|(?:%[0-9a-fA-F][0-9a-fA-F]))+$")
        .unwrap()
});

/// Exactly one `@`, at least one `.` in the part after it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap());

/// Groups of 4 base64 chars minus the plus sign, ending in `=` or `==`.
static AUTH_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9/]{4})*([A-Za-z0-9/]{3}=|[A-Za-z0-9/]{2}==)?$").unwrap()
});

/// Leading `http://` / `https://` scheme prefixes (stripped from user refs).
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http[s]?://").unwrap());

/// An RFC-4122 v4 UUID in canonical textual form.
///
/// Canonical means the lower-case hyphenated rendering round-trips: parsing
/// then re-printing yields the input unchanged. Upper-case or unhyphenated
/// forms are rejected even though they parse.
pub fn is_valid_uuid(value: &str) -> bool {
    match Uuid::parse_str(value) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.to_string() == value,
        Err(_) => false,
    }
}

/// Canonicalize a version tag: lower-case, and prefix `v` when the string
/// starts with a digit (`1.2.3` → `v1.2.3`, `V1.2.3` → `v1.2.3`).
pub fn normalize_version(value: &str) -> String {
    let lowered = value.to_lowercase();
    if lowered.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("v{lowered}")
    } else {
        lowered
    }
}

/// Strict `v0.0.0` version tag. Run [`normalize_version`] first.
pub fn is_valid_version(value: &str) -> bool {
    VERSION_RE.is_match(value)
}

/// Project-type / provider id: `^[a-z][a-z0-9]+(?:\.?[a-z0-9]+)+$`,
/// length 5-255 inclusive.
pub fn is_valid_type_id(value: &str) -> bool {
    (5..=255).contains(&value.len()) && TYPE_ID_RE.is_match(value)
}

/// Project display name: 4-30 characters inclusive.
pub fn is_valid_project_name(value: &str) -> bool {
    (4..=30).contains(&value.chars().count())
}

/// Lower-case and strip every character that is not alphanumeric or `-`.
/// Always succeeds; the result may be empty.
pub fn sanitize_resource_name(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

/// `http`/`https` URL over the restricted character set.
pub fn is_valid_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

/// Basic email shape: one `@`, a `.` somewhere after it.
pub fn has_basic_email_format(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Function-host auth code: base64 digits excluding `+`, `=`/`==` padding.
pub fn is_valid_auth_code(value: &str) -> bool {
    AUTH_CODE_RE.is_match(value)
}

/// Remove any `http://` / `https://` prefixes from a user reference.
pub fn strip_url_scheme(value: &str) -> String {
    SCHEME_RE.replace_all(value, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── uuid ──────────────────────────────────────────────────────────────

    #[test]
    fn canonical_v4_uuid_is_valid() {
        let u = Uuid::new_v4().to_string();
        assert!(is_valid_uuid(&u));
    }

    #[test]
    fn uppercase_uuid_is_rejected() {
        let u = Uuid::new_v4().to_string().to_uppercase();
        assert!(!is_valid_uuid(&u));
    }

    #[test]
    fn unhyphenated_uuid_is_rejected() {
        let u = Uuid::new_v4().simple().to_string();
        assert!(!is_valid_uuid(&u));
    }

    #[test]
    fn non_v4_uuid_is_rejected() {
        // Nil UUID parses but is not version 4.
        assert!(!is_valid_uuid("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn garbage_is_not_a_uuid() {
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid(""));
    }

    // ── version ───────────────────────────────────────────────────────────

    #[test]
    fn bare_version_gets_v_prefix() {
        assert_eq!(normalize_version("1.2.3"), "v1.2.3");
        assert_eq!(normalize_version("0.0.1"), "v0.0.1");
    }

    #[test]
    fn prefixed_version_is_only_lowercased() {
        assert_eq!(normalize_version("V1.2.3"), "v1.2.3");
        assert_eq!(normalize_version("v1.2.3"), "v1.2.3");
    }

    #[test]
    fn version_format_is_strict() {
        assert!(is_valid_version("v1.2.3"));
        assert!(is_valid_version("v10.20.30"));
        assert!(!is_valid_version("1.2.3"));
        assert!(!is_valid_version("v1.2"));
        assert!(!is_valid_version("v1.2.3-pre"));
        assert!(!is_valid_version("v1.2.3.4"));
    }

    // ── type id ───────────────────────────────────────────────────────────

    #[test]
    fn valid_type_ids() {
        assert!(is_valid_type_id("my.type1"));
        assert!(is_valid_type_id("azure.devops"));
        assert!(is_valid_type_id("abcde"));
    }

    #[test]
    fn type_id_rejects_uppercase() {
        assert!(!is_valid_type_id("My.Type"));
    }

    #[test]
    fn type_id_rejects_short_and_long() {
        assert!(!is_valid_type_id("ab"));
        assert!(!is_valid_type_id("abcd"));
        let long = format!("a{}", "b".repeat(255));
        assert!(!is_valid_type_id(&long));
    }

    #[test]
    fn type_id_rejects_leading_digit_and_double_period() {
        assert!(!is_valid_type_id("1my.type"));
        assert!(!is_valid_type_id("my..type"));
        assert!(!is_valid_type_id(".mytype"));
    }

    // ── project name ──────────────────────────────────────────────────────

    #[test]
    fn project_name_length_bounds_are_inclusive() {
        assert!(is_valid_project_name("abcd")); // 4
        assert!(is_valid_project_name(&"a".repeat(30))); // 30
        assert!(!is_valid_project_name("abc")); // 3
        assert!(!is_valid_project_name(&"a".repeat(31))); // 31
    }

    // ── sanitizer ─────────────────────────────────────────────────────────

    #[test]
    fn sanitizer_strips_punctuation_and_lowercases() {
        assert_eq!(sanitize_resource_name("My_Cool Name!"), "mycoolname");
        assert_eq!(sanitize_resource_name("web-app-01"), "web-app-01");
        assert_eq!(sanitize_resource_name("!!!"), "");
    }

    // ── url ───────────────────────────────────────────────────────────────

    #[test]
    fn http_and_https_urls_are_valid() {
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/a%20b"));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
    }

    // ── email ─────────────────────────────────────────────────────────────

    #[test]
    fn basic_email_shape() {
        assert!(has_basic_email_format("user@example.com"));
        assert!(!has_basic_email_format("user@example"));
        assert!(!has_basic_email_format("user@@example.com"));
        assert!(!has_basic_email_format("example.com"));
    }

    // ── auth code ─────────────────────────────────────────────────────────

    #[test]
    fn auth_code_accepts_padded_base64_without_plus() {
        assert!(is_valid_auth_code("AbCd1234"));
        assert!(is_valid_auth_code("AbCd123="));
        assert!(is_valid_auth_code("AbCd12=="));
        assert!(is_valid_auth_code(""));
    }

    #[test]
    fn auth_code_rejects_plus_and_bad_padding() {
        assert!(!is_valid_auth_code("AbC+1234"));
        assert!(!is_valid_auth_code("AbCd1==="));
        assert!(!is_valid_auth_code("AbCd1"));
    }

    // ── scheme strip ──────────────────────────────────────────────────────

    #[test]
    fn scheme_prefix_is_removed() {
        assert_eq!(strip_url_scheme("https://user@host"), "user@host");
        assert_eq!(strip_url_scheme("http://someone"), "someone");
        assert_eq!(strip_url_scheme("plain-name"), "plain-name");
    }
}
