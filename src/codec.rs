//! Alias script encoding
//!
//! An alias is persisted as a two-line `.cmd` script: a fixed header that
//! disables command echo, and the command body. The body alone cannot
//! express two pieces of intent from the value the user typed, so the
//! codec rewrites text in both directions:
//!
//! - Parameter forwarding: unless suppressed, call-time parameters are
//!   forwarded by appending ` %*` to the stored body. A trailing ` %!` on
//!   the raw value suppresses forwarding explicitly; a manual parameter
//!   reference (`%0`..`%9`, `%*`) suppresses it implicitly.
//! - Environment escaping: `!%NAME!%` in the raw value stands for a
//!   literal `%NAME%` that the shell evaluates when the alias runs.
//!   Encoding strips the `!` escapes; decoding restores them.
//!
//! Decoding operates on the raw persisted body line only. The outer
//! double quotes seen in listings are added by the display layer and are
//! never fed back into the codec.

use regex::Regex;

/// Header line of every alias script. Only the last line of a script is
/// semantically significant on load.
pub const SCRIPT_HEADER: &str = "@echo off";

/// File extension of persisted alias scripts (without the dot).
pub const SCRIPT_EXTENSION: &str = "cmd";

/// Suffix a user appends to a raw value to suppress parameter forwarding.
pub const SUPPRESS_SUFFIX: &str = " %!";

/// Suffix appended to the stored body when forwarding is active.
const FORWARD_SUFFIX: &str = " %*";

/// Escaped form of [`FORWARD_SUFFIX`] as it appears after re-escaping.
const ESCAPED_FORWARD_SUFFIX: &str = " !%*";

/// Convert a raw alias value into the two script lines to persist.
///
/// Forwarding is suppressed when the value ends with ` %!` (the suffix is
/// stripped) or when it references parameters manually. The `!%` storage
/// escape is unescaped to `%`; `%NAME%` pairs pass through untouched so
/// the shell resolves them at call time.
pub fn encode(raw_value: &str) -> [String; 2] {
    let (value, explicit_suppress) = match raw_value.strip_suffix(SUPPRESS_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (raw_value, false),
    };

    // Using parameters manually implies no forwarding.
    let manual_param = Regex::new(r"%[*,0-9]").unwrap();
    let implicit_suppress = manual_param.is_match(value);

    let forward_suffix = if explicit_suppress || implicit_suppress {
        ""
    } else {
        FORWARD_SUFFIX
    };

    [
        SCRIPT_HEADER.to_string(),
        format!("{}{}", value.replace("!%", "%"), forward_suffix),
    ]
}

/// Reverse [`encode`]: reconstruct the display-form value from the body
/// line of a persisted script.
///
/// Quotes are escaped and every `%` is re-escaped to `!%` so the result
/// can be fed back into `encode` verbatim. A trailing ` !%*` marks an
/// auto-forwarding value and is stripped; its absence means forwarding
/// was suppressed, which is re-marked with ` %!`.
pub fn decode(body: &str) -> String {
    let mut value = body.replace('"', "\\\"").replace('%', "!%");

    match value.strip_suffix(ESCAPED_FORWARD_SUFFIX) {
        Some(stripped) => value = stripped.to_string(),
        None => value.push_str(SUPPRESS_SUFFIX),
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roundtrip(raw: &str) -> String {
        let [_, body] = encode(raw);
        decode(&body)
    }

    #[rstest]
    #[case("echo hello")]
    #[case("git status")]
    #[case("cargo build --release")]
    fn plain_value_gets_forward_suffix(#[case] raw: &str) {
        let [header, body] = encode(raw);
        assert_eq!(header, SCRIPT_HEADER);
        assert_eq!(body, format!("{raw} %*"));
    }

    #[rstest]
    #[case("dir %!", "dir")]
    #[case("echo done %!", "echo done")]
    fn explicit_suffix_suppresses_forwarding(#[case] raw: &str, #[case] expected_body: &str) {
        let [_, body] = encode(raw);
        assert_eq!(body, expected_body);
    }

    #[rstest]
    #[case("copy %1 %2")]
    #[case("echo %*")]
    #[case("start %0")]
    #[case("move %9 backup")]
    fn manual_parameters_never_append_forwarding(#[case] raw: &str) {
        let [_, body] = encode(raw);
        assert_eq!(body, raw);
    }

    #[test]
    fn explicit_and_manual_together_stay_suppressed() {
        let [_, body] = encode("copy %1 %2 %!");
        assert_eq!(body, "copy %1 %2");
    }

    #[test]
    fn escaped_env_var_is_unescaped_into_body() {
        let [_, body] = encode("echo !%USERPROFILE!%");
        assert_eq!(body, "echo %USERPROFILE% %*");
    }

    #[test]
    fn decode_reescapes_env_var_and_strips_forward_marker() {
        assert_eq!(decode("echo %USERPROFILE% %*"), "echo !%USERPROFILE!%");
    }

    #[test]
    fn decode_marks_suppressed_body() {
        assert_eq!(decode("dir"), "dir %!");
    }

    #[test]
    fn decode_escapes_quotes() {
        assert_eq!(decode(r#"echo "hi" %*"#), r#"echo \"hi\""#);
    }

    #[rstest]
    #[case("echo hello")]
    #[case("echo !%USERPROFILE!%")]
    #[case("dir /b")]
    fn auto_forwarding_roundtrip_shows_no_suppress_marker(#[case] raw: &str) {
        assert!(!roundtrip(raw).ends_with(SUPPRESS_SUFFIX));
    }

    #[rstest]
    #[case("dir %!")]
    #[case("copy %1 %2 %!")]
    fn suppressed_roundtrip_keeps_suppress_marker(#[case] raw: &str) {
        assert!(roundtrip(raw).ends_with(SUPPRESS_SUFFIX));
    }

    #[rstest]
    #[case("echo hello")]
    #[case("echo !%USERPROFILE!%")]
    #[case("dir %!")]
    #[case("copy %1 %2")]
    #[case("copy %1 %2 %!")]
    #[case("echo %*")]
    fn repeated_roundtrips_are_stable(#[case] raw: &str) {
        let once = encode(&roundtrip(raw));
        assert_eq!(once, encode(raw));

        let twice = encode(&decode(&once[1]));
        assert_eq!(twice, once);
    }

    #[test]
    fn value_without_percent_has_no_escaping_artifacts() {
        assert_eq!(roundtrip("echo hello"), "echo hello");
    }
}
