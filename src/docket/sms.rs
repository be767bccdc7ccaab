use crate::docket::warn;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Carriers may split messages longer than this; the link is still produced.
pub const SMS_SOFT_LIMIT_CHARS: usize = 1600;

/// `encodeURIComponent` leaves these unreserved marks alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build an `sms:` deep link carrying `message`, optionally addressed to a
/// recipient number. Over-length messages produce an advisory warning only.
pub fn create_sms_link(message: &str, recipient: Option<&str>) -> String {
    if message.chars().count() > SMS_SOFT_LIMIT_CHARS {
        warn::emit(
            "SMS_LENGTH",
            "sms_link",
            recipient.unwrap_or(""),
            "message exceeds 1600 chars and may be split into multiple SMS messages",
        );
    }

    let encoded = utf8_percent_encode(message, URI_COMPONENT);
    format!("sms:{}?body={}", recipient.unwrap_or(""), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_without_recipient_keeps_query_separator() {
        assert_eq!(create_sms_link("hello", None), "sms:?body=hello");
    }

    #[test]
    fn link_with_recipient_prefixes_number() {
        assert_eq!(create_sms_link("hello", Some("555")), "sms:555?body=hello");
    }

    #[test]
    fn message_body_is_component_encoded() {
        let link = create_sms_link("stop now & leave me alone?", None);
        assert_eq!(link, "sms:?body=stop%20now%20%26%20leave%20me%20alone%3F");
    }

    #[test]
    fn unreserved_marks_stay_unencoded() {
        let link = create_sms_link("wait... (really!) *~'-_", None);
        assert_eq!(link, "sms:?body=wait...%20(really!)%20*~'-_");
    }

    #[test]
    fn over_limit_message_still_produces_a_link() {
        let long = "a".repeat(SMS_SOFT_LIMIT_CHARS + 1);
        let link = create_sms_link(&long, Some("555"));
        assert!(link.starts_with("sms:555?body=a"));
        assert_eq!(link.len(), "sms:555?body=".len() + long.len());
    }
}
