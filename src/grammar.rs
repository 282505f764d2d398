//! Intrinsic value shapes for `email` and `url` controls.

fn is_ascii_email_local_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '.' | '!'
                | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
                | '-'
        )
}

fn is_valid_email_domain_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }

    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphanumeric() {
        return false;
    }

    let mut last = first;
    for ch in chars {
        if !(ch.is_ascii_alphanumeric() || ch == '-') {
            return false;
        }
        last = ch;
    }

    last.is_ascii_alphanumeric()
}

fn is_valid_email_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_valid_email_domain_label)
}

/// A single address: `local@domain` with the local part drawn from the
/// permitted ASCII set and each domain label alphanumeric with inner hyphens.
pub(crate) fn is_simple_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if !local.chars().all(is_ascii_email_local_char) {
        return false;
    }
    is_valid_email_domain(domain)
}

/// Entries of a `multiple` email value. Blank entries are kept so the caller
/// can reject them.
pub(crate) fn email_list_entries(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim)
}

pub(crate) fn is_email_address_list(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    email_list_entries(value).all(|part| !part.is_empty() && is_simple_email(part))
}

/// An absolute URL with a scheme.
pub(crate) fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value.trim()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_email_requires_local_and_domain() {
        assert!(is_simple_email("a@example.com"));
        assert!(is_simple_email("first.last+tag@sub.example.co"));
        assert!(is_simple_email("abc@eemail.com"));
        assert!(is_simple_email("user@localhost"));
        for value in ["abc", "@example.com", "a@", "a@@b.com", "a b@c.com", "a@-b.com", "a@b-.com", "a@b..com"] {
            assert!(!is_simple_email(value), "{value:?}");
        }
    }

    #[test]
    fn email_list_accepts_comma_separated_addresses() {
        assert!(is_email_address_list("a@x.com, b@y.org"));
        assert!(is_email_address_list("   "));
        assert!(!is_email_address_list("a@x.com,,b@y.org"));
        assert!(!is_email_address_list("a@x.com, nope"));
    }

    #[test]
    fn absolute_url_requires_scheme() {
        assert!(is_absolute_url("https://example.com/path?q=1"));
        assert!(is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("http://"));
    }
}
