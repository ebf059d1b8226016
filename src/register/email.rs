//! Email syntax check matching the platform `EMAIL_ADDRESS` pattern:
//!
//! ```text
//! [a-zA-Z0-9+._%-]{1,256} @ [a-zA-Z0-9][a-zA-Z0-9-]{0,64} ( . [a-zA-Z0-9][a-zA-Z0-9-]{0,25} )+
//! ```
//!
//! The whole input must match; surrounding whitespace is rejected.

const MAX_LOCAL_LEN: usize = 256;
const MAX_DOMAIN_TAIL: usize = 64;
const MAX_SUBDOMAIN_TAIL: usize = 25;

pub fn is_valid_email(input: &str) -> bool {
    // The local part's character class excludes '@', so the first one splits.
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    (1..=MAX_LOCAL_LEN).contains(&local.len())
        && local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'_' | b'%' | b'-'))
}

fn is_domain(domain: &str) -> bool {
    let mut labels = domain.split('.');
    let Some(first) = labels.next() else {
        return false;
    };
    if !is_label(first, MAX_DOMAIN_TAIL) {
        return false;
    }
    let mut suffixes = 0;
    for label in labels {
        if !is_label(label, MAX_SUBDOMAIN_TAIL) {
            return false;
        }
        suffixes += 1;
    }
    suffixes > 0
}

fn is_label(label: &str, max_tail: usize) -> bool {
    let bytes = label.as_bytes();
    let Some((head, tail)) = bytes.split_first() else {
        return false;
    };
    head.is_ascii_alphanumeric()
        && tail.len() <= max_tail
        && tail.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_common_addresses() {
        for address in [
            "user@example.com",
            "john.doe+news@mail.example.co.uk",
            "a_b%c-d@x-y.io",
            "1@2.3",
        ] {
            assert!(is_valid_email(address), "{address} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in [
            "",
            "not-an-email",
            "bad",
            "user@",
            "@example.com",
            "user@example",
            "user@example.",
            "user@.com",
            "user@-example.com",
            "user@example..com",
            "us er@example.com",
            "user@@example.com",
            "user@exa_mple.com",
            " user@example.com",
            "user@example.com ",
            "jörg@example.com",
        ] {
            assert!(!is_valid_email(address), "{address:?} should be rejected");
        }
    }

    #[test]
    fn enforces_length_limits() {
        let local = "a".repeat(256);
        assert!(is_valid_email(&format!("{local}@example.com")));
        let local = "a".repeat(257);
        assert!(!is_valid_email(&format!("{local}@example.com")));

        let label = format!("a{}", "b".repeat(64));
        assert!(is_valid_email(&format!("user@{label}.com")));
        let label = format!("a{}", "b".repeat(65));
        assert!(!is_valid_email(&format!("user@{label}.com")));

        let suffix = format!("c{}", "d".repeat(25));
        assert!(is_valid_email(&format!("user@example.{suffix}")));
        let suffix = format!("c{}", "d".repeat(26));
        assert!(!is_valid_email(&format!("user@example.{suffix}")));
    }
}
