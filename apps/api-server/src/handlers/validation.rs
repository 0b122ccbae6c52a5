//! Small input validation helpers shared by handlers.

/// Loose well-formedness check for e-mail addresses: one `@`, a non-empty
/// local part, and a dotted domain. Deliverability is not our problem.
pub fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_well_formed_email("a@x.com"));
        assert!(is_well_formed_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_well_formed_email(""));
        assert!(!is_well_formed_email("no-at-sign"));
        assert!(!is_well_formed_email("@x.com"));
        assert!(!is_well_formed_email("a@"));
        assert!(!is_well_formed_email("a@nodot"));
        assert!(!is_well_formed_email("a@.com."));
        assert!(!is_well_formed_email("a b@x.com"));
    }
}
