//! Role text conversion tests.
//!
//! Coverage:
//! - every role survives `as_str` → `from_str`
//! - canonical spellings for roles used by file-list transactions
//! - unknown or differently-cased text is rejected
//! - `Source::new()` starts with `Role::Unknown` and no transaction id

#[cfg(test)]
mod tests {
    use crate::source::{Role, RoleParseError, Source};
    use std::collections::HashSet;

    #[test]
    fn every_role_parses_back_from_its_text() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn role_text_is_unique() {
        let names: HashSet<_> = Role::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), Role::ALL.len());
    }

    #[test]
    fn canonical_spellings() {
        assert_eq!(Role::GetFiles.as_str(), "get-files");
        assert_eq!(Role::SearchFile.to_string(), "search-file");
        assert_eq!(Role::SimulateUpdatePackages.as_str(), "simulate-update-packages");
        assert_eq!(Role::default(), Role::Unknown);
    }

    #[test]
    fn unknown_text_is_rejected() {
        assert_eq!(
            "get-everything".parse::<Role>(),
            Err(RoleParseError("get-everything".into()))
        );
        // Case matters: the wire form is always lower-case.
        assert!("Get-Files".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn new_source_is_empty() {
        let source = Source::new();
        assert_eq!(source.role, Role::Unknown);
        assert_eq!(source.transaction_id, None);
    }
}
