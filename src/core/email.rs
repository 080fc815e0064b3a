/// Coarse structural check of email-like text.
///
/// Absent input never fails; every predicate folds it into `false`.
/// The check is intentionally loose: it only asks for an `@` and a `.`
/// somewhere in non-blank text, so `"@."` and `".@"` both pass.
pub struct EmailFormatChecker;

impl EmailFormatChecker {
    pub fn is_valid_email(email: Option<&str>) -> bool {
        let Some(email) = email else {
            return false;
        };

        if email.trim().is_empty() {
            return false;
        }

        email.contains('@') && email.contains('.')
    }

    pub fn is_present(email: Option<&str>) -> bool {
        email.is_some()
    }

    pub fn is_non_blank(email: Option<&str>) -> bool {
        email.is_some_and(|e| !e.trim().is_empty())
    }

    pub fn contains_at(email: Option<&str>) -> bool {
        email.is_some_and(|e| e.contains('@'))
    }

    pub fn contains_dot(email: Option<&str>) -> bool {
        email.is_some_and(|e| e.contains('.'))
    }
}
