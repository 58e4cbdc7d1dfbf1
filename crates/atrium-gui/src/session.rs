//! User session surface.
//!
//! The shell only reads display fields from the auth collaborator and
//! forwards the logout request; it never inspects session validity.

/// The signed-in user's display data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    /// Display name, if the auth collaborator supplied one.
    pub name: Option<String>,
    /// E-mail address, if supplied.
    pub email: Option<String>,
}

impl UserSession {
    /// Create a session with name and e-mail.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Avatar initials: first letters of up to two name words, uppercased.
    /// `??` when no name is available.
    pub fn initials(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name
                .split_whitespace()
                .take(2)
                .filter_map(|word| word.chars().next())
                .flat_map(char::to_uppercase)
                .collect(),
            _ => "??".to_string(),
        }
    }

    /// Clear the session after a logout request.
    ///
    /// Actual session invalidation belongs to the auth collaborator; the
    /// shell just stops displaying the user.
    pub fn logout(&mut self) {
        tracing::info!(user = ?self.name, "logout requested");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        let session = UserSession::new("Maria Gonzalez", "maria@example.com");
        assert_eq!(session.initials(), "MG");
    }

    #[test]
    fn test_initials_single_word() {
        let session = UserSession::new("admin", "admin@example.com");
        assert_eq!(session.initials(), "A");
    }

    #[test]
    fn test_initials_more_than_two_words_take_first_two() {
        let session = UserSession::new("Ana Maria Silva", "ana@example.com");
        assert_eq!(session.initials(), "AM");
    }

    #[test]
    fn test_initials_placeholder_without_name() {
        assert_eq!(UserSession::default().initials(), "??");
        let blank = UserSession {
            name: Some("   ".to_string()),
            email: None,
        };
        assert_eq!(blank.initials(), "??");
    }

    #[test]
    fn test_logout_clears_display_fields() {
        let mut session = UserSession::new("Maria Gonzalez", "maria@example.com");
        session.logout();
        assert_eq!(session, UserSession::default());
        assert_eq!(session.initials(), "??");
    }
}
