//! Role gate for the authoring surface
//!
//! The caller's role is a plain string compared against the authoring
//! set; anything outside `{safety, admin}` is denied identically. The
//! check runs once, when an authoring session is opened, and covers the
//! whole mutation surface. Reads and export are open to any role that
//! can already see the template.

use crate::error::{FormError, FormResult};

/// Roles permitted to author templates
pub const AUTHORING_ROLES: &[&str] = &["safety", "admin"];

/// Identity of the user driving an authoring session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub role: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn can_author(&self) -> bool {
        AUTHORING_ROLES.contains(&self.role.as_str())
    }

    /// Gate check, short-circuiting before any other validation
    pub fn require_author(&self) -> FormResult<()> {
        if self.can_author() {
            Ok(())
        } else {
            Err(FormError::RoleDenied {
                role: self.role.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_and_admin_can_author() {
        assert!(Actor::new("John Smith", "safety").can_author());
        assert!(Actor::new("Jane Doe", "admin").can_author());
    }

    #[test]
    fn test_other_roles_are_denied() {
        for role in ["pilot", "dispatcher", "SAFETY", ""] {
            let actor = Actor::new("Someone", role);
            assert!(!actor.can_author(), "role {role:?} should be denied");
            assert!(matches!(
                actor.require_author(),
                Err(FormError::RoleDenied { .. })
            ));
        }
    }
}
