use super::identity::{GroupMembership, IdentityRecord, RoleAssignment};
use serde::{Deserialize, Serialize};

/// A user's identity merged with their realm roles and groups.
///
/// Built once per profile lookup and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
}

impl UserProfile {
    /// Merge the three provider lookups into one profile.
    ///
    /// Names, email and the role/group sequences are taken as-is: no
    /// deduplication, filtering or reordering.
    pub fn assemble(
        identity: IdentityRecord,
        roles: Vec<RoleAssignment>,
        groups: Vec<GroupMembership>,
    ) -> Self {
        Self {
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: identity.email,
            roles: roles.into_iter().map(|role| role.name).collect(),
            groups: groups.into_iter().map(|group| group.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_profile_from_identity_roles_and_groups() {
        let identity = IdentityRecord::new("42", "testuser")
            .with_email("test@example.com")
            .with_name("John", "Doe");
        let roles = vec![RoleAssignment::new("ROLE_USER"), RoleAssignment::new("ROLE_MODERATOR")];
        let groups = vec![GroupMembership::new("default-group"), GroupMembership::new("admin-group")];

        let profile = UserProfile::assemble(identity, roles, groups);

        assert_eq!(
            profile,
            UserProfile {
                first_name: Some("John".to_string()),
                last_name: Some("Doe".to_string()),
                email: Some("test@example.com".to_string()),
                roles: vec!["ROLE_USER".to_string(), "ROLE_MODERATOR".to_string()],
                groups: vec!["default-group".to_string(), "admin-group".to_string()],
            }
        );
    }

    #[test]
    fn keeps_duplicates_and_missing_fields() {
        let identity = IdentityRecord::new("7", "bare");
        let roles = vec![RoleAssignment::new("r"), RoleAssignment::new("r")];

        let profile = UserProfile::assemble(identity, roles, Vec::new());

        assert_eq!(profile.roles, vec!["r", "r"]);
        assert!(profile.groups.is_empty());
        assert_eq!(profile.email, None);
        assert_eq!(profile.first_name, None);
    }
}
