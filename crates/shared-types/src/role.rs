use serde::{Deserialize, Serialize};

/// Clinic staff role selecting which dashboard configuration a page supplies.
///
/// - `Receptionist` — front desk. Read-only view of upcoming consultations.
/// - `Doctor` — runs consultations: can join and end them.
/// - `SuperAdmin` — platform operator. Sees every clinic, statistics and
///   health status; satisfies every other role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ClinicRole {
    #[default]
    Receptionist,
    Doctor,
    SuperAdmin,
}

/// All roles in sign-in display order.
pub const ALL_ROLES: &[ClinicRole] = &[
    ClinicRole::Receptionist,
    ClinicRole::Doctor,
    ClinicRole::SuperAdmin,
];

impl ClinicRole {
    /// Parse a role string. Unknown values default to `Receptionist`,
    /// the least privileged role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "doctor" => ClinicRole::Doctor,
            "super_admin" | "superadmin" => ClinicRole::SuperAdmin,
            _ => ClinicRole::Receptionist,
        }
    }

    /// Lowercase identifier used in config files and session storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicRole::Receptionist => "receptionist",
            ClinicRole::Doctor => "doctor",
            ClinicRole::SuperAdmin => "super_admin",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ClinicRole::Receptionist => "Receptionist",
            ClinicRole::Doctor => "Doctor",
            ClinicRole::SuperAdmin => "Super Admin",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    /// Super admin satisfies all roles; everyone else only themselves.
    pub fn satisfies(&self, required: &ClinicRole) -> bool {
        match self {
            ClinicRole::SuperAdmin => true,
            role => role == required,
        }
    }
}

/// The signed-in user as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: String,
    pub display_name: String,
    pub role: ClinicRole,
}

impl AuthUser {
    /// Demo identity for a role, used by the sign-in page.
    pub fn demo(role: ClinicRole) -> Self {
        let display_name = match role {
            ClinicRole::Receptionist => "Riley Front Desk",
            ClinicRole::Doctor => "Dr. Amara Osei",
            ClinicRole::SuperAdmin => "Platform Admin",
        };
        Self {
            id: format!("demo-{}", role.as_str()),
            display_name: display_name.to_string(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_satisfies_every_role() {
        for required in ALL_ROLES {
            assert!(ClinicRole::SuperAdmin.satisfies(required));
        }
    }

    #[test]
    fn other_roles_satisfy_only_themselves() {
        assert!(ClinicRole::Receptionist.satisfies(&ClinicRole::Receptionist));
        assert!(!ClinicRole::Receptionist.satisfies(&ClinicRole::Doctor));
        assert!(!ClinicRole::Receptionist.satisfies(&ClinicRole::SuperAdmin));
        assert!(ClinicRole::Doctor.satisfies(&ClinicRole::Doctor));
        assert!(!ClinicRole::Doctor.satisfies(&ClinicRole::Receptionist));
        assert!(!ClinicRole::Doctor.satisfies(&ClinicRole::SuperAdmin));
    }

    #[test]
    fn parse_accepts_known_spellings() {
        assert_eq!(ClinicRole::from_str_or_default("Doctor"), ClinicRole::Doctor);
        assert_eq!(ClinicRole::from_str_or_default("super_admin"), ClinicRole::SuperAdmin);
        assert_eq!(ClinicRole::from_str_or_default("super-admin"), ClinicRole::SuperAdmin);
        assert_eq!(ClinicRole::from_str_or_default("SUPERADMIN"), ClinicRole::SuperAdmin);
    }

    #[test]
    fn parse_unknown_defaults_to_receptionist() {
        assert_eq!(ClinicRole::from_str_or_default(""), ClinicRole::Receptionist);
        assert_eq!(ClinicRole::from_str_or_default("janitor"), ClinicRole::Receptionist);
    }

    #[test]
    fn as_str_parses_back() {
        for role in ALL_ROLES {
            assert_eq!(ClinicRole::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn demo_users_carry_their_role() {
        let user = AuthUser::demo(ClinicRole::Doctor);
        assert_eq!(user.role, ClinicRole::Doctor);
        assert_eq!(user.id, "demo-doctor");
    }
}
