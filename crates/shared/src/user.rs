use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Employee,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Employee)
    }

    /// Admins and employees may browse the user directory.
    pub fn can_list_users(&self) -> bool {
        self.is_staff()
    }

    /// Admins and employees may read any profile, only admins may change one.
    pub fn can_view_any_profile(&self) -> bool {
        self.is_staff()
    }

    /// Only admins see bookings across users. Employees are filtered to
    /// their own rows like ordinary users, unlike the user directory.
    pub fn sees_all_bookings(&self) -> bool {
        self.is_admin()
    }
}

/// The authenticated principal performing an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
}

impl Actor {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Acting on an account is allowed for its owner and for admins.
    pub fn can_manage_user(&self, user_id: i64) -> bool {
        self.is_admin() || self.id == user_id
    }

    pub fn can_view_user(&self, user_id: i64) -> bool {
        self.id == user_id || self.role.can_view_any_profile()
    }
}
