//! Which visibility tiers each role may see.

use crate::model::{Role, Visibility};
use std::collections::BTreeSet;

/// Tiers visible to `role`. Staff see every tier, so callers can drop the
/// status clause for them; approval is required for everyone regardless.
pub fn allowed_statuses(role: Role) -> BTreeSet<Visibility> {
    match role {
        Role::Admin | Role::Faculty | Role::Ta => Visibility::ALL.into_iter().collect(),
        Role::Student => [
            Visibility::PrivateToEnact,
            Visibility::Public,
            Visibility::FinalPublic,
        ]
        .into_iter()
        .collect(),
        Role::Anonymous => Visibility::PUBLIC_TIERS.into_iter().collect(),
    }
}

/// True when `role` sees every tier.
pub fn is_unrestricted(role: Role) -> bool {
    role.is_staff()
}
