//! Custom actions for the Resource actor.
//!
//! Each action is applied by [`Resource::handle_action`](crate::framework::ActorEntity::handle_action)
//! as a single read-modify-write inside the actor.

use crate::model::{CheckStatus, UserId, Visibility};

#[derive(Debug, Clone)]
pub enum ResourceAction {
    /// Moves the resource to another visibility tier.
    SetVisibility(Visibility),
    /// Records a moderation decision.
    SetCheckStatus(CheckStatus),
    /// Hands the resource to another account.
    TransferOwner { owner_id: UserId, owner_name: String },
    /// Settles a pending-public student upload into `to`.
    ///
    /// # Errors
    /// Fails unless the resource is currently `partPublic`.
    ResolvePartPublic(Visibility),
}

/// Every action returns the record as it is after the change.
#[derive(Debug, Clone)]
pub enum ResourceActionResult {
    Updated(Box<crate::model::Resource>),
}
