//! Auth-domain identifiers, flow actions, token pairs, and verified identities.

pub mod action;
pub mod id;
pub mod identity;
pub mod token;

pub use action::*;
pub use id::*;
pub use identity::*;
pub use token::{pair::*, secret::*};
