//! Share link handlers.

mod create_share_link;
mod open_shared_link;

pub use create_share_link::{CreateShareLinkCommand, CreateShareLinkHandler, CreateShareLinkResult};
pub use open_shared_link::{OpenSharedLinkHandler, OpenSharedLinkQuery};
