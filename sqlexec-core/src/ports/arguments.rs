// sqlexec-core/src/ports/arguments.rs

use crate::domain::arguments::Action;
use crate::domain::profile::ConnectionProfile;

/// Turns a profile, an already-resolved database and an action into the
/// ordered argument list handed to the client.
pub trait ArgumentBuilder: Send + Sync {
    fn build(
        &self,
        profile: &ConnectionProfile,
        database: Option<&str>,
        action: &Action<'_>,
    ) -> Vec<String>;
}
