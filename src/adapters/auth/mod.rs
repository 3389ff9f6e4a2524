//! Identity adapters.
//!
//! Implementations of the `IdentityProvider` port:
//!
//! - `gotrue` - Production GoTrue/Supabase Auth implementation
//! - `mock` - Test implementation that doesn't require an external service

mod gotrue;
mod mock;

pub use gotrue::{GoTrueConfig, GoTrueIdentity};
pub use mock::MockIdentityProvider;
