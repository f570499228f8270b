//! Core types for Zeta Planets

mod error;
mod identity;
mod digest;
mod traits;
mod state;
mod reason;
mod output;

pub use error::DnaError;
pub use identity::IdentityValue;
pub use digest::{Digest, strip_prefix};
pub use traits::{PrimaryColor, Mouth, EyeStyle, Accessory, TraitRecord, Planet};
pub use state::SessionState;
pub use reason::ReasonCode;
pub use output::SessionOutput;
