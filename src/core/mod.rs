//! Core modules for Zeta Planets

pub mod dna;
pub mod decoder;
pub mod render;
pub mod session;
pub mod identity_source;
pub mod api;

pub use dna::{DnaGenerator, digest, keccak_hex};
pub use decoder::{TraitDecoder, TraitWindow, WINDOWS, decode};
pub use render::{render_svg, save_planet, load_planet};
pub use session::{Session, SessionEvent, Transition, generate_planet};
pub use identity_source::{IdentitySource, FixedIdentity, EnvIdentity, detect};
pub use api::{create_router, run_server, ServerConfig};
