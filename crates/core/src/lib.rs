//! # frostvale
//!
//! Domain logic for the Frostvale server website: status polling data model,
//! MOTD markup handling, view-state derivation, the pixel-snow particle field,
//! and the scroll/pointer geometry behind the page's interaction handlers.
//!
//! Everything in this crate is pure and natively testable; all browser glue
//! (fetch, canvas, timers, clipboard) lives in the `frostvale_web` crate.
//!
//! ## Modules
//!
//! - [`status`]: wire types for the remote status API and the snapshot model
//! - [`motd`]: sanitization of server-supplied MOTD markup
//! - [`view`]: deterministic snapshot → renderable view-state mapping
//! - [`particles`]: the fixed-size snow particle simulation
//! - [`effects`]: parallax/blur/active-section/tilt math
//! - [`prng`]: small deterministic PRNG for the simulation

pub mod effects;
pub mod motd;
pub mod particles;
pub mod prng;
pub mod status;
pub mod view;

/// Prelude module for convenient imports.
///
/// ```
/// use frostvale::prelude::*;
/// ```
pub mod prelude {
    pub use crate::effects::{active_section, background_blur_px, card_tilt, hero_parallax};
    pub use crate::particles::{Particle, ParticleField};
    pub use crate::prng::Prng;
    pub use crate::status::{decode_status, PlayerSummary, ServerStatus, ServerStatusSnapshot};
    pub use crate::view::{PlayerView, StatusView};
}
