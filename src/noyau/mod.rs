//! Noyau du tuteur trig
//!
//! Organisation interne :
//! - angle.rs     : évaluateur (degrés -> sin, cos, tan gardée, position)
//! - quadrant.rs  : normalisation [0, 360) + axe / quadrant
//! - series.rs    : cercle unité + courbes sin/cos/tan (tan écrêtée)
//! - exact.rs     : valeurs exactes aux angles remarquables
//! - reponse.rs   : contrat requête/réponse (serde)
//! - reglages.rs  : constantes configurables (env)
//! - erreur.rs    : erreurs typées

pub mod angle;
pub mod erreur;
pub mod exact;
pub mod quadrant;
pub mod reglages;
pub mod reponse;
pub mod series;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use angle::{evaluer, evaluer_avec, EtatAngle, Tangente};
pub use erreur::{ErreurAngle, ErreurReglages};
pub use quadrant::Position;
pub use reglages::Reglages;
