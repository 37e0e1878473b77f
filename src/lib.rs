//! Tuteur trig : sin, cos et tan sur le cercle unité.
//!
//! - `noyau` : évaluateur pur (angle -> valeurs, position, séries de rendu)
//! - `app`   : front réactif eframe/egui (natif + wasm)

pub mod app;
pub mod noyau;
