// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurAngle    : seule erreur de l’évaluateur (entrée non finie)
// - ErreurReglages : lecture des réglages (variables d’environnement)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurAngle {
    /// NaN / ±∞ : précondition violée, jamais “corrigée” en silence.
    #[error("angle invalide : {0} (valeur finie attendue)")]
    AngleInvalide(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurReglages {
    #[error("{cle} : valeur invalide {valeur:?} ({raison})")]
    ValeurInvalide {
        cle: &'static str,
        valeur: String,
        raison: String,
    },
}
