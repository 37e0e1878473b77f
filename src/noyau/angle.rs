// src/noyau/angle.rs
//
// Évaluateur d’angle (cœur du tuteur)
// ----------------------------------
// degrés -> radians (π/180) -> sin, cos, tan gardée -> position
//
// Contrats :
// - fonction pure : même entrée => même EtatAngle (bit à bit)
// - sin, cos finis dans [-1, 1]
// - tan : Valeur finie OU Indefinie (jamais NaN / ±∞ exposé)
// - entrée non finie => ErreurAngle::AngleInvalide

use super::erreur::ErreurAngle;
use super::quadrant::{classer, normaliser, Position};
use super::reglages::Reglages;

/// Tangente : valeur finie, ou sentinelle “indéfinie” (|cos| sous la tolérance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tangente {
    Valeur(f64),
    Indefinie,
}

impl Tangente {
    pub fn valeur(self) -> Option<f64> {
        match self {
            Tangente::Valeur(v) => Some(v),
            Tangente::Indefinie => None,
        }
    }

    pub fn est_indefinie(self) -> bool {
        matches!(self, Tangente::Indefinie)
    }
}

/// Résultat d’une évaluation. Créé à chaque demande, jamais mis en cache.
#[derive(Clone, Debug, PartialEq)]
pub struct EtatAngle {
    pub degres: f64,
    pub radians: f64,
    /// Angle ramené dans [0, 360) (classement + repère du graphe).
    pub normalise: f64,
    pub sinus: f64,
    pub cosinus: f64,
    pub tangente: Tangente,
    pub position: Position,
    /// Drapeau d’affichage de la courbe tan ; ne coupe aucun calcul.
    pub afficher_tangente: bool,
}

impl EtatAngle {
    pub fn libelle_position(&self) -> &'static str {
        self.position.libelle()
    }
}

/// API publique : évalue un angle avec les réglages par défaut.
pub fn evaluer(degres: f64, afficher_tangente: bool) -> Result<EtatAngle, ErreurAngle> {
    evaluer_avec(degres, afficher_tangente, &Reglages::default())
}

/// Évalue un angle (degrés, n’importe quel réel fini) avec des réglages explicites.
pub fn evaluer_avec(
    degres: f64,
    afficher_tangente: bool,
    reglages: &Reglages,
) -> Result<EtatAngle, ErreurAngle> {
    if !degres.is_finite() {
        tracing::warn!(degres, "angle non fini refusé");
        return Err(ErreurAngle::AngleInvalide(degres));
    }

    let radians = degres.to_radians();
    let (sinus, cosinus) = radians.sin_cos();

    let tangente = tangente_gardee(sinus, cosinus, reglages.tolerance_tangente);
    let position = classer(degres, reglages.tolerance_axe);

    tracing::debug!(
        degres,
        sinus,
        cosinus,
        tangente = ?tangente,
        position = position.libelle(),
        "angle évalué"
    );

    Ok(EtatAngle {
        degres,
        radians,
        normalise: normaliser(degres),
        sinus,
        cosinus,
        tangente,
        position,
        afficher_tangente,
    })
}

/// tan = sin / cos, sauf si |cos| < tolérance (asymptote : ±90°, ±270°, …).
pub fn tangente_gardee(sinus: f64, cosinus: f64, tolerance: f64) -> Tangente {
    if cosinus.abs() < tolerance {
        return Tangente::Indefinie;
    }
    let t = sinus / cosinus;
    if t.is_finite() {
        Tangente::Valeur(t)
    } else {
        Tangente::Indefinie
    }
}
