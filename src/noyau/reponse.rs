// src/noyau/reponse.rs
//
// Contrat requête/réponse (transport hors périmètre : HTTP, images…)
// ------------------------------------------------------------------
// Requête : { "angle": 30, "show_tan": true }   (valeurs par défaut si absentes)
// Réponse : { "sin", "cos", "tan" | null, "quadrant" }

use serde::{Deserialize, Serialize};

use super::angle::{evaluer_avec, EtatAngle};
use super::erreur::ErreurAngle;
use super::reglages::Reglages;

pub const ANGLE_DEFAUT: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requete {
    #[serde(default = "angle_defaut")]
    pub angle: f64,
    #[serde(default = "vrai")]
    pub show_tan: bool,
}

impl Default for Requete {
    fn default() -> Self {
        Self {
            angle: ANGLE_DEFAUT,
            show_tan: true,
        }
    }
}

fn angle_defaut() -> f64 {
    ANGLE_DEFAUT
}

fn vrai() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reponse {
    pub sin: f64,
    pub cos: f64,
    /// `null` si tangente indéfinie.
    pub tan: Option<f64>,
    pub quadrant: String,
}

impl Reponse {
    /// Projection d’un EtatAngle déjà évalué (pas de seconde évaluation).
    pub fn depuis(etat: &EtatAngle) -> Self {
        Self {
            sin: etat.sinus,
            cos: etat.cosinus,
            tan: etat.tangente.valeur(),
            quadrant: etat.libelle_position().to_string(),
        }
    }
}

/// Une requête => une évaluation fraîche (aucune mémoïsation).
pub fn repondre(requete: &Requete, reglages: &Reglages) -> Result<Reponse, ErreurAngle> {
    let etat = evaluer_avec(requete.angle, requete.show_tan, reglages)?;
    Ok(Reponse::depuis(&etat))
}
