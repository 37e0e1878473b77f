//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du tuteur (angle, drapeau tan, dernière évaluation, erreur)
//! et réévaluer via le noyau à chaque changement.
//!
//! Contrats :
//! - Aucun dessin ici.
//! - Une évaluation fraîche par changement (pas de cache d’EtatAngle).
//! - En cas d’erreur : on CONSERVE la dernière évaluation valide à l’écran.

use crate::noyau::exact::{valeurs_exactes, ValeursExactes};
use crate::noyau::reponse::Reponse;
use crate::noyau::series::{CercleUnite, CourbesTrig, VueCercle};
use crate::noyau::{evaluer_avec, EtatAngle, Reglages};

/// Angle au lancement (comme le curseur d’origine).
pub const ANGLE_DEFAUT: f64 = 30.0;

/// Tout ce que la vue dessine pour un angle donné.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub etat: EtatAngle,
    pub vue_cercle: VueCercle,
    pub exactes: Option<ValeursExactes>,
    /// Réponse JSON (même contrat que le front requête/réponse).
    pub json: String,
}

#[derive(Clone, Debug)]
pub struct AppTrig {
    // --- entrées utilisateur ---
    pub angle: f64,
    pub afficher_tan: bool,

    // --- sorties ---
    pub evaluation: Option<Evaluation>,
    pub erreur: String,

    // --- paramètres ---
    pub reglages: Reglages,
    pub cercle: CercleUnite,
    pub courbes: CourbesTrig,
}

impl Default for AppTrig {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppTrig {
    pub fn new(reglages: Reglages) -> Self {
        let mut app = Self {
            angle: ANGLE_DEFAUT,
            afficher_tan: true,
            evaluation: None,
            erreur: String::new(),
            cercle: CercleUnite::new(&reglages),
            courbes: CourbesTrig::new(&reglages),
            reglages,
        };
        app.reevaluer();
        app
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    pub fn set_angle(&mut self, degres: f64) {
        self.angle = degres;
        self.reevaluer();
    }

    pub fn set_afficher_tan(&mut self, afficher: bool) {
        self.afficher_tan = afficher;
        self.reevaluer();
    }

    /// Reset : angle par défaut + tan affichée.
    pub fn reset(&mut self) {
        self.angle = ANGLE_DEFAUT;
        self.afficher_tan = true;
        self.reevaluer();
    }

    /// Réévalue l’angle courant via le noyau et dépose le résultat.
    pub fn reevaluer(&mut self) {
        match self.evaluer_courant() {
            Ok(ev) => {
                self.erreur.clear();
                self.evaluation = Some(ev);
            }
            Err(msg) => self.set_erreur(msg),
        }
    }

    /// Utilitaire : placer une erreur (la dernière évaluation reste affichée).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        tracing::warn!(erreur = %self.erreur, "évaluation refusée");
    }

    fn evaluer_courant(&self) -> Result<Evaluation, String> {
        let etat =
            evaluer_avec(self.angle, self.afficher_tan, &self.reglages).map_err(|e| e.to_string())?;

        // Même contrat que le front requête/réponse, sans réévaluer l’angle.
        let json =
            serde_json::to_string_pretty(&Reponse::depuis(&etat)).map_err(|e| e.to_string())?;

        Ok(Evaluation {
            vue_cercle: VueCercle::depuis(&etat),
            exactes: valeurs_exactes(etat.degres),
            json,
            etat,
        })
    }
}
