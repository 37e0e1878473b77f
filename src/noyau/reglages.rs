// src/noyau/reglages.rs
//
// Réglages du noyau (constantes configurables).
//
// Valeurs par défaut = valeurs historiques de l’outil :
// - tangente indéfinie si |cos| < 1e-6
// - axe reconnu si |a - round(a)| < 1e-6
// - courbe tan coupée au-delà de |tan| > 4
// - 400 points (cercle), 1000 échantillons (courbes)

use super::erreur::ErreurReglages;

pub const TOLERANCE_TANGENTE_DEFAUT: f64 = 1e-6;
pub const TOLERANCE_AXE_DEFAUT: f64 = 1e-6;
pub const SEUIL_TANGENTE_DEFAUT: f64 = 4.0;
pub const POINTS_CERCLE_DEFAUT: usize = 400;
pub const POINTS_COURBES_DEFAUT: usize = 1000;

/// Garde-fou : on borne le nombre de points (anti-gel du rendu).
pub const POINTS_MAX: usize = 100_000;

pub const ENV_TOLERANCE_TANGENTE: &str = "TRIG_TOLERANCE_TANGENTE";
pub const ENV_TOLERANCE_AXE: &str = "TRIG_TOLERANCE_AXE";
pub const ENV_SEUIL_TANGENTE: &str = "TRIG_SEUIL_TANGENTE";
pub const ENV_POINTS_CERCLE: &str = "TRIG_POINTS_CERCLE";
pub const ENV_POINTS_COURBES: &str = "TRIG_POINTS_COURBES";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reglages {
    pub tolerance_tangente: f64,
    pub tolerance_axe: f64,
    pub seuil_tangente_affichee: f64,
    pub points_cercle: usize,
    pub points_courbes: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            tolerance_tangente: TOLERANCE_TANGENTE_DEFAUT,
            tolerance_axe: TOLERANCE_AXE_DEFAUT,
            seuil_tangente_affichee: SEUIL_TANGENTE_DEFAUT,
            points_cercle: POINTS_CERCLE_DEFAUT,
            points_courbes: POINTS_COURBES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Lit les réglages depuis l’environnement du processus.
    ///
    /// Variables (toutes optionnelles) :
    /// - `TRIG_TOLERANCE_TANGENTE` : défaut 1e-6
    /// - `TRIG_TOLERANCE_AXE`      : défaut 1e-6
    /// - `TRIG_SEUIL_TANGENTE`     : défaut 4
    /// - `TRIG_POINTS_CERCLE`      : défaut 400
    /// - `TRIG_POINTS_COURBES`     : défaut 1000
    pub fn depuis_env() -> Result<Self, ErreurReglages> {
        Self::depuis_source(|cle| std::env::var(cle).ok())
    }

    /// Même lecture, mais via une source quelconque (tests : pas d’env global).
    pub fn depuis_source<F>(source: F) -> Result<Self, ErreurReglages>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let d = Self::default();

        Ok(Self {
            tolerance_tangente: lire_positif(&source, ENV_TOLERANCE_TANGENTE, d.tolerance_tangente)?,
            tolerance_axe: lire_positif(&source, ENV_TOLERANCE_AXE, d.tolerance_axe)?,
            seuil_tangente_affichee: lire_positif(
                &source,
                ENV_SEUIL_TANGENTE,
                d.seuil_tangente_affichee,
            )?,
            points_cercle: lire_points(&source, ENV_POINTS_CERCLE, d.points_cercle)?,
            points_courbes: lire_points(&source, ENV_POINTS_COURBES, d.points_courbes)?,
        })
    }
}

/* ------------------------ Outils ------------------------ */

fn lire_positif<F>(source: &F, cle: &'static str, defaut: f64) -> Result<f64, ErreurReglages>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(brut) = source(cle) else {
        return Ok(defaut);
    };

    let v: f64 = brut.trim().parse().map_err(|_| invalide(cle, &brut, "nombre attendu".into()))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(invalide(cle, &brut, "nombre fini > 0 attendu".into()));
    }
    Ok(v)
}

fn lire_points<F>(source: &F, cle: &'static str, defaut: usize) -> Result<usize, ErreurReglages>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(brut) = source(cle) else {
        return Ok(defaut);
    };

    let n: usize = brut.trim().parse().map_err(|_| invalide(cle, &brut, "entier attendu".into()))?;
    if !(2..=POINTS_MAX).contains(&n) {
        let raison = format!("entre 2 et {POINTS_MAX} points");
        return Err(invalide(cle, &brut, raison));
    }
    Ok(n)
}

fn invalide(cle: &'static str, brut: &str, raison: String) -> ErreurReglages {
    ErreurReglages::ValeurInvalide {
        cle,
        valeur: brut.to_string(),
        raison,
    }
}
