// src/noyau/quadrant.rs
//
// Position d’un angle sur le cercle unité (axe ou quadrant)
// ---------------------------------------------------------
// 1) normaliser dans [0, 360)
// 2) axe si round(a) ∈ {0, 90, 180, 270} et |a - round(a)| < tolérance
// 3) sinon intervalle ouvert → quadrant I..IV
// 4) repli (inatteignable pour une entrée finie)

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    AxeXPositif,
    AxeYPositif,
    AxeXNegatif,
    AxeYNegatif,
    QuadrantI,
    QuadrantII,
    QuadrantIII,
    QuadrantIV,
    /// Repli défensif : aucune branche précédente n’a répondu.
    AngleSpecial,
}

impl Position {
    /// Les 8 positions atteignables (4 axes + 4 quadrants).
    pub const ATTEIGNABLES: [Position; 8] = [
        Position::AxeXPositif,
        Position::AxeYPositif,
        Position::AxeXNegatif,
        Position::AxeYNegatif,
        Position::QuadrantI,
        Position::QuadrantII,
        Position::QuadrantIII,
        Position::QuadrantIV,
    ];

    /// Libellé affiché (phrase “This angle is …”).
    pub fn libelle(self) -> &'static str {
        match self {
            Position::AxeXPositif => "on the positive x-axis",
            Position::AxeYPositif => "on the positive y-axis",
            Position::AxeXNegatif => "on the negative x-axis",
            Position::AxeYNegatif => "on the negative y-axis",
            Position::QuadrantI => "in Quadrant I (sin > 0, cos > 0)",
            Position::QuadrantII => "in Quadrant II (sin > 0, cos < 0)",
            Position::QuadrantIII => "in Quadrant III (sin < 0, cos < 0)",
            Position::QuadrantIV => "in Quadrant IV (sin < 0, cos > 0)",
            Position::AngleSpecial => "at a special angle on one of the axes",
        }
    }
}

/// Ramène un angle (degrés, fini) dans [0, 360).
///
/// `rem_euclid` peut rendre exactement 360 pour un négatif minuscule (-1e-20) :
/// on le replie sur 0.
pub fn normaliser(degres: f64) -> f64 {
    let a = degres.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Classe un angle (degrés). L’entrée doit être finie (vérifiée par l’évaluateur).
pub fn classer(degres: f64, tolerance_axe: f64) -> Position {
    let a = normaliser(degres);

    let arrondi = a.round();
    if (a - arrondi).abs() < tolerance_axe {
        // 359.9999999 arrondit à 360 : pas un axe reconnu, il reste en quadrant IV.
        let axe = match arrondi as i64 {
            0 => Some(Position::AxeXPositif),
            90 => Some(Position::AxeYPositif),
            180 => Some(Position::AxeXNegatif),
            270 => Some(Position::AxeYNegatif),
            _ => None,
        };
        if let Some(p) = axe {
            return p;
        }
    }

    if 0.0 < a && a < 90.0 {
        Position::QuadrantI
    } else if 90.0 < a && a < 180.0 {
        Position::QuadrantII
    } else if 180.0 < a && a < 270.0 {
        Position::QuadrantIII
    } else if 270.0 < a && a < 360.0 {
        Position::QuadrantIV
    } else {
        Position::AngleSpecial
    }
}
