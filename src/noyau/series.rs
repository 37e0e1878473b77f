//! Séries pour le rendu (cercle unité + courbes sin/cos/tan).
//!
//! Données pures, sans dessin : le front (egui, JSON…) consomme ces valeurs.
//! Les itérateurs sont paresseux, finis et redémarrables (`Clone`, ou
//! rappeler `points()` / `echantillons()`).

use std::f64::consts::TAU;

use super::angle::EtatAngle;
use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGINE: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub de: Point,
    pub a: Point,
}

/* ------------------------ linspace ------------------------ */

/// i-ème valeur de linspace(debut, fin, n), bornes incluses.
fn linspace_at(debut: f64, fin: f64, n: usize, i: usize) -> f64 {
    if n <= 1 {
        return debut;
    }
    if i + 1 == n {
        return fin;
    }
    let pas = (fin - debut) / (n - 1) as f64;
    debut + pas * i as f64
}

/* ------------------------ Cercle unité ------------------------ */

/// Tracé du cercle unité : θ ∈ [0, 2π], `n` points régulièrement espacés.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CercleUnite {
    n: usize,
}

impl CercleUnite {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            n: reglages.points_cercle,
        }
    }

    /// Nouvel itérateur depuis θ = 0 (redémarrage = nouvel appel).
    pub fn points(&self) -> PointsCercle {
        PointsCercle { n: self.n, i: 0 }
    }
}

impl IntoIterator for &CercleUnite {
    type Item = Point;
    type IntoIter = PointsCercle;

    fn into_iter(self) -> PointsCercle {
        self.points()
    }
}

#[derive(Clone, Debug)]
pub struct PointsCercle {
    n: usize,
    i: usize,
}

impl Iterator for PointsCercle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i >= self.n {
            return None;
        }
        let theta = linspace_at(0.0, TAU, self.n, self.i);
        self.i += 1;
        Some(Point::new(theta.cos(), theta.sin()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let reste = self.n - self.i;
        (reste, Some(reste))
    }
}

impl ExactSizeIterator for PointsCercle {}

/// Point courant (cos θ, sin θ) + projections sur les axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VueCercle {
    pub point: Point,
    /// Rayon : origine -> point.
    pub rayon: Segment,
    /// (x, y) -> (x, 0)
    pub projection_verticale: Segment,
    /// (x, y) -> (0, y)
    pub projection_horizontale: Segment,
}

impl VueCercle {
    pub fn depuis(etat: &EtatAngle) -> Self {
        let p = Point::new(etat.cosinus, etat.sinus);
        Self {
            point: p,
            rayon: Segment {
                de: Point::ORIGINE,
                a: p,
            },
            projection_verticale: Segment {
                de: p,
                a: Point::new(p.x, 0.0),
            },
            projection_horizontale: Segment {
                de: p,
                a: Point::new(0.0, p.y),
            },
        }
    }
}

/* ------------------------ Courbes sin/cos/tan ------------------------ */

/// Un échantillon des courbes. `tangente = None` : trou (asymptote / hors cadre).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Echantillon {
    pub degres: f64,
    pub sinus: f64,
    pub cosinus: f64,
    pub tangente: Option<f64>,
}

/// Courbes sur [0°, 360°], `n` échantillons, tan écrêtée pour l’affichage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourbesTrig {
    n: usize,
    seuil_tangente: f64,
}

impl CourbesTrig {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            n: reglages.points_courbes,
            seuil_tangente: reglages.seuil_tangente_affichee,
        }
    }

    pub fn echantillons(&self) -> Echantillons {
        Echantillons {
            courbes: *self,
            i: 0,
        }
    }
}

impl IntoIterator for &CourbesTrig {
    type Item = Echantillon;
    type IntoIter = Echantillons;

    fn into_iter(self) -> Echantillons {
        self.echantillons()
    }
}

#[derive(Clone, Debug)]
pub struct Echantillons {
    courbes: CourbesTrig,
    i: usize,
}

impl Iterator for Echantillons {
    type Item = Echantillon;

    fn next(&mut self) -> Option<Echantillon> {
        let CourbesTrig { n, seuil_tangente } = self.courbes;
        if self.i >= n {
            return None;
        }

        let degres = linspace_at(0.0, 360.0, n, self.i);
        self.i += 1;

        let r = degres.to_radians();
        Some(Echantillon {
            degres,
            sinus: r.sin(),
            cosinus: r.cos(),
            tangente: ecreter_tangente(r.tan(), seuil_tangente),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let reste = self.courbes.n - self.i;
        (reste, Some(reste))
    }
}

impl ExactSizeIterator for Echantillons {}

/// Écrêtage d’affichage : |tan| > seuil (ou non fini) => trou.
/// Ne touche pas `EtatAngle::tangente`.
pub fn ecreter_tangente(t: f64, seuil: f64) -> Option<f64> {
    if t.is_finite() && t.abs() <= seuil {
        Some(t)
    } else {
        None
    }
}

/// Découpe une suite d’échantillons optionnels en tronçons continus (un par trou).
pub fn troncons<I>(valeurs: I) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let mut out = Vec::new();
    let mut courant = Vec::new();

    for (x, y) in valeurs {
        match y {
            Some(y) => courant.push((x, y)),
            None => {
                if !courant.is_empty() {
                    out.push(std::mem::take(&mut courant));
                }
            }
        }
    }
    if !courant.is_empty() {
        out.push(courant);
    }
    out
}
