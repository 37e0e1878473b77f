// src/noyau/exact.rs
//
// Valeurs exactes aux angles remarquables (sin/cos/tan)
// ----------------------------------------------------
// - degrés entiers seulement
// - coeff·π = degrés/180 (rationnel), réduit modulo 2
// - table sur k/n avec n ∈ {1,2,3,4,6} (multiples de 30° ou 45°)

use num_rational::Rational64;
use num_traits::Signed;

/// Au-delà, la conversion f64 -> i64 n’est plus “exacte” pour nos besoins.
const DEGRES_MAX_EXACT: f64 = 1e15;

const INDEFINI: &str = "undefined";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValeursExactes {
    /// Angle réduit dans [0, 2π), écrit en multiple de π (“π/6”, “3π/4”…).
    pub angle: String,
    pub sinus: &'static str,
    pub cosinus: &'static str,
    pub tangente: &'static str,
}

/// Reconnaît un angle remarquable et renvoie ses valeurs exactes.
/// None si l’angle n’est pas un entier multiple de 30° ou 45°.
pub fn valeurs_exactes(degres: f64) -> Option<ValeursExactes> {
    if !degres.is_finite() || degres.fract() != 0.0 || degres.abs() > DEGRES_MAX_EXACT {
        return None;
    }

    // 1) coeff·π puis réduction modulo 2 (période de sin/cos)
    let coeff = Rational64::new(degres as i64, 180);
    let deux = Rational64::from_integer(2);
    let mut reduit = coeff % deux;
    if reduit.is_negative() {
        reduit += deux;
    }

    // 2) k/n réduit (Ratio normalise déjà)
    let (k, n) = (*reduit.numer(), *reduit.denom());
    if ![1, 2, 3, 4, 6].contains(&n) {
        return None;
    }

    let (sinus, cosinus, tangente) = table(k, n)?;

    Some(ValeursExactes {
        angle: format_angle_kn_pi(k, n),
        sinus,
        cosinus,
        tangente,
    })
}

/// (sin, cos, tan) exacts pour k·π/n, k ∈ [0, 2n).
fn table(k: i64, n: i64) -> Option<(&'static str, &'static str, &'static str)> {
    let v = match (k, n) {
        (0, _) => ("0", "1", "0"),

        (1, 6) => ("1/2", "√3/2", "√3/3"),
        (1, 4) => ("√2/2", "√2/2", "1"),
        (1, 3) => ("√3/2", "1/2", "√3"),
        (1, 2) => ("1", "0", INDEFINI),

        (2, 3) => ("√3/2", "-1/2", "-√3"),
        (3, 4) => ("√2/2", "-√2/2", "-1"),
        (5, 6) => ("1/2", "-√3/2", "-√3/3"),
        (1, 1) => ("0", "-1", "0"),

        (7, 6) => ("-1/2", "-√3/2", "√3/3"),
        (5, 4) => ("-√2/2", "-√2/2", "1"),
        (4, 3) => ("-√3/2", "-1/2", "√3"),
        (3, 2) => ("-1", "0", INDEFINI),

        (5, 3) => ("-√3/2", "1/2", "-√3"),
        (7, 4) => ("-√2/2", "√2/2", "-1"),
        (11, 6) => ("-1/2", "√3/2", "-√3/3"),

        _ => return None,
    };
    Some(v)
}

/* ------------------------ Outils ------------------------ */

fn format_angle_kn_pi(k: i64, n: i64) -> String {
    if k == 0 {
        return "0".to_string();
    }
    if n == 1 {
        return match k {
            1 => "π".to_string(),
            _ => format!("{k}π"),
        };
    }
    if k == 1 {
        return format!("π/{n}");
    }
    format!("{k}π/{n}")
}
