//! Tests scientifiques : valeurs de référence, axes, quadrants, séries, contrat JSON.
//!
//! Tolérances : 1e-7 sur les valeurs affichées (lecture à 7 chiffres),
//! égalité stricte quand la libm rend une valeur exacte (sin 90°, cos 180°).

use pretty_assertions::assert_eq;

use super::exact::valeurs_exactes;
use super::quadrant::{classer, normaliser};
use super::reglages::Reglages;
use super::reponse::{repondre, Requete, Reponse};
use super::series::{ecreter_tangente, troncons, CercleUnite, CourbesTrig, Point, VueCercle};
use super::{evaluer, evaluer_avec, ErreurAngle, Position, Tangente};

fn proche(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn eval_ok(degres: f64, tan: bool) -> super::EtatAngle {
    evaluer(degres, tan).unwrap_or_else(|e| panic!("degres={degres} err={e}"))
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_trente_degres() {
    let e = eval_ok(30.0, true);
    assert!(proche(e.sinus, 0.5, 1e-9), "sin={}", e.sinus);
    assert!(proche(e.cosinus, 0.866_025_4, 1e-7), "cos={}", e.cosinus);
    let t = e.tangente.valeur().expect("tan(30°) définie");
    assert!(proche(t, 0.577_350_3, 1e-7), "tan={t}");
    assert_eq!(e.libelle_position(), "in Quadrant I (sin > 0, cos > 0)");
    assert!(e.afficher_tangente);
}

#[test]
fn sci_quatre_vingt_dix_degres() {
    let e = eval_ok(90.0, true);
    assert_eq!(e.sinus, 1.0);
    assert!(proche(e.cosinus, 0.0, 1e-12));
    assert_eq!(e.tangente, Tangente::Indefinie);
    assert_eq!(e.libelle_position(), "on the positive y-axis");
}

#[test]
fn sci_cent_quatre_vingts_sans_affichage_tan() {
    let e = eval_ok(180.0, false);
    assert!(proche(e.sinus, 0.0, 1e-12));
    assert_eq!(e.cosinus, -1.0);
    assert_eq!(e.libelle_position(), "on the negative x-axis");
    // le drapeau ne coupe pas le calcul
    assert!(!e.afficher_tangente);
    let t = e.tangente.valeur().expect("tan(180°) calculée");
    assert!(proche(t, 0.0, 1e-12));
}

#[test]
fn sci_negatif_normalise() {
    let e = eval_ok(-45.0, true);
    assert!(proche(e.normalise, 315.0, 1e-12));
    assert_eq!(e.degres, -45.0, "valeur d’origine conservée");
    assert_eq!(e.position, Position::QuadrantIV);
    assert_eq!(e.libelle_position(), "in Quadrant IV (sin < 0, cos > 0)");
}

#[test]
fn sci_tangente_indefinie_aux_asymptotes() {
    for d in [90.0, 270.0, -90.0, 450.0, -270.0] {
        assert!(eval_ok(d, true).tangente.est_indefinie(), "degres={d}");
    }
}

#[test]
fn sci_tangente_egale_sin_sur_cos() {
    for d in [1.0, 44.5, 135.0, 200.0, 300.0, -721.3] {
        let e = eval_ok(d, true);
        let t = e.tangente.valeur().expect("tan définie");
        assert_eq!(t, e.sinus / e.cosinus, "degres={d}");
    }
}

#[test]
fn sci_idempotence_bit_a_bit() {
    for d in [0.0, 30.0, 89.999_999, 123.456, -1e6, 1e12] {
        let a = eval_ok(d, true);
        let b = eval_ok(d, true);
        assert_eq!(a, b);
        assert_eq!(a.sinus.to_bits(), b.sinus.to_bits());
        assert_eq!(a.cosinus.to_bits(), b.cosinus.to_bits());
    }
}

#[test]
fn sci_angle_non_fini_refuse() {
    assert!(matches!(
        evaluer(f64::INFINITY, true),
        Err(ErreurAngle::AngleInvalide(_))
    ));
    assert!(matches!(
        evaluer(f64::NEG_INFINITY, false),
        Err(ErreurAngle::AngleInvalide(_))
    ));
    assert!(matches!(
        evaluer(f64::NAN, true),
        Err(ErreurAngle::AngleInvalide(_))
    ));
}

/* ------------------------ Classement ------------------------ */

#[test]
fn sci_axes() {
    let tol = 1e-6;
    assert_eq!(classer(0.0, tol), Position::AxeXPositif);
    assert_eq!(classer(360.0, tol), Position::AxeXPositif);
    assert_eq!(classer(-360.0, tol), Position::AxeXPositif);
    assert_eq!(classer(90.0, tol), Position::AxeYPositif);
    assert_eq!(classer(180.0, tol), Position::AxeXNegatif);
    assert_eq!(classer(270.0, tol), Position::AxeYNegatif);
    assert_eq!(classer(-90.0, tol), Position::AxeYNegatif);
    assert_eq!(classer(90.000_000_1, tol), Position::AxeYPositif);
}

#[test]
fn sci_quadrants_proches_des_axes() {
    let tol = 1e-6;
    assert_eq!(classer(90.001, tol), Position::QuadrantII);
    assert_eq!(classer(89.999, tol), Position::QuadrantI);
    assert_eq!(classer(180.5, tol), Position::QuadrantIII);
    // arrondi à 360 : pas un axe reconnu
    assert_eq!(classer(359.999_999_9, tol), Position::QuadrantIV);
}

#[test]
fn sci_normalisation_bornee() {
    assert_eq!(normaliser(-1e-20), 0.0);
    assert_eq!(normaliser(720.0), 0.0);
    assert!(proche(normaliser(-30.0), 330.0, 1e-12));
    assert!(proche(normaliser(725.0), 5.0, 1e-12));
    for d in [-1e-300, -1e-15, -359.999, 1e15, -1e15] {
        let a = normaliser(d);
        assert!((0.0..360.0).contains(&a), "d={d} a={a}");
    }
}

/* ------------------------ Séries ------------------------ */

#[test]
fn sci_cercle_unite() {
    let r = Reglages::default();
    let cercle = CercleUnite::new(&r);
    let points: Vec<Point> = cercle.points().collect();

    assert_eq!(points.len(), 400);
    assert_eq!(cercle.points().len(), 400);
    assert!(proche(points[0].x, 1.0, 1e-12) && proche(points[0].y, 0.0, 1e-12));
    let dernier = points[399];
    assert!(proche(dernier.x, 1.0, 1e-12) && proche(dernier.y, 0.0, 1e-12));
    for p in &points {
        assert!(proche(p.x * p.x + p.y * p.y, 1.0, 1e-12));
    }

    // redémarrable : deux parcours identiques
    let encore: Vec<Point> = (&cercle).into_iter().collect();
    assert_eq!(points, encore);
}

#[test]
fn sci_vue_cercle_projections() {
    let e = eval_ok(30.0, true);
    let v = VueCercle::depuis(&e);

    assert_eq!(v.point, Point::new(e.cosinus, e.sinus));
    assert_eq!(v.rayon.de, Point::ORIGINE);
    assert_eq!(v.projection_verticale.de, v.point);
    assert_eq!(v.projection_verticale.a, Point::new(e.cosinus, 0.0));
    assert_eq!(v.projection_horizontale.de, v.point);
    assert_eq!(v.projection_horizontale.a, Point::new(0.0, e.sinus));
}

#[test]
fn sci_courbes_ecretage_tangente() {
    let r = Reglages::default();
    let courbes = CourbesTrig::new(&r);
    let ech: Vec<_> = courbes.echantillons().collect();

    assert_eq!(ech.len(), 1000);
    assert_eq!(ech[0].degres, 0.0);
    assert_eq!(ech[999].degres, 360.0);

    let mut trous = 0;
    for s in &ech {
        let vraie = s.degres.to_radians().tan();
        if vraie.abs() > 4.0 {
            assert_eq!(s.tangente, None, "degres={}", s.degres);
            trous += 1;
        } else {
            assert_eq!(s.tangente, Some(vraie), "degres={}", s.degres);
        }
        assert!(proche(s.sinus * s.sinus + s.cosinus * s.cosinus, 1.0, 1e-12));
    }
    // deux asymptotes (90°, 270°) => des trous de part et d’autre
    assert!(trous > 0);

    // la tan “brute” de l’état n’est pas écrêtée
    let e = eval_ok(80.0, true);
    assert!(e.tangente.valeur().expect("tan(80°)") > 4.0);
}

#[test]
fn sci_troncons_coupes_aux_trous() {
    let r = Reglages::default();
    let courbes = CourbesTrig::new(&r);
    let t = troncons(courbes.echantillons().map(|s| (s.degres, s.tangente)));
    // [0, ~76°], [~104°, ~256°], [~284°, 360°]
    assert_eq!(t.len(), 3);

    assert_eq!(ecreter_tangente(4.0, 4.0), Some(4.0));
    assert_eq!(ecreter_tangente(-4.000_1, 4.0), None);
    assert_eq!(ecreter_tangente(f64::INFINITY, 4.0), None);
}

#[test]
fn sci_reglages_respectes() {
    let r = Reglages {
        points_cercle: 5,
        points_courbes: 3,
        seuil_tangente_affichee: 0.5,
        tolerance_tangente: 0.2,
        ..Reglages::default()
    };
    assert_eq!(CercleUnite::new(&r).points().count(), 5);
    let ech: Vec<_> = CourbesTrig::new(&r).echantillons().collect();
    assert_eq!(
        ech.iter().map(|s| s.degres).collect::<Vec<_>>(),
        vec![0.0, 180.0, 360.0]
    );

    // cos(80°) ≈ 0.17 < 0.2 => indéfinie avec ces réglages
    let e = evaluer_avec(80.0, true, &r).expect("80° fini");
    assert_eq!(e.tangente, Tangente::Indefinie);
}

/* ------------------------ Valeurs exactes ------------------------ */

#[test]
fn sci_valeurs_exactes() {
    let v = valeurs_exactes(30.0).expect("30° remarquable");
    assert_eq!(v.angle, "π/6");
    assert_eq!((v.sinus, v.cosinus, v.tangente), ("1/2", "√3/2", "√3/3"));

    let v = valeurs_exactes(-45.0).expect("-45° remarquable");
    assert_eq!(v.angle, "7π/4");
    assert_eq!((v.sinus, v.cosinus, v.tangente), ("-√2/2", "√2/2", "-1"));

    let v = valeurs_exactes(450.0).expect("450° remarquable");
    assert_eq!(v.angle, "π/2");
    assert_eq!(v.tangente, "undefined");

    assert_eq!(valeurs_exactes(180.0).map(|v| v.angle), Some("π".to_string()));
    assert_eq!(valeurs_exactes(0.0).map(|v| v.cosinus), Some("1"));

    assert!(valeurs_exactes(20.0).is_none());
    assert!(valeurs_exactes(30.5).is_none());
    assert!(valeurs_exactes(f64::NAN).is_none());
}

#[test]
fn sci_valeurs_exactes_coherentes_avec_flottant() {
    fn lire(s: &str) -> Option<f64> {
        let (neg, s) = match s.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, s),
        };
        let v = match s {
            "0" => 0.0,
            "1" => 1.0,
            "1/2" => 0.5,
            "√2/2" => 2f64.sqrt() / 2.0,
            "√3/2" => 3f64.sqrt() / 2.0,
            "√3/3" => 3f64.sqrt() / 3.0,
            "√3" => 3f64.sqrt(),
            _ => return None,
        };
        Some(if neg { -v } else { v })
    }

    for d in (0..=720).step_by(15) {
        let d = d as f64;
        let Some(v) = valeurs_exactes(d) else {
            continue;
        };
        let e = eval_ok(d, true);
        assert!(proche(lire(v.sinus).expect("sin"), e.sinus, 1e-12), "d={d}");
        assert!(proche(lire(v.cosinus).expect("cos"), e.cosinus, 1e-12), "d={d}");
        match lire(v.tangente) {
            Some(t) => assert!(proche(t, e.tangente.valeur().expect("tan"), 1e-9), "d={d}"),
            None => assert!(e.tangente.est_indefinie(), "d={d}"),
        }
    }
}

/* ------------------------ Contrat requête/réponse ------------------------ */

#[test]
fn sci_reponse_json() {
    let req: Requete = serde_json::from_str(r#"{"angle": 90, "show_tan": false}"#).expect("json");
    let rep = repondre(&req, &Reglages::default()).expect("90° fini");

    let json = serde_json::to_value(&rep).expect("sérialisation");
    assert_eq!(json["tan"], serde_json::Value::Null);
    assert_eq!(json["sin"], serde_json::json!(1.0));
    assert_eq!(json["quadrant"], "on the positive y-axis");
}

#[test]
fn sci_requete_valeurs_par_defaut() {
    let req: Requete = serde_json::from_str("{}").expect("json vide");
    assert_eq!(req, Requete::default());

    let rep = repondre(&req, &Reglages::default()).expect("30° fini");
    let attendu = Reponse {
        sin: rep.sin,
        cos: rep.cos,
        tan: rep.tan,
        quadrant: "in Quadrant I (sin > 0, cos > 0)".to_string(),
    };
    assert_eq!(rep, attendu);
    assert!(proche(rep.sin, 0.5, 1e-9));
    assert!(rep.tan.is_some());
}

#[test]
fn sci_reponse_depuis_etat_sans_reevaluation() {
    let r = Reglages::default();
    for d in [30.0, 90.0, -45.0, 180.0] {
        let etat = evaluer_avec(d, true, &r).expect("angle fini");
        let req = Requete {
            angle: d,
            show_tan: true,
        };
        let via_requete = repondre(&req, &r).expect("angle fini");
        assert_eq!(Reponse::depuis(&etat), via_requete, "degres={d}");
    }
}
