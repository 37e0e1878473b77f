// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppTrig (etat.rs) pour natif + wasm
// - Curseur / saisie / case à cocher => réévaluation immédiate
// - Cercle unité + courbes dessinés au Painter (aucune image encodée)
//
// Note :
// - Les séries viennent du noyau (series.rs) ; ici on ne fait que projeter
//   des coordonnées maths vers l’écran.

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

use super::etat::{AppTrig, Evaluation};
use crate::noyau::series::{troncons, Echantillon};
use crate::noyau::Tangente;

/// Cadre du cercle : [-1.3, 1.3]² (marge pour les étiquettes).
const LIMITE_CERCLE: f64 = 1.3;

/// Cadre vertical du graphe (sans / avec tan).
const LIMITE_COURBES: f64 = 1.3;
const LIMITE_COURBES_TAN: f64 = 4.3;

const BLEU: Color32 = Color32::from_rgb(31, 119, 180);
const ORANGE: Color32 = Color32::from_rgb(255, 127, 14);
const VERT: Color32 = Color32::from_rgb(44, 160, 44);
const ROUGE: Color32 = Color32::from_rgb(214, 39, 40);

/// Aide de lecture affichée en bas de page.
pub(crate) const COMMENT_LIRE: [&str; 5] = [
    "On the left, the unit circle shows the point corresponding to your angle.",
    "The x-coordinate of that point is cos θ.",
    "The y-coordinate of that point is sin θ.",
    "On the right, the graph shows how sin θ, cos θ and (optionally) tan θ vary from 0° to 360°.",
    "The dashed vertical line marks your current angle.",
];

impl AppTrig {
    /// Panneau latéral : contrôles (à appeler depuis eframe::App::update)
    pub fn ui_controles(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.add_space(6.0);

        // Curseur 0..=360 (pas de 1°), comme l’outil d’origine.
        // Clamping::Never : le pas ne s’applique qu’au glissement, une saisie
        // libre (44.5°, -45°…) n’est jamais réarrondie à l’image suivante.
        let mut angle = self.angle;
        let resp = ui.add(
            egui::Slider::new(&mut angle, 0.0..=360.0)
                .clamping(egui::SliderClamping::Never)
                .step_by(1.0)
                .suffix("°")
                .text("Angle (degrees)"),
        );
        let resp = resp.on_hover_text("Move the slider to see how sin, cos and tan change.");
        if resp.changed() {
            self.set_angle(angle);
        }

        // Saisie libre : n’importe quel réel (négatif, > 360…)
        ui.horizontal(|ui| {
            ui.label("Any angle :");
            let mut libre = self.angle;
            let resp = ui.add(egui::DragValue::new(&mut libre).speed(1.0).suffix("°"));
            if resp.changed() {
                self.set_angle(libre);
            }
        });

        ui.add_space(6.0);

        let mut tan = self.afficher_tan;
        if ui.checkbox(&mut tan, "Show tangent on the graph").changed() {
            self.set_afficher_tan(tan);
        }

        ui.add_space(6.0);

        if ui
            .add_sized([80.0, 28.0], egui::Button::new("Reset"))
            .on_hover_text("Back to 30°, tangent shown")
            .clicked()
        {
            self.reset();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// UI principale (panneau central).
    pub fn ui(&self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Trig Tutor: Sine, Cosine & Tangent");
                ui.label(
                    "Use the angle slider to see how sine, cosine and tangent change: \
                     the unit circle shows the point (cos θ, sin θ), the graph shows \
                     sin, cos (and tan) from 0° to 360°.",
                );
                ui.add_space(8.0);

                let Some(ev) = &self.evaluation else {
                    ui.label("No angle evaluated yet.");
                    return;
                };

                Self::ui_valeurs(ui, ev);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                Self::ui_explication(ui, ev);

                ui.add_space(8.0);

                ui.columns(2, |cols| {
                    self.ui_cercle(&mut cols[0], ev);
                    self.ui_courbes(&mut cols[1], ev);
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                Self::ui_details(ui, ev);

                ui.add_space(8.0);
                Self::ui_comment_lire(ui);
            });
    }

    fn ui_comment_lire(ui: &mut egui::Ui) {
        ui.heading("How to read this");
        for ligne in COMMENT_LIRE {
            ui.label(format!("• {ligne}"));
        }
    }

    fn ui_valeurs(ui: &mut egui::Ui, ev: &Evaluation) {
        let e = &ev.etat;
        let tan_txt = match e.tangente {
            Tangente::Valeur(t) => format!("{t:.3}"),
            Tangente::Indefinie => "undefined".to_string(),
        };

        ui.columns(3, |cols| {
            Self::metrique(&mut cols[0], "sin(θ)", &format!("{:.3}", e.sinus));
            Self::metrique(&mut cols[1], "cos(θ)", &format!("{:.3}", e.cosinus));
            Self::metrique(&mut cols[2], "tan(θ)", &tan_txt);
        });
    }

    fn metrique(ui: &mut egui::Ui, titre: &str, valeur: &str) {
        ui.label(titre);
        ui.label(egui::RichText::new(valeur).size(26.0).strong());
    }

    fn ui_explication(ui: &mut egui::Ui, ev: &Evaluation) {
        let e = &ev.etat;
        ui.heading(format!("Angle: {}°", e.degres));
        ui.label(format!("• This angle is {}.", e.libelle_position()));
        ui.label(format!(
            "• On the unit circle, the point is (cos θ, sin θ) = ({:.3}, {:.3}).",
            e.cosinus, e.sinus
        ));
        ui.label("• Tangent is defined as tan θ = sin θ / cos θ.");
    }

    /* ------------------------ Cercle unité ------------------------ */

    fn ui_cercle(&self, ui: &mut egui::Ui, ev: &Evaluation) {
        ui.strong("Unit Circle View");

        let cote = ui.available_width().clamp(160.0, 420.0);
        let (resp, painter) = ui.allocate_painter(egui::vec2(cote, cote), egui::Sense::hover());
        let rep = Repere::new(
            resp.rect,
            (-LIMITE_CERCLE, LIMITE_CERCLE),
            (-LIMITE_CERCLE, LIMITE_CERCLE),
        );
        let texte = ui.visuals().text_color();

        painter.rect_filled(resp.rect, 4.0, ui.visuals().extreme_bg_color);

        // Axes
        let gris = Stroke::new(0.5, Color32::GRAY);
        painter.line_segment([rep.pos(-LIMITE_CERCLE, 0.0), rep.pos(LIMITE_CERCLE, 0.0)], gris);
        painter.line_segment([rep.pos(0.0, -LIMITE_CERCLE), rep.pos(0.0, LIMITE_CERCLE)], gris);

        // Cercle
        let contour: Vec<Pos2> = self.cercle.points().map(|p| rep.pos(p.x, p.y)).collect();
        painter.add(egui::Shape::line(contour, Stroke::new(2.0, BLEU)));

        // Rayon + projections
        let v = &ev.vue_cercle;
        painter.line_segment(
            [rep.pos(v.rayon.de.x, v.rayon.de.y), rep.pos(v.rayon.a.x, v.rayon.a.y)],
            Stroke::new(2.0, ROUGE),
        );
        for (seg, couleur) in [
            (&v.projection_verticale, VERT),
            (&v.projection_horizontale, BLEU),
        ] {
            painter.extend(egui::Shape::dashed_line(
                &[rep.pos(seg.de.x, seg.de.y), rep.pos(seg.a.x, seg.a.y)],
                Stroke::new(1.0, couleur),
                6.0,
                4.0,
            ));
        }
        painter.circle_filled(rep.pos(v.point.x, v.point.y), 5.0, ROUGE);

        // Étiquettes
        let police = FontId::proportional(12.0);
        painter.text(
            resp.rect.left_top() + egui::vec2(6.0, 6.0),
            Align2::LEFT_TOP,
            format!("θ = {}°", ev.etat.degres),
            police.clone(),
            texte,
        );
        painter.text(
            rep.pos(LIMITE_CERCLE, 0.0) + egui::vec2(-4.0, -4.0),
            Align2::RIGHT_BOTTOM,
            "x (cos θ)",
            police.clone(),
            texte,
        );
        painter.text(
            rep.pos(0.0, LIMITE_CERCLE) + egui::vec2(4.0, 4.0),
            Align2::LEFT_TOP,
            "y (sin θ)",
            police,
            texte,
        );

        ui.horizontal(|ui| {
            ui.colored_label(VERT, format!("sin θ = {:.3}", ev.etat.sinus));
            ui.colored_label(BLEU, format!("cos θ = {:.3}", ev.etat.cosinus));
        });
    }

    /* ------------------------ Courbes ------------------------ */

    fn ui_courbes(&self, ui: &mut egui::Ui, ev: &Evaluation) {
        ui.strong("Graphs of sin θ, cos θ and tan θ");

        let afficher_tan = ev.etat.afficher_tangente;
        let limite = if afficher_tan {
            LIMITE_COURBES_TAN
        } else {
            LIMITE_COURBES
        };

        let largeur = ui.available_width().max(200.0);
        let (resp, painter) =
            ui.allocate_painter(egui::vec2(largeur, largeur * 0.6), egui::Sense::hover());
        let rep = Repere::new(resp.rect, (0.0, 360.0), (-limite, limite));
        let texte = ui.visuals().text_color();
        let police = FontId::proportional(11.0);

        painter.rect_filled(resp.rect, 4.0, ui.visuals().extreme_bg_color);

        // Grille : tous les 90°, + y = 0
        let grille = Stroke::new(0.5, Color32::from_gray(110));
        for deg in [0.0, 90.0, 180.0, 270.0, 360.0] {
            painter.line_segment([rep.pos(deg, -limite), rep.pos(deg, limite)], grille);
            painter.text(
                rep.pos(deg, -limite) + egui::vec2(0.0, -2.0),
                Align2::CENTER_BOTTOM,
                format!("{deg}°"),
                police.clone(),
                texte,
            );
        }
        painter.line_segment([rep.pos(0.0, 0.0), rep.pos(360.0, 0.0)], grille);

        let ech: Vec<Echantillon> = self.courbes.echantillons().collect();

        let sin: Vec<Pos2> = ech.iter().map(|s| rep.pos(s.degres, s.sinus)).collect();
        let cos: Vec<Pos2> = ech.iter().map(|s| rep.pos(s.degres, s.cosinus)).collect();
        painter.add(egui::Shape::line(sin, Stroke::new(2.0, BLEU)));
        painter.add(egui::Shape::line(cos, Stroke::new(2.0, ORANGE)));

        // tan : un tronçon par zone continue (trou = pas de trait vertical)
        if afficher_tan {
            for troncon in troncons(ech.iter().map(|s| (s.degres, s.tangente))) {
                let points: Vec<Pos2> = troncon.iter().map(|&(x, y)| rep.pos(x, y)).collect();
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    Stroke::new(2.0, VERT),
                    2.0,
                    3.0,
                ));
            }
        }

        // Repère de l’angle courant (ramené dans [0, 360))
        let x = ev.etat.normalise;
        painter.extend(egui::Shape::dashed_line(
            &[rep.pos(x, -limite), rep.pos(x, limite)],
            Stroke::new(1.5, texte),
            6.0,
            4.0,
        ));

        ui.horizontal_wrapped(|ui| {
            ui.colored_label(BLEU, "sin θ");
            ui.colored_label(ORANGE, "cos θ");
            if afficher_tan {
                ui.colored_label(VERT, "tan θ");
            }
            ui.label(format!("-- θ = {}°", ev.etat.degres));
        });
    }

    /* ------------------------ Détails ------------------------ */

    fn ui_details(ui: &mut egui::Ui, ev: &Evaluation) {
        egui::CollapsingHeader::new("Details")
            .default_open(false)
            .show(ui, |ui| {
                let e = &ev.etat;
                Self::champ_detail(
                    ui,
                    "Radians",
                    "details_radians",
                    &format!("θ = {}° = {} rad", e.degres, e.radians),
                );
                Self::champ_detail(
                    ui,
                    "Normalized angle",
                    "details_normalise",
                    &format!("{}° ∈ [0°, 360°)", e.normalise),
                );

                let exact = match &ev.exactes {
                    Some(v) => format!(
                        "θ ≡ {}\nsin θ = {}\ncos θ = {}\ntan θ = {}",
                        v.angle, v.sinus, v.cosinus, v.tangente
                    ),
                    None => "not a remarkable angle (multiples of 30° or 45°)".to_string(),
                };
                Self::champ_detail(ui, "Exact values", "details_exact", &exact);

                Self::champ_detail(ui, "JSON response", "details_json", &ev.json);
            });
    }

    fn champ_detail(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}

/* ------------------------ Repère maths -> écran ------------------------ */

/// Projection affine d’un cadre maths (x, y) vers un Rect écran (y vers le haut).
struct Repere {
    rect: Rect,
    x: (f64, f64),
    y: (f64, f64),
}

impl Repere {
    fn new(rect: Rect, x: (f64, f64), y: (f64, f64)) -> Self {
        Self { rect, x, y }
    }

    fn pos(&self, x: f64, y: f64) -> Pos2 {
        let tx = (x - self.x.0) / (self.x.1 - self.x.0);
        let ty = (y - self.y.0) / (self.y.1 - self.y.0);
        Pos2::new(
            self.rect.left() + tx as f32 * self.rect.width(),
            self.rect.bottom() - ty as f32 * self.rect.height(),
        )
    }
}
