// src/app.rs
//
// Tuteur trig : module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppTrig (pour main.rs: use tuteur_trig::app::AppTrig;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;



// Ré-export pratique : `use tuteur_trig::app::AppTrig;`
pub use etat::AppTrig;

use eframe::egui;

impl eframe::App for AppTrig {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal : ESC = reset (30°, tan affichée).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset();
        }

        egui::SidePanel::left("controles")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.ui_controles(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
