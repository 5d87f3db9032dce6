// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// - sous-modules : etat.rs (AppCalc) + vue.rs (grille, écran, fenêtre d’erreur)
// - impl eframe::App (natif + web)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
