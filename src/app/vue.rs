// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - écran : tampon en monospace, lecture seule
// - grille de touches 6 colonnes (chaque clic => AppCalc::appuyer(id))
// - erreur : fenêtre modale "Erreur" + OK

use eframe::egui;

use super::etat::AppCalc;

/// Disposition des touches, ligne par ligne.
const GRILLE: &[&[&str]] = &[
    &["HEX", "BIN", "DEC", "OCT", "CLEAR", "DELETE"],
    &["7", "8", "9", "/", "nPr", "nCr"],
    &["4", "5", "6", "*", "Pol", "Rec"],
    &["1", "2", "3", "-", "(", ")"],
    &["0", ".", "pi", "+", "ANS", "EXE"],
    &["factorial", "^-1", "cuberoot", "cube", "square", "root"],
    &["sqrt", "power", "log", "10^x", "ln", "e^x"],
    &["e", "sin", "cos", "tan", "arcsin", "arccos"],
    &["arctan", "csc", "sec", "cot", "i", "random"],
    &[","],
];

/// Touches de commande (texte rouge).
const TOUCHES_ROUGES: &[&str] = &["EXE", "ANS", "CLEAR", "DELETE"];

const TAILLE_TOUCHE: [f32; 2] = [80.0, 50.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_grille(ui);

        self.ui_erreur(ui.ctx());
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(60.0);
                ui.label(
                    egui::RichText::new(self.affichage())
                        .monospace()
                        .size(self.taille_police),
                );
            });
    }

    fn ui_grille(&mut self, ui: &mut egui::Ui) {
        // clic mémorisé puis appliqué après la grille (une touche par frame)
        let mut clic: Option<&'static str> = None;

        egui::Grid::new("grille_touches")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in GRILLE {
                    for &id in *ligne {
                        if Self::touche(ui, id).clicked() {
                            clic = Some(id);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(id) = clic {
            self.appuyer(id);
        }
    }

    fn touche(ui: &mut egui::Ui, id: &str) -> egui::Response {
        let mut texte = egui::RichText::new(id).strong();
        if TOUCHES_ROUGES.contains(&id) {
            texte = texte.color(egui::Color32::RED);
        }
        ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte))
    }

    fn ui_erreur(&mut self, ctx: &egui::Context) {
        let Some(message) = self.erreur.clone() else {
            return;
        };

        let mut ok = false;
        egui::Window::new("Erreur")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(6.0);
                ok = ui.button("OK").clicked();
            });

        // Entrée / Échap ferment aussi la fenêtre
        let clavier = ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));
        if ok || clavier {
            self.fermer_erreur();
        }
    }
}
