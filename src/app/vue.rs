// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé limité à l’alphabet accepté : chiffres . + - * / ( )

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use crate::noyau;
use crate::reponse::Reponse;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice validante");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + (3 * 2)) * 2, -1 + 2, 1 + 2.5")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale (historique compris)", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                self.bouton_insert(ui, "(", InsertKind::OpenParen);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                self.bouton_insert(ui, ")", InsertKind::CloseParen);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                ui.label("");
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace : retire un caractère (et les espaces de fin).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.label("Enveloppe :");
        Self::champ_monospace(ui, "enveloppe_out", &self.enveloppe, 5);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Nettoyée", "demarche_nettoyee", &self.demarche.nettoyee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Étapes", "demarche_etapes", &self.demarche.etapes);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .default_open(false)
            .show(ui, |ui| {
                let mut rappel = None;
                for (i, ligne) in self.historique.iter().enumerate() {
                    let sortie = match &ligne.sortie {
                        Ok(v) => format!("= {v}"),
                        Err(msg) => format!("✗ {msg}"),
                    };
                    ui.push_id(i, |ui| {
                        ui.horizontal(|ui| {
                            // clic = on remet l’entrée dans le champ
                            if ui.small_button(ligne.entree.as_str()).clicked() {
                                rappel = Some(ligne.entree.clone());
                            }
                            ui.monospace(sortie);
                        });
                    });
                }
                if let Some(entree) = rappel {
                    self.entree = entree;
                    self.focus_entree = true;
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(symbole);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                // '-' collé après '(' ou en tête : moins unaire, pas d’espaces
                let unaire = symbole == "-" && (self.entree.is_empty() || self.entree.ends_with('('));
                if unaire {
                    self.entree.push_str(symbole);
                } else {
                    if !self.entree.is_empty() {
                        self.entree.push(' ');
                    }
                    self.entree.push_str(symbole);
                    self.entree.push(' ');
                }
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(symbole);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/enveloppe/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let resultat = noyau::evaluer_avec_demarche(&self.entree);

        let reponse = Reponse::depuis(resultat.clone().map(|(v, _)| v));
        let enveloppe = serde_json::to_string_pretty(&reponse).unwrap_or_default();

        match resultat {
            Ok((valeur, d_noyau)) => {
                let d_ui = Demarche {
                    nettoyee: d_noyau.nettoyee,
                    jetons: d_noyau.jetons,
                    etapes: d_noyau.etapes.join("\n"),
                };
                self.set_resultats(valeur, enveloppe, d_ui);
            }
            Err(e) => self.set_erreur(e.to_string(), enveloppe),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
