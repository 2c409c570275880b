// src/main.rs
//
// Calculatrice validante — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// - NATIF : GUI eframe, ou mode sans fenêtre (--eval / --requete) qui imprime
//           l’enveloppe JSON et sort avec 0 (Valid) ou 2 (Invalid)
// - WEB   : eframe::WebRunner + <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reponse;

#[cfg(not(target_arch = "wasm32"))]
mod reglages;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice validante";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use anyhow::Context;
    use clap::Parser;
    use tracing::info;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::reglages::Reglages;
    use crate::reponse::{Reponse, Requete, Statut};

    /// Évaluateur d’expressions arithmétiques validant (+ - * / parenthèses, moins unaire).
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Évalue une expression, imprime l’enveloppe JSON et quitte.
        #[arg(short, long, conflicts_with = "requete")]
        pub eval: Option<String>,

        /// Traite une requête JSON `{"expression": ...}` et quitte.
        #[arg(short, long)]
        pub requete: Option<String>,

        /// Directive de journalisation (remplace CALC_LOG).
        #[arg(short, long)]
        pub log: Option<String>,
    }

    pub fn lancer() -> anyhow::Result<ExitCode> {
        let args = Args::parse();

        let mut reglages = Reglages::charger().context("lecture des réglages CALC_*")?;
        if let Some(log) = args.log {
            reglages.log = log;
        }
        init_logging(&reglages.log)?;

        let requete = match (args.eval, args.requete) {
            (Some(expression), _) => Some(Requete {
                expression: Some(expression),
            }),
            (None, Some(json)) => {
                Some(serde_json::from_str::<Requete>(&json).context("requête JSON illisible")?)
            }
            (None, None) => None,
        };

        match requete {
            Some(req) => Ok(repondre(&req)?),
            None => {
                info!(historique_max = reglages.historique_max, "démarrage de la GUI");
                lancer_gui(reglages.historique_max)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Mode sans fenêtre : une requête, une enveloppe sur stdout.
    fn repondre(req: &Requete) -> anyhow::Result<ExitCode> {
        let rep: Reponse = req.traiter();
        info!(code = rep.code_statut(), "requête traitée");
        println!("{}", serde_json::to_string(&rep)?);

        Ok(match rep.status {
            Statut::Valid => ExitCode::SUCCESS,
            Statut::Invalid => ExitCode::from(2),
        })
    }

    fn lancer_gui(historique_max: usize) -> anyhow::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([520.0, 740.0])
                .with_min_inner_size([420.0, 620.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(historique_max)))),
        )
        .map_err(|e| anyhow::anyhow!("GUI: {e}"))
    }

    fn init_logging(directive: &str) -> anyhow::Result<()> {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filtre = EnvFilter::try_new(directive)
            .with_context(|| format!("directive de journalisation invalide: {directive:?}"))?;

        // stderr : stdout reste réservé à l’enveloppe JSON du mode sans fenêtre
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_filter(filtre))
            .try_init()
            .context("abonné tracing déjà installé")?;
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    match natif::lancer() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("erreur: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
