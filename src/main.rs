use quiz_creator::{AppConfig, QuizApp};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AppConfig::from_env();
    log::info!("Datos en {}", config.data_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quiz Creator")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz Creator",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc, config)))),
    )
}

// En la web el punto de entrada es el canvas de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no hay document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("falta el canvas the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id no es un canvas");

        let config = AppConfig::from_env();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuizApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("No se pudo arrancar la app: {e:?}");
        }
    });
}
