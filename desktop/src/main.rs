use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!(
        "analysis endpoint: {}",
        api::AnalyzerConfig::from_build_env().endpoint()
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
