use frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("starting spin wheel app");

    Renderer::<App>::new().render();
}
