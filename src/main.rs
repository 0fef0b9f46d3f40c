use yew::prelude::*;
use log::info;

mod config;
mod content;
mod hooks;
mod schedule;
mod motion {
    pub mod sections;
    pub mod ticker;
    pub mod word_cycle;
}
mod components {
    pub mod cycling_word;
    pub mod nav;
    pub mod ticker;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application (base path {})", config::base_path());
    yew::Renderer::<App>::new().render();
}
