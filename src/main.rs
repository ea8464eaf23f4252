use yew::prelude::*;
use log::{error, info, Level};

mod config;
mod content;
mod error;
mod hooks;
mod controllers {
    pub mod nav;
    pub mod reveal;
}
mod components {
    pub mod footer;
    pub mod navbar;
    pub mod section;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, navbar::Navbar};
use content::SiteContent;
use pages::home::Home;


#[function_component]
fn App() -> Html {
    let content = use_state(SiteContent::embedded);

    match &*content {
        Ok(content) => html! {
            <>
                <Navbar brand={content.brand.name.clone()} links={content.nav.clone()} />
                <Home hero={content.hero.clone()} sections={content.sections.clone()} />
                <Footer brand={content.brand.clone()} footer={content.footer.clone()} />
            </>
        },
        Err(err) => {
            error!("Failed to load site content: {}", err);
            html! {
                <main class="content-error">
                    <p>{"This page could not be loaded."}</p>
                </main>
            }
        }
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
