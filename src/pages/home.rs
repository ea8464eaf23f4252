use log::info;
use yew::prelude::*;

use crate::components::section::{section_reveal_key, ContentSection};
use crate::config::RevealConfig;
use crate::content::{Hero, Section};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub hero: Hero,
    pub sections: Vec<Section>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let HomeProps { hero, sections } = props;
    let revealed = use_reveal(RevealConfig::default());

    // Start at the top on first mount
    use_effect_with_deps(
        move |_| {
            info!("Home mounted");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home-page">
            <header class="hero">
                <div class="hero-grid">
                    <div class="hero-image">
                        <img src={hero.image.clone()} alt={hero.image_alt.clone()} class="animate-fade-in-scale" />
                    </div>
                    <div class="hero-text">
                        <h1 class="hero-title animate-fade-in-slide-up">{ &hero.title }</h1>
                        <p class="hero-subtitle animate-scale-up">{ &hero.subtitle }</p>
                    </div>
                </div>
            </header>

            {
                for sections.iter().map(|section| html! {
                    <ContentSection
                        key={section.id.clone()}
                        section={section.clone()}
                        revealed={revealed.contains(section_reveal_key(section).as_str())}
                    />
                })
            }

            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #020617, #0f172a, #1e293b);
                        color: white;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 0 2rem;
                        overflow: hidden;
                    }
                    .hero-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 2rem;
                    }
                    .hero-image {
                        display: flex;
                        justify-content: center;
                    }
                    .hero-image img {
                        max-width: 28rem;
                        border-radius: 0.5rem;
                        transition: transform 1s ease-out;
                    }
                    .hero-image img:hover {
                        transform: scale(1.05);
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        background: linear-gradient(to right, #64ffda, #a8fff0);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #8892b0;
                    }
                    .content-section {
                        padding: 5rem 2rem;
                    }
                    .content-section > div {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-title {
                        text-align: center;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 3rem;
                    }
                    .section-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .section-text p {
                        color: #8892b0;
                        font-size: 1.125rem;
                        line-height: 1.75;
                    }
                    .section-lead {
                        color: #64ffda;
                        font-weight: 700;
                    }
                    .section-image img {
                        width: 100%;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }

                    .animate-on-scroll {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .animate-on-scroll.animate-fade-in {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    @keyframes fadeInScale {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .animate-fade-in-scale {
                        opacity: 0;
                        animation: fadeInScale 1.5s ease-out forwards;
                    }
                    @keyframes fadeInSlideUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .animate-fade-in-slide-up {
                        opacity: 0;
                        animation: fadeInSlideUp 1.5s ease-out forwards;
                    }
                    @keyframes scaleUp {
                        from { transform: scale(0.95); }
                        to { transform: scale(1); }
                    }
                    .animate-scale-up {
                        animation: scaleUp 1s ease-out forwards;
                    }

                    @media (max-width: 768px) {
                        .hero-grid, .section-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-title {
                            font-size: 2.25rem;
                        }
                        .hero-text {
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
