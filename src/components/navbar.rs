use log::error;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config::{NavConfig, SCROLLED_NAV_THRESHOLD};
use crate::content::{NavLink, NavTarget};
use crate::hooks::{use_nav_controller, NavHandle};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { brand, links } = props;
    let nav = use_nav_controller(NavConfig::default());
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.toggle_menu();
        })
    };

    let menu_open = nav.menu().is_open();

    html! {
        <div class="nav-wrapper">
            <nav class={classes!("top-nav", (scroll_y > SCROLLED_NAV_THRESHOLD).then(|| "scrolled"))}>
                <div class="nav-content">
                    <div class="nav-brand">
                        <span class="nav-logo">{"∞"}</span>
                        <span class="nav-brand-name">{ brand }</span>
                    </div>

                    <div class="nav-links">
                        { for links.iter().map(|link| nav_button(&nav, link, "nav-link")) }
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                {
                    if menu_open {
                        html! {
                            <div class="mobile-menu">
                                { for links.iter().map(|link| nav_button(&nav, link, "mobile-nav-link")) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>
            <style>
                {r#"
                    .nav-wrapper {
                        position: fixed;
                        top: 1rem;
                        width: 100%;
                        z-index: 50;
                        padding: 0 1rem;
                        box-sizing: border-box;
                    }
                    .top-nav {
                        max-width: 1300px;
                        margin: 0 auto;
                        background: rgba(17, 34, 64, 0.8);
                        backdrop-filter: blur(4px);
                        border: 1px solid #233554;
                        border-radius: 9999px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: background 0.3s ease;
                        position: relative;
                    }
                    .top-nav.scrolled {
                        background: rgba(17, 34, 64, 0.95);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                        padding: 0 1.5rem;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                    }
                    .nav-logo {
                        color: #64ffda;
                        font-size: 2rem;
                    }
                    .nav-brand-name {
                        margin-left: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-nav-link {
                        background: none;
                        border: none;
                        color: #8892b0;
                        cursor: pointer;
                        font-size: 1rem;
                        text-transform: capitalize;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .mobile-nav-link:hover {
                        color: #64ffda;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #8892b0;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 1rem;
                        right: 1rem;
                        margin-top: 0.5rem;
                        padding: 0.5rem;
                        background: #112240;
                        border: 1px solid #233554;
                        border-radius: 0.5rem;
                    }
                    .mobile-nav-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.375rem;
                    }
                    .mobile-nav-link:hover {
                        background: rgba(26, 54, 93, 0.5);
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

fn nav_button(nav: &NavHandle, link: &NavLink, class: &'static str) -> Html {
    let onclick = {
        let nav = nav.clone();
        let target = link.target.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &target {
                NavTarget::Section { id } => {
                    nav.scroll_to(id);
                }
                NavTarget::External { url } => {
                    open_in_new_tab(url);
                    nav.close_menu();
                }
            }
        })
    };

    html! {
        <button class={class} {onclick}>{ &link.label }</button>
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        error!("Opening {} failed: {:?}", url, err);
    }
}
