use chrono::Datelike;
use yew::prelude::*;

use crate::content::{Brand, FooterContent};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { brand, footer } = props;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-separator"></div>
            <div class="footer-content">
                <div class="footer-brand">
                    <h1>{ &brand.name }</h1>
                    <p>{ &brand.tagline }</p>
                </div>
                <div class="footer-contact">
                    <p class="footer-email">{ &footer.email }</p>
                    <div class="footer-socials">
                        {
                            for footer.socials.iter().map(|social| html! {
                                <a href={social.href.clone()} target="_blank" rel="noopener noreferrer">
                                    <img src={social.icon.clone()} alt={social.label.clone()} />
                                </a>
                            })
                        }
                    </div>
                </div>
            </div>
            <div class="footer-copyright">
                { copyright_line(year, &brand.name) }
            </div>
            <style>
                {r#"
                    .site-footer {
                        color: #9ca3af;
                        padding: 1.5rem 0;
                    }
                    .footer-separator {
                        border-top: 1px solid #374151;
                        margin-bottom: 1.5rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .footer-brand h1 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: white;
                        margin: 0;
                    }
                    .footer-brand p {
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .footer-contact {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                    }
                    .footer-email {
                        color: white;
                        font-size: 0.875rem;
                        transition: color 0.2s ease;
                    }
                    .footer-email:hover {
                        color: #64ffda;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1.5rem;
                        margin-top: 0.5rem;
                    }
                    .footer-socials img {
                        width: 1.75rem;
                        height: 1.75rem;
                        border-radius: 9999px;
                        transition: transform 0.2s ease;
                    }
                    .footer-socials img[src$=".svg"] {
                        filter: invert(1);
                    }
                    .footer-socials img:hover {
                        transform: scale(1.1);
                    }
                    .footer-copyright {
                        text-align: center;
                        font-size: 0.875rem;
                        margin-top: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .footer-content {
                            flex-direction: column;
                            text-align: center;
                        }
                        .footer-contact {
                            align-items: center;
                            margin-top: 1rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {}. All Rights Reserved.", year, brand)
}
