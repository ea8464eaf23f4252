use yew::prelude::*;

use crate::config::{REVEALED_CLASS, REVEAL_SELECTOR};
use crate::content::Section;
use crate::controllers::reveal::RevealKey;

#[derive(Properties, PartialEq)]
pub struct ContentSectionProps {
    pub section: Section,
    pub revealed: bool,
}

/// One scroll-revealed content block. The block is keyed by its section id.
#[function_component(ContentSection)]
pub fn content_section(props: &ContentSectionProps) -> Html {
    let ContentSectionProps { section, revealed } = props;

    let image = html! {
        <div class="section-image">
            <img src={section.image.clone()} alt={section.image_alt.clone()} loading="lazy" />
        </div>
    };
    let text = html! {
        <div class="section-text">
            {
                for section.paragraphs.iter().map(|paragraph| html! {
                    <p>
                        {
                            if let Some(lead) = &paragraph.lead {
                                html! { <><span class="section-lead">{ lead }</span>{" "}</> }
                            } else {
                                html! {}
                            }
                        }
                        { &paragraph.text }
                    </p>
                })
            }
        </div>
    };

    html! {
        <section id={section.id.clone()} class="content-section">
            <div
                class={reveal_classes(*revealed)}
                data-reveal={section_reveal_key(section).to_string()}
            >
                <h2 class="section-title">{ &section.title }</h2>
                <div class="section-grid">
                    {
                        if section.image_first {
                            html! { <>{ image }{ text }</> }
                        } else {
                            html! { <>{ text }{ image }</> }
                        }
                    }
                </div>
            </div>
        </section>
    }
}

/// Key a section is registered and looked up under.
pub fn section_reveal_key(section: &Section) -> RevealKey {
    RevealKey::from(section.id.as_str())
}

fn reveal_classes(revealed: bool) -> Classes {
    classes!(
        REVEAL_SELECTOR.trim_start_matches('.'),
        revealed.then_some(REVEALED_CLASS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::content::SiteContent;
    use crate::controllers::reveal::{reveal_key, Revealed};
    use crate::hooks::RevealedSet;

    #[test]
    fn registered_key_matches_the_key_home_looks_up() {
        let content = SiteContent::embedded().expect("bundled content");
        for (index, section) in content.sections.iter().enumerate() {
            let rendered = section_reveal_key(section).to_string();
            let registered = reveal_key(Some(rendered), &section.id, index as u32);

            let revealed = Rc::new(RevealedSet::default()).reduce(Revealed(registered));
            assert!(
                revealed.contains(section_reveal_key(section).as_str()),
                "section {} would never reveal",
                section.id
            );
        }
    }

    #[test]
    fn hidden_block_only_carries_marker_class() {
        let classes = reveal_classes(false);
        assert!(classes.contains("animate-on-scroll"));
        assert!(!classes.contains("animate-fade-in"));
    }

    #[test]
    fn revealed_block_gains_fade_in_class() {
        let classes = reveal_classes(true);
        assert!(classes.contains("animate-on-scroll"));
        assert!(classes.contains("animate-fade-in"));
    }
}
