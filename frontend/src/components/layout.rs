use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::{footer::Footer, nav::Nav};
use crate::data::SITE;

pub fn page_title(page: Option<&str>) -> String {
    let site = format!("{} - {}", SITE.name, SITE.tagline);
    match page {
        Some(page) if !page.is_empty() => format!("{} | {}", page, site),
        _ => site,
    }
}

/// Fills the head meta tags from the site data once at startup.
pub fn apply_site_meta() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for (name, content) in [
        ("description", SITE.description),
        ("keywords", SITE.keywords),
        ("author", SITE.author),
    ] {
        if let Ok(Some(meta)) = document.query_selector(&format!("meta[name=\"{}\"]", name)) {
            let _ = meta.set_attribute("content", content);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    use_title(page_title(props.title.as_deref()));

    // Scroll to top whenever the page changes
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.title.clone(),
        );
    }

    html! {
        <main>
            <Nav />
            { for props.children.iter() }
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_the_site_name() {
        assert_eq!(page_title(None), "Byte - Digital Innovation Team");
        assert_eq!(page_title(Some("")), "Byte - Digital Innovation Team");
        assert_eq!(page_title(Some("Team")), "Team | Byte - Digital Innovation Team");
    }
}
