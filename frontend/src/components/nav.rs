use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::data::{nav_items, SITE};
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    is_scrolled.set(root.scroll_top() > 50);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open { "nav-menu active" } else { "nav-menu" };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <div class="nav-logo">
                    <Link<Route> to={Route::Home} classes="logo-link">
                        <img src="/Byte-banner.png" alt={format!("{} Logo", SITE.name)} class="logo-image" width="180" height="60" />
                    </Link<Route>>
                </div>

                <ul class={menu_class}>
                    {
                        for nav_items().into_iter().map(|item| {
                            let active = current.as_ref() == Some(&item.route);
                            html! {
                                <li class="nav-item" onclick={close_menu.clone()}>
                                    <Link<Route> to={item.route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                        {item.label}
                                    </Link<Route>>
                                </li>
                            }
                        })
                    }
                </ul>

                <button class="hamburger" onclick={toggle_menu} aria-label="Toggle menu">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 1000;
                    background: rgba(10, 10, 10, 0.6);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    transition: background 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(10, 10, 10, 0.95);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.5rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo-image {
                    height: 48px;
                    width: auto;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: #c0c0c0;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #ffffff;
                    text-shadow: 0 0 10px rgba(255, 255, 255, 0.6);
                }
                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger .bar {
                    display: block;
                    width: 25px;
                    height: 3px;
                    margin: 5px auto;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .hamburger {
                        display: block;
                    }
                    .nav-menu {
                        position: fixed;
                        top: 64px;
                        left: -100%;
                        flex-direction: column;
                        width: 100%;
                        padding: 2rem 0;
                        text-align: center;
                        background: rgba(10, 10, 10, 0.98);
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active {
                        left: 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
