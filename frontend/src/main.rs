use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod config;
mod data;
mod webhook;
mod intake;
mod chat;
mod animation;
mod components {
    pub mod layout;
    pub mod nav;
    pub mod footer;
    pub mod accordion;
    pub mod chat_widget;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod team;
    pub mod projects;
    pub mod contact;
    pub mod blog;
    pub mod admin;
    pub mod not_found;
}
mod blog {
    pub mod electric_engineering_young;
}

use components::{
    layout::{apply_site_meta, Layout},
    chat_widget::ChatWidget,
};
use pages::{
    home::Home,
    about::About,
    team::Team,
    projects::Projects,
    contact::Contact,
    blog::{Blogs, BlogPostPage},
    admin::AdminDashboard,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/team")]
    Team,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/Blogs")]
    Blogs,
    #[at("/Blogs/:slug")]
    BlogPost { slug: String },
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Layout><Home /></Layout> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <Layout title="About"><About /></Layout> }
        },
        Route::Team => {
            info!("Rendering Team page");
            html! { <Layout title="Team"><Team /></Layout> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Layout title="Projects"><Projects /></Layout> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Layout title="Contact"><Contact /></Layout> }
        },
        Route::Blogs => {
            info!("Rendering Blogs page");
            html! { <Layout title="Blogs"><Blogs /></Layout> }
        },
        Route::BlogPost { slug } => match data::blog_post(&slug) {
            Some(post) => {
                info!("Rendering blog post {}", slug);
                html! { <Layout title={post.title}><BlogPostPage slug={slug} /></Layout> }
            }
            None => {
                warn!("No blog post with slug {}", slug);
                html! { <Layout title="Not Found"><NotFound /></Layout> }
            }
        },
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <Layout title="Admin"><AdminDashboard /></Layout> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <Layout title="Not Found"><NotFound /></Layout> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let basename = config::base_path().map(AttrValue::from);

    html! {
        <BrowserRouter {basename}>
            <Switch<Route> render={switch} />
            <ChatWidget />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    if config::data_store().is_none() {
        warn!("Data store client not initialized: set SUPABASE_URL and SUPABASE_ANON_KEY");
    }
    if config::contact_webhook_url().is_empty() {
        warn!("DISCORD_WEBHOOK_URL is not set, form submissions will fail");
    }

    apply_site_meta();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
