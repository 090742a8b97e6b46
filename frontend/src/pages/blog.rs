use yew::prelude::*;
use yew_router::components::Link;

use crate::blog::electric_engineering_young::ElectricEngineeringYoung;
use crate::data::{BLOGS_COMING_SOON_SUBTITLE, BLOGS_COMING_SOON_TITLE, BLOGS_SUBTITLE, BLOG_POSTS};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    html! {
        <section class="blog-coming-soon">
            <h2>{BLOGS_COMING_SOON_TITLE}</h2>
            <p>{BLOGS_COMING_SOON_SUBTITLE}</p>
            <span class="coming-soon-watermark">{"COMING SOON"}</span>
        </section>
    }
}

#[function_component(Blogs)]
pub fn blogs() -> Html {
    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blogs"}</h1>
                <p>{BLOGS_SUBTITLE}</p>
            </section>
            <section class="blog-list-section">
                <h2 class="section-subtitle">{"Featured Blog"}</h2>
                {
                    for BLOG_POSTS.iter().map(|post| html! {
                        <div class="blog-post-preview">
                            <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                <h3>{post.title}</h3>
                                <p>{post.intro}</p>
                                <span class="blog-author">
                                    {"Blog by "}<strong>{post.author}</strong>
                                </span>
                            </Link<Route>>
                        </div>
                    })
                }
                <ComingSoon />
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .blog-list-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    text-shadow: 0 0 20px rgba(255, 255, 255, 0.6);
                }
                .blog-list-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .blog-list-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-post-preview {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 12px;
                    margin-bottom: 2rem;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: rgba(255, 255, 255, 0.4);
                    transform: translateY(-5px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                    padding: 1.5rem;
                }
                .blog-post-preview h3 {
                    font-size: 1.6rem;
                    color: #7EB2FF;
                }
                .blog-post-preview p {
                    color: #999;
                    margin: 1rem 0;
                }
                .blog-author {
                    color: #ccc;
                    font-size: 0.9rem;
                }
                .blog-coming-soon {
                    position: relative;
                    text-align: center;
                    padding: 3rem 1rem;
                }
                .blog-coming-soon p {
                    color: #999;
                }
                .coming-soon-watermark {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 4rem;
                    font-weight: 800;
                    opacity: 0.15;
                    filter: blur(2px);
                    pointer-events: none;
                }
                @media (max-width: 768px) {
                    .blog-list-hero h1 {
                        font-size: 2.5rem;
                    }
                    .blog-list-section {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    match props.slug.as_str() {
        "ElectricEngineeringYounge" => html! { <ElectricEngineeringYoung /> },
        _ => html! { <NotFound /> },
    }
}
