use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::{ABOUT_SUBTITLE, MISSION_PARAGRAPHS, SITE, TECHNOLOGIES, TIMELINE, VALUES};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-header">
                <div class="container">
                    <h1 class="section-title">
                        {"About "}<span class="byte-glow">{SITE.name}</span>
                    </h1>
                    <p class="page-subtitle">{ABOUT_SUBTITLE}</p>
                </div>
            </section>

            <section class="mission-section">
                <div class="container">
                    <div class="mission-content">
                        <div class="mission-text">
                            <h2 class="section-subtitle">{"Our Mission"}</h2>
                            { for MISSION_PARAGRAPHS.iter().map(|p| html! { <p class="mission-description">{*p}</p> }) }
                            <Link<Route> to={Route::Contact} classes="btn btn-primary">
                                <span class="btn-glow"></span>
                                {"Get In Touch"}
                            </Link<Route>>
                        </div>
                        <div class="mission-visual">
                            <div class="mission-image">
                                <i class="fas fa-rocket"></i>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="values-section">
                <div class="container">
                    <h2 class="section-subtitle">{"Our Values"}</h2>
                    <div class="values-grid">
                        {
                            for VALUES.iter().map(|value| html! {
                                <div class="value-card">
                                    <div class="value-icon">
                                        <i class={value.icon}></i>
                                    </div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="story-section">
                <div class="container">
                    <h2 class="section-subtitle">{"Our Story"}</h2>
                    <div class="timeline">
                        {
                            for TIMELINE.iter().map(|item| html! {
                                <div class="timeline-item">
                                    <div class="timeline-year">{item.year}</div>
                                    <div class="timeline-content">
                                        <h3>{item.title}</h3>
                                        <p>{item.description}</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="tech-section">
                <div class="container">
                    <h2 class="section-subtitle">{"Our Technology Stack"}</h2>
                    <div class="tech-grid">
                        { for TECHNOLOGIES.iter().map(|tech| html! { <div class="tech-item">{*tech}</div> }) }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .mission-content {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .mission-description {
                    color: #aaa;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }
                .mission-image {
                    font-size: 8rem;
                    text-align: center;
                    text-shadow: 0 0 40px rgba(255, 255, 255, 0.4);
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .value-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }
                .value-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .value-card p {
                    color: #999;
                }
                .timeline-item {
                    display: flex;
                    gap: 2rem;
                    padding: 1.5rem 0;
                    border-left: 2px solid rgba(255, 255, 255, 0.2);
                    padding-left: 2rem;
                }
                .timeline-year {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .timeline-content p {
                    color: #999;
                }
                .tech-grid {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .tech-item {
                    padding: 0.6rem 1.2rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                    color: #ccc;
                }
                @media (max-width: 768px) {
                    .mission-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
