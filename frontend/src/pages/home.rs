use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::{Interval, Timeout};

use crate::animation::{
    TypedTerminal, WordReveal, CURSOR_BLINK_MS, TERMINAL_DELAY_MS, TYPE_INTERVAL_MS, WORD_INTERVAL_MS,
};
use crate::data::{HERO_SUBTITLE, HERO_WORDS, PROJECTS, SERVICES, SITE, TEAM_PREVIEW, TERMINAL_CODE, TERMINAL_TITLE};
use crate::pages::projects::ProjectCard;
use crate::Route;

enum HeroAction {
    RevealWord,
    ShowTerminal,
    TypeChar,
    BlinkCursor,
}

#[derive(Clone, PartialEq)]
struct HeroState {
    reveal: WordReveal,
    show_terminal: bool,
    terminal: TypedTerminal,
    cursor_visible: bool,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            reveal: WordReveal::new(HERO_WORDS.len()),
            show_terminal: false,
            terminal: TypedTerminal::new(),
            cursor_visible: true,
        }
    }
}

impl Reducible for HeroState {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HeroAction::RevealWord => {
                next.reveal.tick();
            }
            HeroAction::ShowTerminal => next.show_terminal = true,
            HeroAction::TypeChar => {
                next.terminal.tick(&TERMINAL_CODE);
            }
            HeroAction::BlinkCursor => next.cursor_visible = !next.cursor_visible,
        }
        next.into()
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero = use_reducer(HeroState::default);

    // Word-by-word title, then the terminal a moment after the last word
    {
        let dispatcher = hero.dispatcher();
        use_effect_with_deps(
            move |revealed: &bool| {
                let mut word_timer = None;
                let mut terminal_timer = None;
                if *revealed {
                    terminal_timer = Some(Timeout::new(TERMINAL_DELAY_MS, move || {
                        dispatcher.dispatch(HeroAction::ShowTerminal)
                    }));
                } else {
                    word_timer = Some(Interval::new(WORD_INTERVAL_MS, move || {
                        dispatcher.dispatch(HeroAction::RevealWord)
                    }));
                }
                move || {
                    drop(word_timer);
                    drop(terminal_timer);
                }
            },
            hero.reveal.is_complete(),
        );
    }

    // Typing runs only while the terminal is visible and unfinished
    {
        let dispatcher = hero.dispatcher();
        let typing = hero.show_terminal && !hero.terminal.is_done(&TERMINAL_CODE);
        use_effect_with_deps(
            move |typing: &bool| {
                let type_timer = typing.then(|| {
                    Interval::new(TYPE_INTERVAL_MS, move || dispatcher.dispatch(HeroAction::TypeChar))
                });
                move || drop(type_timer)
            },
            typing,
        );
    }

    {
        let dispatcher = hero.dispatcher();
        use_effect_with_deps(
            move |_| {
                let cursor_timer = Interval::new(CURSOR_BLINK_MS, move || {
                    dispatcher.dispatch(HeroAction::BlinkCursor)
                });
                move || drop(cursor_timer)
            },
            (),
        );
    }

    let last_word = HERO_WORDS.len() - 1;

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-container">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            {
                                for HERO_WORDS.iter().enumerate().map(|(index, word)| html! {
                                    <span class={classes!(
                                        if hero.reveal.is_visible(index) { "word-visible" } else { "word-hidden" },
                                        (*word == SITE.name).then(|| "glow-text"),
                                    )}>
                                        {*word}
                                        {if index < last_word { " " } else { "" }}
                                    </span>
                                })
                            }
                        </h1>
                        <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                        <div class="hero-buttons">
                            <Link<Route> to={Route::Projects} classes="btn btn-primary">
                                <span class="btn-glow"></span>
                                {"View Our Work"}
                            </Link<Route>>
                            <Link<Route> to={Route::Team} classes="btn btn-secondary">
                                {"Meet the Team"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="hero-terminal">
                        if hero.show_terminal {
                            <div class="terminal-window">
                                <div class="terminal-header">
                                    <div class="terminal-buttons">
                                        <span class="terminal-btn terminal-btn-close"></span>
                                        <span class="terminal-btn terminal-btn-minimize"></span>
                                        <span class="terminal-btn terminal-btn-maximize"></span>
                                    </div>
                                    <div class="terminal-title">{TERMINAL_TITLE}</div>
                                </div>
                                <div class="terminal-body">
                                    <pre class="code-output">
                                        <code>
                                            {
                                                for hero.terminal.lines().iter().enumerate().map(|(index, line)| {
                                                    let class = TERMINAL_CODE.get(index).map(|l| l.class).unwrap_or("");
                                                    html! { <div class={class}>{line}</div> }
                                                })
                                            }
                                            if hero.cursor_visible {
                                                <span class="cursor">{"|"}</span>
                                            }
                                        </code>
                                    </pre>
                                </div>
                            </div>
                        }
                    </div>
                </div>
            </section>

            <section class="services">
                <div class="container">
                    <h2 class="section-title">{"What We Do"}</h2>
                    <div class="services-grid">
                        {
                            for SERVICES.iter().map(|service| html! {
                                <div class="service-card">
                                    <div class="service-icon">
                                        <i class={service.icon_class}></i>
                                    </div>
                                    <h3>{service.title}</h3>
                                    if !service.description.is_empty() {
                                        <p>{service.description}</p>
                                    }
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="featured-projects">
                <div class="container">
                    <h2 class="section-title">{"Featured Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().map(|project| html! { <ProjectCard project={project.clone()} /> }) }
                    </div>
                </div>
            </section>

            <section class="team-preview">
                <div class="container">
                    <h2 class="section-title">{"Meet Our Team"}</h2>
                    <div class="team-grid">
                        {
                            for TEAM_PREVIEW.iter().map(|member| html! {
                                <div class="team-member">
                                    <div class="member-avatar">
                                        <img src={member.avatar} alt={member.name} loading="lazy" />
                                    </div>
                                    <h3>{member.name}</h3>
                                    <p>{member.role}</p>
                                </div>
                            })
                        }
                    </div>
                    <div class="text-center">
                        <Link<Route> to={Route::Team} classes="btn btn-primary">
                            <span class="btn-glow"></span>
                            {"View Full Team"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 80px;
                }
                .hero-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-title {
                    font-size: 4rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .word-hidden {
                    opacity: 0;
                }
                .word-visible {
                    opacity: 1;
                    transition: opacity 0.6s ease;
                }
                .glow-text {
                    text-shadow: 0 0 20px rgba(255, 255, 255, 0.8);
                }
                .hero-subtitle {
                    color: #aaa;
                    font-size: 1.3rem;
                    margin-bottom: 2rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .terminal-window {
                    background: #0c0c0c;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
                }
                .terminal-header {
                    display: flex;
                    align-items: center;
                    padding: 0.6rem 1rem;
                    background: #1a1a1a;
                }
                .terminal-buttons {
                    display: flex;
                    gap: 0.4rem;
                }
                .terminal-btn {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                }
                .terminal-btn-close { background: #ff5f56; }
                .terminal-btn-minimize { background: #ffbd2e; }
                .terminal-btn-maximize { background: #27c93f; }
                .terminal-title {
                    flex: 1;
                    text-align: center;
                    color: #888;
                    font-size: 0.85rem;
                }
                .terminal-body {
                    padding: 1rem;
                    height: 420px;
                    overflow-y: auto;
                }
                .code-output {
                    margin: 0;
                    font-family: "Fira Code", monospace;
                    font-size: 0.8rem;
                    color: #ddd;
                }
                .cpp-include { color: #c586c0; }
                .cpp-class { color: #4ec9b0; }
                .cpp-keyword { color: #569cd6; }
                .cpp-string { color: #ce9178; }
                .cpp-function { color: #dcdcaa; }
                .cpp-output { color: #9cdcfe; }
                .cpp-operator { color: #d4d4d4; }
                .cursor { color: #fff; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-5px);
                }
                .service-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: #999;
                }
                .team-preview .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .team-member {
                    text-align: center;
                }
                .team-member img {
                    width: 120px;
                    height: 120px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .team-member p {
                    color: #999;
                }
                @media (max-width: 900px) {
                    .hero-container {
                        grid-template-columns: 1fr;
                    }
                    .hero-title {
                        font-size: 2.8rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
