use yew::prelude::*;
use yew_router::components::Link;

use crate::data::blog_post;
use crate::pages::blog::ComingSoon;
use crate::Route;

const SLUG: &str = "ElectricEngineeringYounge";

#[function_component(ElectricEngineeringYoung)]
pub fn electric_engineering_young() -> Html {
    let Some(post) = blog_post(SLUG) else {
        return html! {};
    };

    html! {
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{post.title}</h1>
                <div class="blog-byline">{"Blog by "}<strong>{post.author}</strong></div>
            </section>
            <section class="blog-content">
                <p>{post.intro}</p>
                <p class="highlight"><strong>{"And the best part?"}</strong>{" It's easier, cheaper, and more fun than ever before."}</p>

                <h2>{"🚀 Why the Barrier to Entry Has Disappeared"}</h2>
                <p>{"A decade ago, getting into electronics meant expensive equipment, thick textbooks, and a lot of trial-and-error without guidance. Now, the game has changed:"}</p>
                <ul>
                    <li><strong>{"Affordable Hardware"}</strong>{": boards like Arduino, ESP32, and Raspberry Pi Pico cost less than a pizza."}</li>
                    <li><strong>{"Plug-and-Play Sensors"}</strong>{": temperature, motion, light, and sound sensors can be connected with just a few jumper wires."}</li>
                    <li><strong>{"Free Learning Resources"}</strong>{": YouTube tutorials, online courses, and interactive simulators like Wokwi make learning possible without a lab."}</li>
                    <li><strong>{"Community Support"}</strong>{": forums, Discord servers, and maker groups mean you're never stuck alone."}</li>
                </ul>

                <h2>{"🧠 Why Learning Young Matters"}</h2>
                <p>{"When you start at 15, you're not just \"playing with wires\". You're building a mindset:"}</p>
                <ul>
                    <li><strong>{"Problem-Solving Skills"}</strong>{": every project is a puzzle to crack."}</li>
                    <li><strong>{"Creativity"}</strong>{": turning an idea into a working device is pure invention."}</li>
                    <li><strong>{"Confidence"}</strong>{": the moment your first LED blinks, you realize you can make technology work for you."}</li>
                    <li><strong>{"Career Head Start"}</strong>{": by the time you're in college, you'll already have years of hands-on experience."}</li>
                </ul>

                <h2>{"🎯 From Boredom to Brilliance"}</h2>
                <p>{"Let's be honest, boredom can be a dangerous thing for a curious mind. But with microcontrollers, boredom becomes a launchpad:"}</p>
                <ul>
                    <li>{"Turn your room into a smart home with automated lights and fans."}</li>
                    <li>{"Build a mini weather station to track temperature and humidity."}</li>
                    <li>{"Create a retro handheld game console with a few buttons and a small screen."}</li>
                    <li>{"Make a robot car that follows lines or avoids obstacles."}</li>
                </ul>
                <p>{"Every project is a mix of fun, challenge, and instant gratification. The perfect antidote to \"I have nothing to do.\""}</p>

                <h2>{"🌱 The Ripple Effect"}</h2>
                <p>{"Many young makers start with a simple blinking LED and end up:"}</p>
                <ul>
                    <li>{"Winning science fairs"}</li>
                    <li>{"Launching Kickstarter projects"}</li>
                    <li>{"Teaching others in their community"}</li>
                    <li>{"Choosing engineering or computer science as a career"}</li>
                </ul>
                <p>{"The skills you pick up at 15 can shape the rest of your life, and the world you help build."}</p>

                <h2>{"🔌 Final Thought"}</h2>
                <p>{"If you're a teenager (or know one) with a spark of curiosity, now is the time to plug in, literally. The tools are cheap, the knowledge is free, and the possibilities are endless."}</p>
                <p>{"Why waste hours scrolling when you could be building the future from your desk?"}</p>

                <div class="blog-cta">
                    <h3>{"Got a project idea of your own?"}</h3>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="btn btn-primary">{"Talk to the Byte Team"}</button>
                    </Link<Route>>
                </div>

                <ComingSoon />
            </section>
            <style>
                {r#"
                .blog-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .blog-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                    max-width: 800px;
                    margin: 0 auto;
                }
                .blog-hero h1 {
                    font-size: 2.8rem;
                    margin-bottom: 1.5rem;
                    text-shadow: 0 0 20px rgba(255, 255, 255, 0.6);
                }
                .blog-byline {
                    color: #ccc;
                    font-size: 1.1rem;
                }
                .blog-content {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                }
                .blog-content h2 {
                    font-size: 1.7rem;
                    margin: 2.5rem 0 1rem;
                    text-shadow: 0 0 12px rgba(255, 255, 255, 0.4);
                }
                .blog-content p,
                .blog-content li {
                    color: #bbb;
                    line-height: 1.8;
                }
                .blog-content ul {
                    padding-left: 1.5rem;
                }
                .blog-content .highlight {
                    color: #e0e0e0;
                }
                .blog-cta {
                    text-align: center;
                    margin: 3rem 0 1rem;
                }
                @media (max-width: 768px) {
                    .blog-hero h1 {
                        font-size: 2rem;
                    }
                    .blog-content {
                        padding: 1.2rem;
                        border-radius: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
