use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::{footer_company, footer_services, FooterLink, FooterTarget, FOOTER_BLURB, SITE, SOCIAL_GITHUB};
use crate::Route;

fn footer_link(link: FooterLink) -> Html {
    match link.target {
        FooterTarget::Internal(route) => html! {
            <li><Link<Route> to={route}>{link.label}</Link<Route>></li>
        },
        FooterTarget::External(href) => html! {
            <li><a href={href}>{link.label}</a></li>
        },
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3 class="byte-glow">{SITE.name}</h3>
                        <p>{FOOTER_BLURB}</p>
                        <div class="social-links">
                            <a href={SOCIAL_GITHUB} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                <i class="fab fa-github"></i>
                            </a>
                        </div>
                    </div>

                    <div class="footer-section">
                        <h4>{"Services"}</h4>
                        <ul>
                            { for footer_services().into_iter().map(footer_link) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4>{"Company"}</h4>
                        <ul>
                            { for footer_company().into_iter().map(footer_link) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4>{"Contact"}</h4>
                        <p><a href={format!("mailto:{}", SITE.contact_email)}>{SITE.contact_email}</a></p>
                        if !SITE.contact_phone.is_empty() {
                            <p>{SITE.contact_phone}</p>
                        }
                        <p>{SITE.location}</p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>
                        {format!("© {} ", SITE.copyright_year)}
                        <span class="byte-glow">{SITE.copyright_owner}</span>
                        {". All rights reserved."}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    background: #050505;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 4rem 0 2rem;
                    margin-top: 4rem;
                }
                .footer-content {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .footer-section h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .footer-section p,
                .footer-section a {
                    color: #999;
                    text-decoration: none;
                    line-height: 1.8;
                }
                .footer-section a:hover {
                    color: #fff;
                }
                .footer-section ul {
                    list-style: none;
                    padding: 0;
                }
                .social-links a {
                    font-size: 1.4rem;
                    margin-right: 1rem;
                }
                .footer-bottom {
                    text-align: center;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    color: #666;
                }
                "#}
            </style>
        </footer>
    }
}
