use yew::prelude::*;

use crate::data::{TeamMember, SITE, TEAM_GROUPS, TEAM_STATS, TEAM_SUBTITLE};

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    html! {
        <div class="team-member-card">
            <div class="member-avatar">
                <img src={member.avatar} alt={member.name} loading="lazy" />
            </div>
            <div class="member-info">
                <h3>{member.name}</h3>
                <p class="member-role">{member.role}</p>
                <p class="member-bio">{member.bio}</p>
                <div class="member-social">
                    {
                        for member.social.present().into_iter().map(|(href, icon)| html! {
                            <a href={href} class="social-link" target="_blank" rel="noopener noreferrer">
                                <i class={icon}></i>
                            </a>
                        })
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <div class="team-page">
            <section class="page-header">
                <div class="container">
                    <h1 class="section-title">
                        {"Meet the "}<span class="byte-glow">{SITE.name}</span>{" Team"}
                    </h1>
                    <p class="page-subtitle">{TEAM_SUBTITLE}</p>
                </div>
            </section>

            <section class="stats-section">
                <div class="container">
                    <div class="stats-grid">
                        {
                            for TEAM_STATS.iter().map(|stat| html! {
                                <div class="stat-card">
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            {
                for TEAM_GROUPS.iter().filter(|group| !group.members.is_empty()).map(|group| html! {
                    <section class="team-section">
                        <div class="container">
                            <h2 class="section-subtitle">{group.heading}</h2>
                            <div class="team-grid">
                                { for group.members.iter().map(|member| html! { <MemberCard member={member.clone()} /> }) }
                            </div>
                        </div>
                    </section>
                })
            }
            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    text-shadow: 0 0 20px rgba(255, 255, 255, 0.5);
                }
                .stat-label {
                    color: #999;
                }
                .team-section .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .team-member-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.3s ease;
                }
                .team-member-card:hover {
                    transform: translateY(-5px);
                }
                .member-avatar img {
                    width: 160px;
                    height: 160px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                }
                .member-role {
                    color: #ddd;
                    font-weight: 600;
                }
                .member-bio {
                    color: #999;
                    line-height: 1.6;
                }
                .member-social {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    font-size: 1.3rem;
                }
                .social-link {
                    color: #ccc;
                }
                .social-link:hover {
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
