use yew::prelude::*;

use crate::data::{category_label, Project, ALL_CATEGORIES, PROJECTS, PROJECTS_SUBTITLE, PROJECT_CATEGORIES, SITE};

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectFilter {
    active: &'static str,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { active: ALL_CATEGORIES }
    }
}

impl ProjectFilter {
    pub fn select(category: &'static str) -> Self {
        Self { active: category }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Keeps the projects whose category equals the active one, in their
    /// original order. `all` keeps everything.
    pub fn apply<'a>(&self, items: &'a [Project]) -> Vec<&'a Project> {
        items
            .iter()
            .filter(|p| self.active == ALL_CATEGORIES || p.category == self.active)
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let has_image = !project.image.is_empty() && project.image != "#";

    html! {
        <div class="project-card">
            <div class="project-image">
                if has_image {
                    <img src={project.image} alt={project.title} loading="lazy" />
                }
                <div class="project-overlay">
                    <a href={project.link} target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        {"View Details"}
                    </a>
                </div>
            </div>
            <div class="project-info">
                <div class="project-meta">
                    <span class="project-category">{category_label(project.category)}</span>
                    <span class="project-year">{project.year}</span>
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
                <div class="project-duration">
                    <i class="fas fa-clock"></i>
                    {" "}{project.duration}
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let filter = use_state(ProjectFilter::default);
    let visible = filter.apply(&PROJECTS);

    html! {
        <div class="projects-page">
            <section class="page-header">
                <div class="container">
                    <h1 class="section-title">
                        <span class="byte-glow">{SITE.name}</span>{" Projects"}
                    </h1>
                    <p class="page-subtitle">{PROJECTS_SUBTITLE}</p>
                </div>
            </section>

            <section class="filter-section">
                <div class="container">
                    <div class="filter-buttons">
                        {
                            for PROJECT_CATEGORIES.iter().map(|category| {
                                let id = category.id;
                                let onclick = {
                                    let filter = filter.clone();
                                    Callback::from(move |_: MouseEvent| filter.set(ProjectFilter::select(id)))
                                };
                                html! {
                                    <button
                                        class={classes!("filter-btn", (filter.active() == id).then(|| "active"))}
                                        {onclick}
                                    >
                                        {category.label}
                                    </button>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="projects-section">
                <div class="container">
                    if visible.is_empty() {
                        <p class="empty-state">{"No projects in this category yet. Check back soon!"}</p>
                    } else {
                        <div class="projects-grid">
                            { for visible.into_iter().map(|project| html! { <ProjectCard key={project.id} project={project.clone()} /> }) }
                        </div>
                    }
                </div>
            </section>
            <style>
                {r#"
                .filter-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .filter-btn {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #ccc;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .filter-btn.active,
                .filter-btn:hover {
                    background: #fff;
                    color: #000;
                }
                .empty-state {
                    text-align: center;
                    color: #777;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        let base = PROJECTS[0].clone();
        vec![
            Project { id: 1, category: "linux", ..base.clone() },
            Project { id: 2, category: "dev", ..base.clone() },
            Project { id: 3, category: "linux", ..base.clone() },
            Project { id: 4, category: "ai", ..base },
        ]
    }

    #[test]
    fn selecting_a_category_keeps_only_matches() {
        let items = sample();
        let linux = ProjectFilter::select("linux").apply(&items);
        let ids: Vec<u32> = linux.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(linux.iter().all(|p| p.category == "linux"));
    }

    #[test]
    fn all_restores_the_full_list() {
        let items = sample();
        let _narrowed = ProjectFilter::select("linux").apply(&items);
        let all = ProjectFilter::select(ALL_CATEGORIES).apply(&items);
        assert_eq!(all.len(), items.len());
        assert_eq!(ProjectFilter::default().apply(&items).len(), items.len());
    }

    #[test]
    fn category_without_projects_shows_nothing() {
        let items = sample();
        assert!(ProjectFilter::select("pentest").apply(&items).is_empty());
    }

    #[test]
    fn filter_works_on_the_real_catalog() {
        let linux = ProjectFilter::select("linux").apply(&PROJECTS);
        assert_eq!(linux.len(), 1);
        assert_eq!(linux[0].title, "GhostFreakOS");
    }
}
