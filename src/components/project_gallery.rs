use log::debug;
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::filter::CategoryFilter;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ProjectGalleryProps {
    pub projects: Vec<Project>,
    /// `(data-filter value, button label)` pairs, `all` first.
    pub categories: Vec<(&'static str, &'static str)>,
}

#[function_component(ProjectGallery)]
pub fn project_gallery(props: &ProjectGalleryProps) -> Html {
    let filter = use_state_eq(CategoryFilter::default);

    let label_for = |slug: &str| {
        props
            .categories
            .iter()
            .find(|(s, _)| *s == slug)
            .map(|(_, label)| *label)
            .unwrap_or(slug)
            .to_string()
    };

    let buttons = props.categories.iter().map(|(slug, label)| {
        let active = filter.is_selected(slug);
        let button_filter = CategoryFilter::from_attr(slug);
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Filtering projects by {}", button_filter.as_attr());
                filter.set(button_filter.clone());
            })
        };
        html! {
            <button
                class={classes!("project-category", active.then_some("active"))}
                data-filter={*slug}
                {onclick}
            >
                {*label}
            </button>
        }
    });

    let cards = props.projects.iter().map(|project| {
        html! {
            <div
                class="project-card"
                data-category={project.category}
                style={format!("display: {}", filter.display(Some(project.category)))}
            >
                <LazyImage src={project.image} alt={project.title} class="project-image" />
                <div class="project-info">
                    <span class="project-tag">{label_for(project.category)}</span>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="projects">
            <div class="project-categories">
                { for buttons }
            </div>
            <div class="projects-grid">
                { for cards }
            </div>
        </div>
    }
}
