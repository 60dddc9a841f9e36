//! Category page listing every project of one catalog category.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::catalog;
use crate::components::project_card::ProjectCard;
use crate::pages::not_found::NotFoundPage;

/// Renders `/proyectos/:id`. Unknown ids fall through to the not-found view.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();

    // Re-rendering on a param change remounts the cards, which resets their
    // carousel and flip state and releases their timers.
    move || {
        let id = params.read().get("id");
        match id.as_deref().and_then(|id| catalog().category(id)) {
            Some(category) => view! {
                <section class="category-page">
                    <header class="category-page__header">
                        <h1>{category.title.as_str()}</h1>
                        <p>{category.description.as_str()}</p>
                    </header>
                    <div class="category-page__grid">
                        {category
                            .projects
                            .iter()
                            .map(|project| view! { <ProjectCard project=project/> })
                            .collect_view()}
                    </div>
                </section>
            }
            .into_any(),
            None => {
                log::debug!("unknown category {id:?}");
                view! { <NotFoundPage/> }.into_any()
            }
        }
    }
}
