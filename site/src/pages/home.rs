//! Home page: hero, about, services, category overview, and contact sections.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::catalog::catalog;
use crate::util::navigation::{anchor_from_hash, category_path, scroll_to_anchor};

/// Services offered, in the order they are presented.
pub const SERVICES: [&str; 4] = ["Modelos 3D", "Cubicaciones", "Presupuestos", "Coordinación BIM"];

#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();

    // Anchor links followed from another page arrive here as `/#about`. Effects
    // run after the sections are mounted, so the scroll happens once the route
    // change has completed.
    Effect::new(move || {
        let hash = location.hash.get();
        if let Some(anchor) = anchor_from_hash(&hash) {
            scroll_to_anchor(anchor);
        }
    });

    let categories = catalog()
        .categories()
        .iter()
        .map(|category| {
            let count = category.projects.len();
            view! {
                <a class="category-tile" href=category_path(&category.id)>
                    <h3 class="category-tile__title">{category.title.as_str()}</h3>
                    <p class="category-tile__description">{category.description.as_str()}</p>
                    <span class="category-tile__count">
                        {if count == 1 { "1 proyecto".to_owned() } else { format!("{count} proyectos") }}
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Modelación BIM para proyectos de construcción"</h1>
                <p>"Modelos 3D, cubicaciones, presupuestos y coordinación para obras civiles, educación, comercio e infraestructura."</p>
            </section>

            <section id="about" class="home-page__section">
                <h2>"Nosotros"</h2>
                <p>
                    "Acompañamos a constructoras, instituciones y mandantes en todas las etapas del proyecto, "
                    "desde los planos 2D hasta un modelo BIM coordinado y georreferenciado."
                </p>
            </section>

            <section id="services" class="home-page__section">
                <h2>"Servicios"</h2>
                <ul class="home-page__services">
                    {SERVICES.iter().map(|service| view! { <li>{*service}</li> }).collect_view()}
                </ul>
            </section>

            <section id="projects" class="home-page__section">
                <h2>"Proyectos"</h2>
                <div class="home-page__categories">{categories}</div>
            </section>

            <section id="contact" class="home-page__section">
                <h2>"Contacto"</h2>
                <p>"Cuéntanos sobre tu proyecto y te responderemos a la brevedad."</p>
            </section>
        </div>
    }
}
