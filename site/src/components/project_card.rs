//! Flippable project card with an auto-advancing image carousel.
//!
//! ARCHITECTURE
//! ============
//! The front face cross-fades between the project's images (every slide stays
//! mounted; only opacity changes) and offers a call-to-action that flips the
//! card. The back face shows either the external 3D viewer or a service
//! summary, plus a return button. Each card owns its own carousel interval and
//! auto-return timeout; both are cancelled when the card unmounts.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::catalog::{BackFace, Project};
use crate::state::carousel::Carousel;
use crate::state::flip::FlipState;

#[cfg(feature = "hydrate")]
use crate::state::carousel::AUTO_ADVANCE_MS;
#[cfg(feature = "hydrate")]
use crate::state::flip::{AUTO_RETURN_MS, ReturnToken};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

pub const RETURN_LABEL: &str = "Ver Descripción";

/// Label and color of the front-face button that flips the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub class: &'static str,
}

impl CallToAction {
    pub fn for_project(project: &Project) -> Self {
        if project.is_default_model() {
            Self {
                label: "Ver Servicio",
                class: "btn--neutral",
            }
        } else {
            Self {
                label: "Ver Modelo 3D",
                class: "btn--accent",
            }
        }
    }
}

/// Alt text for the slide at zero-based `index`.
pub fn slide_alt(title: &str, index: usize) -> String {
    format!("{title} - Imagen {}", index + 1)
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(project.image_count()));
    let flip = RwSignal::new(FlipState::default());
    let cta = CallToAction::for_project(project);

    #[cfg(feature = "hydrate")]
    {
        let tick = StoredValue::new_local(Some(Interval::new(AUTO_ADVANCE_MS, move || {
            carousel.update(Carousel::advance);
        })));

        // The pending auto-return, keyed by the stay on the back side it belongs to.
        // Replacing or clearing it drops the old timeout, which cancels it.
        let scheduled = StoredValue::new_local(None::<(ReturnToken, Timeout)>);
        Effect::new(move || {
            let due = flip.with(FlipState::pending_return);
            if scheduled.with_value(|s| s.as_ref().map(|(token, _)| *token)) == due {
                return;
            }
            let next = due.map(|token| {
                let timeout = Timeout::new(AUTO_RETURN_MS, move || {
                    flip.update(|f| {
                        f.auto_return(token);
                    });
                });
                (token, timeout)
            });
            scheduled.set_value(next);
        });

        on_cleanup(move || {
            let _ = tick.try_update_value(Option::take);
            let _ = scheduled.try_update_value(Option::take);
        });
    }

    let slides = project
        .images()
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <div
                    class="project-card__slide"
                    data-carousel-slide=index.to_string()
                    style:opacity=move || carousel.get().opacity(index)
                >
                    <img class="project-card__image" src=src alt=slide_alt(&project.title, index)/>
                </div>
            }
        })
        .collect_view();

    let services = project
        .services
        .iter()
        .map(|service| view! { <span class="project-card__service">{service.as_str()}</span> })
        .collect_view();

    let back_face = match project.back_face() {
        BackFace::ServiceSummary(summary) => view! {
            <div class="project-card__summary">
                <p>{summary}</p>
            </div>
        }
        .into_any(),
        BackFace::ModelViewer(url) => view! {
            <iframe
                class="project-card__viewer"
                src=url
                title=project.title.as_str()
                allow="fullscreen"
                allowfullscreen=true
            ></iframe>
        }
        .into_any(),
    };

    view! {
        <div class="project-card" class:project-card--flipped=move || flip.get().is_flipped()>
            <div class="project-card__inner">
                <div class="project-card__front">
                    <div class="project-card__carousel">
                        {slides}
                        <div class="project-card__controls">
                            <button
                                class="project-card__control"
                                title="Imagen anterior"
                                aria-label="Ver imagen anterior"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    carousel.update(Carousel::previous);
                                }
                            >
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                    <path d="m15 18-6-6 6-6"></path>
                                </svg>
                            </button>
                            <button
                                class="project-card__control"
                                title="Siguiente imagen"
                                aria-label="Ver siguiente imagen"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    carousel.update(Carousel::next);
                                }
                            >
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                    <path d="m9 18 6-6-6-6"></path>
                                </svg>
                            </button>
                        </div>
                    </div>

                    <div class="project-card__content">
                        <h3 class="project-card__title">{project.title.as_str()}</h3>
                        <p class="project-card__description">{project.description.as_str()}</p>
                        <div class="project-card__services">{services}</div>
                        <div class="project-card__details">
                            <p><strong>"Cliente:"</strong>" "{project.details.client.as_str()}</p>
                            <p><strong>"Fecha:"</strong>" "{project.details.date.as_str()}</p>
                            <p><strong>"Ubicación:"</strong>" "{project.details.location.as_str()}</p>
                        </div>
                    </div>

                    <button
                        class=format!("btn project-card__cta {}", cta.class)
                        on:click=move |_| flip.update(FlipState::show_back)
                    >
                        {cta.label}
                    </button>
                </div>

                <div class="project-card__back">
                    {back_face}
                    <button
                        class=format!("btn project-card__return {}", cta.class)
                        on:click=move |_| flip.update(FlipState::show_front)
                    >
                        {RETURN_LABEL}
                    </button>
                </div>
            </div>
        </div>
    }
}
