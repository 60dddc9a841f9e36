//! Site header: branding, primary navigation, and the project-category dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted once inside the router and stays up across pages.
//! Its dropdown lists catalog categories; while open, a window-level mousedown
//! observer closes it on clicks outside its bounding element. The observer is
//! removed as soon as the dropdown closes or the header unmounts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::catalog::catalog;
use crate::state::menu::{DropdownState, MenuEvent};
use crate::util::navigation::{self, NavTarget};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Brand shown at the left of the header.
pub const BRAND_NAME: &str = "Modelación BIM";

/// Owns a window listener and removes it when dropped.
#[cfg(feature = "hydrate")]
struct OutsideClickListener(Option<WindowListenerHandle>);

#[cfg(feature = "hydrate")]
impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

#[cfg(feature = "hydrate")]
fn event_is_inside(container: &web_sys::HtmlDivElement, ev: &leptos::ev::MouseEvent) -> bool {
    ev.target()
        .as_ref()
        .and_then(|target| target.dyn_ref::<web_sys::Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <span class="logo">
            <svg class="logo__mark" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path>
            </svg>
            <span class="logo__text">{BRAND_NAME}</span>
        </span>
    }
}

/// Fixed top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(DropdownState::default());
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();
    let location = use_location();
    let pathname = location.pathname;
    let hash = location.hash;
    let navigate = use_navigate();

    let go = Callback::new(move |path: String| {
        let current = pathname.get_untracked();
        match navigation::resolve(&path, &current) {
            NavTarget::ScrollTo(anchor) => {
                navigation::scroll_to_anchor(&anchor);
            }
            NavTarget::RouteThenScroll { path, anchor } => {
                log::debug!("navigating from {current} to {path}, home will scroll to #{anchor}");
                navigate(&path, NavigateOptions::default());
            }
            NavTarget::Route(path) => navigate(&path, NavigateOptions::default()),
        }
    });

    // Any route change closes the dropdown.
    Effect::new(move || {
        pathname.track();
        hash.track();
        menu.update(|m| m.apply(MenuEvent::RouteChanged));
    });

    #[cfg(feature = "hydrate")]
    {
        let listener = StoredValue::new_local(None::<OutsideClickListener>);
        Effect::new(move || {
            let wanted = menu.get().wants_outside_listener();
            let registered = listener.with_value(Option::is_some);
            if wanted && !registered {
                let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
                    let inside = dropdown_ref
                        .get_untracked()
                        .is_some_and(|el| event_is_inside(&el, &ev));
                    menu.update(|m| m.apply(MenuEvent::PointerDown { inside }));
                });
                listener.set_value(Some(OutsideClickListener(Some(handle))));
            } else if !wanted && registered {
                listener.set_value(None);
            }
        });
        on_cleanup(move || {
            let _ = listener.try_update_value(Option::take);
        });
    }

    let categories = catalog()
        .categories()
        .iter()
        .map(|category| {
            let path = navigation::category_path(&category.id);
            view! {
                <button
                    class="site-header__item"
                    on:click=move |_| {
                        go.run(path.clone());
                        menu.update(|m| m.apply(MenuEvent::CategorySelected));
                    }
                >
                    {category.title.as_str()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a href="/" class="site-header__brand">
                    <Logo/>
                </a>
                <nav class="site-header__nav">
                    <button class="site-header__link" on:click=move |_| go.run("/".to_owned())>
                        "Inicio"
                    </button>
                    <button class="site-header__link" on:click=move |_| go.run("/#about".to_owned())>
                        "Nosotros"
                    </button>
                    <div
                        class="site-header__projects"
                        node_ref=dropdown_ref
                        on:mouseenter=move |_| menu.update(|m| m.apply(MenuEvent::PointerEnter))
                        on:mouseleave=move |_| menu.update(|m| m.apply(MenuEvent::PointerLeave))
                    >
                        <button
                            class="site-header__link site-header__trigger"
                            aria-haspopup="true"
                            aria-expanded=move || menu.get().is_open().to_string()
                        >
                            <span>"Proyectos"</span>
                            <svg class="site-header__chevron" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                <path d="m6 9 6 6 6-6"></path>
                            </svg>
                        </button>
                        <div
                            class="site-header__dropdown"
                            class:site-header__dropdown--open=move || menu.get().is_open()
                        >
                            {categories}
                        </div>
                    </div>
                    <button class="site-header__link" on:click=move |_| go.run("/#contact".to_owned())>
                        "Contacto"
                    </button>
                </nav>
            </div>
        </header>
    }
}
