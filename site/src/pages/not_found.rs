//! Fallback page for unknown routes and category ids.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Página no encontrada"</h1>
            <a href="/" class="btn">"Volver al inicio"</a>
        </section>
    }
}
