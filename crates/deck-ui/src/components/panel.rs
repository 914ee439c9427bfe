use leptos::prelude::*;

/// Titled card wrapper used by every page section.
#[component]
pub fn Panel(
    /// Heading shown at the top of the panel
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card-title">{title}</div>
            {children()}
        </section>
    }
}
