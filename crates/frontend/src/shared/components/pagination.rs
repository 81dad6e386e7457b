use crate::shared::icons::icon;
use contracts::shared::pagination::{navigate, PageMarker, PageRequest, PageWindow, PaginationState};
use leptos::prelude::*;

/// Pagination - numbered page bar with elided runs
///
/// Renders nothing when there are no pages. `on_page_change` receives the
/// 1-based page to load and is never called for inert controls.
#[component]
pub fn Pagination(
    #[prop(into)]
    state: Signal<PaginationState>,

    /// Callback when page changes
    on_page_change: Callback<i64>,
) -> impl IntoView {
    let window = Memo::new(move |_| PageWindow::build(&state.get()));

    let go = move |request: PageRequest| {
        if let Some(page) = navigate(&state.get_untracked(), request) {
            log::debug!("pagination: {:?} -> page {}", request, page);
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || !window.with(PageWindow::is_empty)>
            <nav class="pagination" aria-label="Pagination">
                <p class="pagination__summary">{move || window.with(PageWindow::summary)}</p>
                <div class="pagination__controls">
                    <button
                        class="pagination__btn"
                        on:click=move |_| go(PageRequest::Previous)
                        disabled=move || window.with(|w| w.is_prev_disabled)
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    <For
                        each=move || window.with(|w| w.markers.clone())
                        key=|marker| marker.key()
                        children=move |marker| match marker {
                            PageMarker::Number(page) => view! {
                                <button
                                    class=move || {
                                        if window.with(|w| w.current_page == page) {
                                            "pagination__page pagination__page--current"
                                        } else {
                                            "pagination__page"
                                        }
                                    }
                                    aria-current=move || {
                                        window.with(|w| w.current_page == page).then_some("page")
                                    }
                                    on:click=move |_| go(PageRequest::Marker(marker))
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageMarker::Ellipsis(_) => view! {
                                <span class="pagination__ellipsis" aria-hidden="true">"…"</span>
                            }
                            .into_any(),
                        }
                    />
                    <button
                        class="pagination__btn"
                        on:click=move |_| go(PageRequest::Next)
                        disabled=move || window.with(|w| w.is_next_disabled)
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </nav>
        </Show>
    }
}
