use crate::shared::api;
use crate::shared::components::pagination::Pagination;
use crate::shared::config::config;
use crate::shared::format::{format_price, format_rating};
use crate::shared::icons::icon;
use contracts::domain::a001_tour_package::{
    destinations, featured, PackageFilter, PackageSort, TourPackage,
};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{page_slice, PaginationState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

#[component]
fn PackageCard(package: TourPackage) -> impl IntoView {
    let book_href = format!("/bookings/new/{}", package.id.as_string());

    view! {
        <article class="package-card">
            {package.image_url.clone().map(|src| view! {
                <img class="package-card__image" src=src alt=package.title.clone() />
            })}
            <div class="package-card__body">
                <h3 class="package-card__title">{package.title.clone()}</h3>
                <p class="package-card__meta">
                    {icon("map-pin")}
                    {package.destination.clone()}
                    " · "
                    {package.duration_label()}
                </p>
                <p class="package-card__rating">
                    {icon("star")}
                    {format_rating(package.rating)}
                    {format!(" ({} reviews)", package.review_count)}
                </p>
                <p class="package-card__price">
                    {format_price(package.price)}
                    <span class="package-card__unit">" / person"</span>
                </p>
                <A href=book_href attr:class="package-card__cta">"Book now"</A>
            </div>
        </article>
    }
}

#[component]
pub fn PackageList() -> impl IntoView {
    let page_size = config().catalog.page_size;
    let featured_count = config().catalog.featured_count;

    let (packages, set_packages) = signal(Vec::<TourPackage>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(PackageSort::default());
    let page = RwSignal::new(1_i64);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_packages().await {
                Ok(resp) => {
                    log::debug!(
                        "catalog: loaded {} packages (reported total {})",
                        resp.items.len(),
                        resp.total_count
                    );
                    set_packages.set(resp.items);
                }
                Err(e) => {
                    log::error!("catalog: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    // Initial load (once)
    Effect::new(move |_| load());

    // back to the first page whenever the result set changes
    Effect::new(move |_| {
        query.track();
        sort.track();
        page.set(1);
    });

    let filter = Memo::new(move |_| PackageFilter {
        query: query.get(),
        ..Default::default()
    });

    let filtered = Memo::new(move |_| {
        let mut items = filter.with(|f| f.apply(packages.get()));
        sort.get().sort(&mut items);
        items
    });

    let pagination = Signal::derive(move || {
        let total = filtered.with(|items| items.len() as i64);
        PaginationState::from_totals(page.get(), page_size, total).unwrap_or_else(|e| {
            log::error!("catalog pagination: {}", e);
            PaginationState::default()
        })
    });

    let visible = move || {
        let state = pagination.get();
        filtered.with(|items| page_slice(items, &state).to_vec())
    };

    let highlights = Memo::new(move |_| packages.with(|items| featured(items, featured_count)));
    let suggestions = Memo::new(move |_| packages.with(|items| destinations(items)));

    let on_page_change = Callback::new(move |target: i64| page.set(target));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Find your next trip"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || filtered.with(|items| items.len()).to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="search-bar">
                <input
                    type="search"
                    class="search-bar__input"
                    list="destination-suggestions"
                    placeholder="Destination or package (min. 3 characters)"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <datalist id="destination-suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|d| d.clone()
                        children=move |d| view! { <option value=d.clone()></option> }
                    />
                </datalist>
                <select
                    class="search-bar__sort"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        sort.set(PackageSort::from_code(&code).unwrap_or_default());
                    }
                    prop:value=move || sort.get().code()
                >
                    {PackageSort::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || !filter.with(PackageFilter::is_query_active) && !highlights.with(Vec::is_empty)>
                <section class="featured">
                    <h2>"Popular right now"</h2>
                    <div class="package-grid">
                        <For
                            each=move || highlights.get()
                            key=|p| p.id
                            children=move |p| view! { <PackageCard package=p /> }
                        />
                    </div>
                </section>
            </Show>

            <section class="catalog">
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="empty-state">
                            {move || if is_loading.get() { "Loading packages..." } else { "No packages match your search." }}
                        </p>
                    }
                >
                    <div class="package-grid">
                        <For
                            each=visible
                            key=|p| p.id
                            children=move |p| view! { <PackageCard package=p /> }
                        />
                    </div>
                </Show>
                <Pagination state=pagination on_page_change=on_page_change />
            </section>
        </div>
    }
}
