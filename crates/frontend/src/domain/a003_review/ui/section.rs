use crate::shared::api;
use crate::shared::format::{format_date, format_rating};
use crate::shared::icons::icon;
use contracts::domain::a001_tour_package::TourPackageId;
use contracts::domain::a003_review::{average_rating, NewReview, Review};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Reviews for a package plus the form to add one
#[component]
pub fn ReviewSection(package_id: TourPackageId, default_author: String) -> impl IntoView {
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_sending, set_is_sending) = signal(false);
    let (thanks, set_thanks) = signal(false);

    let author = RwSignal::new(default_author);
    let rating = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());

    spawn_local(async move {
        match api::fetch_reviews(package_id).await {
            Ok(items) => set_reviews.set(items),
            Err(e) => log::warn!("reviews: {}", e),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let review = NewReview {
            package_id,
            author: author.get_untracked().trim().to_string(),
            rating: rating.get_untracked(),
            comment: comment.get_untracked().trim().to_string(),
        };
        if let Err(e) = review.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_is_sending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::submit_review(&review).await {
                Ok(saved) => {
                    set_reviews.update(|items| items.insert(0, saved));
                    comment.set(String::new());
                    set_thanks.set(true);
                }
                Err(e) => set_error.set(Some(format!("Could not send review: {}", e))),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <section class="reviews">
            <h2>
                "Reviews "
                {move || reviews.with(|items| {
                    average_rating(items)
                        .map(|avg| format!("{} / 5 ({})", format_rating(avg), items.len()))
                        .unwrap_or_else(|| "(none yet)".to_string())
                })}
            </h2>

            <ul class="reviews__list">
                <For
                    each=move || reviews.get()
                    key=|r| r.id
                    children=move |r| view! {
                        <li class="review">
                            <p class="review__header">
                                <strong>{r.author.clone()}</strong>
                                " "
                                {icon("star")}
                                {r.rating}
                                " · "
                                {format_date(r.created_at.date_naive())}
                            </p>
                            <p class="review__comment">{r.comment.clone()}</p>
                        </li>
                    }
                />
            </ul>

            <Show
                when=move || !thanks.get()
                fallback=|| view! { <p class="reviews__thanks">"Thank you for sharing your trip!"</p> }
            >
                <form class="review-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="error-message">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <div class="form-group">
                        <label for="review-author">"Name"</label>
                        <input
                            type="text"
                            id="review-author"
                            prop:value=move || author.get()
                            on:input=move |ev| author.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="review-rating">"Rating"</label>
                        <select
                            id="review-rating"
                            prop:value=move || rating.get().to_string()
                            on:change=move |ev| rating.set(event_target_value(&ev).parse().unwrap_or(5))
                        >
                            {(1..=5_u8).rev().map(|n| view! {
                                <option value=n.to_string()>{"★".repeat(usize::from(n))}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="review-comment">"Your experience"</label>
                        <textarea
                            id="review-comment"
                            prop:value=move || comment.get()
                            on:input=move |ev| comment.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || is_sending.get()>
                        {move || if is_sending.get() { "Sending..." } else { "Post review" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
