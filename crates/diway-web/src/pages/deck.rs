//! Deck Page
//!
//! The clickable slide deck: a bounded cursor over the slides, prev/next
//! buttons that disable at the ends, dot navigation and a progress bar.

use leptos::prelude::*;

use diway_core::SlideCursor;
use diway_core::content::deck_slides;

#[component]
pub fn DeckPage() -> impl IntoView {
    let slides = StoredValue::new(deck_slides());
    let (cursor, set_cursor) = signal(SlideCursor::new(slides.with_value(Vec::len)));

    let go_to = move |index: isize| set_cursor.update(|c| c.go_to(index));

    view! {
        <div class="deck">
            <div class="slide">
                {move || {
                    let index = cursor.get().index();
                    slides.with_value(|slides| {
                        let slide = &slides[index];
                        view! {
                            <p class="kicker">{slide.kicker}</p>
                            <h2>{slide.title}</h2>
                            <ul>
                                {slide
                                    .points
                                    .iter()
                                    .map(|point| view! { <li>{*point}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })
                }}
            </div>

            <div class="deck-controls">
                <button
                    on:click=move |_| set_cursor.update(SlideCursor::previous)
                    disabled=move || cursor.get().is_first()
                >
                    "Back"
                </button>

                <div class="deck-dots">
                    {(0..slides.with_value(Vec::len))
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if cursor.get().index() == index { "dot active" } else { "dot" }
                                    }
                                    on:click=move |_| go_to(index as isize)
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    on:click=move |_| set_cursor.update(SlideCursor::next)
                    disabled=move || cursor.get().is_last()
                >
                    "Next"
                </button>
            </div>

            <div class="deck-progress">
                <div
                    class="deck-progress-bar"
                    style:width=move || format!("{}%", cursor.get().progress())
                />
                <p>{move || format!("Slide {} of {}", cursor.get().index() + 1, cursor.get().len())}</p>
            </div>
        </div>
    }
}
