//! Story Page
//!
//! Cover, the sample project card, the step tabs of the value story and
//! the field-evidence channels.

use leptos::prelude::*;

use diway_core::content::{FACT_CHANNELS, PROJECT_CARD, STORY_STEPS};

#[component]
pub fn HomePage() -> impl IntoView {
    let (active_step, set_active_step) = signal(0usize);

    view! {
        <div class="home">
            <header class="hero">
                <p class="cover-mark">"From blind spots to managed reality"</p>
                <h1>"AI control loop for a development project"</h1>
                <p class="cover-subtitle">
                    "We collect the developer's data first, then find losses in the paper trail \
                     and confirm them in the field, so the director sees causes and actions, \
                     not just reports."
                </p>
                <div class="cta">
                    <a href="/deck" class="btn btn-primary">"Open the deck"</a>
                    <a href="/chat" class="btn">"Ask the AI"</a>
                </div>
            </header>

            <section class="project-card">
                <h2>"Project card"</h2>
                <div class="project-head">
                    <div>
                        <p class="project-name">{PROJECT_CARD.name}</p>
                        <p class="project-phase">{PROJECT_CARD.phase}</p>
                    </div>
                    <span class="badge">"Risk: "{PROJECT_CARD.risk_level}</span>
                </div>

                <div class="metrics-grid">
                    <article>
                        <p>"Health index"</p>
                        <strong>{PROJECT_CARD.health}"/100"</strong>
                    </article>
                    <article>
                        <p>"Potential loss"</p>
                        <strong>{PROJECT_CARD.potential_loss}</strong>
                    </article>
                    <article>
                        <p>"Schedule risk"</p>
                        <strong>{PROJECT_CARD.schedule_risk}</strong>
                    </article>
                </div>

                <div class="hotspots">
                    {PROJECT_CARD
                        .hotspots
                        .iter()
                        .map(|point| view! { <div class="hotspot-item">{*point}</div> })
                        .collect_view()}
                </div>
            </section>

            <section class="story">
                <h2>"How the value lands"</h2>
                <div class="step-tabs">
                    {STORY_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <button
                                    class=move || {
                                        if active_step.get() == index {
                                            "step-tab active"
                                        } else {
                                            "step-tab"
                                        }
                                    }
                                    on:click=move |_| set_active_step.set(index)
                                >
                                    {step.title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="step-detail">
                    {move || {
                        let step = &STORY_STEPS[active_step.get().min(STORY_STEPS.len() - 1)];
                        view! {
                            <h3>{step.title}</h3>
                            <p>{step.subtitle}</p>
                            <ul class="bullet-grid">
                                {step
                                    .bullets
                                    .iter()
                                    .map(|bullet| view! { <li>{*bullet}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    }}
                </div>
            </section>

            <section class="channels">
                <h2>"Field evidence channels"</h2>
                <div class="channels-grid">
                    {FACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <div class="channel-card">
                                    <span class="channel-icon">{channel.icon}</span>
                                    <span>{channel.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="result-note">
                    "The output is not raw analytics but explained decisions: where money leaks, \
                     why, and which action has the best financial effect."
                </p>
            </section>
        </div>
    }
}
