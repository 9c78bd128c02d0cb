//! Roadmap Page

use leptos::prelude::*;

use diway_core::content::{PhaseStatus, ROADMAP};

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <div class="roadmap">
            <h1>"Rollout roadmap"</h1>
            <p class="subtitle">
                "The rollout follows the pitch: data, losses, causes, field, cockpit."
            </p>

            <ol class="phases">
                {ROADMAP
                    .iter()
                    .map(|phase| {
                        let status_class = match phase.status {
                            PhaseStatus::Done => "phase done",
                            PhaseStatus::InProgress => "phase in-progress",
                            PhaseStatus::Planned => "phase planned",
                        };
                        view! {
                            <li class=status_class>
                                <div>
                                    <h2>{phase.title}</h2>
                                    <p>{phase.detail}</p>
                                </div>
                                <span class="badge">{phase.status.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
