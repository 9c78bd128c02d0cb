//! Agents Page

use leptos::prelude::*;

use diway_core::content::AGENTS;

#[component]
pub fn AgentsPage() -> impl IntoView {
    view! {
        <div class="agents">
            <h1>"Role-scoped agents"</h1>
            <p class="subtitle">
                "One AI loop, three conversations: each role sees its own risks and actions."
            </p>

            <div class="agent-grid">
                {AGENTS
                    .iter()
                    .map(|agent| {
                        view! {
                            <div class="agent-card">
                                <h2>{agent.name}</h2>
                                <p>{agent.focus}</p>
                                <p class="sample">"Try: "{agent.sample_question}</p>
                                <a href="/chat" class="btn">"Ask in chat"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
