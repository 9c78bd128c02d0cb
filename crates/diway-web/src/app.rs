//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use diway_core::content;

use crate::pages::{AgentsPage, ChatPage, DeckPage, HomePage, RoadmapPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <header class="site-header">
                <a href="/" class="brand">
                    <strong>{content::PRODUCT_NAME}</strong>
                    <p>{content::PRODUCT_TAGLINE}</p>
                </a>
                <nav class="site-nav">
                    <a href="/deck">"Deck"</a>
                    <a href="/agents">"Agents"</a>
                    <a href="/roadmap">"Roadmap"</a>
                    <a href="/chat">"Ask the AI"</a>
                </nav>
            </header>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/deck") view=DeckPage />
                    <Route path=path!("/agents") view=AgentsPage />
                    <Route path=path!("/roadmap") view=RoadmapPage />
                    <Route path=path!("/chat") view=ChatPage />
                </Routes>
            </main>
        </Router>
    }
}
