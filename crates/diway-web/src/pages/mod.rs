//! Page Components

mod agents;
mod chat;
mod deck;
mod home;
mod roadmap;

pub use agents::AgentsPage;
pub use chat::ChatPage;
pub use deck::DeckPage;
pub use home::HomePage;
pub use roadmap::RoadmapPage;
