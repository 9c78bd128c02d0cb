//! UI Components

use chrono::Local;
use leptos::prelude::*;

use diway_core::{ChatMessage, QuestionRecord};

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <span class="role">{message.role.to_string()}</span>
            <p class="content">{message.text}</p>
        </div>
    }
}

/// One row of the question log panel
#[component]
pub fn LogEntry(record: QuestionRecord) -> impl IntoView {
    // Timestamps persist in UTC; rendering localizes them.
    let stamp = record
        .created_at
        .with_timezone(&Local)
        .format("%d.%m.%Y %H:%M")
        .to_string();

    view! {
        <article class="log-item">
            <p>{record.text}</p>
            <div class="log-meta">
                <span class="badge">{record.tag.label()}</span>
                <span class="stamp">{stamp}</span>
            </div>
        </article>
    }
}
