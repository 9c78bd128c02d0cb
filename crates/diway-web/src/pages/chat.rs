//! Chat Page
//!
//! The pitch chat widget plus the persisted question log panel: per-tag
//! badges, the newest questions and the JSON export button.

use chrono::Utc;
use leptos::prelude::*;
use std::collections::HashMap;

use diway_core::{
    ChatMessage, IntentTag, QuestionJournal, Transcript, content, export_file_name,
};

use crate::components::{LogEntry, MessageBubble};
use crate::storage::{self, LocalStorageStore};

/// Rows shown in the log panel before it cuts off
const LOG_PREVIEW_LEN: usize = 7;

#[component]
pub fn ChatPage() -> impl IntoView {
    let journal = StoredValue::new(QuestionJournal::load(LocalStorageStore::new()));

    let (messages, set_messages) = signal(Transcript::seeded().messages().to_vec());
    let (input, set_input) = signal(String::new());
    let (log, set_log) = signal(journal.with_value(|j| j.log().records().to_vec()));

    let send = move || {
        let question = input.get();

        let append_result = journal
            .try_update_value(|j| j.append(&question))
            .expect("journal stored value is live");
        match append_result {
            Ok(Some(appended)) => {
                set_messages.update(|msgs| {
                    msgs.push(ChatMessage::user(appended.record.text.clone()));
                    msgs.push(ChatMessage::assistant(appended.answer));
                });
                set_log.set(journal.with_value(|j| j.log().records().to_vec()));
                set_input.set(String::new());
            }
            // Blank input: defined no-op, nothing was written.
            Ok(None) => {}
            Err(err) => {
                leptos::logging::error!("question append failed: {err}");
                set_messages
                    .update(|msgs| msgs.push(ChatMessage::assistant(err.user_message())));
            }
        }
    };

    let export = move |_| {
        let payload = journal.with_value(QuestionJournal::export_payload);
        match payload {
            Ok(payload) => {
                let file_name = export_file_name(Utc::now().date_naive());
                if let Err(err) = storage::download_json(&file_name, &payload) {
                    leptos::logging::error!("export failed: {err}");
                }
            }
            Err(err) => leptos::logging::error!("export failed: {err}"),
        }
    };

    // Recomputed from the rendered log on demand; sorted for stable display.
    let stats = move || {
        let mut counts: Vec<(IntentTag, usize)> = log.with(|records| {
            let mut map: HashMap<IntentTag, usize> = HashMap::new();
            for record in records {
                *map.entry(record.tag).or_insert(0) += 1;
            }
            map.into_iter().collect()
        });
        counts.sort_by_key(|(tag, _)| tag.label());
        counts
    };

    view! {
        <div class="chat">
            <section class="chat-card">
                <h2>"AI chat for the developer"</h2>

                <div class="messages">
                    <For
                        each=move || messages.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=move |(_, message)| view! { <MessageBubble message=message /> }
                    />
                </div>

                <div class="input-area">
                    <textarea
                        placeholder=content::CHAT_PLACEHOLDER
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send();
                            }
                        }
                    />
                    <button on:click=move |_| send()>"Send"</button>
                </div>
            </section>

            <section class="log-card">
                <h2>"Questions and ideas backlog"</h2>

                <div class="log-top">
                    <p>"Saved questions: "<strong>{move || log.with(Vec::len)}</strong></p>
                    <button
                        class="btn-secondary"
                        on:click=export
                        disabled=move || log.with(Vec::is_empty)
                    >
                        "Export JSON"
                    </button>
                </div>

                <div class="tags-row">
                    <Show
                        when=move || !log.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <span class="placeholder-text">
                                    "Questions appear after the first chat exchange."
                                </span>
                            }
                        }
                    >
                        {move || {
                            stats()
                                .into_iter()
                                .map(|(tag, count)| {
                                    view! { <span class="badge">{tag.label()}": "{count}</span> }
                                })
                                .collect_view()
                        }}
                    </Show>
                </div>

                <div class="log-list">
                    <For
                        each=move || log.get().into_iter().take(LOG_PREVIEW_LEN)
                        key=|record| record.id.clone()
                        children=move |record| view! { <LogEntry record=record /> }
                    />
                </div>
            </section>
        </div>
    }
}
