//! FAQ accordion.

use leptos::prelude::*;

use crate::state::chrome::Accordion;

#[derive(Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Accordion over `entries`; at most one answer is expanded.
#[component]
pub fn Faq(entries: &'static [FaqEntry]) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <div class="faq">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="faq-item" class:active=open>
                            <button
                                class="faq-question"
                                aria-expanded=move || open().to_string()
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                            >
                                <span>{entry.question}</span>
                                <span class="faq-question__icon" aria-hidden="true">
                                    {move || if open() { "−" } else { "+" }}
                                </span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
