use crate::components::alert::{AlertDialog, AlertMessage};
use crate::models::{Flashcard, QuizState};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn FlashcardQuizScreen() -> Element {
    let mut quiz = use_signal(QuizState::new);
    let mut alert = use_signal(|| None::<AlertMessage>);

    let on_add_card = move |_| {
        let card = quiz.write().add_random_card();
        log::debug!("Added flashcard {}", card.id);
        alert.set(Some(AlertMessage::new(
            t!("quiz-card-added-title"),
            t!("quiz-card-added-message", question: card.question),
        )));
    };

    let mut on_reset = move || {
        quiz.write().reset();
        alert.set(Some(AlertMessage::new(
            t!("quiz-reset-title"),
            t!("quiz-reset-message"),
        )));
    };

    let state = quiz();
    let learned = state.learned_count();
    let total = state.total();
    let percentage = state.percentage().round();

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F5F5FF;",
            // Progress header
            div { style: "background: #6C63FF; color: white; padding: 20px 16px;",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { style: "margin: 0; font-size: 22px;", "🧠 "
                        {t!("quiz-title")}
                    }
                    button {
                        style: "padding: 6px 12px; background: rgba(255,255,255,0.2); color: white; border: none; border-radius: 8px; font-size: 14px;",
                        onclick: move |_| on_reset(),
                        "🔄"
                    }
                }
                p { style: "margin: 8px 0 6px 0; font-size: 14px;",
                    {t!("quiz-progress", learned: learned, total: total)}
                    " ({percentage}%)"
                }
                div { style: "height: 8px; background: rgba(255,255,255,0.3); border-radius: 4px; overflow: hidden;",
                    div { style: "height: 100%; width: {percentage}%; background: #FFD166;" }
                }
            }

            div { style: "padding: 16px;",
                button {
                    style: "width: 100%; padding: 12px; margin-bottom: 16px; background: #6C63FF; color: white; border: none; border-radius: 10px; font-size: 16px;",
                    onclick: on_add_card,
                    "✨ "
                    {t!("quiz-add-card")}
                }

                if state.is_complete() {
                    div { style: "text-align: center; padding: 48px 16px;",
                        p { style: "font-size: 56px; margin: 0;", "🎉" }
                        h3 { style: "margin: 12px 0 4px 0; color: #333;", {t!("quiz-complete-title")} }
                        p { style: "color: #666;", {t!("quiz-complete-message")} }
                        button {
                            style: "margin-top: 12px; padding: 12px 24px; background: #6C63FF; color: white; border: none; border-radius: 24px; font-size: 16px;",
                            onclick: move |_| on_reset(),
                            {t!("quiz-start-new")}
                        }
                    }
                } else {
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        for card in state.cards.iter() {
                            FlashcardView {
                                key: "{card.id}",
                                card: card.clone(),
                                on_learned: move |id: String| quiz.write().swipe_away(&id),
                                on_remove: move |id: String| quiz.write().remove(&id),
                            }
                        }
                    }
                    p { style: "text-align: center; color: #888; font-size: 13px; margin: 16px 0 32px 0;",
                        {t!("quiz-remaining", count: state.cards.len())}
                    }
                }
            }

            if let Some(message) = alert() {
                AlertDialog { alert: message, on_dismiss: move |_| alert.set(None) }
            }
        }
    }
}

/// A single card that flips between question and answer
#[component]
fn FlashcardView(card: Flashcard, on_learned: EventHandler<String>, on_remove: EventHandler<String>) -> Element {
    let mut flipped = use_signal(|| false);
    let learned_id = card.id.clone();
    let remove_id = card.id.clone();

    rsx! {
        div {
            style: if flipped() { "background: #FFF8E7; border-radius: 14px; padding: 20px; min-height: 120px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); cursor: pointer;" } else { "background: white; border-radius: 14px; padding: 20px; min-height: 120px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); cursor: pointer;" },
            onclick: move |_| flipped.toggle(),
            div { style: "font-size: 12px; color: #6C63FF; font-weight: 600; margin-bottom: 8px;",
                if flipped() { "💡 Answer" } else { "❓ Question" }
            }
            p { style: "margin: 0; font-size: 17px; color: #222; line-height: 1.4;",
                if flipped() { "{card.answer}" } else { "{card.question}" }
            }
            div { style: "display: flex; gap: 8px; margin-top: 16px;",
                button {
                    style: "flex: 1; padding: 8px; background: #22C55E; color: white; border: none; border-radius: 8px; font-size: 14px;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_learned.call(learned_id.clone());
                    },
                    "✓ Learned"
                }
                button {
                    style: "padding: 8px 12px; background: #FEE2E2; color: #EF4444; border: none; border-radius: 8px; font-size: 14px;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_remove.call(remove_id.clone());
                    },
                    "🗑️"
                }
            }
        }
    }
}
