use std::rc::Rc;

use gloo::console;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::icon_view;
use crate::error::NoteStoreError;
use crate::icons::Icon;
use crate::notes::{NoteEditorState, NoteKey, NoteMode, NoteStoreHandle};

enum NoteAction {
    Begin,
    Input(String),
    Commit,
    Delete,
}

/// Editor state plus the store it persists into; store calls happen in `reduce`
/// so they always see the latest draft.
struct NoteCell {
    state: NoteEditorState,
    store: NoteStoreHandle,
}

impl Reducible for NoteCell {
    type Action = NoteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        let result = match action {
            NoteAction::Begin => {
                state.begin_edit();
                Ok(())
            }
            NoteAction::Input(text) => {
                state.set_draft(text);
                Ok(())
            }
            NoteAction::Commit => state.commit(&*self.store),
            NoteAction::Delete => state.delete(&*self.store),
        };
        if let Err(err) = result {
            log_store_failure(state.key(), &err);
        }

        Rc::new(NoteCell {
            state,
            store: self.store.clone(),
        })
    }
}

fn log_store_failure(key: &NoteKey, err: &NoteStoreError) {
    console::warn!(format!("notes: {key} was not persisted: {err}"));
}

#[derive(Properties, PartialEq)]
pub struct NoteEditorProps {
    pub note_key: NoteKey,
}

#[function_component(NoteEditor)]
pub fn note_editor(props: &NoteEditorProps) -> Html {
    // Without a provided store notes still work, they just do not survive a reload.
    let fallback = use_state(NoteStoreHandle::memory);
    let store = use_context::<NoteStoreHandle>().unwrap_or_else(|| (*fallback).clone());

    let cell = {
        let note_key = props.note_key.clone();
        use_reducer(move || NoteCell {
            state: NoteEditorState::load(note_key, &*store),
            store,
        })
    };
    let textarea_ref = use_node_ref();

    let mode = cell.state.mode();

    {
        let textarea_ref = textarea_ref.clone();
        use_effect_with(mode == NoteMode::Editing, move |editing| {
            if *editing {
                if let Some(el) = textarea_ref.cast::<HtmlTextAreaElement>() {
                    let _ = el.focus();
                }
            }
            || ()
        });
    }

    let on_begin = {
        let cell = cell.clone();
        Callback::from(move |_: MouseEvent| cell.dispatch(NoteAction::Begin))
    };

    let on_key_begin = {
        let cell = cell.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cell.dispatch(NoteAction::Begin);
            }
        })
    };

    match mode {
        NoteMode::Editing => {
            let on_input = {
                let cell = cell.clone();
                Callback::from(move |e: InputEvent| {
                    let v = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    cell.dispatch(NoteAction::Input(v));
                })
            };
            let on_blur = {
                let cell = cell.clone();
                Callback::from(move |_: FocusEvent| cell.dispatch(NoteAction::Commit))
            };
            let on_done = {
                let cell = cell.clone();
                Callback::from(move |_: MouseEvent| cell.dispatch(NoteAction::Commit))
            };
            let on_delete = {
                let cell = cell.clone();
                Callback::from(move |_: MouseEvent| cell.dispatch(NoteAction::Delete))
            };
            // Keeps focus in the textarea so its blur does not commit before the click lands.
            let hold_focus = Callback::from(|e: MouseEvent| e.prevent_default());

            html! {
              <div class="note editing">
                <div class="note-bar">
                  <p class="note-label accent">{ icon_view(Icon::Edit) }{ "編輯筆記" }</p>
                  <div class="note-actions">
                    <button
                        class="note-btn delete"
                        title="刪除筆記"
                        onmousedown={hold_focus.clone()}
                        onclick={on_delete}
                    >
                      { icon_view(Icon::Trash) }
                    </button>
                    <button class="note-btn done" onmousedown={hold_focus} onclick={on_done}>
                      { icon_view(Icon::Check) }{ "完成" }
                    </button>
                  </div>
                </div>
                <textarea
                    ref={textarea_ref}
                    class="note-input"
                    placeholder="在這裡輸入..."
                    value={cell.state.draft().to_string()}
                    oninput={on_input}
                    onblur={on_blur}
                />
              </div>
            }
        }
        NoteMode::Display => html! {
          <div
              class="note display"
              role="button"
              tabindex="0"
              title="編輯筆記"
              onclick={on_begin}
              onkeydown={on_key_begin}
          >
            <div class="note-box">
              <p class="note-label">{ icon_view(Icon::Edit) }{ "私人筆記" }</p>
              <p class="note-text">{ cell.state.text().to_string() }</p>
            </div>
          </div>
        },
        NoteMode::Silent => html! {
          <div class="note silent">
            <button class="note-add" onclick={on_begin}>
              { icon_view(Icon::Plus) }{ "新增筆記" }
            </button>
          </div>
        },
    }
}
