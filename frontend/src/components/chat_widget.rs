use yew::prelude::*;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

use crate::chat::{ChatEffect, ChatSession, ChatStep, Submission, Ticket};
use crate::config;
use crate::data::SITE;
use crate::webhook::{self, WebhookPayload};

pub enum ChatWidgetMsg {
    Open,
    Close,
    SetInput(String),
    Send,
    Delivered(Ticket, Result<(), webhook::WebhookError>),
    Reset,
}

pub struct ChatWidget {
    open: bool,
    input: String,
    session: ChatSession,
    messages_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            session: ChatSession::new(),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Open => {
                self.open = true;
                true
            }
            ChatWidgetMsg::Close => {
                self.open = false;
                true
            }
            ChatWidgetMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatWidgetMsg::Send => {
                let Some(effect) = self.session.submit(&self.input) else {
                    return false;
                };
                self.input.clear();

                if let ChatEffect::Submit(Submission { ticket, answers }) = effect {
                    let payload = WebhookPayload::single(answers.to_embed(webhook::now_timestamp()));
                    ctx.link().send_future(async move {
                        let outcome = webhook::send(config::chat_webhook_url(), &payload).await;
                        ChatWidgetMsg::Delivered(ticket, outcome)
                    });
                }
                true
            }
            ChatWidgetMsg::Delivered(ticket, outcome) => {
                if outcome.is_ok() {
                    gloo_console::log!("Support request delivered");
                }
                self.session.finish(ticket, outcome);
                true
            }
            ChatWidgetMsg::Reset => {
                // reset() retires the pending ticket, so a late reply is dropped by finish()
                self.session.reset();
                self.input.clear();
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(messages) = self.messages_ref.cast::<Element>() {
            messages.set_scroll_top(messages.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let accepts_input = self.session.accepts_input();

        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then(|| ChatWidgetMsg::Send)
        });
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });

        html! {
            <>
                <button class="floating-chat" onclick={link.callback(|_| ChatWidgetMsg::Open)} aria-label="Open support chat">
                    <img src="/favicon.ico" alt={format!("{} AI Chat", SITE.name)} width="40" height="40" />
                </button>

                <div class={classes!("chat-modal", self.open.then(|| "active"))}>
                    <div class="chat-container">
                        <div class="chat-header">
                            <h3>{format!("{} AI Support", SITE.name)}</h3>
                            <div class="chat-header-actions">
                                <button class="chat-reset" onclick={link.callback(|_| ChatWidgetMsg::Reset)} title="Start over">
                                    <i class="fas fa-redo"></i>
                                </button>
                                <button class="chat-close" onclick={link.callback(|_| ChatWidgetMsg::Close)}>
                                    {"×"}
                                </button>
                            </div>
                        </div>

                        <div class="chat-messages" ref={self.messages_ref.clone()}>
                            {
                                for self.session.transcript().iter().map(|message| html! {
                                    <div class={classes!("chat-message", message.sender.class())}>
                                        {&message.text}
                                    </div>
                                })
                            }
                            if self.session.step() == ChatStep::Submitting {
                                <div class="chat-message bot typing">
                                    <i class="fas fa-spinner fa-spin"></i>
                                </div>
                            }
                        </div>

                        if self.session.step() == ChatStep::Complete {
                            <div class="chat-input-container">
                                <button class="chat-send chat-restart" onclick={link.callback(|_| ChatWidgetMsg::Reset)}>
                                    {"Start a new request"}
                                </button>
                            </div>
                        } else {
                            <div class="chat-input-container">
                                <input
                                    type="text"
                                    class="chat-input"
                                    placeholder="Type your message..."
                                    value={self.input.clone()}
                                    {oninput}
                                    {onkeypress}
                                    disabled={!accepts_input}
                                />
                                <button
                                    class="chat-send"
                                    onclick={link.callback(|_| ChatWidgetMsg::Send)}
                                    disabled={!accepts_input}
                                >
                                    {"Send"}
                                </button>
                            </div>
                        }
                    </div>
                </div>
                <style>
                    {r#"
                    .floating-chat {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: #111;
                        box-shadow: 0 0 20px rgba(255, 255, 255, 0.15);
                        cursor: pointer;
                        z-index: 1100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .floating-chat img {
                        filter: brightness(0) invert(1);
                    }
                    .chat-modal {
                        position: fixed;
                        bottom: 7rem;
                        right: 2rem;
                        width: 360px;
                        max-width: calc(100vw - 2rem);
                        z-index: 1100;
                        opacity: 0;
                        pointer-events: none;
                        transform: translateY(20px);
                        transition: all 0.3s ease;
                    }
                    .chat-modal.active {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }
                    .chat-container {
                        background: rgba(15, 15, 15, 0.97);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        height: 480px;
                    }
                    .chat-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .chat-header h3 {
                        margin: 0;
                        color: #fff;
                    }
                    .chat-header-actions button {
                        background: none;
                        border: none;
                        color: #999;
                        font-size: 1.2rem;
                        cursor: pointer;
                        margin-left: 0.5rem;
                    }
                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .chat-message {
                        max-width: 80%;
                        padding: 0.6rem 0.9rem;
                        border-radius: 12px;
                        line-height: 1.4;
                        white-space: pre-wrap;
                    }
                    .chat-message.bot {
                        align-self: flex-start;
                        background: rgba(255, 255, 255, 0.08);
                        color: #ddd;
                    }
                    .chat-message.user {
                        align-self: flex-end;
                        background: #fff;
                        color: #000;
                    }
                    .chat-input-container {
                        display: flex;
                        gap: 0.5rem;
                        padding: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .chat-input {
                        flex: 1;
                        padding: 0.6rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: #0a0a0a;
                        color: #fff;
                    }
                    .chat-send {
                        padding: 0.6rem 1rem;
                        border-radius: 8px;
                        border: none;
                        background: #fff;
                        color: #000;
                        cursor: pointer;
                    }
                    .chat-send:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .chat-restart {
                        width: 100%;
                    }
                    "#}
                </style>
            </>
        }
    }
}
