use yew::prelude::*;
use web_sys::MouseEvent;

use crate::data::FaqEntry;

/// At most one item is open. Toggling the open item closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            {
                for props.items.iter().enumerate().map(|(index, item)| {
                    let is_open = accordion.is_open(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggle(index));
                        })
                    };
                    html! {
                        <div class="faq-item">
                            <button class={classes!("faq-question", is_open.then(|| "active"))} onclick={toggle}>
                                <span class="question-text">{item.question}</span>
                                <i class={if is_open { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                            </button>
                            <div class={classes!("faq-answer", is_open.then(|| "active"))}>
                                <p>{item.answer}</p>
                            </div>
                        </div>
                    }
                })
            }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(255, 255, 255, 0.25);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }
                .faq-answer.active {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }
                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_closes_the_item() {
        let accordion = Accordion::default().toggle(2);
        assert!(accordion.is_open(2));
        let accordion = accordion.toggle(2);
        assert!(!accordion.is_open(2));
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let accordion = Accordion::default().toggle(0).toggle(3);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(3));
        assert_eq!((0..6).filter(|i| accordion.is_open(*i)).count(), 1);
    }

    #[test]
    fn nothing_open_by_default() {
        let accordion = Accordion::default();
        assert!((0..6).all(|i| !accordion.is_open(i)));
    }
}
