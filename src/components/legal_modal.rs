use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::pages::termsprivacy::{LegalDoc, PrivacyPolicy, TermsAndConditions};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub doc: LegalDoc,
    pub on_close: Callback<()>,
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    let class = use_memo(|_| styles::scoped(styles::LEGAL_MODAL), ());

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={(*class).clone()} onclick={close.clone()}>
            <div
                class="legal-dialog"
                role="dialog"
                aria-modal="true"
                aria-label={props.doc.title()}
                onclick={keep_open}
            >
                <button class="legal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                {
                    match props.doc {
                        LegalDoc::Privacy => html! { <PrivacyPolicy /> },
                        LegalDoc::Terms => html! { <TermsAndConditions /> },
                    }
                }
            </div>
        </div>
    }
}
