use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionWrapperProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its section in the first time a tenth of it scrolls into view, and
/// stays visible after that.
#[function_component(SectionWrapper)]
pub fn section_wrapper(props: &SectionWrapperProps) -> Html {
    let is_visible = use_state(|| false);
    let node = use_node_ref();

    {
        let is_visible = is_visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let on_intersect = {
                    let is_visible = is_visible.clone();
                    Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                        let hit = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        if hit {
                            is_visible.set(true);
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                };

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from_f64(0.1));

                let observer = IntersectionObserver::new_with_options(
                    on_intersect.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                match (observer.as_ref(), node.cast::<Element>()) {
                    (Some(observer), Some(element)) => observer.observe(&element),
                    // no observer support: just show the content
                    _ => is_visible.set(true),
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!(
                "reveal-section",
                props.class.clone(),
                if *is_visible { "is-visible" } else { "is-hidden" }
            )}
        >
            { for props.children.iter() }
        </section>
    }
}
