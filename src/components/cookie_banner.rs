use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub on_accept: Callback<()>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let class = use_memo(|_| styles::scoped(styles::COOKIE_BANNER), ());

    let accept = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };

    html! {
        <div class={(*class).clone()} role="dialog" aria-live="polite" aria-label="Cookie consent">
            <p>
                {"We use essential cookies and local storage to run this site and remember your preferences. See our "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                {"."}
            </p>
            <button onclick={accept}>{"Accept"}</button>
        </div>
    }
}
