use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NeuralBrainProps {
    #[prop_or(classes!("brain-md"))]
    pub class: Classes,
}

#[function_component(NeuralBrain)]
pub fn neural_brain(props: &NeuralBrainProps) -> Html {
    html! {
        <div class={classes!("neural-brain", props.class.clone())}>
            <svg viewBox="0 0 100 100" class="neural-brain-svg">
                <defs>
                    <linearGradient id="brainGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#6366f1" />
                        <stop offset="100%" stop-color="#a855f7" />
                    </linearGradient>
                </defs>

                <path
                    d="M50 20 C30 20 15 35 15 55 C15 75 30 85 50 85 C70 85 85 75 85 55 C85 35 70 20 50 20 Z"
                    fill="none"
                    stroke="url(#brainGradient)"
                    stroke-width="2.5"
                    class="pulse"
                />
                <path
                    d="M35 40 Q50 30 65 40 M30 55 Q50 45 70 55 M35 70 Q50 80 65 70"
                    fill="none"
                    stroke="url(#brainGradient)"
                    stroke-width="1.5"
                    stroke-opacity="0.6"
                />

                <circle cx="50" cy="55" r="4" fill="url(#brainGradient)">
                    <animate attributeName="r" values="3;5;3" dur="3s" repeatCount="indefinite" />
                    <animate attributeName="opacity" values="0.4;1;0.4" dur="3s" repeatCount="indefinite" />
                </circle>

                <circle cx="25" cy="50" r="1.5" fill="#a855f7" class="bounce" style="animation-delay: 0.2s;" />
                <circle cx="75" cy="50" r="1.5" fill="#6366f1" class="bounce" style="animation-delay: 0.5s;" />
                <circle cx="50" cy="30" r="1.5" fill="#a855f7" class="bounce" style="animation-delay: 0.8s;" />
            </svg>
        </div>
    }
}
