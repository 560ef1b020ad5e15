use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::assessment::analysis::{AnalysisClient, AnalysisResponse};
use crate::assessment::flow::{AssessmentFlow, FlowAction, InFlight, SubmissionState};
use crate::assessment::form::{LeadField, BUDGET_OPTIONS};
use crate::assessment::gemini::GeminiBackend;
use crate::components::neural_brain::NeuralBrain;
use crate::components::section_wrapper::SectionWrapper;
use crate::config;
use crate::scheduling::{redirect, BrowserSchedulingHost};

#[function_component(StrategySession)]
pub fn strategy_session() -> Html {
    html! {
        <SectionWrapper id="strategy" class="section strategy-section">
            <div class="container strategy-grid">
                <div>
                    <h2 class="section-title italic">{"Secure Your Strategy Session."}</h2>
                    <p class="muted strategy-lede">
                        {"Tell us about your current bottlenecks. If there is a strategic fit, we will schedule a deep-dive call to map out your custom infrastructure."}
                    </p>

                    <div class="panel partner-profile">
                        <h4 class="eyebrow">{"Typical Partner Profile"}</h4>
                        <ul class="check-list">
                            <li><span>{"✔"}</span>{" 150+ active members"}</li>
                            <li><span>{"✔"}</span>{" Existing CRM/Billing in place"}</li>
                            <li><span>{"✔"}</span>{" Ready to automate manual friction"}</li>
                        </ul>
                    </div>

                    <div class="panel gradient-panel">
                        <h4>{"Our Workflow"}</h4>
                        <p class="faint small">
                            {"Once you submit your assessment, our neural engine analyzes the data and provides immediate strategic insights. The next step is a 1-on-1 engineering audit to map your future stack."}
                        </p>
                    </div>
                </div>

                <div class="assessment-card">
                    <h3>{"Bottleneck Assessment"}</h3>
                    <Assessment />
                </div>
            </div>
        </SectionWrapper>
    }
}

#[function_component(Assessment)]
fn assessment() -> Html {
    let flow = use_reducer(AssessmentFlow::default);
    let in_flight = use_state(InFlight::default);
    let client = use_memo(
        |_| AnalysisClient::new(GeminiBackend::from_config(), config::GEMINI_MODEL),
        (),
    );

    let onsubmit = {
        let flow = flow.clone();
        let in_flight = (*in_flight).clone();
        let client = client.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !flow.can_submit() {
                return;
            }
            let Some(ticket) = in_flight.try_acquire() else {
                return;
            };

            let snapshot = flow.form.clone();
            flow.dispatch(FlowAction::Submit);

            let dispatcher = flow.dispatcher();
            let client = client.clone();
            spawn_local(async move {
                info!("Requesting bottleneck analysis");
                let result = client.analyze(&snapshot).await;
                match &result {
                    Ok(report) => info!("Analysis ready with {} insights", report.strategic_insights.len()),
                    Err(e) => error!("Gemini analysis error: {}", e),
                }
                // release first: the dispatch below renders synchronously
                drop(ticket);
                dispatcher.dispatch(FlowAction::Resolve(result));
            });
        })
    };

    let on_book = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            redirect(&BrowserSchedulingHost, &flow.form);
            flow.dispatch(FlowAction::BookingOpened);
        })
    };

    let on_reset = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.dispatch(FlowAction::Reset))
    };

    // the latch can lead the reducer by a render
    let busy = flow.is_submitting() || in_flight.is_active();

    match flow.report() {
        Some(report) => render_report(report, flow.booking_opened, on_book, on_reset),
        None => render_form(&flow, busy, onsubmit),
    }
}

struct TextInput {
    field: LeadField,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
}

const NAME_INPUT: TextInput = TextInput {
    field: LeadField::FullName,
    id: "lead-name",
    label: "Full Name",
    kind: "text",
    placeholder: "e.g. Alex Rivera",
};

const EMAIL_INPUT: TextInput = TextInput {
    field: LeadField::Email,
    id: "lead-email",
    label: "Email Address",
    kind: "email",
    placeholder: "alex@fitnesshub.com",
};

const PHONE_INPUT: TextInput = TextInput {
    field: LeadField::Phone,
    id: "lead-phone",
    label: "Phone Number",
    kind: "tel",
    placeholder: "+1 (555) 000-0000",
};

fn render_text_input(flow: &UseReducerHandle<AssessmentFlow>, input: &TextInput, busy: bool) -> Html {
    let oninput = {
        let flow = flow.clone();
        let field = input.field;
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            flow.dispatch(FlowAction::Edit(field, element.value()));
        })
    };

    html! {
        <div class="field">
            <label for={input.id}>{input.label}</label>
            <input
                id={input.id}
                type={input.kind}
                required=true
                readonly={busy}
                placeholder={input.placeholder}
                value={flow.form.field(input.field).to_string()}
                {oninput}
            />
        </div>
    }
}

fn render_form(
    flow: &UseReducerHandle<AssessmentFlow>,
    busy: bool,
    onsubmit: Callback<SubmitEvent>,
) -> Html {
    let budget = flow.form.field(LeadField::Budget);

    let on_budget = {
        let flow = flow.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            flow.dispatch(FlowAction::Edit(LeadField::Budget, select.value()));
        })
    };
    let on_bottlenecks = {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            flow.dispatch(FlowAction::Edit(LeadField::Bottlenecks, area.value()));
        })
    };

    html! {
        <form class="assessment-form" {onsubmit}>
            if flow.state == SubmissionState::Failed {
                <div class="assessment-notice" role="alert">
                    {"Our analysis engine couldn't produce a report just now. Your answers are still here, please try again."}
                </div>
            }
            <div class="field-row">
                { render_text_input(flow, &NAME_INPUT, busy) }
                { render_text_input(flow, &EMAIL_INPUT, busy) }
            </div>
            <div class="field-row">
                { render_text_input(flow, &PHONE_INPUT, busy) }
                <div class="field">
                    <label for="lead-budget">{"Monthly Budget Range"}</label>
                    <select id="lead-budget" required=true disabled={busy} onchange={on_budget}>
                        <option value="" selected={budget.is_empty()}>{"Select range..."}</option>
                        { for BUDGET_OPTIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={budget == *value}>{*label}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="field">
                <label for="lead-bottlenecks">{"Main Business Bottlenecks"}</label>
                <textarea
                    id="lead-bottlenecks"
                    rows="4"
                    required=true
                    readonly={busy}
                    placeholder="Where is your team spending most of their manual time?"
                    value={flow.form.field(LeadField::Bottlenecks).to_string()}
                    oninput={on_bottlenecks}
                />
            </div>
            <button type="submit" class="btn btn-indigo btn-block" disabled={busy}>
                { if busy { "Engine Analyzing..." } else { "Generate Neural Insight Report" } }
            </button>
        </form>
    }
}

fn render_report(
    report: &AnalysisResponse,
    booking_opened: bool,
    on_book: Callback<MouseEvent>,
    on_reset: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="report fade-in-up">
            <div class="report-card">
                <div class="report-heading">
                    <NeuralBrain class={classes!("brain-sm")} />
                    <span class="eyebrow indigo">{"HyzaLabs Intelligence Report"}</span>
                </div>
                <ul class="insight-list">
                    { for report.strategic_insights.iter().map(|insight| html! {
                        <li><span class="bullet">{"•"}</span>{insight}</li>
                    }) }
                </ul>
                <div class="report-focus">
                    <p class="eyebrow">{"Primary Infrastructure Focus:"}</p>
                    <p class="focus-text">{format!("\"{}\"", report.recommended_focus)}</p>
                </div>
            </div>

            <div class="report-actions">
                <h4>{"Analysis Complete."}</h4>
                <p class="faint small">{"Based on your report, we recommend immediate technical auditing."}</p>
                <button class="btn btn-white btn-block" onclick={on_book}>
                    { if booking_opened { "Booking Page Opened" } else { "Access Strategy Calendar" } }
                </button>
                <button class="link-button" onclick={on_reset}>{"Redo Assessment"}</button>
            </div>
        </div>
    }
}
