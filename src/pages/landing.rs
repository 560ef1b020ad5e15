use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background_particles::BackgroundParticles;
use crate::components::legal_modal::LegalModal;
use crate::components::neural_brain::NeuralBrain;
use crate::components::section_wrapper::SectionWrapper;
use crate::pages::strategy::StrategySession;
use crate::pages::termsprivacy::LegalDoc;
use crate::{section_link, Route};

const GAPS: &[(&str, &str)] = &[
    ("Failed Payment Leakage", "Automated recovery sequences that actually understand member intent."),
    ("Churn Blind Spots", "Predictive intelligence identifying at-risk members before they cancel."),
    ("Manual Admin Overload", "Offloading low-value repetitive tasks to intelligent neural agents."),
    ("Underutilized Data", "Turning your raw member data into actionable strategic insights."),
];

const SOLUTIONS: &[(&str, &str)] = &[
    ("Custom AI Workflows", "Intelligent agents that handle inquiries, lead qualifying, and member follow-ups with human-like nuance."),
    ("Automation Systems", "Cross-platform bridges that sync your CRM, billing, and access control without human intervention."),
    ("Intelligence Dashboards", "Real-time visibility into operational health, LTV metrics, and performance forecast models."),
    ("Process Optimization", "Mapping your business logic into code to ensure every lead is handled with perfection."),
    ("Neural Support Agents", "24/7 intelligent member support that handles 80% of routine technical or account questions."),
    ("Infrastructure Scaling", "Systems that allow you to double your member count without doubling your administrative staff."),
];

const SAAS_POINTS: &[&str] = &[
    "Rigid features you can't change",
    "High monthly fees per user/member",
    "Siloed data that doesn't talk to other tools",
    "Generic support that doesn't know your gym",
];

const CUSTOM_POINTS: &[&str] = &[
    "100% tailored to your specific logic",
    "One-time build or partner model",
    "Deep integration with your existing stack",
    "Dedicated strategic engineering support",
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub legal: Option<LegalDoc>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let navigator = use_navigator();

    let close_legal = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="landing-page">
            <BackgroundParticles />

            <SectionWrapper id="hero" class="hero">
                <div class="container narrow center">
                    <div class="hero-badge">{"Strategic Fitness Infrastructure"}</div>
                    <h1 class="hero-title">
                        {"Build Once. "}
                        <span class="gradient-text italic">{"Scaled Automatically."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"HyzaLabs builds custom AI systems and automation infrastructure designed around your specific operational bottlenecks."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#strategy" onclick={section_link("strategy")} class="btn btn-white">
                            {"Request a Strategy Session"}
                        </a>
                        <a href="#gaps" onclick={section_link("gaps")} class="btn btn-ghost">
                            {"Explore Our Approach"}
                        </a>
                    </div>
                </div>
            </SectionWrapper>

            <SectionWrapper id="gaps" class="section">
                <div class="container two-col">
                    <div>
                        <h2 class="section-title">{"The Hidden Operational Gaps in Modern Gyms"}</h2>
                        <p class="muted lede">
                            {"Standard software works for everyone, which means it doesn't truly optimize for anyone. We identify the friction points you've learned to tolerate."}
                        </p>
                        <ul class="gap-list">
                            { for GAPS.iter().map(|(title, desc)| html! {
                                <li class="gap-item">
                                    <div class="gap-marker"><div class="gap-dot"></div></div>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p class="faint small">{*desc}</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="gap-visual">
                        <div class="gap-visual-glow"></div>
                        <div class="panel gap-visual-card">
                            <div class="skeleton-bar w-two-thirds"></div>
                            <div class="skeleton-bar w-full"></div>
                            <div class="skeleton-bar w-half accent"></div>
                            <div class="skeleton-bar w-five-sixths"></div>
                            <div class="stat-grid">
                                <div class="stat">
                                    <span class="stat-value indigo">{"14%"}</span>
                                    <span class="stat-label">{"Avg. Rev Leakage"}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat-value purple">{"30h+"}</span>
                                    <span class="stat-label">{"Weekly Manual Ops"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </SectionWrapper>

            <SectionWrapper id="solutions" class="section section-band">
                <div class="container">
                    <div class="center section-header">
                        <h2 class="section-title large italic">{"What We Actually Build"}</h2>
                        <p class="faint narrow-text">
                            {"We don't sell software licenses. We build custom-engineered solutions that integrate with your existing tech stack."}
                        </p>
                    </div>
                    <div class="solution-grid">
                        { for SOLUTIONS.iter().map(|(title, desc)| html! {
                            <div class="solution-card">
                                <div class="solution-icon"><div class="solution-dot"></div></div>
                                <h3>{*title}</h3>
                                <p class="faint small">{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </SectionWrapper>

            <SectionWrapper id="comparison" class="section">
                <div class="container narrow center">
                    <h2 class="section-title">{"Why Generic Software Falls Short"}</h2>
                    <div class="comparison-grid">
                        <div class="comparison-card">
                            <h4 class="indigo">{"SaaS Platforms"}</h4>
                            <ul class="muted">
                                { for SAAS_POINTS.iter().map(|point| html! { <li>{format!("• {}", point)}</li> }) }
                            </ul>
                        </div>
                        <div class="comparison-card highlighted">
                            <h4 class="indigo">{"HyzaLabs Custom Infrastructure"}</h4>
                            <ul>
                                { for CUSTOM_POINTS.iter().map(|point| html! { <li>{format!("• {}", point)}</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </SectionWrapper>

            <SectionWrapper id="partnership" class="section">
                <div class="container narrow">
                    <div class="partnership-card center">
                        <h2 class="section-title">{"Early Partner Invitation"}</h2>
                        <p class="muted">
                            {"We are not a mass-market software vendor. We only take on 2 new fitness partners per month to ensure deep strategic integration and flawless engineering. This is a selective onboarding process designed for gym owners ready for mature infrastructure."}
                        </p>
                        <div class="partnership-stats">
                            <div class="partnership-stat">
                                <span class="partnership-value">{"1/2"}</span>
                                <span>{"Available Slots"}</span>
                            </div>
                            <div class="divider"></div>
                            <div class="partnership-stat">
                                <span class="partnership-value">{"14d"}</span>
                                <span>{"Avg. Setup Time"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </SectionWrapper>

            <StrategySession />

            <Footer />

            if let Some(doc) = props.legal {
                <LegalModal {doc} on_close={close_legal} />
            }
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="brand">
                    <NeuralBrain class={classes!("brain-sm")} />
                    <span class="brand-name small-brand">{"HyzaLabs"}</span>
                </div>
                <div class="footer-links">
                    <span>{format!("© {} HyzaLabs Infrastructure", year)}</span>
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <a href="/assets/hyzalabs-logo.svg" download="hyzalabs-logo.svg">{"Logo"}</a>
                </div>
                <div class="footer-tagline">{"Engineered for the elite fitness industry."}</div>
            </div>
        </footer>
    }
}
