use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms of Service",
        }
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <h2>{"Privacy Policy"}</h2>
            <p>{"This policy explains what HyzaLabs Infrastructure collects when you use this site and what happens to it."}</p>

            <h3>{"What we collect"}</h3>
            <p>{"When you fill in the Bottleneck Assessment we receive your name, email address, phone number, monthly budget range and the bottlenecks you describe. Nothing is collected until you submit the form."}</p>

            <h3>{"How it is processed"}</h3>
            <p>{"Your name, budget range and bottleneck description are sent to Google's Gemini API to generate your insight report. Your email and phone number are not part of that request. The report is shown in your browser only and is discarded when you leave or reload the page."}</p>
            <p>{"If you choose to book a strategy session, your name, email and bottleneck description are passed to Calendly to prefill the booking form. Calendly's own privacy policy applies from that point."}</p>

            <h3>{"Cookies and local storage"}</h3>
            <p>{"We store a single flag in your browser's local storage to remember that you accepted this notice. The Calendly widget may set its own cookies when opened."}</p>

            <h3>{"Your rights"}</h3>
            <p>{"You can ask us to delete any information you sent through a booked session at any time by replying to the booking confirmation email."}</p>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content">
            <h2>{"Terms of Service"}</h2>
            <p>{"By using this site you agree to the following terms."}</p>

            <h3>{"Insight reports"}</h3>
            <p>{"The Neural Insight Report is generated automatically by a third-party language model from the information you provide. It is a starting point for conversation, not professional, financial or legal advice, and may be incomplete or inaccurate."}</p>

            <h3>{"Strategy sessions"}</h3>
            <p>{"Requesting a session does not create an engagement. Partnerships are accepted at our discretion and are governed by a separate written agreement."}</p>

            <h3>{"Availability"}</h3>
            <p>{"The assessment depends on external services and may be unavailable at times. We make no guarantee of uptime for this site."}</p>

            <h3>{"Intellectual property"}</h3>
            <p>{"The HyzaLabs name, logo and site content belong to HyzaLabs Infrastructure. The logo may be downloaded for press and partner use."}</p>
        </div>
    }
}
