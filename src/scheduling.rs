use log::{info, warn};
use serde::Serialize;
use urlencoding::encode;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::window;

use crate::assessment::form::LeadFormData;
use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Calendly, js_name = initPopupWidget)]
    fn init_popup_widget(options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchMode {
    Embedded,
    ExternalTab,
}

pub trait SchedulingHost {
    fn embedded_widget_available(&self) -> bool;
    fn open_popup(&self, url: &str) -> Result<(), String>;
    fn open_tab(&self, url: &str);
}

/// Prefilled Calendly link. `urlencoding::encode` leaves only `A-Za-z0-9-_.~`
/// alone, so spaces come out as `%20`; Calendly's prefill parser rejects `+`.
pub fn booking_url(base: &str, record: &LeadFormData) -> String {
    format!(
        "{}?name={}&email={}&a2={}",
        base,
        encode(&record.full_name),
        encode(&record.email),
        encode(&record.bottlenecks),
    )
}

pub fn redirect(host: &impl SchedulingHost, record: &LeadFormData) -> LaunchMode {
    let url = booking_url(config::CALENDLY_URL, record);

    if host.embedded_widget_available() {
        match host.open_popup(&url) {
            Ok(()) => {
                info!("Opened embedded scheduling popup");
                return LaunchMode::Embedded;
            }
            Err(e) => warn!("Scheduling popup failed, opening a tab instead: {}", e),
        }
    }

    host.open_tab(&url);
    info!("Opened scheduling page in a new tab");
    LaunchMode::ExternalTab
}

#[derive(Serialize)]
struct PopupOptions<'a> {
    url: &'a str,
}

/// Talks to the Calendly widget script loaded from `index.html`, when present.
pub struct BrowserSchedulingHost;

impl SchedulingHost for BrowserSchedulingHost {
    fn embedded_widget_available(&self) -> bool {
        window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str("Calendly")).ok())
            .map(|calendly| calendly.is_object())
            .unwrap_or(false)
    }

    fn open_popup(&self, url: &str) -> Result<(), String> {
        let options = serde_wasm_bindgen::to_value(&PopupOptions { url }).map_err(|e| e.to_string())?;
        init_popup_widget(&options).map_err(|e| format!("{:?}", e))
    }

    fn open_tab(&self, url: &str) {
        let Some(window) = window() else {
            warn!("No window to open the scheduling page in");
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("window.open failed: {:?}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    pub(crate) struct FakeHost {
        pub widget: bool,
        pub popup_fails: bool,
        pub popups: RefCell<Vec<String>>,
        pub tabs: RefCell<Vec<String>>,
    }

    impl FakeHost {
        pub(crate) fn without_widget() -> Self {
            Self {
                widget: false,
                popup_fails: false,
                popups: RefCell::new(Vec::new()),
                tabs: RefCell::new(Vec::new()),
            }
        }

        fn with_widget() -> Self {
            Self {
                widget: true,
                ..Self::without_widget()
            }
        }
    }

    impl SchedulingHost for FakeHost {
        fn embedded_widget_available(&self) -> bool {
            self.widget
        }

        fn open_popup(&self, url: &str) -> Result<(), String> {
            if self.popup_fails {
                return Err("Calendly.initPopupWidget is not a function".to_string());
            }
            self.popups.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn open_tab(&self, url: &str) {
            self.tabs.borrow_mut().push(url.to_string());
        }
    }

    fn lead(name: &str, email: &str, bottlenecks: &str) -> LeadFormData {
        LeadFormData {
            full_name: name.to_string(),
            email: email.to_string(),
            bottlenecks: bottlenecks.to_string(),
            ..Default::default()
        }
    }

    fn query_params(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (key.to_string(), urlencoding::decode(value).unwrap().into_owned())
            })
            .collect()
    }

    #[test]
    fn spaces_become_percent_twenty() {
        let url = booking_url(
            "https://calendly.com/x",
            &lead("Alex Rivera", "alex@x.com", "late payments"),
        );
        assert_eq!(
            url,
            "https://calendly.com/x?name=Alex%20Rivera&email=alex%40x.com&a2=late%20payments"
        );
        assert!(!url.contains('+'));
    }

    #[test]
    fn reserved_and_non_ascii_input_decodes_back() {
        let cases = [
            ("Zoë & Søren", "a+b@x.com", "100% of staff time & more = pain"),
            ("O'Brien #1", "x?y@z.io", "churn/retention; 50/50 split"),
            ("名前 テスト", "tést@例え.jp", "line one\nline two\ttab"),
            ("", "", ""),
        ];
        for (name, email, bottlenecks) in cases {
            let url = booking_url(config::CALENDLY_URL, &lead(name, email, bottlenecks));
            assert!(!url.contains(' '));
            assert_eq!(
                query_params(&url),
                vec![
                    ("name".to_string(), name.to_string()),
                    ("email".to_string(), email.to_string()),
                    ("a2".to_string(), bottlenecks.to_string()),
                ]
            );
        }
    }

    #[test]
    fn phone_and_budget_stay_out_of_the_link() {
        let mut record = lead("Alex", "alex@x.com", "payments");
        record.phone = "555-0000".to_string();
        record.budget = "$10k+".to_string();
        let url = booking_url(config::CALENDLY_URL, &record);
        assert!(!url.contains("555-0000"));
        assert!(!url.contains("10k"));
    }

    #[test]
    fn uses_the_widget_when_present() {
        let host = FakeHost::with_widget();
        let mode = redirect(&host, &lead("Alex Rivera", "alex@x.com", "late payments"));
        assert_eq!(mode, LaunchMode::Embedded);
        assert_eq!(host.popups.borrow().len(), 1);
        assert!(host.popups.borrow()[0].starts_with(config::CALENDLY_URL));
        assert!(host.tabs.borrow().is_empty());
    }

    #[test]
    fn falls_back_to_a_tab_without_the_widget() {
        let host = FakeHost::without_widget();
        let mode = redirect(&host, &lead("Alex Rivera", "alex@x.com", "late payments"));
        assert_eq!(mode, LaunchMode::ExternalTab);
        assert!(host.popups.borrow().is_empty());
        assert_eq!(host.tabs.borrow().len(), 1);
    }

    #[test]
    fn falls_back_to_a_tab_when_the_popup_throws() {
        let host = FakeHost {
            popup_fails: true,
            ..FakeHost::with_widget()
        };
        assert_eq!(redirect(&host, &lead("A", "a@b.c", "x")), LaunchMode::ExternalTab);
        assert_eq!(host.tabs.borrow().len(), 1);
    }

    #[test]
    fn repeated_redirects_reopen_each_time() {
        let host = FakeHost::without_widget();
        let record = lead("Alex", "alex@x.com", "payments");
        redirect(&host, &record);
        redirect(&host, &record);
        let tabs = host.tabs.borrow();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0], tabs[1]);
    }
}
