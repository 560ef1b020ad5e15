use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use super::analysis::{AnalysisError, AnalysisResponse};
use super::form::{LeadField, LeadFormData};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Reported(AnalysisResponse),
    /// Last analysis produced nothing; the form stays up for another try.
    Failed,
}

#[derive(Debug)]
pub enum FlowAction {
    Edit(LeadField, String),
    Submit,
    Resolve(Result<AnalysisResponse, AnalysisError>),
    Reset,
    BookingOpened,
}

/// Form record plus where the visitor is in the assessment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssessmentFlow {
    pub form: LeadFormData,
    pub state: SubmissionState,
    pub booking_opened: bool,
}

impl AssessmentFlow {
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn report(&self) -> Option<&AnalysisResponse> {
        match &self.state {
            SubmissionState::Reported(report) => Some(report),
            _ => None,
        }
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: FlowAction) -> bool {
        match action {
            FlowAction::Edit(field, value) => {
                // the in-flight snapshot and the visible form must agree
                if self.is_submitting() || self.report().is_some() {
                    return false;
                }
                self.form.set_field(field, value);
                true
            }
            FlowAction::Submit => {
                if !self.can_submit() {
                    return false;
                }
                self.state = SubmissionState::Submitting;
                true
            }
            FlowAction::Resolve(result) => {
                if !self.is_submitting() {
                    return false;
                }
                self.state = match result {
                    Ok(report) => SubmissionState::Reported(report),
                    Err(_) => SubmissionState::Failed,
                };
                true
            }
            FlowAction::Reset => match self.state {
                SubmissionState::Reported(_) | SubmissionState::Failed => {
                    self.state = SubmissionState::Idle;
                    self.booking_opened = false;
                    true
                }
                _ => false,
            },
            FlowAction::BookingOpened => {
                if self.report().is_none() || self.booking_opened {
                    return false;
                }
                self.booking_opened = true;
                true
            }
        }
    }
}

impl Reducible for AssessmentFlow {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Synchronous latch over the analysis call. The reducer state only updates on
/// the next render, so a double click could otherwise slip two calls through.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    pub fn try_acquire(&self) -> Option<InFlightTicket> {
        if self.0.replace(true) {
            return None;
        }
        Some(InFlightTicket(self.0.clone()))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for InFlight {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Releases the latch when dropped.
#[derive(Debug)]
pub struct InFlightTicket(Rc<Cell<bool>>);

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::analysis::tests::{gemini_envelope, FakeBackend};
    use crate::assessment::analysis::AnalysisClient;
    use crate::scheduling::tests::FakeHost;
    use crate::scheduling::{redirect, LaunchMode};

    fn report() -> AnalysisResponse {
        AnalysisResponse {
            strategic_insights: vec!["a".into(), "b".into(), "c".into()],
            recommended_focus: "billing automation".into(),
        }
    }

    fn submitting() -> AssessmentFlow {
        let mut flow = AssessmentFlow::default();
        flow.apply(FlowAction::Edit(LeadField::FullName, "Alex Rivera".into()));
        assert!(flow.apply(FlowAction::Submit));
        flow
    }

    #[test]
    fn starts_idle_with_an_empty_form() {
        let flow = AssessmentFlow::default();
        assert_eq!(flow.state, SubmissionState::Idle);
        assert_eq!(flow.form, LeadFormData::default());
        assert!(flow.can_submit());
        assert!(!flow.booking_opened);
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut flow = submitting();
        assert!(flow.is_submitting());
        assert!(!flow.can_submit());
        assert!(!flow.apply(FlowAction::Submit));
        assert!(flow.is_submitting());
    }

    #[test]
    fn success_shows_the_report() {
        let mut flow = submitting();
        assert!(flow.apply(FlowAction::Resolve(Ok(report()))));
        assert_eq!(flow.report(), Some(&report()));
        assert!(!flow.can_submit());
        assert!(!flow.apply(FlowAction::Submit));
    }

    #[test]
    fn failure_reenables_the_form_and_keeps_values() {
        let mut flow = submitting();
        assert!(flow.apply(FlowAction::Resolve(Err(AnalysisError::EmptyReply))));
        assert_eq!(flow.state, SubmissionState::Failed);
        assert!(!flow.is_submitting());
        assert!(flow.can_submit());
        assert_eq!(flow.form.full_name, "Alex Rivera");

        assert!(flow.apply(FlowAction::Submit));
        assert!(flow.is_submitting());
    }

    #[test]
    fn stale_resolve_is_dropped() {
        let mut flow = AssessmentFlow::default();
        assert!(!flow.apply(FlowAction::Resolve(Ok(report()))));
        assert_eq!(flow.state, SubmissionState::Idle);
    }

    #[test]
    fn edits_are_frozen_while_submitting_or_reported() {
        let mut flow = submitting();
        assert!(!flow.apply(FlowAction::Edit(LeadField::FullName, "Someone Else".into())));
        flow.apply(FlowAction::Resolve(Ok(report())));
        assert!(!flow.apply(FlowAction::Edit(LeadField::FullName, "Someone Else".into())));
        assert_eq!(flow.form.full_name, "Alex Rivera");
    }

    #[test]
    fn reset_from_report_restores_the_editable_form() {
        let mut flow = submitting();
        flow.apply(FlowAction::Resolve(Ok(report())));
        flow.apply(FlowAction::BookingOpened);
        assert!(flow.booking_opened);

        assert!(flow.apply(FlowAction::Reset));
        assert_eq!(flow.state, SubmissionState::Idle);
        assert!(!flow.booking_opened);
        assert_eq!(flow.form.full_name, "Alex Rivera");
        assert!(flow.apply(FlowAction::Edit(LeadField::FullName, "Alex R.".into())));
    }

    #[test]
    fn reset_is_a_no_op_while_idle_or_submitting() {
        let mut flow = AssessmentFlow::default();
        assert!(!flow.apply(FlowAction::Reset));
        let mut flow = submitting();
        assert!(!flow.apply(FlowAction::Reset));
        assert!(flow.is_submitting());
    }

    #[test]
    fn booking_flag_needs_a_report() {
        let mut flow = AssessmentFlow::default();
        assert!(!flow.apply(FlowAction::BookingOpened));
        assert!(!flow.booking_opened);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let flow = Rc::new(AssessmentFlow::default());
        let next = flow.clone().reduce(FlowAction::Reset);
        assert!(Rc::ptr_eq(&flow, &next));

        let next = flow.clone().reduce(FlowAction::Submit);
        assert!(!Rc::ptr_eq(&flow, &next));
        assert!(next.is_submitting());
    }

    #[test]
    fn in_flight_latch_admits_one_holder() {
        let latch = InFlight::default();
        let ticket = latch.try_acquire();
        assert!(ticket.is_some());
        assert!(latch.is_active());
        assert!(latch.try_acquire().is_none());

        drop(ticket);
        assert!(!latch.is_active());
        assert!(latch.try_acquire().is_some());
    }

    #[tokio::test]
    async fn assessment_to_booking_end_to_end() {
        let flow = Rc::new(AssessmentFlow::default());
        let flow = [
            (LeadField::FullName, "Alex Rivera"),
            (LeadField::Email, "alex@x.com"),
            (LeadField::Phone, "555-0000"),
            (LeadField::Budget, "$3k - $10k"),
            (LeadField::Bottlenecks, "late payments"),
        ]
        .into_iter()
        .fold(flow, |flow, (field, value)| {
            flow.reduce(FlowAction::Edit(field, value.to_string()))
        });

        let latch = InFlight::default();
        let ticket = latch.try_acquire().unwrap();
        let snapshot = flow.form.clone();
        let flow = flow.reduce(FlowAction::Submit);
        assert!(flow.is_submitting());

        let client = AnalysisClient::new(
            FakeBackend::replying(Ok(gemini_envelope(
                r#"{"strategicInsights":["a","b","c"],"recommendedFocus":"billing automation"}"#,
            ))),
            "gemini-3-flash-preview",
        );
        let result = client.analyze(&snapshot).await;
        drop(ticket);
        let flow = flow.reduce(FlowAction::Resolve(result));

        let shown = flow.report().unwrap();
        assert_eq!(shown.strategic_insights, vec!["a", "b", "c"]);
        assert_eq!(shown.recommended_focus, "billing automation");
        assert!(!latch.is_active());

        let host = FakeHost::without_widget();
        assert_eq!(redirect(&host, &flow.form), LaunchMode::ExternalTab);
        let flow = flow.reduce(FlowAction::BookingOpened);
        assert!(flow.booking_opened);

        let opened = host.tabs.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains("name=Alex%20Rivera&email=alex%40x.com"));
        let a2 = opened[0].split("&a2=").nth(1).unwrap();
        assert_eq!(a2, "late%20payments");
        assert!(!opened[0].contains(' '));
    }
}
