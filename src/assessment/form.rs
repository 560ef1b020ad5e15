/// Budget ranges offered in the assessment select as `(value, label)`.
pub const BUDGET_OPTIONS: &[(&str, &str)] = &[
    ("$1k - $3k", "$1,000 - $3,000 /mo"),
    ("$3k - $10k", "$3,000 - $10,000 /mo"),
    ("$10k+", "$10,000+ /mo"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    Budget,
    Bottlenecks,
}

/// What the visitor typed into the bottleneck assessment.
///
/// Nothing here checks for empty values; the inputs carry `required` and that
/// is as far as validation goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub budget: String,
    pub bottlenecks: String,
}

impl LeadFormData {
    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Budget => &mut self.budget,
            LeadField::Bottlenecks => &mut self.bottlenecks,
        };
        *slot = value.into();
    }

    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Budget => &self.budget,
            LeadField::Bottlenecks => &self.bottlenecks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut form = LeadFormData {
            full_name: "Alex Rivera".to_string(),
            email: "alex@x.com".to_string(),
            phone: "555-0000".to_string(),
            budget: "$3k - $10k".to_string(),
            bottlenecks: "late payments".to_string(),
        };
        let before = form.clone();

        form.set_field(LeadField::Phone, "555-1111");

        assert_eq!(form.phone, "555-1111");
        assert_eq!(form.full_name, before.full_name);
        assert_eq!(form.email, before.email);
        assert_eq!(form.budget, before.budget);
        assert_eq!(form.bottlenecks, before.bottlenecks);
    }

    #[test]
    fn field_reads_back_what_was_set() {
        let mut form = LeadFormData::default();
        for (field, value) in [
            (LeadField::FullName, "Jo"),
            (LeadField::Email, "jo@gym.io"),
            (LeadField::Budget, "$10k+"),
            (LeadField::Bottlenecks, "front desk is swamped"),
        ] {
            form.set_field(field, value);
            assert_eq!(form.field(field), value);
        }
        assert_eq!(form.field(LeadField::Phone), "");
    }

    #[test]
    fn budget_values_match_the_select_options() {
        let values: Vec<&str> = BUDGET_OPTIONS.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, vec!["$1k - $3k", "$3k - $10k", "$10k+"]);
    }
}
