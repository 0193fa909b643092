//! Declarative field schema for the lead form
//!
//! Every form variant is a list of [`FieldSpec`]s. Rendering, editing,
//! validation and payload building are all driven from this table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validator::Rule;

/// Kind of free-text input, used for rendering hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
}

/// A selectable option with its submitted value and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// A country entry, submitted flattened as code and name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "US", name: "United States" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "CA", name: "Canada" },
    Country { code: "AU", name: "Australia" },
    Country { code: "DE", name: "Germany" },
    Country { code: "FR", name: "France" },
    Country { code: "NL", name: "Netherlands" },
    Country { code: "IN", name: "India" },
    Country { code: "SG", name: "Singapore" },
    Country { code: "AE", name: "United Arab Emirates" },
    Country { code: "ZA", name: "South Africa" },
    Country { code: "BR", name: "Brazil" },
];

/// How a field is edited and serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text(InputKind),
    Select(&'static [Choice]),
    MultiSelect(&'static [Choice]),
    Checkbox,
    Country,
}

impl FieldKind {
    /// Number of options a picker cycles through (0 for non-pickers)
    pub fn option_count(&self) -> usize {
        match self {
            FieldKind::Select(options) | FieldKind::MultiSelect(options) => options.len(),
            FieldKind::Country => COUNTRIES.len(),
            FieldKind::Text(_) | FieldKind::Checkbox => 0,
        }
    }

    /// Display label of the option at `index`
    pub fn option_label(&self, index: usize) -> Option<&'static str> {
        match self {
            FieldKind::Select(options) | FieldKind::MultiSelect(options) => {
                options.get(index).map(|c| c.label)
            }
            FieldKind::Country => COUNTRIES.get(index).map(|c| c.name),
            FieldKind::Text(_) | FieldKind::Checkbox => None,
        }
    }
}

/// Static description of one form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// JSON key in the submitted payload
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Evaluated in order; the first failing rule wins
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            placeholder: "",
            kind,
            rules: Vec::new(),
        }
    }

    fn text(key: &'static str, label: &'static str, input: InputKind) -> Self {
        Self::new(key, label, FieldKind::Text(input))
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Whether the field must be filled in before submitting
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_)))
    }
}

const INDUSTRIES: &[Choice] = &[
    Choice::new("finance", "Finance"),
    Choice::new("trading", "Trading"),
    Choice::new("technology", "Technology"),
    Choice::new("consulting", "Consulting"),
    Choice::new("education", "Education"),
    Choice::new("other", "Other"),
];

const SKILL_LEVELS: &[Choice] = &[
    Choice::new("beginner", "Beginner"),
    Choice::new("intermediate", "Intermediate"),
    Choice::new("advanced", "Advanced"),
];

const LEARNING_GOALS: &[Choice] = &[
    Choice::new("career-change", "Career change"),
    Choice::new("automate-business", "Automate my business"),
    Choice::new("side-income", "Build a side income"),
    Choice::new("personal-interest", "Personal interest"),
];

const TIME_COMMITMENTS: &[Choice] = &[
    Choice::new("1-3h", "1-3 hours / week"),
    Choice::new("4-6h", "4-6 hours / week"),
    Choice::new("7-10h", "7-10 hours / week"),
    Choice::new("10h+", "10+ hours / week"),
];

const COURSE_INTERESTS: &[Choice] = &[
    Choice::new("workflow-automation", "Workflow automation"),
    Choice::new("api-integrations", "API integrations"),
    Choice::new("ai-agents", "AI agents"),
    Choice::new("data-pipelines", "Data pipelines"),
];

const TRADING_INTERESTS: &[Choice] = &[
    Choice::new("stocks", "Stocks"),
    Choice::new("forex", "Forex"),
    Choice::new("crypto", "Crypto"),
    Choice::new("options", "Options"),
    Choice::new("commodities", "Commodities"),
];

const TRADING_EXPERIENCE: &[Choice] = &[
    Choice::new("none", "No experience"),
    Choice::new("beginner", "Less than 1 year"),
    Choice::new("intermediate", "1-3 years"),
    Choice::new("experienced", "3+ years"),
];

/// Which field set the landing page collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Business,
    Course,
    Trading,
}

impl FormVariant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Course => "Course",
            Self::Trading => "Trading",
        }
    }

    /// Build the ordered field schema for this variant
    pub fn fields(&self) -> Vec<FieldSpec> {
        let mut fields = contact_fields();
        match self {
            Self::Business => {
                fields.push(website());
                fields.push(
                    FieldSpec::text("industry", "Industry", InputKind::Text)
                        .placeholder("e.g., Finance, Trading, Technology")
                        .rule(Rule::min_length(2, "Industry must be at least 2 characters long")),
                );
                fields.push(
                    FieldSpec::text("location", "Location", InputKind::Text)
                        .placeholder("e.g., New York, USA")
                        .rule(Rule::min_length(2, "Location must be at least 2 characters long")),
                );
            }
            Self::Course => {
                fields.push(
                    FieldSpec::text("company", "Company", InputKind::Text)
                        .placeholder("Your company (optional)"),
                );
                fields.push(city());
                fields.push(postal_code());
                fields.push(country());
                fields.push(
                    FieldSpec::new("skillLevel", "Skill Level", FieldKind::Select(SKILL_LEVELS))
                        .rule(Rule::required("Please select your skill level")),
                );
                fields.push(
                    FieldSpec::new(
                        "learningGoal",
                        "Learning Goal",
                        FieldKind::Select(LEARNING_GOALS),
                    )
                    .rule(Rule::required("Please select a learning goal")),
                );
                fields.push(
                    FieldSpec::new(
                        "timeCommitment",
                        "Time Commitment",
                        FieldKind::Select(TIME_COMMITMENTS),
                    )
                    .rule(Rule::required("Please select your time commitment")),
                );
                fields.push(FieldSpec::new(
                    "interests",
                    "Topics of Interest",
                    FieldKind::MultiSelect(COURSE_INTERESTS),
                ));
                fields.push(FieldSpec::new(
                    "newsletter",
                    "Send me course updates",
                    FieldKind::Checkbox,
                ));
            }
            Self::Trading => {
                fields.push(website());
                fields.push(
                    FieldSpec::text("address", "Street Address", InputKind::Text)
                        .placeholder("123 Market Street")
                        .rule(Rule::min_length(2, "Address must be at least 2 characters long")),
                );
                fields.push(city());
                fields.push(postal_code());
                fields.push(country());
                fields.push(
                    FieldSpec::new("industry", "Industry", FieldKind::Select(INDUSTRIES))
                        .rule(Rule::required("Please select your industry")),
                );
                fields.push(
                    FieldSpec::new(
                        "tradingInterest",
                        "Trading Interests",
                        FieldKind::MultiSelect(TRADING_INTERESTS),
                    )
                    .rule(Rule::required("Please select at least one trading interest")),
                );
                fields.push(
                    FieldSpec::new(
                        "tradingExperience",
                        "Trading Experience",
                        FieldKind::Select(TRADING_EXPERIENCE),
                    )
                    .rule(Rule::required("Please select your trading experience")),
                );
                fields.push(FieldSpec::new(
                    "marketingConsent",
                    "Email me trading insights",
                    FieldKind::Checkbox,
                ));
            }
        }
        fields
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for FormVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(Self::Business),
            "course" => Ok(Self::Course),
            "trading" => Ok(Self::Trading),
            other => Err(anyhow::anyhow!(
                "unknown form variant '{other}' (expected business, course or trading)"
            )),
        }
    }
}

/// Name, email and phone: shared by every variant, always first
fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("firstName", "First Name", InputKind::Text)
            .placeholder("Enter your first name")
            .rule(Rule::required("Please enter your first name"))
            .rule(Rule::min_length(2, "First name must be at least 2 characters long")),
        FieldSpec::text("lastName", "Last Name", InputKind::Text)
            .placeholder("Enter your last name")
            .rule(Rule::required("Please enter your last name"))
            .rule(Rule::min_length(2, "Last name must be at least 2 characters long")),
        FieldSpec::text("email", "Email Address", InputKind::Email)
            .placeholder("your.email@example.com")
            .rule(Rule::required("Please enter your email address"))
            .rule(Rule::Email("Please enter a valid email address")),
        FieldSpec::text("phone", "Phone Number", InputKind::Tel)
            .placeholder("+1 234 567 8900")
            .rule(Rule::required("Please enter your phone number"))
            .rule(Rule::Phone("Please enter a valid phone number (10-15 digits)")),
    ]
}

fn website() -> FieldSpec {
    FieldSpec::text("website", "Website", InputKind::Url)
        .placeholder("https://www.yourwebsite.com")
        .rule(Rule::Url(
            "Please enter a valid website URL starting with http:// or https://",
        ))
}

fn city() -> FieldSpec {
    FieldSpec::text("city", "City", InputKind::Text)
        .placeholder("e.g., New York")
        .rule(Rule::min_length(2, "City must be at least 2 characters long"))
}

fn postal_code() -> FieldSpec {
    FieldSpec::text("postalCode", "Postal Code", InputKind::Text)
        .placeholder("e.g., 10001")
        .rule(Rule::Digits("Postal code must contain only digits"))
}

fn country() -> FieldSpec {
    FieldSpec::new("country", "Country", FieldKind::Country)
        .rule(Rule::required("Please select your country"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(variant: FormVariant) -> Vec<&'static str> {
        variant.fields().iter().map(|f| f.key).collect()
    }

    #[test]
    fn test_default_variant_is_business() {
        assert_eq!(FormVariant::default(), FormVariant::Business);
    }

    #[test]
    fn test_business_fields_match_landing_page() {
        assert_eq!(
            keys(FormVariant::Business),
            vec!["firstName", "lastName", "email", "phone", "website", "industry", "location"]
        );
    }

    #[test]
    fn test_every_variant_starts_with_contact_fields() {
        for variant in [FormVariant::Business, FormVariant::Course, FormVariant::Trading] {
            assert_eq!(
                &keys(variant)[..4],
                &["firstName", "lastName", "email", "phone"]
            );
        }
    }

    #[test]
    fn test_keys_are_unique_per_variant() {
        for variant in [FormVariant::Business, FormVariant::Course, FormVariant::Trading] {
            let mut all = keys(variant);
            let len = all.len();
            all.sort_unstable();
            all.dedup();
            assert_eq!(all.len(), len, "duplicate key in {variant}");
        }
    }

    #[test]
    fn test_required_flags() {
        let fields = FormVariant::Business.fields();
        assert!(fields[0].is_required());
        assert!(fields[3].is_required());
        assert!(!fields[4].is_required()); // website
        assert!(!fields[6].is_required()); // location
    }

    #[test]
    fn test_selects_come_after_text_fields_in_course() {
        let fields = FormVariant::Course.fields();
        let first_select = fields
            .iter()
            .position(|f| !matches!(f.kind, FieldKind::Text(_)))
            .unwrap();
        assert!(fields[first_select..]
            .iter()
            .all(|f| !matches!(f.kind, FieldKind::Text(_))));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("course".parse::<FormVariant>().unwrap(), FormVariant::Course);
        assert_eq!(" Trading ".parse::<FormVariant>().unwrap(), FormVariant::Trading);
        assert!("landing".parse::<FormVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_lowercase() {
        let json = serde_json::to_string(&FormVariant::Trading).unwrap();
        assert_eq!(json, "\"trading\"");
        let parsed: FormVariant = serde_json::from_str("\"course\"").unwrap();
        assert_eq!(parsed, FormVariant::Course);
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(FieldKind::Country.option_label(0), Some("United States"));
        assert_eq!(FieldKind::Country.option_count(), COUNTRIES.len());
        assert_eq!(FieldKind::Checkbox.option_count(), 0);
        assert_eq!(FieldKind::Select(SKILL_LEVELS).option_label(2), Some("Advanced"));
        assert_eq!(FieldKind::Select(SKILL_LEVELS).option_label(9), None);
    }
}
