//! Field rules for the login and signup forms. One rule table, selected per form kind.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Browser whitespace: Unicode spaces plus the BOM, without NEL.
const WS_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", WS_CLASS);
    Regex::new(&format!(r"^{p}@{p}\.{p}$", p = part)).expect("email pattern")
});
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("username pattern"));

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    ConfirmPassword,
    RememberMe,
    AgreeToTerms,
    AgreeToPrivacy,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::RememberMe => "rememberMe",
            Field::AgreeToTerms => "agreeToTerms",
            Field::AgreeToPrivacy => "agreeToPrivacy",
        }
    }

    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Field::RememberMe | Field::AgreeToTerms | Field::AgreeToPrivacy
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password, Field::RememberMe],
            FormKind::Signup => &[
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Username,
                Field::Password,
                Field::ConfirmPassword,
                Field::AgreeToTerms,
                Field::AgreeToPrivacy,
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Current values of one form. Missing text reads as `""`, missing flags as `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<Field, FieldValue>,
}

impl FormValues {
    /// Empty text for every text field and `false` for every flag of `kind`.
    pub fn blank(kind: FormKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|f| {
                let v = if f.is_flag() {
                    FieldValue::Flag(false)
                } else {
                    FieldValue::Text(String::new())
                };
                (*f, v)
            })
            .collect();
        Self { values }
    }

    pub fn text(&self, field: Field) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(FieldValue::Flag(true)))
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.values.insert(field, FieldValue::Flag(value));
    }

    pub fn with_text(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    pub fn with_flag(mut self, field: Field, value: bool) -> Self {
        self.set_flag(field, value);
        self
    }
}

/// Field -> message. Absence of a field means valid (or not yet checked).
pub type ErrorMap = BTreeMap<Field, String>;

pub struct PasswordRequirement {
    pub label: &'static str,
    pub test: fn(&str) -> bool,
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trims the same characters a browser's `String.prototype.trim` does.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Length in UTF-16 code units, the unit the form limits are written in.
pub fn input_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn long_enough(p: &str) -> bool {
    input_len(p) >= 8
}

fn has_upper(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lower(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_digit())
}

fn has_special(p: &str) -> bool {
    p.chars().any(|c| SPECIAL_CHARS.contains(c))
}

pub static PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
    PasswordRequirement { label: "At least 8 characters", test: long_enough },
    PasswordRequirement { label: "One uppercase letter", test: has_upper },
    PasswordRequirement { label: "One lowercase letter", test: has_lower },
    PasswordRequirement { label: "One number", test: has_digit },
    PasswordRequirement { label: "One special character", test: has_special },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequirementStatus {
    pub label: &'static str,
    pub met: bool,
}

/// Per-requirement pass/fail for the live checklist under the signup password field.
pub fn password_checklist(password: &str) -> Vec<RequirementStatus> {
    PASSWORD_REQUIREMENTS
        .iter()
        .map(|r| RequirementStatus {
            label: r.label,
            met: (r.test)(password),
        })
        .collect()
}

pub fn meets_password_requirements(password: &str) -> bool {
    PASSWORD_REQUIREMENTS.iter().all(|r| (r.test)(password))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Email,
    /// Non-empty, at least `min` characters.
    MinPassword { min: usize },
    StrongPassword,
    /// Must equal the value of `other` exactly.
    Confirms { other: Field },
    PersonName { label: &'static str },
    Username,
    MustAgree { document: &'static str },
}

impl Rule {
    pub fn check(self, field: Field, values: &FormValues) -> Result<(), String> {
        match self {
            Rule::Email => {
                let v = values.text(field);
                if trim_input(v).is_empty() {
                    Err("Email is required".into())
                } else if !is_valid_email(v) {
                    Err("Please enter a valid email address".into())
                } else {
                    Ok(())
                }
            }
            Rule::MinPassword { min } => {
                let v = values.text(field);
                if v.is_empty() {
                    Err("Password is required".into())
                } else if input_len(v) < min {
                    Err(format!("Password must be at least {} characters", min))
                } else {
                    Ok(())
                }
            }
            Rule::StrongPassword => {
                let v = values.text(field);
                if v.is_empty() {
                    Err("Password is required".into())
                } else if !meets_password_requirements(v) {
                    Err("Password does not meet requirements".into())
                } else {
                    Ok(())
                }
            }
            Rule::Confirms { other } => {
                let v = values.text(field);
                if v.is_empty() {
                    Err("Please confirm your password".into())
                } else if v != values.text(other) {
                    Err("Passwords do not match".into())
                } else {
                    Ok(())
                }
            }
            Rule::PersonName { label } => {
                let v = trim_input(values.text(field));
                if v.is_empty() {
                    Err(format!("{} is required", label))
                } else if input_len(v) < 2 {
                    Err(format!("{} must be at least 2 characters", label))
                } else {
                    Ok(())
                }
            }
            Rule::Username => {
                let v = values.text(field);
                if trim_input(v).is_empty() {
                    Err("Username is required".into())
                } else if !is_valid_username(v) {
                    Err("Username must be 3-20 characters and contain only letters, numbers, and underscores".into())
                } else {
                    Ok(())
                }
            }
            Rule::MustAgree { document } => {
                if values.flag(field) {
                    Ok(())
                } else {
                    Err(format!("You must agree to the {}", document))
                }
            }
        }
    }
}

pub fn rule_for(kind: FormKind, field: Field) -> Option<Rule> {
    match (kind, field) {
        (_, Field::Email) => Some(Rule::Email),
        (FormKind::Login, Field::Password) => Some(Rule::MinPassword { min: 6 }),
        (FormKind::Signup, Field::Password) => Some(Rule::StrongPassword),
        (FormKind::Signup, Field::ConfirmPassword) => Some(Rule::Confirms {
            other: Field::Password,
        }),
        (FormKind::Signup, Field::FirstName) => Some(Rule::PersonName {
            label: "First name",
        }),
        (FormKind::Signup, Field::LastName) => Some(Rule::PersonName { label: "Last name" }),
        (FormKind::Signup, Field::Username) => Some(Rule::Username),
        (FormKind::Signup, Field::AgreeToTerms) => Some(Rule::MustAgree {
            document: "Terms of Service",
        }),
        (FormKind::Signup, Field::AgreeToPrivacy) => Some(Rule::MustAgree {
            document: "Privacy Policy",
        }),
        _ => None,
    }
}

/// Runs every rule of `kind` against `values`. Pure.
pub fn validate(kind: FormKind, values: &FormValues) -> ErrorMap {
    kind.fields()
        .iter()
        .filter_map(|&field| {
            let rule = rule_for(kind, field)?;
            rule.check(field, values).err().map(|msg| (field, msg))
        })
        .collect()
}
