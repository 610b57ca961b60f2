//! Field-shape validators: email, password strength, username, object id.
//!
//! Each validator is a rule table evaluated exhaustively, so a weak password
//! reports every missing character class at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::result::{Rule, ValidationResult, evaluate};

/// Characters that satisfy the "special character" password rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const PASSWORD_MIN_LEN: usize = 6;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

/// Length of the identity store's object ids, in hex characters.
pub const OBJECT_ID_LEN: usize = 24;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|error| panic!("regex {pattern:?} failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[A-Za-z0-9_]+$")
}

fn object_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!("^[0-9a-fA-F]{{{OBJECT_ID_LEN}}}$");
        Regex::new(&pattern).unwrap_or_else(|error| panic!("object id regex failed to compile: {error}"))
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Email
// ─────────────────────────────────────────────────────────────────────────────

fn email_shape(email: &str) -> bool {
    email_regex().is_match(email)
}

const EMAIL_RULES: &[Rule<str>] = &[Rule {
    message: "Please provide a valid email address",
    check: email_shape,
}];

pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::single("Email is required");
    }
    evaluate(EMAIL_RULES, email)
}

// ─────────────────────────────────────────────────────────────────────────────
// Password
// ─────────────────────────────────────────────────────────────────────────────

fn long_enough(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

const PASSWORD_RULES: &[Rule<str>] = &[
    Rule {
        message: "Password must be at least 6 characters long",
        check: long_enough,
    },
    Rule {
        message: "Password must contain at least one lowercase letter",
        check: has_lowercase,
    },
    Rule {
        message: "Password must contain at least one uppercase letter",
        check: has_uppercase,
    },
    Rule {
        message: "Password must contain at least one number",
        check: has_digit,
    },
    Rule {
        message: "Password must contain at least one special character",
        check: has_special,
    },
];

pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::single("Password is required");
    }
    evaluate(PASSWORD_RULES, password)
}

// ─────────────────────────────────────────────────────────────────────────────
// Username
// ─────────────────────────────────────────────────────────────────────────────

fn username_length(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.chars().count())
}

fn username_charset(username: &str) -> bool {
    username_regex().is_match(username)
}

const USERNAME_RULES: &[Rule<str>] = &[
    Rule {
        message: "Username must be between 3 and 30 characters",
        check: username_length,
    },
    Rule {
        message: "Username can only contain letters, numbers, and underscores",
        check: username_charset,
    },
];

pub fn validate_username(username: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::single("Username is required");
    }
    evaluate(USERNAME_RULES, username)
}

// ─────────────────────────────────────────────────────────────────────────────
// Object id
// ─────────────────────────────────────────────────────────────────────────────

fn object_id_shape(id: &str) -> bool {
    object_id_regex().is_match(id)
}

const OBJECT_ID_RULES: &[Rule<str>] = &[Rule {
    message: "Invalid ID format",
    check: object_id_shape,
}];

/// Check that `id` is exactly [`OBJECT_ID_LEN`] hex characters.
pub fn validate_object_id(id: &str) -> ValidationResult {
    if id.is_empty() {
        return ValidationResult::single("ID is required");
    }
    evaluate(OBJECT_ID_RULES, id)
}

/// Registration payload check: username, then email, then password.
pub fn validate_registration(username: &str, email: &str, password: &str) -> ValidationResult {
    [
        validate_username(username),
        validate_email(email),
        validate_password(password),
    ]
    .into_iter()
    .collect()
}
