//! Validated field value types shared by volunteers and elderly.
//!
//! Every type here can only be constructed through `parse`, which checks the
//! raw text against the type's format rule. Once built, a value is known to
//! be valid for the lifetime of the program.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Declares a string-backed field type validated by a single regex.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $name:ident, $re:ident, $pattern:expr, $message:expr
    ) => {
        static $re: Lazy<Regex> = Lazy::new(|| {
            Regex::new($pattern).expect(concat!("valid ", stringify!($name), " regex"))
        });

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Message describing the format rule.
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Check whether `raw` satisfies the format rule.
            #[must_use]
            pub fn is_valid(raw: &str) -> bool {
                $re.is_match(raw)
            }

            /// Build a value from raw text.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IllegalValue`] carrying the constraint message
            /// if `raw` is not valid.
            pub fn parse(raw: &str) -> Result<Self> {
                if Self::is_valid(raw) {
                    Ok(Self(raw.to_string()))
                } else {
                    Err(Error::illegal_value(Self::MESSAGE_CONSTRAINTS))
                }
            }

            /// The underlying text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }
    };
}

validated_string!(
    /// A person's name.
    Name,
    NAME_RE,
    r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_string!(
    /// A contact phone number.
    Phone,
    PHONE_RE,
    r"^[0-9]{3,}$",
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

validated_string!(
    /// An email address of the form `local-part@domain`.
    Email,
    EMAIL_RE,
    r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    "Emails should be of the format local-part@domain. The local-part should only contain \
     alphanumeric characters and the special characters +_.- and may not start or end with a \
     special character. The domain is made of labels separated by periods; each label starts \
     and ends with an alphanumeric character, and the last label is at least 2 characters long"
);

validated_string!(
    /// A residential address.
    Address,
    ADDRESS_RE,
    r"^\S.*$",
    "Addresses can take any values, and it should not be blank"
);

validated_string!(
    /// A free-form label attached to a person, also used for medical qualifications.
    Tag,
    TAG_RE,
    r"^[A-Za-z0-9]+$",
    "Tags names should be alphanumeric"
);

static NRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[STFGM][0-9]{7}[A-Z]$").expect("valid nric regex"));

/// National registration identity card number.
///
/// Accepted case-insensitively and stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nric(String);

impl Nric {
    /// Message describing the format rule.
    pub const MESSAGE_CONSTRAINTS: &'static str = "NRIC should be of the format @xxxxxxx#, \
        where @ is one of S, T, F, G or M, xxxxxxx is a 7-digit number and # is a letter";

    /// Check whether `raw` is a well-formed NRIC.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        NRIC_RE.is_match(raw)
    }

    /// Build an NRIC from raw text, normalising it to upper-case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalValue`] if `raw` is not well formed.
    pub fn parse(raw: &str) -> Result<Self> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(Error::illegal_value(Self::MESSAGE_CONSTRAINTS))
        }
    }

    /// The normalised text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Nric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

static AGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{0,2}$").expect("valid age regex"));

/// Age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    /// Smallest accepted age.
    pub const MIN: u8 = 1;
    /// Largest accepted age.
    pub const MAX: u8 = 150;

    /// Message describing the format rule.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Age should be a whole number from 1 to 150, without signs or leading zeros";

    /// Check whether `raw` is an accepted age.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        AGE_RE.is_match(raw)
            && raw
                .parse::<u16>()
                .is_ok_and(|age| (u16::from(Self::MIN)..=u16::from(Self::MAX)).contains(&age))
    }

    /// Build an age from raw text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalValue`] if `raw` is not an accepted age.
    pub fn parse(raw: &str) -> Result<Self> {
        if !Self::is_valid(raw) {
            return Err(Error::illegal_value(Self::MESSAGE_CONSTRAINTS));
        }
        raw.parse::<u8>()
            .map(Self)
            .map_err(|_| Error::illegal_value(Self::MESSAGE_CONSTRAINTS))
    }

    /// The age in years.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// How much attention an elderly person needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Independent, occasional check-ins.
    Low,
    /// Regular visits needed.
    Medium,
    /// Close monitoring needed.
    High,
}

impl RiskLevel {
    /// Message describing the accepted labels.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Risk level should be one of LOW, MEDIUM or HIGH";

    /// Check whether `raw` names a risk level, ignoring case.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::from_label(raw).is_some()
    }

    /// Build a risk level from its label, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalValue`] if `raw` is not a known label.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::from_label(raw).ok_or_else(|| Error::illegal_value(Self::MESSAGE_CONSTRAINTS))
    }

    fn from_label(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    /// The canonical upper-case label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
