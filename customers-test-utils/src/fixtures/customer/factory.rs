//! Randomized customer request data.
//!
//! Generated values are random but always pass the API's validation rules: names use
//! letters and spaces only, emails are `first.last<n>@domain`, and birth dates fall
//! between 1950 and 2004. Any field can be pinned to a fixed value.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constant::VALID_GITHUB_USER;

static FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Jane", "John", "Ken",
    "Leslie", "Linus", "Margaret", "Niklaus", "Radia", "Sophie", "Tony", "Yukihiro",
];

static LAST_NAMES: &[&str] = &[
    "Allen", "Doe", "Hamilton", "Hoare", "Hopper", "Kernighan", "Knuth", "Lamport", "Liskov",
    "Lovelace", "Perlman", "Ritchie", "Thompson", "Turing", "Wilson", "Wirth",
];

static EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

/// Days between the earliest generated birth date and the end of 2004.
static BIRTH_DATE_SPAN_DAYS: u64 = 20088;

/// Customer request body as sent to `POST /customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFixture {
    pub full_name: String,
    pub email: String,
    #[serde(rename = "gitHubUsername")]
    pub github_username: String,
    pub date_of_birth: NaiveDate,
}

/// Generator for [`CustomerFixture`]s.
///
/// Unpinned fields are drawn fresh on every [`CustomerFactory::generate`] call. The GitHub
/// username is never random: it is [`VALID_GITHUB_USER`] unless pinned, since arbitrary
/// usernames are unknown to the fake GitHub API.
///
/// ```no_run
/// use customers_test_utils::prelude::*;
///
/// let customer = CustomerFactory::new().with_email("not-an-email").generate();
/// ```
#[derive(Debug, Clone)]
pub struct CustomerFactory {
    full_name: Option<String>,
    email: Option<String>,
    github_username: String,
    date_of_birth: Option<NaiveDate>,
}

impl Default for CustomerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerFactory {
    pub fn new() -> Self {
        Self {
            full_name: None,
            email: None,
            github_username: VALID_GITHUB_USER.to_string(),
            date_of_birth: None,
        }
    }

    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_github_username(mut self, github_username: &str) -> Self {
        self.github_username = github_username.to_string();
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn generate(&self) -> CustomerFixture {
        let mut rng = rand::rng();

        let first_name = pick(&mut rng, FIRST_NAMES);
        let last_name = pick(&mut rng, LAST_NAMES);

        let full_name = self
            .full_name
            .clone()
            .unwrap_or_else(|| format!("{} {}", first_name, last_name));

        let email = self.email.clone().unwrap_or_else(|| {
            format!(
                "{}.{}{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                rng.random_range(1..10_000),
                pick(&mut rng, EMAIL_DOMAINS)
            )
        });

        let date_of_birth = self.date_of_birth.unwrap_or_else(|| {
            let earliest = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
            let offset = rng.random_range(0..BIRTH_DATE_SPAN_DAYS);
            earliest.checked_add_days(Days::new(offset)).unwrap()
        });

        CustomerFixture {
            full_name,
            email,
            github_username: self.github_username.clone(),
            date_of_birth,
        }
    }
}

fn pick<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}
