//! Local pattern rules, the first stage of the moderation pipeline.
//!
//! Rules are compiled once at startup and shared read-only across requests.

use regex::Regex;

/// A single pre-screening rule: a wire-visible label plus the pattern that
/// triggers it.
struct PatternRule {
    label: &'static str,
    regex: Regex,
}

/// The fixed rule list. Rule order determines the order of labels in a
/// verdict; every matching rule contributes, not just the first.
pub struct PatternScreen {
    rules: Vec<PatternRule>,
}

impl PatternScreen {
    pub fn new() -> Self {
        let rules = [
            ("Email", r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            // Ten or more consecutive digits.
            ("Phone Number", r"\b\d{10,}\b"),
            // 13-16 digits, optionally separated by spaces or hyphens.
            ("Credit Card", r"\b(?:\d[ -]*?){13,16}\b"),
            ("PayPal", r"(?i)\bpaypal\b"),
            (
                "Social Media URL",
                r"(?i)(facebook|instagram|twitter|tiktok|linkedin)\.com",
            ),
            ("Website URL", r"\bhttps?://[^\s]+\b"),
        ]
        .into_iter()
        .map(|(label, pattern)| PatternRule {
            label,
            regex: Regex::new(pattern).expect("invalid moderation pattern"),
        })
        .collect();

        Self { rules }
    }

    /// Returns the labels of every rule that matches anywhere in `text`,
    /// in rule order.
    pub fn scan(&self, text: &str) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.regex.is_match(text))
            .map(|rule| rule.label)
            .collect()
    }
}

impl Default for PatternScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> PatternScreen {
        PatternScreen::new()
    }

    #[test]
    fn detects_email() {
        let labels = screen().scan("contact me at jane.doe+spam@example.co.uk please");
        assert_eq!(labels, vec!["Email"]);
    }

    #[test]
    fn ignores_spelled_out_email() {
        let labels = screen().scan("contact me at jane dot doe at example dot com");
        assert!(labels.is_empty());
    }

    #[test]
    fn detects_ten_digit_phone_number() {
        let labels = screen().scan("call 0123456789 tonight");
        assert_eq!(labels, vec!["Phone Number"]);
    }

    #[test]
    fn ignores_short_digit_run() {
        let labels = screen().scan("my PIN is 123456789");
        assert!(labels.is_empty());
    }

    #[test]
    fn detects_spaced_credit_card() {
        let labels = screen().scan("pay with 1234 5678 9012 3456 thanks");
        assert_eq!(labels, vec!["Credit Card"]);
    }

    #[test]
    fn detects_hyphenated_credit_card() {
        let labels = screen().scan("card: 1234-5678-9012-345");
        assert!(labels.contains(&"Credit Card"));
    }

    #[test]
    fn unbroken_card_number_also_looks_like_phone() {
        let labels = screen().scan("send to 4111111111111111");
        assert_eq!(labels, vec!["Phone Number", "Credit Card"]);
    }

    #[test]
    fn detects_paypal_case_insensitively() {
        let labels = screen().scan("just PayPal me instead");
        assert_eq!(labels, vec!["PayPal"]);
    }

    #[test]
    fn ignores_paypal_inside_a_longer_word() {
        let labels = screen().scan("the paypals of the world");
        assert!(labels.is_empty());
    }

    #[test]
    fn detects_social_media_domain() {
        let labels = screen().scan("find me on Instagram.com/someone");
        assert_eq!(labels, vec!["Social Media URL"]);
    }

    #[test]
    fn ignores_non_social_domain() {
        let labels = screen().scan("I read it on facebook.org somewhere");
        assert!(labels.is_empty());
    }

    #[test]
    fn detects_http_and_https_urls() {
        assert_eq!(screen().scan("see http://example.com/page"), vec!["Website URL"]);
        assert_eq!(screen().scan("see https://example.com"), vec!["Website URL"]);
    }

    #[test]
    fn ignores_bare_domain_without_scheme() {
        let labels = screen().scan("visit example.com sometime");
        assert!(labels.is_empty());
    }

    #[test]
    fn collects_all_matches_in_rule_order() {
        let labels = screen().scan("mail bob@example.com or call 0123456789");
        assert_eq!(labels, vec!["Email", "Phone Number"]);
    }

    #[test]
    fn social_url_fires_both_url_rules() {
        let labels = screen().scan("go to https://twitter.com/someone");
        assert_eq!(labels, vec!["Social Media URL", "Website URL"]);
    }

    #[test]
    fn clean_text_matches_nothing() {
        let labels = screen().scan("what a lovely day for a walk");
        assert!(labels.is_empty());
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert!(screen().scan("").is_empty());
    }
}
