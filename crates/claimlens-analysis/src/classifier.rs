//! Rule-based claim classification
//!
//! Maps claim text to one fixed [`Category`] via an ordered list of keyword
//! rules. Rules are evaluated in a fixed priority sequence and the first
//! match wins, so a claim containing both scientific and medical vocabulary
//! is Scientific, not Medical/Health. Matching is case-insensitive and
//! word-boundary-delimited.

use claimlens_domain::Category;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered classification rules; evaluation order is significant
static RULES: Lazy<Vec<(Regex, Category)>> = Lazy::new(|| {
    [
        (
            r"(?i)\b(?:scientific|stud(?:y|ies)|research|scientists?|evidence|peer-?review(?:ed)?|journal|experiment|data-?driven|empirical|hypothesis)\b",
            Category::Scientific,
        ),
        (
            r"(?i)\b(?:health|medical|diseases?|illnesses?|treatments?|cures?|medicine|doctors?|physicians?|patients?|vaccines?|vaccination|autism|infections?|viruses?|pandemic|diagnos(?:e|is)|symptoms?|clinics?|hospitals?|vitamins?)\b",
            Category::MedicalHealth,
        ),
        (
            r"(?i)\b(?:government|officials?|politic|policies|policy|law|regulations?|election|bill|senate|congress|minister|president|legislation|vote|campaign)\b",
            Category::Political,
        ),
        (
            r"(?i)\b(?:gdp|econom(?:y|ic)|inflation|market|stock|housing|unemployment|jobs?|recession|dollar|cost|price|tax|budget)\b|\$",
            Category::Economic,
        ),
        (
            r"(?i)\b(?:global\s+warming|climate\s+change|greenhouse|emissions?|co2|carbon\s+dioxide|sea\s+level|hurricane|drought|rainfall|precipitation|heatwave|ice\s+melt|temperatures?|arctic|weather|melting)\b",
            Category::ClimateWeather,
        ),
        (
            // Keyword, literal year (1500-2019), or decade ("2000s", "60s")
            r"(?i)\b(?:century|decade|historical|history|war|era|battle|ancient|medieval|ago)\b|\b(?:1[5-9]\d{2}|20[01]\d|19\d{2})\b|\b\d{4}s\b|\b\d{2}s\b",
            Category::Historical,
        ),
    ]
    .into_iter()
    .map(|(pattern, category)| {
        (
            Regex::new(pattern).expect("classifier rule must compile"),
            category,
        )
    })
    .collect()
});

/// Classify a claim into its topical category
///
/// Returns [`Category::General`] when no rule matches, including for empty
/// input.
///
/// # Examples
///
/// ```
/// use claimlens_analysis::classify;
/// use claimlens_domain::Category;
///
/// assert_eq!(classify("Vaccines cause autism in children."), Category::MedicalHealth);
/// assert_eq!(classify("The sky is blue."), Category::General);
/// ```
pub fn classify(text: &str) -> Category {
    RULES
        .iter()
        .find(|(rule, _)| rule.is_match(text))
        .map(|(_, category)| *category)
        .unwrap_or(Category::General)
}
