//! Synthetic pseudonym source backed by the `fake` crate
//!
//! The `fake` crate provides locale-aware full-name and surname fakers but
//! no gender split, so gendered generation combines a gender-specific given
//! name from embedded per-locale tables with a faked surname.

mod given_names;

use super::{Gender, NameGenerator};
use crate::domain::{PseudonymError, Result};
use fake::faker::name::raw::{LastName, Name};
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name-generation profiles supported by the synthetic generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    FrFr,
    ZhCn,
    ZhTw,
    JaJp,
    ArSa,
}

impl Locale {
    /// Parse a locale identifier like `en_US` or `fr_FR`
    pub fn parse(identifier: &str) -> Result<Self> {
        match identifier {
            "en" | "en_US" | "en_GB" => Ok(Locale::En),
            "fr_FR" => Ok(Locale::FrFr),
            "zh_CN" => Ok(Locale::ZhCn),
            "zh_TW" => Ok(Locale::ZhTw),
            "ja_JP" => Ok(Locale::JaJp),
            "ar_SA" => Ok(Locale::ArSa),
            other => Err(PseudonymError::Configuration(format!(
                "Unsupported locale: {other}. Supported: en_US, en_GB, fr_FR, zh_CN, zh_TW, ja_JP, ar_SA"
            ))),
        }
    }
}

/// Locale- and gender-aware synthetic name generator
pub struct FakerGenerator {
    locale: Locale,
    gender: Option<Gender>,
    rng: StdRng,
}

impl FakerGenerator {
    /// Create a generator for a locale identifier, validating it up front
    pub fn new(locale: &str, gender: Option<Gender>) -> Result<Self> {
        Ok(Self {
            locale: Locale::parse(locale)?,
            gender,
            rng: StdRng::from_entropy(),
        })
    }

    fn full_name(&mut self) -> String {
        match self.locale {
            Locale::En => Name(EN).fake_with_rng(&mut self.rng),
            Locale::FrFr => Name(FR_FR).fake_with_rng(&mut self.rng),
            Locale::ZhCn => Name(ZH_CN).fake_with_rng(&mut self.rng),
            Locale::ZhTw => Name(ZH_TW).fake_with_rng(&mut self.rng),
            Locale::JaJp => Name(JA_JP).fake_with_rng(&mut self.rng),
            Locale::ArSa => Name(AR_SA).fake_with_rng(&mut self.rng),
        }
    }

    fn last_name(&mut self) -> String {
        match self.locale {
            Locale::En => LastName(EN).fake_with_rng(&mut self.rng),
            Locale::FrFr => LastName(FR_FR).fake_with_rng(&mut self.rng),
            Locale::ZhCn => LastName(ZH_CN).fake_with_rng(&mut self.rng),
            Locale::ZhTw => LastName(ZH_TW).fake_with_rng(&mut self.rng),
            Locale::JaJp => LastName(JA_JP).fake_with_rng(&mut self.rng),
            Locale::ArSa => LastName(AR_SA).fake_with_rng(&mut self.rng),
        }
    }

    fn gendered_name(&mut self, gender: Gender) -> String {
        let pool = given_names::pool(self.locale, gender);
        let given = pool[self.rng.gen_range(0..pool.len())];
        let family = self.last_name();
        match self.locale {
            // Family name precedes the given name in CJK locales
            Locale::ZhCn | Locale::ZhTw => format!("{family}{given}"),
            Locale::JaJp => format!("{family} {given}"),
            _ => format!("{given} {family}"),
        }
    }
}

impl NameGenerator for FakerGenerator {
    fn generate(&mut self) -> String {
        match self.gender {
            Some(gender) => self.gendered_name(gender),
            None => self.full_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en_US", Locale::En)]
    #[test_case("en_GB", Locale::En)]
    #[test_case("fr_FR", Locale::FrFr)]
    #[test_case("zh_CN", Locale::ZhCn)]
    #[test_case("zh_TW", Locale::ZhTw)]
    #[test_case("ja_JP", Locale::JaJp)]
    #[test_case("ar_SA", Locale::ArSa)]
    fn test_parse_supported_locale(identifier: &str, expected: Locale) {
        assert_eq!(Locale::parse(identifier).unwrap(), expected);
    }

    #[test]
    fn test_parse_unsupported_locale() {
        let result = Locale::parse("xx_XX");
        assert!(matches!(result, Err(PseudonymError::Configuration(_))));
    }

    #[test]
    fn test_unsupported_locale_fails_at_construction() {
        assert!(FakerGenerator::new("tlh", None).is_err());
    }

    #[test]
    fn test_ungendered_generation_is_non_empty() {
        let mut generator = FakerGenerator::new("en_US", None).unwrap();
        for _ in 0..10 {
            assert!(!generator.generate().is_empty());
        }
    }

    #[test]
    fn test_male_generation_uses_male_given_names() {
        let mut generator = FakerGenerator::new("en_US", Some(Gender::Male)).unwrap();
        let pool = given_names::pool(Locale::En, Gender::Male);
        for _ in 0..20 {
            let name = generator.generate();
            let given = name.split(' ').next().unwrap();
            assert!(pool.contains(&given), "{given} not in male pool");
        }
    }

    #[test]
    fn test_female_generation_uses_female_given_names() {
        let mut generator = FakerGenerator::new("en_US", Some(Gender::Female)).unwrap();
        let pool = given_names::pool(Locale::En, Gender::Female);
        for _ in 0..20 {
            let name = generator.generate();
            let given = name.split(' ').next().unwrap();
            assert!(pool.contains(&given), "{given} not in female pool");
        }
    }

    #[test]
    fn test_cjk_gendered_name_has_no_latin_layout() {
        let mut generator = FakerGenerator::new("zh_CN", Some(Gender::Female)).unwrap();
        let name = generator.generate();
        assert!(!name.contains(' '));
    }
}
