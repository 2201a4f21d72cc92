//! Gendered given-name pools per locale
//!
//! Small curated tables used only when a gender filter is configured.

use super::Locale;
use crate::pseudonymization::generator::Gender;

const EN_MALE: &[&str] = &[
    "James", "William", "Henry", "Oliver", "Thomas", "George", "Samuel", "Daniel", "Edward",
    "Jack",
];
const EN_FEMALE: &[&str] = &[
    "Emma", "Olivia", "Charlotte", "Amelia", "Sophia", "Grace", "Hannah", "Lucy", "Alice", "Ruth",
];

const FR_MALE: &[&str] = &[
    "Jean", "Pierre", "Louis", "Antoine", "Julien", "Nicolas", "Hugo", "Mathis", "Léo", "Paul",
];
const FR_FEMALE: &[&str] = &[
    "Marie", "Camille", "Chloé", "Manon", "Louise", "Élise", "Juliette", "Margaux", "Inès", "Léa",
];

const ZH_CN_MALE: &[&str] = &["伟", "强", "军", "磊", "洋", "勇", "杰", "涛", "明", "超"];
const ZH_CN_FEMALE: &[&str] = &["芳", "娜", "敏", "静", "丽", "艳", "娟", "霞", "燕", "婷"];

const ZH_TW_MALE: &[&str] = &["偉", "強", "軍", "磊", "洋", "勇", "傑", "濤", "明", "超"];
const ZH_TW_FEMALE: &[&str] = &["芳", "娜", "敏", "靜", "麗", "艷", "娟", "霞", "燕", "婷"];

const JA_MALE: &[&str] = &[
    "太郎", "健太", "大輔", "翔太", "拓也", "直樹", "亮介", "和也", "誠", "浩",
];
const JA_FEMALE: &[&str] = &[
    "花子", "美咲", "さくら", "陽子", "恵", "由美", "真由美", "彩", "葵", "七海",
];

const AR_MALE: &[&str] = &[
    "محمد", "أحمد", "عبدالله", "خالد", "سعود", "فهد", "عمر", "يوسف", "سلطان", "ناصر",
];
const AR_FEMALE: &[&str] = &[
    "فاطمة", "عائشة", "نورة", "سارة", "مريم", "هند", "لطيفة", "منيرة", "ريم", "جواهر",
];

/// Given-name pool for a locale and gender
pub(super) fn pool(locale: Locale, gender: Gender) -> &'static [&'static str] {
    match (locale, gender) {
        (Locale::En, Gender::Male) => EN_MALE,
        (Locale::En, Gender::Female) => EN_FEMALE,
        (Locale::FrFr, Gender::Male) => FR_MALE,
        (Locale::FrFr, Gender::Female) => FR_FEMALE,
        (Locale::ZhCn, Gender::Male) => ZH_CN_MALE,
        (Locale::ZhCn, Gender::Female) => ZH_CN_FEMALE,
        (Locale::ZhTw, Gender::Male) => ZH_TW_MALE,
        (Locale::ZhTw, Gender::Female) => ZH_TW_FEMALE,
        (Locale::JaJp, Gender::Male) => JA_MALE,
        (Locale::JaJp, Gender::Female) => JA_FEMALE,
        (Locale::ArSa, Gender::Male) => AR_MALE,
        (Locale::ArSa, Gender::Female) => AR_FEMALE,
    }
}
