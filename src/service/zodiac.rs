use chrono::Datelike;

use crate::model::zodiac_sign::ZodiacSign;

/// Curated display order, five per sign.
static SIGN_TRAITS: [(ZodiacSign, [&str; 5]); 12] = [
    (
        ZodiacSign::Aries,
        ["Corajoso", "Determinado", "Confiante", "Entusiasta", "Impulsivo"],
    ),
    (
        ZodiacSign::Taurus,
        ["Determinado", "Leal", "Paciente", "Sensual", "Pratico"],
    ),
    (
        ZodiacSign::Gemini,
        ["Comunicativo", "Curioso", "Adaptavel", "Inteligente", "Versatil"],
    ),
    (
        ZodiacSign::Cancer,
        ["Emotivo", "Protetor", "Intuitivo", "Leal", "Sensivel"],
    ),
    (
        ZodiacSign::Leo,
        ["Criativo", "Generoso", "Carismatico", "Confiante", "Orgulhoso"],
    ),
    (
        ZodiacSign::Virgo,
        ["Analitico", "Trabalhador", "Pratico", "Detalhista", "Modesto"],
    ),
    (
        ZodiacSign::Libra,
        ["Diplomatico", "Justo", "Sociavel", "Charmoso", "Indeciso"],
    ),
    (
        ZodiacSign::Scorpio,
        ["Intenso", "Apaixonado", "Determinado", "Misterioso", "Leal"],
    ),
    (
        ZodiacSign::Sagittarius,
        ["Aventureiro", "Otimista", "Independente", "Filosofico", "Sincero"],
    ),
    (
        ZodiacSign::Capricorn,
        ["Responsavel", "Disciplinado", "Ambicioso", "Pratico", "Paciente"],
    ),
    (
        ZodiacSign::Aquarius,
        ["Original", "Independente", "Humanitario", "Inventivo", "Rebelde"],
    ),
    (
        ZodiacSign::Pisces,
        ["Intuitivo", "Compassivo", "Artistico", "Sonhador", "Sensivel"],
    ),
];

fn within(month: u32, day: u32, start: (u32, u32), end: (u32, u32)) -> bool {
    (month == start.0 && day >= start.1) || (month == end.0 && day <= end.1)
}

/// Resolve the sun sign from month and day, the year is ignored.
pub fn sign_from_date<D: Datelike>(date: &D) -> ZodiacSign {
    let (month, day) = (date.month(), date.day());
    if within(month, day, (3, 21), (4, 19)) {
        ZodiacSign::Aries
    } else if within(month, day, (4, 20), (5, 20)) {
        ZodiacSign::Taurus
    } else if within(month, day, (5, 21), (6, 20)) {
        ZodiacSign::Gemini
    } else if within(month, day, (6, 21), (7, 22)) {
        ZodiacSign::Cancer
    } else if within(month, day, (7, 23), (8, 22)) {
        ZodiacSign::Leo
    } else if within(month, day, (8, 23), (9, 22)) {
        ZodiacSign::Virgo
    } else if within(month, day, (9, 23), (10, 22)) {
        ZodiacSign::Libra
    } else if within(month, day, (10, 23), (11, 21)) {
        ZodiacSign::Scorpio
    } else if within(month, day, (11, 22), (12, 21)) {
        ZodiacSign::Sagittarius
    } else if within(month, day, (12, 22), (1, 19)) {
        ZodiacSign::Capricorn
    } else if within(month, day, (1, 20), (2, 18)) {
        ZodiacSign::Aquarius
    } else {
        ZodiacSign::Pisces
    }
}

pub fn traits_from_sign(sign: ZodiacSign) -> &'static [&'static str] {
    SIGN_TRAITS
        .iter()
        .find(|(item, _)| *item == sign)
        .map(|(_, traits)| traits.as_slice())
        .unwrap_or(&[])
}

/// Lookup by lowercase sign id. Unknown ids give an empty list.
pub fn traits_from_sign_id(sign_id: &str) -> &'static [&'static str] {
    match sign_id.parse::<ZodiacSign>() {
        Ok(sign) => traits_from_sign(sign),
        Err(_) => &[],
    }
}

pub fn owned_traits(sign: ZodiacSign) -> Vec<String> {
    traits_from_sign(sign)
        .iter()
        .map(|item| item.to_string())
        .collect()
}
