/// Separator between levels of a raw category path (`Electronics|Phones`).
pub const CATEGORY_DELIMITER: char = '|';

/// Storefront top-level categories and their display labels.
const CATEGORY_TRANSLATIONS: [(&str, &str); 9] = [
    ("Electronics", "Eletrônicos"),
    ("Computers&Accessories", "Informática"),
    ("Home&Kitchen", "Casa e Cozinha"),
    ("OfficeProducts", "Escritório"),
    ("MusicalInstruments", "Instrumentos Musicais"),
    ("Health&PersonalCare", "Saúde e Beleza"),
    ("HomeImprovement", "Ferramentas e Construção"),
    ("Toys&Games", "Brinquedos"),
    ("Car&Motorbike", "Automotivo"),
];

/// First segment of a category path; the whole string when there is no delimiter.
pub fn top_level(raw: &str) -> &str {
    raw.split_once(CATEGORY_DELIMITER)
        .map_or(raw, |(head, _)| head)
}

/// Display label for a top-level category. Unknown categories pass through.
pub fn display_category(top: &str) -> &str {
    CATEGORY_TRANSLATIONS
        .iter()
        .find(|(source, _)| *source == top)
        .map_or(top, |(_, label)| *label)
}
