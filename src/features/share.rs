use crate::features::catalog::NameRecord;

/// Compose the outbound share payload for one name. The host decides the
/// transport (share sheet, clipboard); the core only fixes the text shape.
pub fn compose_share_text(record: &NameRecord) -> String {
    format!(
        "{arabic} ({translit})\n{french}\n{gloss}\n\n{benefits}",
        arabic = record.arabic,
        translit = record.transliteration,
        french = record.french,
        gloss = record.french_gloss,
        benefits = record.benefits,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog;

    #[test]
    fn share_text_carries_all_payload_fields() {
        let record = catalog::name_at(0).unwrap();
        let text = compose_share_text(record);
        assert!(text.contains(record.arabic));
        assert!(text.contains(record.transliteration));
        assert!(text.contains(record.french));
        assert!(text.contains(record.french_gloss));
        assert!(text.contains(record.benefits));
    }

    #[test]
    fn share_text_separates_benefits_paragraph() {
        let record = catalog::name_at(3).unwrap();
        let text = compose_share_text(record);
        assert!(text.contains("\n\n"));
        assert!(text.ends_with(record.benefits));
    }
}
