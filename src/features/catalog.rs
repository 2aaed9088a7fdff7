use crate::state::AppState;
use crate::ui::{maybe_push_back, Button, Card, Column, Grid, Text};
use rust_i18n::t;
use serde_json::{json, Value};

/// One catalog entry. The catalog is static, ordered, and read-only; screens
/// reference entries by position.
pub struct NameRecord {
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub english: &'static str,
    pub french: &'static str,
    pub french_gloss: &'static str,
    pub benefits: &'static str,
}

const fn rec(
    arabic: &'static str,
    transliteration: &'static str,
    english: &'static str,
    french: &'static str,
    french_gloss: &'static str,
    benefits: &'static str,
) -> NameRecord {
    NameRecord {
        arabic,
        transliteration,
        english,
        french,
        french_gloss,
        benefits,
    }
}

pub static NAMES: &[NameRecord] = &[
    rec("الرحمن", "Ar-Rahman", "The Most Gracious", "Le Tout Miséricordieux", "Celui dont la miséricorde embrasse toute chose", "Recited for a soft heart and for mercy that reaches every affair."),
    rec("الرحيم", "Ar-Raheem", "The Most Merciful", "Le Très Miséricordieux", "Celui qui fait miséricorde aux croyants", "Recited after the dawn prayer for safety from hardness of heart."),
    rec("الملك", "Al-Malik", "The King", "Le Souverain", "Le Roi de toute la création", "Recited for dignity, self-restraint and independence from people."),
    rec("القدوس", "Al-Quddus", "The Most Holy", "Le Très Saint", "Celui qui est exempt de tout défaut", "Recited for a heart free of anxiety and blameworthy traits."),
    rec("السلام", "As-Salam", "The Source of Peace", "La Paix", "Celui dont émane toute paix", "Recited over the ill and for a home at peace."),
    rec("المؤمن", "Al-Mu'min", "The Giver of Faith", "Le Fidèle", "Celui qui accorde la sécurité", "Recited for safety from fear and for firmness of faith."),
    rec("المهيمن", "Al-Muhaymin", "The Guardian", "Le Préservateur", "Celui qui veille sur toute chose", "Recited for protection and a luminous inner state."),
    rec("العزيز", "Al-Aziz", "The Almighty", "Le Tout Puissant", "Celui que rien ne peut vaincre", "Recited for honour after humiliation and independence of need."),
    rec("الجبار", "Al-Jabbar", "The Compeller", "Le Contraignant", "Celui qui répare et contraint", "Recited for protection from oppression and for mended affairs."),
    rec("المتكبر", "Al-Mutakabbir", "The Majestic", "Le Superbe", "Celui dont la grandeur est sans pareille", "Recited for rectitude and safety from arrogance."),
    rec("الخالق", "Al-Khaliq", "The Creator", "Le Créateur", "Celui qui crée à partir du néant", "Recited at night for a face made radiant by devotion."),
    rec("البارئ", "Al-Bari", "The Originator", "Le Producteur", "Celui qui façonne sans modèle", "Recited for relief from distress and barren circumstances."),
    rec("المصور", "Al-Musawwir", "The Fashioner", "Le Formateur", "Celui qui donne à chaque chose sa forme", "Recited by those hoping for righteous offspring."),
    rec("الغفار", "Al-Ghaffar", "The Ever-Forgiving", "Le Grand Pardonneur", "Celui qui ne cesse de pardonner", "Recited after the Friday prayer seeking pardon for what has passed."),
    rec("القهار", "Al-Qahhar", "The Subduer", "Le Dominateur", "Celui qui domine toute chose", "Recited to subdue the ego and attachment to the world."),
    rec("الوهاب", "Al-Wahhab", "The Bestower", "Le Donateur", "Celui qui donne sans compter", "Recited in prostration for provision without asking of people."),
    rec("الرزاق", "Ar-Razzaq", "The Provider", "Le Pourvoyeur", "Celui qui pourvoit à toute créature", "Recited before dawn for an opening in one's sustenance."),
    rec("الفتاح", "Al-Fattah", "The Opener", "Celui qui ouvre", "Celui qui ouvre les portes closes", "Recited for victory over difficulty and an opened heart."),
    rec("العليم", "Al-Alim", "The All-Knowing", "L'Omniscient", "Celui dont la science embrasse tout", "Recited for knowledge that benefits and a heart full of light."),
    rec("القابض", "Al-Qabid", "The Withholder", "Celui qui retient", "Celui qui resserre la subsistance", "Recited in want, trusting that withholding carries wisdom."),
    rec("الباسط", "Al-Basit", "The Extender", "Celui qui étend", "Celui qui élargit la subsistance", "Recited with open palms for amplitude after straitness."),
    rec("الخافض", "Al-Khafid", "The Abaser", "Celui qui abaisse", "Celui qui abaisse les orgueilleux", "Recited for safety from the plots of the haughty."),
    rec("الرافع", "Ar-Rafi", "The Exalter", "Celui qui élève", "Celui qui élève qui Il veut", "Recited for rank raised among creation and with the Creator."),
    rec("المعز", "Al-Mu'izz", "The Honourer", "Celui qui rend puissant", "Celui qui accorde l'honneur", "Recited for awe in the eyes of others and honour through obedience."),
    rec("المذل", "Al-Mudhill", "The Humiliator", "Celui qui avilit", "Celui qui rabaisse qui Il veut", "Recited for protection from envious and harmful company."),
    rec("السميع", "As-Sami", "The All-Hearing", "L'Audient", "Celui qui entend toute chose", "Recited on Thursdays for supplications answered."),
    rec("البصير", "Al-Basir", "The All-Seeing", "Le Clairvoyant", "Celui qui voit toute chose", "Recited for insight into one's own deeds and esteem in sight."),
    rec("الحكم", "Al-Hakam", "The Judge", "L'Arbitre", "Celui qui tranche entre les créatures", "Recited at night for a heart drawn to equity."),
    rec("العدل", "Al-Adl", "The Just", "Le Juste", "Celui dont chaque décret est justice", "Recited for fairness in judgement and dealings."),
    rec("اللطيف", "Al-Latif", "The Subtle One", "Le Doux", "Celui qui est bienveillant dans le détail", "Recited in hardship for gentleness hidden inside the decree."),
    rec("الخبير", "Al-Khabir", "The All-Aware", "Le Bien Informé", "Celui qui connaît le fond des choses", "Recited for awareness of the self and freedom from bad habit."),
    rec("الحليم", "Al-Halim", "The Forbearing", "Le Longanime", "Celui qui ne hâte pas le châtiment", "Recited for calm in anger and steadiness in trial."),
    rec("العظيم", "Al-Azim", "The Magnificent", "L'Immense", "Celui dont la grandeur dépasse tout", "Recited for respect and for a heart filled with reverence."),
    rec("الغفور", "Al-Ghafur", "The All-Forgiving", "Le Tout Pardonnant", "Celui qui couvre les fautes", "Recited in illness and grief for pardon and relief."),
    rec("الشكور", "Ash-Shakur", "The Appreciative", "Le Reconnaissant", "Celui qui récompense le peu abondamment", "Recited in fatigue for strength and reward in small deeds."),
    rec("العلي", "Al-Ali", "The Most High", "Le Très Haut", "Celui qui est au-dessus de tout", "Recited for elevation in faith and affairs."),
    rec("الكبير", "Al-Kabir", "The Most Great", "Le Très Grand", "Celui dont la grandeur est absolue", "Recited for esteem founded on knowledge and humility."),
    rec("الحفيظ", "Al-Hafiz", "The Preserver", "Le Gardien", "Celui qui garde et protège", "Recited for protection of self, family and what is entrusted."),
    rec("المقيت", "Al-Muqit", "The Sustainer", "Le Nourricier", "Celui qui attribue à chacun sa part", "Recited for sufficiency and good character in the household."),
    rec("الحسيب", "Al-Hasib", "The Reckoner", "Celui qui compte", "Celui qui suffit à Ses serviteurs", "Recited against fear of people: sufficient is He as reckoner."),
    rec("الجليل", "Al-Jalil", "The Majestic", "Le Majestueux", "Celui qui possède majesté et grandeur", "Recited for dignity in bearing and speech."),
    rec("الكريم", "Al-Karim", "The Generous", "Le Généreux", "Celui dont la générosité précède la demande", "Recited before sleep for esteem and an open hand."),
    rec("الرقيب", "Ar-Raqib", "The Watchful", "Le Vigilant", "Celui qui observe toute chose", "Recited for mindfulness in private as in public."),
    rec("المجيب", "Al-Mujib", "The Responsive", "Celui qui exauce", "Celui qui répond à qui L'invoque", "Recited with supplication, in hope of a swift answer."),
    rec("الواسع", "Al-Wasi", "The All-Encompassing", "Le Vaste", "Celui dont la largesse n'a pas de limite", "Recited in straitened means for contentment and expansion."),
    rec("الحكيم", "Al-Hakim", "The All-Wise", "Le Sage", "Celui qui place chaque chose à sa place", "Recited for sound judgement in knotted affairs."),
    rec("الودود", "Al-Wadud", "The Loving", "Le Bien-Aimant", "Celui qui aime Ses serviteurs", "Recited for affection between hearts and mended bonds."),
    rec("المجيد", "Al-Majid", "The Glorious", "Le Glorieux", "Celui dont la gloire est parfaite", "Recited for a name held in honour."),
    rec("الباعث", "Al-Ba'ith", "The Resurrector", "Celui qui ressuscite", "Celui qui ramène les morts à la vie", "Recited for a heart revived from heedlessness."),
    rec("الشهيد", "Ash-Shahid", "The Witness", "Le Témoin", "Celui à qui rien n'échappe", "Recited for truthfulness, for nothing is hidden from Him."),
    rec("الحق", "Al-Haqq", "The Truth", "Le Vrai", "Celui dont l'existence est la vérité même", "Recited for steadfastness upon truth and recovery of what is lost."),
    rec("الوكيل", "Al-Wakil", "The Trustee", "Le Garant", "Celui à qui l'on confie toute affaire", "Recited in fear of storm or ruin, entrusting the outcome."),
    rec("القوي", "Al-Qawiyy", "The Most Strong", "Le Fort", "Celui dont la force est totale", "Recited in weakness before a task beyond one's strength."),
    rec("المتين", "Al-Matin", "The Firm", "L'Inébranlable", "Celui que rien n'affaiblit", "Recited for endurance in worship and work."),
    rec("الولي", "Al-Waliyy", "The Protecting Friend", "Le Très Proche", "L'allié des croyants", "Recited for rightened affairs and trustworthy company."),
    rec("الحميد", "Al-Hamid", "The Praiseworthy", "Le Digne de Louange", "Celui que toute chose loue", "Recited for speech and deeds that deserve praise."),
    rec("المحصي", "Al-Muhsi", "The Accounter", "Celui qui dénombre", "Celui qui tient le compte de tout", "Recited for order in scattered obligations."),
    rec("المبدئ", "Al-Mubdi", "The Originator", "Celui qui commence", "Celui qui donne l'origine à tout", "Recited at the start of an undertaking."),
    rec("المعيد", "Al-Mu'id", "The Restorer", "Celui qui ramène", "Celui qui redonne l'existence", "Recited for the return of what has gone away."),
    rec("المحيي", "Al-Muhyi", "The Giver of Life", "Celui qui fait vivre", "Celui qui donne la vie", "Recited over what seems dead in oneself or one's land."),
    rec("المميت", "Al-Mumit", "The Bringer of Death", "Celui qui fait mourir", "Celui qui fait mourir toute créature", "Recited to subdue the ego and remember the return."),
    rec("الحي", "Al-Hayy", "The Ever-Living", "Le Vivant", "Celui qui ne meurt jamais", "Recited in sickness for vigour of body and heart."),
    rec("القيوم", "Al-Qayyum", "The Self-Subsisting", "L'Immuable", "Celui par qui tout subsiste", "Recited with Al-Hayy against sloth and despair."),
    rec("الواجد", "Al-Wajid", "The Finder", "Celui qui trouve", "Celui à qui rien ne manque", "Recited for richness of heart over richness of goods."),
    rec("الماجد", "Al-Majid", "The Noble", "Le Noble", "Celui dont la munificence est totale", "Recited for openhandedness and honoured speech."),
    rec("الواحد", "Al-Wahid", "The One", "L'Unique", "Celui qui n'a pas d'associé", "Recited in solitude for a heart emptied of fear of creation."),
    rec("الأحد", "Al-Ahad", "The Unique", "L'Un", "Celui qui est un en Son essence", "Recited for sincerity unmixed with show."),
    rec("الصمد", "As-Samad", "The Eternal Refuge", "Le Soutien universel", "Celui dont tout dépend", "Recited in need, for He is sought and needs none."),
    rec("القادر", "Al-Qadir", "The All-Powerful", "Le Puissant", "Celui qui a pouvoir sur tout", "Recited before what seems impossible."),
    rec("المقتدر", "Al-Muqtadir", "The Omnipotent", "Le Très Puissant", "Celui dont le pouvoir s'impose", "Recited for awareness that every means is His."),
    rec("المقدم", "Al-Muqaddim", "The Expediter", "Celui qui avance", "Celui qui met en avant qui Il veut", "Recited when advancing on a matter of moment."),
    rec("المؤخر", "Al-Mu'akhkhir", "The Delayer", "Celui qui recule", "Celui qui retarde ce qu'Il veut", "Recited for patience when what is hoped for is delayed."),
    rec("الأول", "Al-Awwal", "The First", "Le Premier", "Celui qui précède toute chose", "Recited at firsts: journeys, works, and children."),
    rec("الآخر", "Al-Akhir", "The Last", "Le Dernier", "Celui qui demeure après toute chose", "Recited for an end sealed with good."),
    rec("الظاهر", "Az-Zahir", "The Manifest", "L'Apparent", "Celui qui se manifeste par Ses signes", "Recited for eyes opened to the signs in creation."),
    rec("الباطن", "Al-Batin", "The Hidden", "Le Caché", "Celui que les regards ne saisissent pas", "Recited for the inward life of the heart."),
    rec("الوالي", "Al-Wali", "The Governor", "Le Maître", "Celui qui administre toute chose", "Recited over a household for right governance."),
    rec("المتعالي", "Al-Muta'ali", "The Most Exalted", "Le Sublime", "Celui qui transcende toute chose", "Recited for deliverance from debasing states."),
    rec("البر", "Al-Barr", "The Source of Goodness", "Le Bienfaisant", "Celui dont la bonté est constante", "Recited over one's children for piety and kindness."),
    rec("التواب", "At-Tawwab", "The Acceptor of Repentance", "L'Accueillant au repentir", "Celui qui revient sans cesse vers le pécheur", "Recited after a lapse; the door of return stays open."),
    rec("المنتقم", "Al-Muntaqim", "The Avenger", "Le Vengeur", "Celui qui rétribue les injustes", "Recited by the wronged who cannot right themselves."),
    rec("العفو", "Al-Afuww", "The Pardoner", "Celui qui efface", "Celui qui efface les péchés", "Recited in the last nights for sins erased, not merely covered."),
    rec("الرؤوف", "Ar-Ra'uf", "The Compassionate", "Le Très Bienveillant", "Celui dont la tendresse précède", "Recited for gentleness toward those under one's care."),
    rec("مالك الملك", "Malik-ul-Mulk", "The Owner of Sovereignty", "Le Possesseur du Royaume", "Celui qui donne et retire la royauté", "Recited for contentment with one's lot in fortune's turning."),
    rec("ذو الجلال والإكرام", "Dhul-Jalali wal-Ikram", "The Lord of Majesty and Generosity", "Le Détenteur de la Majesté", "Celui qui réunit majesté et largesse", "Recited persistently in supplication; it is among the weightiest pleas."),
    rec("المقسط", "Al-Muqsit", "The Equitable", "L'Équitable", "Celui qui rend justice sans léser", "Recited for fairness when dividing or arbitrating."),
    rec("الجامع", "Al-Jami", "The Gatherer", "Le Rassembleur", "Celui qui réunit ce qui est dispersé", "Recited for scattered family or affairs brought together."),
    rec("الغني", "Al-Ghaniyy", "The Self-Sufficient", "Le Riche", "Celui qui n'a besoin de rien", "Recited for independence of heart from what hands hold."),
    rec("المغني", "Al-Mughni", "The Enricher", "Celui qui enrichit", "Celui qui confère la suffisance", "Recited for enrichment that does no harm."),
    rec("المانع", "Al-Mani", "The Preventer", "Le Défenseur", "Celui qui retient ce qu'Il veut", "Recited for protection from what harms body and faith."),
    rec("الضار", "Ad-Darr", "The Distresser", "Celui qui peut nuire", "Celui par la volonté de qui atteint le mal", "Recited to remember that harm too runs only by His leave."),
    rec("النافع", "An-Nafi", "The Benefactor", "Celui qui accorde le profit", "Celui par qui parvient tout bien", "Recited before medicine, planting and trade."),
    rec("النور", "An-Nur", "The Light", "La Lumière", "Celui qui illumine les cieux et la terre", "Recited for light in the heart, the face and the grave."),
    rec("الهادي", "Al-Hadi", "The Guide", "Le Guide", "Celui qui guide qui Il veut", "Recited for guidance for oneself and one's children."),
    rec("البديع", "Al-Badi", "The Incomparable", "L'Inventeur", "Celui qui crée sans précédent", "Recited in perplexity, when no way forward is known."),
    rec("الباقي", "Al-Baqi", "The Everlasting", "Le Permanent", "Celui qui demeure quand tout passe", "Recited in loss: what is with Him remains."),
    rec("الوارث", "Al-Warith", "The Inheritor", "L'Héritier", "Celui à qui tout revient", "Recited for a legacy of good works over goods."),
    rec("الرشيد", "Ar-Rashid", "The Guide to Right Conduct", "Celui qui agit avec droiture", "Celui qui dirige vers le droit chemin", "Recited for sound planning and a right course."),
    rec("الصبور", "As-Sabur", "The Patient", "Le Patient", "Celui qui ne hâte rien", "Recited in trial for patience like His, without haste."),
];

pub fn name_at(index: usize) -> Option<&'static NameRecord> {
    NAMES.get(index)
}

pub fn render_catalog_screen(state: &AppState) -> Value {
    let locale = &state.locale;

    let tiles: Vec<Value> = NAMES
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let label = format!("{}. {}", i + 1, record.transliteration);
            serde_json::to_value(
                Button::new(&label, "name_open")
                    .payload(json!({ "index": i.to_string() }))
                    .content_description(record.arabic),
            )
            .unwrap()
        })
        .collect();

    let mut children = vec![
        serde_json::to_value(Text::new(&t!("browse_names", locale = locale)).size(20.0)).unwrap(),
        serde_json::to_value(
            Grid::new(tiles)
                .columns(2)
                .padding(8)
                .content_description("name_grid"),
        )
        .unwrap(),
    ];
    maybe_push_back(&mut children, state);

    serde_json::to_value(Column::new(children).padding(16).scrollable(true)).unwrap()
}

pub fn render_detail_screen(state: &AppState) -> Value {
    let locale = &state.locale;

    let Some(record) = state.selected_name.and_then(name_at) else {
        // Missing context degrades to a hint, never an error screen.
        let mut children = vec![
            serde_json::to_value(
                Text::new(&t!("detail_no_selection", locale = locale)).size(14.0),
            )
            .unwrap(),
            serde_json::to_value(
                Button::new(&t!("browse_names", locale = locale), "catalog_screen"),
            )
            .unwrap(),
        ];
        maybe_push_back(&mut children, state);
        return serde_json::to_value(Column::new(children).padding(24)).unwrap();
    };

    let share_text = crate::features::share::compose_share_text(record);
    let mut children = vec![
        serde_json::to_value(Text::new(record.arabic).arabic().size(40.0)).unwrap(),
        serde_json::to_value(Text::new(record.transliteration).size(20.0)).unwrap(),
        serde_json::to_value(Text::new(record.english).size(16.0)).unwrap(),
        serde_json::to_value(Text::new(record.french).size(16.0)).unwrap(),
        serde_json::to_value(Text::new(record.french_gloss).size(13.0)).unwrap(),
        serde_json::to_value(
            Card::new(vec![
                serde_json::to_value(Text::new(record.benefits).size(14.0)).unwrap()
            ])
            .title(&t!("detail_benefits", locale = locale))
            .padding(12),
        )
        .unwrap(),
        serde_json::to_value(
            Button::new(&t!("tasbeeh", locale = locale), "tally_screen").id("detail_tally"),
        )
        .unwrap(),
        serde_json::to_value(
            Button::new(&t!("listen", locale = locale), "audio_open").id("detail_listen"),
        )
        .unwrap(),
        serde_json::to_value(
            Button::new(&t!("share", locale = locale), "share_name").id("detail_share"),
        )
        .unwrap(),
        serde_json::to_value(
            Button::new(&t!("copy", locale = locale), "noop")
                .copy_text(&share_text)
                .id("detail_copy"),
        )
        .unwrap(),
    ];
    maybe_push_back(&mut children, state);

    serde_json::to_value(Column::new(children).padding(20).scrollable(true)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_ninety_nine_names() {
        assert_eq!(NAMES.len(), 99);
    }

    #[test]
    fn every_record_is_fully_populated() {
        for record in NAMES {
            assert!(!record.arabic.is_empty());
            assert!(!record.transliteration.is_empty());
            assert!(!record.english.is_empty());
            assert!(!record.french.is_empty());
            assert!(!record.french_gloss.is_empty());
            assert!(!record.benefits.is_empty());
        }
    }

    #[test]
    fn name_at_is_bounds_checked() {
        assert!(name_at(0).is_some());
        assert!(name_at(98).is_some());
        assert!(name_at(99).is_none());
    }

    #[test]
    fn first_and_last_names_are_in_order() {
        assert_eq!(NAMES[0].transliteration, "Ar-Rahman");
        assert_eq!(NAMES[98].transliteration, "As-Sabur");
    }
}
