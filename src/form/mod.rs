use serde::{Deserialize, Serialize};

/// The five answer fields of the press-release questionnaire, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    What,
    Who,
    When,
    Where,
    WhyHow,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::What,
        Field::Who,
        Field::When,
        Field::Where,
        Field::WhyHow,
    ];

    /// One-based position within the questionnaire (step 1..=5 in the UI).
    pub fn position(self) -> usize {
        match self {
            Field::What => 1,
            Field::Who => 2,
            Field::When => 3,
            Field::Where => 4,
            Field::WhyHow => 5,
        }
    }

    pub fn from_position(pos: usize) -> Option<Field> {
        Field::ALL.get(pos.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Option<Field> {
        Field::from_position(self.position() + 1)
    }

    pub fn prev(self) -> Option<Field> {
        Field::from_position(self.position().checked_sub(1)?)
    }
}

/// An image attachment as sent to the provider: declared media type plus
/// base64-encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub mime_type: String,
    pub data: String,
}

/// Everything the user has entered: the five answers, the supplementary text
/// document (last upload wins) and the appended image attachments.
#[derive(Debug, Clone, Default)]
pub struct PressReleaseForm {
    pub what: String,
    pub who: String,
    pub when: String,
    pub where_: String,
    pub why_how: String,
    pub file_content: String,
    pub uploaded_images: Vec<UploadedImage>,
}

impl PressReleaseForm {
    pub fn answer(&self, field: Field) -> &str {
        match field {
            Field::What => &self.what,
            Field::Who => &self.who,
            Field::When => &self.when,
            Field::Where => &self.where_,
            Field::WhyHow => &self.why_how,
        }
    }

    pub fn set_answer(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::What => &mut self.what,
            Field::Who => &mut self.who,
            Field::When => &mut self.when,
            Field::Where => &mut self.where_,
            Field::WhyHow => &mut self.why_how,
        };
        *slot = value.into();
    }

    pub fn push_image(&mut self, image: UploadedImage) {
        self.uploaded_images.push(image);
    }

    pub fn set_file_content(&mut self, text: impl Into<String>) {
        self.file_content = text.into();
    }

    pub fn reset(&mut self) {
        *self = PressReleaseForm::default();
    }
}

/// Static configuration of one wizard question.
pub struct QuestionConfig {
    pub field: Field,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub ai_context: &'static str,
}

pub const QUESTIONS: [QuestionConfig; 5] = [
    QuestionConfig {
        field: Field::What,
        title: "Wat is het nieuws?",
        description: "Beschrijf de kern van het nieuws. Is het een nieuwe single, een album release, een festival of een concert?",
        placeholder: "Bijv: Release van de nieuwe single 'Night Sky'...",
        ai_context: "Focus op de nieuwswaarde. Wat wordt er gelanceerd of aangekondigd?",
    },
    QuestionConfig {
        field: Field::Who,
        title: "Wie zijn de betrokkenen?",
        description: "Om welke artiest, band of organisatie gaat het? Voeg eventueel een korte bio toe.",
        placeholder: "Bijv: DJ X, een opkomende techno producer uit Amsterdam...",
        ai_context: "Wie is de afzender? Wat is hun achtergrond?",
    },
    QuestionConfig {
        field: Field::When,
        title: "Wanneer vindt het plaats?",
        description: "Datum en tijd van de release of het event.",
        placeholder: "Bijv: Vrijdag 24 november 2023, deuren open om 20:00...",
        ai_context: "Tijdsgebonden details.",
    },
    QuestionConfig {
        field: Field::Where,
        title: "Waar vindt het plaats?",
        description: "Locatie, platform (Spotify/Apple Music) of fysiek adres.",
        placeholder: "Bijv: Paradiso, Amsterdam of wereldwijd op alle streamingdiensten...",
        ai_context: "Locatiegegevens.",
    },
    QuestionConfig {
        field: Field::WhyHow,
        title: "Hoe & Waarom?",
        description: "Wat is de achtergrond? Waarom nu? Hoe is het tot stand gekomen? Wat maakt dit uniek?",
        placeholder: "Bijv: Geïnspireerd door de underground scene van Berlijn...",
        ai_context: "Achtergrondverhaal, inspiratie en 'human interest' hoek.",
    },
];

pub fn question_for(field: Field) -> &'static QuestionConfig {
    &QUESTIONS[field.position() - 1]
}
