use crate::form::{PressReleaseForm, UploadedImage};

/// Fixed terminating string every generated press release must end with.
pub const SENTINEL: &str = "EINDE PERSBERICHT";

/// An assembled instruction for the provider: ordered image attachments
/// (always preceding the text) plus exactly one instruction string.
/// Assembly is pure, so the text can be golden-tested without any remote
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    pub images: Vec<UploadedImage>,
    pub text: String,
}

impl PromptParts {
    fn with_images(form: &PressReleaseForm, text: String) -> Self {
        PromptParts {
            images: form.uploaded_images.clone(),
            text,
        }
    }

    fn text_only(text: String) -> Self {
        PromptParts {
            images: Vec::new(),
            text,
        }
    }
}

fn answered_context(form: &PressReleaseForm) -> String {
    let mut ctx = String::new();
    if !form.file_content.is_empty() {
        ctx.push_str(&format!(
            "CONTEXT DOCUMENT (Bio/Info):\n{}\n\n",
            form.file_content
        ));
    }
    ctx.push_str("HUIDIGE ANTWOORDEN:\n");
    if !form.what.is_empty() {
        ctx.push_str(&format!("- Wat: {}\n", form.what));
    }
    if !form.who.is_empty() {
        ctx.push_str(&format!("- Wie: {}\n", form.who));
    }
    if !form.when.is_empty() {
        ctx.push_str(&format!("- Wanneer: {}\n", form.when));
    }
    if !form.where_.is_empty() {
        ctx.push_str(&format!("- Waar: {}\n", form.where_));
    }
    ctx
}

/// Three short inspiration points for the question the user is stuck on.
pub fn suggestions(
    question_title: &str,
    current_value: &str,
    form: &PressReleaseForm,
) -> PromptParts {
    let text = format!(
        r#"{context}

TAAK:
De gebruiker is een persbericht aan het schrijven voor een muziekevent of release.
De gebruiker zit vast bij de vraag over: "{question_title}".
Het huidige (incomplete) antwoord is: "{current_value}".

(Indien er afbeeldingen zijn geüpload, gebruik de visuele informatie hieruit ook als context, bijvoorbeeld voor een playlist of sfeer impressie).

Geef 3 korte, puntsgewijze suggesties of inspiratiepunten die de gebruiker kan gebruiken om deze vraag te beantwoorden.
Baseer je op de context (indien aanwezig) of verzin plausibele suggesties voor een muziek-persbericht.
Schrijf direct tegen de gebruiker. Houd het kort."#,
        context = answered_context(form),
    );
    PromptParts::with_images(form, text)
}

/// The full six-section press-release instruction, sentinel included.
pub fn press_release(form: &PressReleaseForm) -> PromptParts {
    let file_context = if form.file_content.is_empty() {
        "Geen"
    } else {
        form.file_content.as_str()
    };
    let text = format!(
        r#"Je bent een senior copywriter gespecialiseerd in de muziekindustrie en events.

OPDRACHT:
Maak een strak opgemaakt Markdown-document (Persbericht) voor: {what}.

ONDERDELEN:
1. KOP (Creatieve titel)
2. LEAD (De 5 W's in het kort, vetgedrukt of cursief)
3. HET VERHAAL (Achtergrond, waarom nu, sfeer, quotes)
4. PRAKTISCHE DETAILS (Gebruik een tabel of lijst voor Datum, Tijd, Locatie, Tickets)
5. OVER DE ARTIEST/ORGANISATIE (Boilerplate)
6. CONTACT (Placeholder)

INFORMATIE VAN GEBRUIKER:
- WAT: {what}
- WIE: {who}
- WANNEER: {when}
- WAAR: {where_}
- HOE & WAAROM: {why_how}

EXTRA CONTEXT (tekst): {file_context}
EXTRA CONTEXT (beeld): Zie bijlagen (gebruik sfeer/inhoud indien aanwezig).

STIJLRICHTLIJNEN VOOR MARKDOWN:
- Gebruik duidelijke headings (# voor Titel, ## voor secties, ### voor subsecties).
- Voeg overzichtelijke bullet points toe waar logisch (bijv. voor features, setlist, of redenen).
- Gebruik geneste lijstjes voor details.
- Gebruik **vette tekst** voor belangrijke namen, data, locaties en kernwoorden.
- Voeg blokquotes (>) toe voor quotes of de belangrijkste 'hook'.
- Houd de layout luchtig en goed scanbaar (gebruik witregels).
- Voeg waar passend een Markdown-tabel toe (bijvoorbeeld voor tourdata of ticketprijzen).
- Gebruik geen overbodige tekst: kort, UX-gericht en helder.
- Taal: Nederlands.

Output als pure Markdown zonder extra uitleg. Sluit af met "{sentinel}"."#,
        what = form.what,
        who = form.who,
        when = form.when,
        where_ = form.where_,
        why_how = form.why_how,
        file_context = file_context,
        sentinel = SENTINEL,
    );
    PromptParts::with_images(form, text)
}

/// Rewrite request for the current press release; conventions and sentinel
/// must survive the rewrite. Takes no image attachments.
pub fn refine(current_text: &str, instruction: &str) -> PromptParts {
    let text = format!(
        r#"Je bent een senior copywriter / editor.

HUIDIGE TEKST (Markdown):
{current_text}

INSTRUCTIE VAN DE GEBRUIKER:
{instruction}

OPDRACHT:
Herschrijf de tekst (of delen ervan) om te voldoen aan de instructie.

STIJLRICHTLIJNEN:
- Behoud de strakke Markdown opmaak (Headings, Bullets, **Vet**, > Quotes).
- Zorg dat tabellen behouden blijven of toegevoegd worden waar relevant.
- Houd de layout luchtig.
- Sluit af met "{sentinel}".

Output alleen de volledige, aangepaste Markdown tekst."#,
        current_text = current_text,
        instruction = instruction,
        sentinel = SENTINEL,
    );
    PromptParts::text_only(text)
}

fn poster_context(form: &PressReleaseForm) -> String {
    format!(
        r#"Artist: {who}
Event/Release: {what}
Date/Time: {when}
Location: {where_}
Vibe/Backstory: {why_how}
Files/Playlist content: {files}

Reference Images provided: {refs}"#,
        who = form.who,
        what = form.what,
        when = form.when,
        where_ = form.where_,
        why_how = form.why_how,
        files = if form.file_content.is_empty() {
            "No specific text info"
        } else {
            form.file_content.as_str()
        },
        refs = if form.uploaded_images.is_empty() {
            "No."
        } else {
            "Yes, see attached."
        },
    )
}

/// Intermediate request: ask the text model to write the English prompt the
/// image model will receive.
pub fn poster_brief(form: &PressReleaseForm) -> PromptParts {
    let text = format!(
        r#"Create a detailed image generation prompt for a music concert/release POSTER based on the provided info and attached images (if any).

CONTEXT INFO:
{context}

REQUIREMENTS:
- Type: Professional Music Poster / Flyer.
- VISUAL STYLE: Festival atmosphere, live music stage, pop venue, energetic lighting, concert photography style or high-end graphic design.
- MUST INCLUDE VISIBLE TEXT ELEMENTS:
    1. Artist Name: "{who}"
    2. Date & Time: "{when}"
    3. Location: "{where_}"
- Include a visual element that clearly looks like a QR code (scannable look).
- Include a text list or graphic element representing a 'playlist' or 'setlist'. If the attached images contain a playlist, extract 2-3 song titles to feature on the poster.
- Artistic style: Matches the vibe described but emphasized towards a LIVE EVENT / FESTIVAL / POP STAGE setting.
- Composition: Vertical poster format, bold typography, high contrast for text readability.
- Output: JUST the English prompt for the image generator."#,
        context = poster_context(form),
        who = form.who,
        when = form.when,
        where_ = form.where_,
    );
    PromptParts::with_images(form, text)
}

/// Literal fallback used when the brief call yields no text.
pub fn poster_fallback_prompt(form: &PressReleaseForm) -> String {
    format!(
        "A music poster for {who}, {what}, at {where_} on {when}. distinctive typography, festival style, live stage, qr code element, setlist, text info",
        who = form.who,
        what = form.what,
        where_ = form.where_,
        when = form.when,
    )
}

/// Single-page promo website: raw HTML5 only, Tailwind via CDN, no fencing.
pub fn website(form: &PressReleaseForm) -> PromptParts {
    let text = format!(
        r#"Je bent een expert frontend developer.

CONTEXT:
Maak een moderne, responsieve 'single-page' promotie website voor een muziekevent of release.
Het design moet 'dark mode', strak en professioneel zijn (denk aan Resident Advisor of Spotify landingspagina's).

DATA:
- Titel: {what}
- Artiest/Organisatie: {who}
- Datum: {when}
- Locatie: {where_}
- Info: {why_how}

TECHNISCHE EISEN:
1. Gebruik HTML5.
2. Gebruik Tailwind CSS via CDN: <script src="https://cdn.tailwindcss.com"></script>
3. Gebruik Google Fonts (Inter of Roboto).
4. Zorg voor een 'Hero' sectie met een placeholder voor een achtergrondafbeelding (gebruik een donkere placeholder color).
5. Zorg voor een duidelijke sectie met de datum, tijd en locatie.
6. Voeg een placeholder toe voor een 'Ticket' of 'Pre-save' knop.
7. Voeg een footer toe.
8. Geef ALLEEN de rauwe HTML code terug. Geen markdown blocks (```), geen uitleg. Begin direct met <!DOCTYPE html>."#,
        what = form.what,
        who = form.who,
        when = form.when,
        where_ = form.where_,
        why_how = form.why_how,
    );
    PromptParts::text_only(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn filled_form() -> PressReleaseForm {
        let mut form = PressReleaseForm::default();
        form.set_answer(Field::What, "Release X");
        form.set_answer(Field::Who, "Artist Y");
        form.set_answer(Field::When, "Friday");
        form.set_answer(Field::Where, "Venue Z");
        form.set_answer(Field::WhyHow, "Reason");
        form
    }

    #[test]
    fn press_release_embeds_all_answers_and_sections() {
        let parts = press_release(&filled_form());
        for needle in ["Release X", "Artist Y", "Friday", "Venue Z", "Reason"] {
            assert!(parts.text.contains(needle), "missing {needle}");
        }
        for section in [
            "1. KOP",
            "2. LEAD",
            "3. HET VERHAAL",
            "4. PRAKTISCHE DETAILS",
            "5. OVER DE ARTIEST/ORGANISATIE",
            "6. CONTACT",
        ] {
            assert!(parts.text.contains(section), "missing {section}");
        }
        assert!(parts.text.contains(SENTINEL));
        assert!(parts.images.is_empty());
    }

    #[test]
    fn press_release_without_file_says_geen() {
        let parts = press_release(&filled_form());
        assert!(parts.text.contains("EXTRA CONTEXT (tekst): Geen"));
    }

    #[test]
    fn press_release_attaches_uploaded_images() {
        let mut form = filled_form();
        form.push_image(UploadedImage {
            mime_type: "image/jpeg".into(),
            data: "Zm9v".into(),
        });
        let parts = press_release(&form);
        assert_eq!(parts.images.len(), 1);
        assert_eq!(parts.images[0].mime_type, "image/jpeg");
    }

    #[test]
    fn refine_embeds_text_and_instruction_verbatim() {
        let prior = format!("# Kop\n\nInhoud.\n\n{SENTINEL}");
        let parts = refine(&prior, "make it shorter");
        assert!(parts.text.contains(&prior));
        assert!(parts.text.contains("make it shorter"));
        assert!(parts.text.contains(&format!("Sluit af met \"{SENTINEL}\"")));
        assert!(parts.images.is_empty());
    }

    #[test]
    fn suggestions_carry_prior_answers_and_partial_value() {
        let mut form = PressReleaseForm::default();
        form.set_answer(Field::What, "Albumrelease");
        form.set_file_content("bio van de band");
        let parts = suggestions("Wie zijn de betrokkenen?", "DJ ", &form);
        assert!(parts.text.contains("- Wat: Albumrelease"));
        assert!(!parts.text.contains("- Wie:"));
        assert!(parts.text.contains("bio van de band"));
        assert!(parts.text.contains("\"Wie zijn de betrokkenen?\""));
        assert!(parts.text.contains("\"DJ \""));
    }

    #[test]
    fn poster_brief_requires_visible_text_and_motifs() {
        let parts = poster_brief(&filled_form());
        assert!(parts.text.contains("Artist Name: \"Artist Y\""));
        assert!(parts.text.contains("Date & Time: \"Friday\""));
        assert!(parts.text.contains("Location: \"Venue Z\""));
        assert!(parts.text.contains("QR code"));
        assert!(parts.text.contains("setlist"));
    }

    #[test]
    fn poster_fallback_mentions_the_event() {
        let p = poster_fallback_prompt(&filled_form());
        assert!(p.contains("Artist Y"));
        assert!(p.contains("Venue Z"));
    }

    #[test]
    fn website_demands_raw_doctype_output() {
        let parts = website(&filled_form());
        assert!(parts.text.contains("<!DOCTYPE html>"));
        assert!(parts.text.contains("cdn.tailwindcss.com"));
        assert!(parts.images.is_empty());
    }

    #[test]
    fn assembly_is_deterministic() {
        let form = filled_form();
        assert_eq!(press_release(&form), press_release(&form));
        assert_eq!(website(&form), website(&form));
    }
}
