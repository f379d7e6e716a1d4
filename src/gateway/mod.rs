use crate::form::PressReleaseForm;
use crate::prompt::{self, PromptParts};
use crate::provider::DynModel;
use crate::session::Session;
use crate::wire::Blob;

/// Drives the five remote operations. One attempt per user action, no
/// retries; every error is converted locally into a user-displayable
/// fallback value scoped to that artifact, so nothing propagates out.
pub struct Gateway {
    model: DynModel,
    session: Session,
}

/// Remove markdown code fencing a model may wrap around raw HTML despite
/// instructions.
pub fn strip_fences(code: &str) -> String {
    code.replace("```html", "").replace("```", "")
}

impl Gateway {
    pub fn new(model: DynModel, session: Session) -> Self {
        Gateway { model, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn text_call(&self, stage: &str, parts: &PromptParts) -> anyhow::Result<String> {
        let result = self.model.generate_text(parts).await;
        let logged = match &result {
            Ok(text) => self.session.save_exchange(stage, &parts.text, text),
            Err(e) => self
                .session
                .save_exchange(stage, &parts.text, &format!("<error: {e:#}>")),
        };
        if let Err(e) = logged {
            eprintln!("waarschuwing: transcript niet opgeslagen: {e:#}");
        }
        result
    }

    /// Suggestions for the question the user is stuck on.
    pub async fn suggest(
        &self,
        question_title: &str,
        current_value: &str,
        form: &PressReleaseForm,
    ) -> String {
        let parts = prompt::suggestions(question_title, current_value, form);
        match self.text_call("suggest", &parts).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "Geen suggesties beschikbaar.".to_string(),
            Err(e) => format!("Kan geen suggesties ophalen: {e:#}"),
        }
    }

    /// The full press release. Always yields displayable text; a failure
    /// becomes the body itself so the user can simply retry.
    pub async fn generate(&self, form: &PressReleaseForm) -> String {
        let parts = prompt::press_release(form);
        match self.text_call("generate", &parts).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "Kon geen persbericht genereren.".to_string(),
            Err(e) => format!(
                "Fout bij het genereren van het persbericht.\n\nFoutmelding: {e:#}\n\nProbeer het opnieuw of controleer je uploads."
            ),
        }
    }

    /// Rewrite the current text per the user's instruction. On failure the
    /// current text survives, with the error appended as a marker.
    pub async fn refine(&self, current_text: &str, instruction: &str) -> String {
        let parts = prompt::refine(current_text, instruction);
        match self.text_call("refine", &parts).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => current_text.to_string(),
            Err(e) => format!("{current_text}\n\n[Fout bij aanpassen: {e:#}]"),
        }
    }

    /// Poster generation is two strictly sequential calls: derive the image
    /// prompt from the form, then hand that prompt to the image model. Any
    /// failure on either leg yields the explicit no-result.
    pub async fn poster(&self, form: &PressReleaseForm) -> Option<Blob> {
        let brief_parts = prompt::poster_brief(form);
        let brief = match self.text_call("poster.brief", &brief_parts).await {
            Ok(text) => text,
            Err(_) => return None,
        };
        let image_prompt = if brief.trim().is_empty() {
            prompt::poster_fallback_prompt(form)
        } else {
            brief
        };

        let result = self.model.generate_image(&image_prompt).await;
        let response_note = match &result {
            Ok(Some(blob)) => format!("<inline image: {}>", blob.mime_type),
            Ok(None) => "<no image returned>".to_string(),
            Err(e) => format!("<error: {e:#}>"),
        };
        if let Err(e) = self
            .session
            .save_exchange("poster.image", &image_prompt, &response_note)
        {
            eprintln!("waarschuwing: transcript niet opgeslagen: {e:#}");
        }
        result.ok().flatten()
    }

    /// Single-page promo website. Fencing is stripped from the raw markup;
    /// a failure yields an HTML comment placeholder.
    pub async fn website(&self, form: &PressReleaseForm) -> String {
        let parts = prompt::website(form);
        match self.text_call("website", &parts).await {
            Ok(code) => strip_fences(&code),
            Err(_) => "<!-- Fout bij het genereren van de website -->".to_string(),
        }
    }
}
