use clap::Parser;
use std::path::Path;

mod artifact;
mod cli;
mod config;
mod errors;
mod export;
mod form;
mod gateway;
mod ingest;
mod prompt;
mod provider;
mod session;
mod ux;
mod wire;
mod wizard;

use artifact::{ArtifactState, GeneratedArtifacts};
use form::{question_for, Field, PressReleaseForm};
use gateway::Gateway;
use wizard::{Wizard, WizardStep};

enum Flow {
    Continue,
    Restart,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let cfg = config::Config::from_args(&args);
    let session = session::Session::new(&cfg.out_dir, cfg.save_transcript);
    if cfg.debug {
        println!("debug: flag enabled");
        session.print_planned_paths();
    }
    let gateway = Gateway::new(provider::make_model(&cfg), session);

    let mut wizard = Wizard::new();
    let mut form = PressReleaseForm::default();

    loop {
        match wizard.step() {
            WizardStep::Intro => {
                ux::intro_screen();
                if ux::read_line(">").trim() == ":q" {
                    break;
                }
                wizard.advance();
            }
            WizardStep::Question(field) => {
                if let Flow::Quit = run_question(field, &mut wizard, &mut form, &gateway).await {
                    break;
                }
            }
            WizardStep::Review => {
                if let Flow::Quit = run_review(&mut wizard, &form) {
                    break;
                }
            }
            WizardStep::Result => match run_result(&form, &gateway).await {
                Flow::Restart => {
                    form.reset();
                    wizard.reset();
                }
                _ => break,
            },
        }
    }
    Ok(())
}

/// One question screen: free text sets the answer; colon commands drive
/// navigation, uploads and suggestions. Answers and uploads survive
/// navigation in both directions.
async fn run_question(
    field: Field,
    wizard: &mut Wizard,
    form: &mut PressReleaseForm,
    gateway: &Gateway,
) -> Flow {
    let q = question_for(field);
    loop {
        ux::question_screen(q, field.position(), form.answer(field), form);
        let input = ux::read_line(">");
        let trimmed = input.trim();
        match trimmed {
            ":q" => return Flow::Quit,
            "" | ":v" => {
                wizard.advance();
                return Flow::Continue;
            }
            ":t" => {
                wizard.retreat();
                return Flow::Continue;
            }
            ":s" => {
                let sp = ux::spinner("Suggesties ophalen...");
                let text = gateway.suggest(q.title, form.answer(field), form).await;
                sp.finish_and_clear();
                ux::suggestions_panel(&text);
            }
            _ if trimmed.starts_with(":u") => {
                let path = trimmed.trim_start_matches(":u").trim();
                if path.is_empty() {
                    ux::upload_hint();
                    continue;
                }
                match ingest::ingest_file(Path::new(path), form) {
                    Ok(ingest::Ingested::Image) => println!("Afbeelding toegevoegd."),
                    Ok(ingest::Ingested::Text) => println!("Tekstbestand geladen."),
                    Err(e) => println!("Upload mislukt: {e:#}"),
                }
            }
            _ => form.set_answer(field, trimmed),
        }
    }
}

fn run_review(wizard: &mut Wizard, form: &PressReleaseForm) -> Flow {
    ux::review_screen(form);
    loop {
        let input = ux::read_line(">");
        let trimmed = input.trim();
        match trimmed {
            ":q" => return Flow::Quit,
            "" => {
                wizard.advance();
                return Flow::Continue;
            }
            ":t" => {
                wizard.retreat();
                return Flow::Continue;
            }
            _ => match trimmed.parse::<usize>().ok().and_then(Field::from_position) {
                Some(field) => {
                    wizard.jump_to(field);
                    return Flow::Continue;
                }
                None => println!("Onbekende keuze."),
            },
        }
    }
}

/// The result view. The press-release text is requested immediately; poster
/// and website only on demand. Each artifact slot fences completions by
/// epoch so a superseded request can never overwrite a newer result.
async fn run_result(form: &PressReleaseForm, gateway: &Gateway) -> Flow {
    let mut artifacts = GeneratedArtifacts::new();

    let epoch = artifacts.text.begin();
    let sp = ux::spinner("Je persbericht wordt geschreven...");
    let text = gateway.generate(form).await;
    sp.finish_and_clear();
    artifacts.text.complete(epoch, text);
    if let Some(text) = artifacts.text.value() {
        ux::press_release_panel(text);
    }

    loop {
        ux::result_menu();
        let input = ux::read_line(">");
        let trimmed = input.trim();
        match trimmed {
            ":q" => return Flow::Quit,
            ":n" => {
                if ux::confirm("Opnieuw beginnen? Alle antwoorden worden gewist.") {
                    return Flow::Restart;
                }
            }
            "" | ":t" => {
                if let Some(text) = artifacts.text.value() {
                    ux::press_release_panel(text);
                }
            }
            ":s" => match artifacts.text.value() {
                Some(text) => match export::save_markdown(gateway.session(), text) {
                    Ok(path) => println!("Opgeslagen: {}", path.display()),
                    Err(e) => println!("Opslaan mislukt: {e:#}"),
                },
                None => println!("Nog geen tekst beschikbaar."),
            },
            ":p" => {
                let epoch = artifacts.poster.begin();
                let sp = ux::spinner("Poster ontwerpen...");
                let result = gateway.poster(form).await;
                sp.finish_and_clear();
                if artifacts.poster.complete(epoch, result) {
                    match artifacts.poster.state() {
                        ArtifactState::Ready(Some(blob)) => {
                            match export::save_poster(gateway.session(), blob) {
                                Ok(path) => println!("Poster opgeslagen: {}", path.display()),
                                Err(e) => {
                                    println!("Poster opslaan mislukt: {e:#}");
                                    println!("{}", export::poster_data_uri(blob));
                                }
                            }
                        }
                        _ => println!("Geen poster ontvangen. Probeer het opnieuw."),
                    }
                }
            }
            ":w" => {
                let epoch = artifacts.website.begin();
                let sp = ux::spinner("Website code schrijven...");
                let code = gateway.website(form).await;
                sp.finish_and_clear();
                if artifacts.website.complete(epoch, code) {
                    if let Some(code) = artifacts.website.value() {
                        match export::save_website(gateway.session(), code) {
                            Ok(path) => println!("Website opgeslagen: {}", path.display()),
                            Err(e) => println!("Website opslaan mislukt: {e:#}"),
                        }
                    }
                }
            }
            _ if trimmed.starts_with(":r") => {
                let instruction = trimmed.trim_start_matches(":r").trim();
                if instruction.is_empty() {
                    println!("Geef een instructie, bijv: :r maak het enthousiaster");
                    continue;
                }
                let current = match artifacts.text.value() {
                    Some(text) => text.clone(),
                    None => continue,
                };
                let epoch = artifacts.text.begin();
                let sp = ux::spinner("Tekst aanpassen...");
                let new_text = gateway.refine(&current, instruction).await;
                sp.finish_and_clear();
                if artifacts.text.complete(epoch, new_text) {
                    if let Some(text) = artifacts.text.value() {
                        ux::press_release_panel(text);
                    }
                }
            }
            _ => println!("Onbekende keuze."),
        }
    }
}
