use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::form::{PressReleaseForm, QuestionConfig, QUESTIONS};
use crate::ingest::SUPPORTED_EXTENSIONS;

pub fn intro_screen() {
    println!();
    println!("{}", "♪ MusicPR Pro".bold().magenta());
    println!();
    println!("De slimme persbericht generator voor de muziekindustrie.");
    println!("Beantwoord 5 vragen en de AI schrijft een professioneel persbericht");
    println!("voor je release of event.");
    println!();
    println!(
        "{}",
        "Druk op Enter om te starten (of :q om te stoppen)".dimmed()
    );
}

fn progress_line(step: usize) -> String {
    let filled = "█".repeat(step * 6);
    let empty = "░".repeat((5 - step) * 6);
    format!("{}{}  Stap {} van 5", filled, empty, step)
}

pub fn question_screen(q: &QuestionConfig, step: usize, answer: &str, form: &PressReleaseForm) {
    println!();
    println!("{}", progress_line(step).cyan());
    println!();
    println!("{}", q.title.bold());
    println!("{}", q.description);
    println!("{}", q.placeholder.dimmed());
    println!();
    if answer.is_empty() {
        println!("{}", "Nog geen antwoord ingevuld.".dimmed());
    } else {
        println!("{} {}", "Huidig antwoord:".green().bold(), answer);
    }
    upload_badges(form);
    println!();
    println!(
        "{}",
        "Typ je antwoord, of: :s suggesties | :u <pad> upload | Enter volgende | :t terug | :q stoppen"
            .dimmed()
    );
}

fn upload_badges(form: &PressReleaseForm) {
    if form.file_content.is_empty() && form.uploaded_images.is_empty() {
        return;
    }
    let mut badges = Vec::new();
    if !form.file_content.is_empty() {
        badges.push("tekst info".green().to_string());
    }
    for (i, _) in form.uploaded_images.iter().enumerate() {
        badges.push(format!("img {}", i + 1).blue().to_string());
    }
    println!("Uploads: {}", badges.join("  "));
}

pub fn upload_hint() {
    println!("Ondersteund: {}", SUPPORTED_EXTENSIONS.dimmed());
}

pub fn suggestions_panel(text: &str) {
    println!();
    println!("{}", "✦ AI Assistent".bold().yellow());
    for line in text.lines() {
        println!("  {}", line);
    }
    println!();
}

pub fn review_screen(form: &PressReleaseForm) {
    println!();
    println!("{}", "Controleer je antwoorden".bold());
    println!();
    for q in &QUESTIONS {
        let answer = form.answer(q.field);
        println!(
            "{}. {}",
            q.field.position(),
            q.title.magenta().bold()
        );
        if answer.is_empty() {
            println!("   {}", "Geen antwoord ingevuld.".dimmed());
        } else {
            println!("   {}", answer);
        }
    }
    println!();
    println!("{}", "Uploads".magenta().bold());
    println!(
        "   {}",
        if form.file_content.is_empty() {
            "✗ Geen tekstbestand".dimmed().to_string()
        } else {
            "✓ Tekstbestand geüpload".green().to_string()
        }
    );
    println!(
        "   {}",
        if form.uploaded_images.is_empty() {
            "✗ Geen afbeeldingen".dimmed().to_string()
        } else {
            format!("✓ {} afbeelding(en) geüpload", form.uploaded_images.len())
                .green()
                .to_string()
        }
    );
    println!();
    println!(
        "{}",
        "Enter = genereer persbericht | 1-5 = antwoord bewerken | :t terug | :q stoppen".dimmed()
    );
}

pub fn press_release_panel(text: &str) {
    println!();
    println!("{}", "═".repeat(64).dimmed());
    println!("{}", text);
    println!("{}", "═".repeat(64).dimmed());
}

pub fn result_menu() {
    println!();
    println!("{}", "Je persbericht is klaar.".bold().green());
    println!(
        "{}",
        ":r <instructie> verfijn | :p poster | :w website | :s opslaan (.md) | :t toon tekst | :n opnieuw | :q stoppen"
            .dimmed()
    );
}

/// Spinner for every pending remote call.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn read_line(prompt: &str) -> String {
    print!("{} ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_err() {
        return String::new();
    }
    s.trim_end_matches(['\r', '\n']).to_string()
}

pub fn confirm(prompt: &str) -> bool {
    let ans = read_line(&format!("{} [y/N]:", prompt)).to_lowercase();
    ans == "y" || ans == "yes" || ans == "j" || ans == "ja"
}
