use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "presskit", version, about = "Persbericht generator voor de muziekindustrie")]
pub struct Args {
    /// Text-generation model id
    #[arg(long)]
    pub text_model: Option<String>,

    /// Image-generation model id
    #[arg(long)]
    pub image_model: Option<String>,

    /// Output directory for exports and transcripts
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Save every prompt/response exchange as JSON in the session directory
    #[arg(long, default_value_t = false)]
    pub save_transcript: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
