use clap::Parser;

use namesmith_core::{Choice, NamePipeline, NameRequest, Source};
use namesmith_llm::GeminiClient;

/// Conventional preset values; any other string is treated as a custom
/// entry and validated as such.
const LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "French",
    "Spanish",
    "German",
    "Arabic",
    "Portuguese",
    "Bengali",
    "Japanese",
    "Korean",
];

const TONES: &[&str] = &[
    "Friendly",
    "Professional",
    "Casual",
    "Educational",
    "Playful",
    "Bold",
];

#[derive(Parser, Debug)]
#[command(name = "namesmith")]
#[command(about = "Brandable channel name generator")]
#[command(version)]
struct Cli {
    /// What the channel is about
    #[arg(long, short)]
    description: String,

    /// Output language for the names
    #[arg(long, default_value = "English")]
    language: String,

    /// Tone of the generated names
    #[arg(long, default_value = "Friendly")]
    tone: String,

    /// How many names to generate (5, 10, 15 or 20)
    #[arg(long, default_value = "10")]
    variants: u8,

    /// Ask the model to explain each name
    #[arg(long, default_value = "false")]
    explain: bool,

    /// Gemini API key; without one the procedural generator is used
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    model: String,

    /// Print the result as JSON instead of a plain list
    #[arg(long, default_value = "false")]
    json: bool,
}

fn choice_from(value: String, presets: &[&str]) -> Choice {
    if presets.iter().any(|preset| preset.eq_ignore_ascii_case(&value)) {
        Choice::Preset(value)
    } else {
        Choice::Custom(value)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let remote = cli
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| GeminiClient::new(key).with_model(&cli.model));
    if remote.is_none() {
        log::info!("no API key configured, names will come from the procedural generator");
    }

    let request = NameRequest {
        description: cli.description,
        language: choice_from(cli.language, LANGUAGES),
        tone: choice_from(cli.tone, TONES),
        variant_count: cli.variants,
        explain_meanings: cli.explain,
    };

    let pipeline = NamePipeline::new(remote);
    let result = pipeline.generate(request).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result.source {
        Source::Remote => log::debug!("names generated by the remote model"),
        Source::Fallback => {
            eprintln!("note: using the built-in name generator for these results")
        }
    }
    for (index, candidate) in result.ideas.iter().enumerate() {
        match &candidate.explanation {
            Some(explanation) => println!("{:>2}. {} — {}", index + 1, candidate.text, explanation),
            None => println!("{:>2}. {}", index + 1, candidate.text),
        }
    }

    Ok(())
}
