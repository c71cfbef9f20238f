use clap::{Arg, Command};
use lumina_translate::client::{
    DropOutcome, HttpTranslateClient, PageController, SelectedFile, TranslationState,
};
use lumina_translate::mt::{
    Direction, GeminiProvider, MachineTranslator, MockMode, MockTranslator, decode_document,
    gemini::API_KEY_VAR,
};
use std::env;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("lumina-translate")
        .version("0.1.0")
        .about("Translate .doc/.docx/.txt documents between English and Indonesian")
        .arg(
            Arg::new("file")
                .help("Document to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .short('d')
                .help("Translation direction: en-id or id-en")
                .default_value("en-id"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where to write the translation (default: translated_<name> next to the input)"),
        )
        .arg(
            Arg::new("server")
                .long("server")
                .short('s')
                .help("Translate through a running lumina-translate-web server, e.g. http://127.0.0.1:3000"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Gemini")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("server"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed translation process")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input = PathBuf::from(
        matches
            .get_one::<String>("file")
            .ok_or("missing input file")?,
    );
    let direction = Direction::parse(
        matches
            .get_one::<String>("direction")
            .map(String::as_str)
            .unwrap_or("en-id"),
    )?;
    let server = matches.get_one::<String>("server");
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let file = SelectedFile::from_path(&input)?;
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input, &file));

    if verbose {
        println!("📄 Source: {} ({})", file.name(), file.size_label());
        println!(
            "🌍 {} → {}",
            direction.source_language(),
            direction.target_language()
        );
        println!();
    }

    let mut page = PageController::new();
    page.set_direction(direction);
    if let DropOutcome::Rejected(rejections) = page.pick_files(vec![file]) {
        for rejection in &rejections {
            eprintln!("❌ {}: {}", rejection.file_name, rejection.reason);
        }
        return Err("Unsupported file type".into());
    }

    match server {
        Some(base_url) => translate_via_server(&mut page, base_url, &output, verbose).await,
        None => translate_locally(&page, use_mock, &output, verbose).await,
    }
}

fn default_output(input: &Path, file: &SelectedFile) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(file.translated_name())
}

/// Same flow as the web page: multipart upload, then save the download
async fn translate_via_server(
    page: &mut PageController,
    base_url: &str,
    output: &Path,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpTranslateClient::new(base_url)?;
    if verbose {
        println!("📤 Uploading to {}", client.endpoint());
    }

    page.submit(&client).await;

    match page.state() {
        TranslationState::Success(handle) => {
            handle.save_as(output)?;
            println!("✅ {}", page.status_message());
            println!("💾 Saved {}", output.display());
            Ok(())
        }
        TranslationState::Error(message) => {
            eprintln!("❌ {}", message);
            Err(message.clone().into())
        }
        other => Err(format!("Unexpected state: {}", other.label()).into()),
    }
}

async fn translate_locally(
    page: &PageController,
    use_mock: bool,
    output: &Path,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = page.file().ok_or("no file selected")?;
    let text = decode_document(file.content());

    let translated = if use_mock {
        let mock_translator = MockTranslator::new(MockMode::Suffix);
        mock_translator.translate(&text, page.direction()).await?
    } else {
        if env::var(API_KEY_VAR).is_err() {
            eprintln!("❌ {} environment variable not set", API_KEY_VAR);
            eprintln!("   Set it with: export {}=your_api_key", API_KEY_VAR);
            eprintln!("   Or use --mock to use mock translator");
            return Err("Missing API key".into());
        }

        let provider = GeminiProvider::from_env()?;
        if verbose {
            println!("🤖 {} ({})", provider.provider_name(), provider.model());
        }
        provider.translate(&text, page.direction()).await?
    };

    std::fs::write(output, &translated)?;
    if verbose {
        println!("✅ Translated {} characters", translated.chars().count());
    }
    println!("💾 Saved {}", output.display());
    Ok(())
}
