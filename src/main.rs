use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use kokua::{
    DocumentIntake, FileConstraints, KeywordAnalyzer, MockDocumentStore, RfpAnalyzer, RfpDocument,
};

#[derive(Parser)]
#[command(name = "kokua")]
#[command(about = "Analyze grant RFP documents and draft applications")]
struct Cli {
    /// Path to the RFP document (.pdf, .docx, .doc)
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Skip the simulated upload step (faster, analysis only)
    #[arg(long)]
    skip_upload: bool,

    /// Override the simulated service latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Launch the desktop app instead of the headless analyzer
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    #[cfg(feature = "gui")]
    if args.gui {
        return Ok(kokua::gui::run()?);
    }

    let Some(document_path) = args.document.as_ref() else {
        anyhow::bail!("No document given; pass a DOCUMENT path or run with --gui");
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(analyze_document(&args, document_path))
}

async fn analyze_document(args: &Cli, document_path: &PathBuf) -> anyhow::Result<()> {
    if args.verbose {
        println!("Loading document: {:?}", document_path);
    }

    let doc = RfpDocument::from_path(document_path)?;

    if args.verbose {
        println!("Document loaded: {} ({:.2} MB)\n", doc.name, doc.size_mb());
    }

    let mut analyzer = KeywordAnalyzer::new();
    let mut store = MockDocumentStore::new();
    if let Some(ms) = args.latency_ms {
        let latency = Duration::from_millis(ms);
        analyzer = analyzer.with_latency(latency);
        store = store.with_latency(latency);
    }

    if args.verbose {
        println!("Running analysis...\n");
    }

    let (analysis, stored_url) = if args.skip_upload {
        let constraints = FileConstraints::default();
        constraints.check(&doc)?;
        (analyzer.analyze(&doc).await?, None)
    } else {
        let intake = DocumentIntake::new(FileConstraints::default(), store, analyzer);
        let outcome = intake.submit(&doc).await?;
        (outcome.analysis, Some(outcome.stored_url))
    };

    println!("\n=== RFP Analysis Results ===");
    if let Some(deadline) = &analysis.deadline {
        println!("Deadline:       {}", deadline);
    }
    if let Some(funding) = &analysis.funding_amount {
        println!("Funding amount: {}", funding);
    }
    if let Some(url) = &stored_url {
        println!("Stored at:      {}", url);
    }

    println!("\nRequirements ({}):", analysis.requirements.len());
    for requirement in &analysis.requirements {
        println!("  - {}", requirement);
    }

    println!("\nFocus areas:");
    for area in &analysis.focus_areas {
        println!("  - {}", area);
    }

    if args.verbose {
        println!("\nKey sections to prepare:");
        for section in &analysis.key_sections {
            println!("  - {}", section);
        }
    }

    Ok(())
}
