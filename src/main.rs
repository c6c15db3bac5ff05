use anyhow::Result;
use biohop::{output, resolve, Config, SparqlClient};
use clap::Parser;

/// Multi-hop biographical question answering over DBpedia.
///
/// Walks the graph one relation at a time from the starting entity,
/// branching on every value returned at each hop.
///
/// Example: biohop "George H. W. Bush" child birthPlace areaCode
#[derive(Parser, Debug)]
#[command(name = "biohop", version)]
struct Args {
    /// Starting entity: a name ("Barack Obama") or a full resource link
    entity: String,

    /// Ordered relation names to traverse, e.g. child birthPlace areaCode
    #[arg(required = true)]
    relations: Vec<String>,

    /// Print the answer tree as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print only the final answers, one per line
    #[arg(long, conflicts_with = "json")]
    flat: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();

    let config = Config::load()?;
    let client = SparqlClient::new(&config);

    log::info!(
        "Resolving <{}> over path [{}]",
        args.entity,
        args.relations.join(" ")
    );

    let tree = resolve(&client, &args.entity, &args.relations).await;

    if args.json {
        println!("{}", output::to_json(&tree)?);
    } else if args.flat {
        for answer in tree.flatten() {
            println!("{}", answer);
        }
    } else {
        println!("{}", output::render_table(&tree, &args.relations));
    }

    Ok(())
}
